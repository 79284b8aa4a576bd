pub mod agent;
pub mod auth;
pub mod intake;
pub mod listings;
pub mod pages;

pub mod context;
pub mod sessions;
pub mod token;

pub use context::SessionContext;
pub use sessions::SessionUser;

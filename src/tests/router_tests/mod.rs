mod agent_tests;
mod auth_tests;
mod intake_tests;
mod listings_tests;
mod pages_tests;

pub mod config;
pub mod fetch;
pub mod register;
pub mod status;

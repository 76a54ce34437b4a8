pub mod builder_client;
mod config;
pub mod curve;
mod endpoint;
mod error;
pub mod serde;
pub mod signing;
pub mod types;

pub use builder_client::{BuilderResponse, Client};
pub use config::Config;
pub use endpoint::Endpoint;
pub use error::Error;
pub use signing::SigningIdentity;

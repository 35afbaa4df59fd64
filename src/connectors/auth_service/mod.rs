mod client;
mod connector;
pub mod mock;
mod types;

pub use client::AuthServiceClient;
pub use connector::AuthServiceConnector;
pub use mock::MockAuthServiceConnector;
pub use types::{SecretBody, SecretResponse};

#[cfg(test)]
mod tests;

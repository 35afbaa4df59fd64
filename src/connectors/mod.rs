//! External Service Connectors
//!
//! The gateway reaches the auth service (secret distribution, token renewal)
//! through a connector trait so that token-handling code never depends on the
//! HTTP implementation and tests can substitute a mock without network calls.
//!
//! ## Architecture Pattern
//!
//! 1. Define trait in `connector.rs` → allows mocking in tests
//! 2. Implement HTTP client in `client.rs`
//! 3. Configuration in `config.rs` → per-environment URLs and timeouts
//! 4. Inject the trait object into callers → callers never see HTTP details

pub mod auth_service;
pub mod config;
pub mod errors;

pub use auth_service::{AuthServiceClient, AuthServiceConnector, MockAuthServiceConnector};
pub use config::AuthServiceConfig;
pub use errors::ConnectorError;

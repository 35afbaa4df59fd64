use std::sync::atomic::{AtomicUsize, Ordering};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use super::connector::AuthServiceConnector;
use crate::connectors::errors::ConnectorError;

/// Mock auth service for testing
///
/// Serves a fixed secret and, when configured with one, a fixed renewed token.
pub struct MockAuthServiceConnector {
    pub secret: Vec<u8>,
    pub renewed_token: Option<String>,
    renew_calls: AtomicUsize,
}

impl MockAuthServiceConnector {
    pub fn with_renewed_token(token: &str) -> Self {
        Self {
            renewed_token: Some(token.to_string()),
            ..Self::default()
        }
    }

    /// Mock whose renewal endpoint always fails
    pub fn without_renewal() -> Self {
        Self {
            renewed_token: None,
            ..Self::default()
        }
    }

    /// How many times the renewal endpoint was hit
    pub fn renew_calls(&self) -> usize {
        self.renew_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockAuthServiceConnector {
    fn default() -> Self {
        Self {
            secret: b"mock-secret-with-32-bytes-minimum!".to_vec(),
            renewed_token: Some("renewed.test.token".to_string()),
            renew_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl AuthServiceConnector for MockAuthServiceConnector {
    async fn fetch_jwt_secret(&self) -> Result<String, ConnectorError> {
        Ok(URL_SAFE_NO_PAD.encode(&self.secret))
    }

    async fn renew_token(&self, _expired_token: &str) -> Result<String, ConnectorError> {
        self.renew_calls.fetch_add(1, Ordering::SeqCst);
        self.renewed_token
            .clone()
            .ok_or_else(|| ConnectorError::RenewalFailed("mock renewal disabled".to_string()))
    }
}

use crate::connectors::errors::ConnectorError;

/// Trait for auth service integration
/// Allows mocking in tests and swapping implementations
#[async_trait::async_trait]
pub trait AuthServiceConnector: Send + Sync {
    /// Fetch the base64url-encoded JWT signing secret
    /// Calls GET {jwt_secret_url} and unwraps the `{"body": {"secret": ...}}` envelope
    async fn fetch_jwt_secret(&self) -> Result<String, ConnectorError>;

    /// Exchange an expired token for a freshly issued one
    /// Calls GET {refresh_request_url} with the expired token as bearer credential
    /// and reads the new token from the response Authorization header
    async fn renew_token(&self, expired_token: &str) -> Result<String, ConnectorError>;
}

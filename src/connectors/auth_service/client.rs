use reqwest::header::{ACCEPT, AUTHORIZATION};
use tracing::Instrument;

use super::connector::AuthServiceConnector;
use super::types::SecretResponse;
use crate::connectors::config::AuthServiceConfig;
use crate::connectors::errors::ConnectorError;

/// HTTP-based auth service client
pub struct AuthServiceClient {
    pub(crate) secret_url: String,
    pub(crate) refresh_url: String,
    pub(crate) http_client: reqwest::Client,
    pub(crate) secret_timeout: std::time::Duration,
    pub(crate) refresh_timeout: std::time::Duration,
}

impl AuthServiceClient {
    /// Create new auth service client
    pub fn new(config: AuthServiceConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            secret_url: config.jwt_secret_url,
            refresh_url: config.refresh_request_url,
            http_client,
            secret_timeout: std::time::Duration::from_secs(config.secret_timeout_secs),
            refresh_timeout: std::time::Duration::from_secs(config.refresh_timeout_secs),
        }
    }
}

#[async_trait::async_trait]
impl AuthServiceConnector for AuthServiceClient {
    async fn fetch_jwt_secret(&self) -> Result<String, ConnectorError> {
        let span = tracing::info_span!("auth_service_fetch_secret");

        let resp = self
            .http_client
            .get(&self.secret_url)
            .header(ACCEPT, "application/json")
            .timeout(self.secret_timeout)
            .send()
            .instrument(span)
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                tracing::error!("fetch_jwt_secret error: {:?}", e);
                ConnectorError::from(e)
            })?;

        let envelope = resp
            .json::<SecretResponse>()
            .await
            .map_err(|e| ConnectorError::InvalidResponse(e.to_string()))?;

        let body = envelope.body.ok_or_else(|| {
            ConnectorError::SecretUnavailable("secret endpoint returned no body".to_string())
        })?;

        body.secret.ok_or_else(|| {
            ConnectorError::InvalidResponse("secret field missing from response body".to_string())
        })
    }

    async fn renew_token(&self, expired_token: &str) -> Result<String, ConnectorError> {
        let span = tracing::info_span!("auth_service_renew_token");

        let resp = self
            .http_client
            .get(&self.refresh_url)
            .bearer_auth(expired_token)
            .timeout(self.refresh_timeout)
            .send()
            .instrument(span)
            .await
            .map_err(|e| {
                tracing::error!("renew_token error: {:?}", e);
                ConnectorError::from(e)
            })?;

        let header = resp.headers().get(AUTHORIZATION).ok_or_else(|| {
            ConnectorError::RenewalFailed(
                "renewal response carried no Authorization header".to_string(),
            )
        })?;

        let value = header.to_str().map_err(|e| {
            ConnectorError::RenewalFailed(format!("Authorization header is not valid UTF-8: {}", e))
        })?;

        value
            .strip_prefix("Bearer ")
            .map(str::to_string)
            .ok_or_else(|| {
                ConnectorError::RenewalFailed(
                    "Authorization header is not a Bearer credential".to_string(),
                )
            })
    }
}

use serde::{Deserialize, Serialize};

/// Auth service connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthServiceConfig {
    /// URL serving the base64url-encoded JWT secret
    pub jwt_secret_url: String,
    /// URL that exchanges an expired token for a fresh one
    pub refresh_request_url: String,
    /// HTTP timeout for the secret fetch, in seconds
    #[serde(default = "AuthServiceConfig::default_secret_timeout")]
    pub secret_timeout_secs: u64,
    /// HTTP timeout for the renewal call, in seconds
    #[serde(default = "AuthServiceConfig::default_refresh_timeout")]
    pub refresh_timeout_secs: u64,
}

impl AuthServiceConfig {
    const fn default_secret_timeout() -> u64 {
        3
    }

    const fn default_refresh_timeout() -> u64 {
        3
    }
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret_url: "http://localhost:4100/securities/secret".to_string(),
            refresh_request_url: "http://localhost:4100/tokens/refresh".to_string(),
            secret_timeout_secs: Self::default_secret_timeout(),
            refresh_timeout_secs: Self::default_refresh_timeout(),
        }
    }
}

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use jsonwebtoken::DecodingKey;

use crate::connectors::{AuthServiceConnector, ConnectorError};

/// Symmetric HS256 verification key decoded from the shared secret
#[derive(Debug, Clone)]
pub struct JwtKey {
    secret: Vec<u8>,
}

impl JwtKey {
    /// Decode a base64url-encoded secret into key material
    pub fn from_base64url(encoded: &str) -> Result<Self, ConnectorError> {
        // tolerate padded input from the secret service
        let secret = URL_SAFE_NO_PAD
            .decode(encoded.trim_end_matches('='))
            .map_err(|e| {
                ConnectorError::InvalidResponse(format!("secret is not valid base64url: {}", e))
            })?;

        Ok(Self { secret })
    }

    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            secret: secret.to_vec(),
        }
    }

    pub fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(&self.secret)
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }
}

/// Fetch the shared secret from the auth service and build the verification key
#[tracing::instrument(name = "Acquire JWT key", skip(connector))]
pub async fn acquire_key(connector: &dyn AuthServiceConnector) -> Result<JwtKey, ConnectorError> {
    let secret = connector.fetch_jwt_secret().await?;
    JwtKey::from_base64url(&secret)
}

use serde::Deserialize;

/// Envelope returned by the secret endpoint: `{"body": {"secret": "<base64url>"}}`
#[derive(Debug, Deserialize)]
pub struct SecretResponse {
    pub body: Option<SecretBody>,
}

#[derive(Debug, Deserialize)]
pub struct SecretBody {
    pub secret: Option<String>,
}

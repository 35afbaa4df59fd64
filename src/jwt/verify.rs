use jsonwebtoken::errors::ErrorKind;

use super::claims::{validation, TokenClaims};
use super::key::JwtKey;
use crate::connectors::AuthServiceConnector;

/// Result of checking a bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOutcome {
    /// Signature and claims check out; the caller's token is returned unchanged
    Valid(String),
    /// The token had expired and the auth service issued a replacement
    Renewed(String),
    /// The token is unusable
    Rejected(TokenRejection),
}

impl TokenOutcome {
    /// Collapse to "usable token or nothing" for callers that only gate requests
    pub fn token(self) -> Option<String> {
        match self {
            Self::Valid(token) | Self::Renewed(token) => Some(token),
            Self::Rejected(_) => None,
        }
    }
}

/// Why a token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    /// Signature did not verify against the current key
    BadSignature,
    /// Not a structurally valid JWT
    Malformed,
    /// Token type or algorithm this gateway does not accept
    Unsupported,
    /// Token failed validation for another reason
    Invalid,
    /// Token expired and the renewal call did not yield a replacement
    RenewalFailed,
}

/// Parse and validate a bearer token, renewing it when expired.
///
/// Every parse failure is logged with its category and converted into a
/// `Rejected` outcome; no parse error propagates to the caller.
pub async fn parse_token(
    token: &str,
    key: &JwtKey,
    connector: &dyn AuthServiceConnector,
) -> TokenOutcome {
    let err = match jsonwebtoken::decode::<TokenClaims>(token, &key.decoding_key(), &validation()) {
        Ok(_) => return TokenOutcome::Valid(token.to_string()),
        Err(err) => err,
    };

    match err.kind() {
        ErrorKind::ExpiredSignature => {
            tracing::info!("expired JWT, requesting renewal");
            request_renew_token(token, connector).await
        }
        ErrorKind::InvalidSignature => {
            tracing::error!("invalid JWT signature");
            TokenOutcome::Rejected(TokenRejection::BadSignature)
        }
        ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
            tracing::error!("malformed JWT: {}", err);
            TokenOutcome::Rejected(TokenRejection::Malformed)
        }
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            tracing::error!("unsupported JWT: {}", err);
            TokenOutcome::Rejected(TokenRejection::Unsupported)
        }
        _ => {
            tracing::error!("JWT failed validation: {}", err);
            TokenOutcome::Rejected(TokenRejection::Invalid)
        }
    }
}

async fn request_renew_token(
    expired_token: &str,
    connector: &dyn AuthServiceConnector,
) -> TokenOutcome {
    match connector.renew_token(expired_token).await {
        Ok(renewed) => TokenOutcome::Renewed(renewed),
        Err(err) => {
            tracing::error!("token renewal failed: {}", err);
            TokenOutcome::Rejected(TokenRejection::RenewalFailed)
        }
    }
}

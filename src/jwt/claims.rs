use jsonwebtoken::{decode, Algorithm, Validation};
use serde::{Deserialize, Serialize};

use super::key::JwtKey;

/// Custom claim carrying the caller's role list
pub const AUTHORITIES: &str = "AUTHORITIES";

/// Decoded JWT payload
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// Subject: the user's email
    pub sub: String,
    /// Expiry, unix seconds
    pub exp: i64,
    /// Role names granted to the subject
    #[serde(rename = "AUTHORITIES", default)]
    pub authorities: Vec<String>,
}

impl TokenClaims {
    /// Roles joined into a single comma-separated string, no trailing separator.
    /// Zero roles yield an empty string.
    pub fn roles(&self) -> String {
        self.authorities.join(",")
    }

    pub fn is_expired(&self) -> bool {
        self.exp < chrono::Utc::now().timestamp()
    }
}

pub(super) fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    // no clock skew allowance on expiry
    validation.leeway = 0;
    validation
}

/// Parse and validate the token, returning its claims
///
/// Errors propagate to the caller; run this only after successful verification.
pub fn get_claims(token: &str, key: &JwtKey) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    decode::<TokenClaims>(token, &key.decoding_key(), &validation()).map(|data| data.claims)
}

/// The subject (email) claim of a validated token
pub fn get_email(token: &str, key: &JwtKey) -> Result<String, jsonwebtoken::errors::Error> {
    get_claims(token, key).map(|claims| claims.sub)
}

/// The AUTHORITIES claim of a validated token, comma-joined
pub fn get_roles(token: &str, key: &JwtKey) -> Result<String, jsonwebtoken::errors::Error> {
    get_claims(token, key).map(|claims| claims.roles())
}

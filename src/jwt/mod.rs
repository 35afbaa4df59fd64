//! JWT verification and renewal for the gateway.
//!
//! Stateless helpers composing the `jsonwebtoken` crate with the auth service
//! connector: acquire the shared HS256 secret, validate bearer tokens, renew
//! expired ones and read identity claims.

mod claims;
mod key;
mod verify;

pub use claims::{get_claims, get_email, get_roles, TokenClaims, AUTHORITIES};
pub use key::{acquire_key, JwtKey};
pub use verify::{parse_token, TokenOutcome, TokenRejection};

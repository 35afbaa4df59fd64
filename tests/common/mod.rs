use std::sync::Once;

use gateway_auth::connectors::{AuthServiceClient, AuthServiceConfig};
use gateway_auth::jwt::TokenClaims;
use gateway_auth::telemetry::{get_subscriber, init_subscriber};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

pub const SECRET: &[u8] = b"integration-secret-32-bytes-long!";

static TRACING: Once = Once::new();

/// Install the bunyan subscriber when TEST_LOG is set
pub fn init_tracing() {
    TRACING.call_once(|| {
        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = get_subscriber("gateway-auth-test".into(), "debug".into());
            init_subscriber(subscriber);
        }
    });
}

/// Sign an HS256 token the way the auth service would
pub fn sign_token(secret: &[u8], expires_in_secs: i64, roles: &[&str]) -> String {
    let claims = TokenClaims {
        sub: "user@example.com".to_string(),
        exp: chrono::Utc::now().timestamp() + expires_in_secs,
        authorities: roles.iter().map(|r| r.to_string()).collect(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .expect("Failed to sign test token")
}

/// Client pointed at a mock server, with tight timeouts to keep tests fast
pub fn client_for(server_uri: &str) -> AuthServiceClient {
    init_tracing();
    AuthServiceClient::new(AuthServiceConfig {
        jwt_secret_url: format!("{}/securities/secret", server_uri),
        refresh_request_url: format!("{}/tokens/refresh", server_uri),
        secret_timeout_secs: 1,
        refresh_timeout_secs: 1,
    })
}

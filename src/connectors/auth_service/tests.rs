use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use super::connector::AuthServiceConnector;
use super::mock::MockAuthServiceConnector;
use crate::connectors::errors::ConnectorError;

/// Test that the mock serves its secret base64url-encoded
#[tokio::test]
async fn test_mock_serves_base64url_secret() {
    let connector = MockAuthServiceConnector::default();
    let encoded = connector.fetch_jwt_secret().await.unwrap();

    let decoded = URL_SAFE_NO_PAD.decode(&encoded).unwrap();
    assert_eq!(decoded, connector.secret);
}

/// Test that a configured mock hands back its renewed token
#[tokio::test]
async fn test_mock_renews_when_configured() {
    let connector = MockAuthServiceConnector::with_renewed_token("NEWTOKEN123");

    let renewed = connector.renew_token("expired.jwt.token").await.unwrap();
    assert_eq!(renewed, "NEWTOKEN123");
    assert_eq!(connector.renew_calls(), 1);
}

/// Test that renewal fails explicitly when the mock has no token to hand out
#[tokio::test]
async fn test_mock_renewal_failure_when_disabled() {
    let connector = MockAuthServiceConnector::without_renewal();

    let err = connector.renew_token("expired.jwt.token").await.unwrap_err();
    assert!(matches!(err, ConnectorError::RenewalFailed(_)));
    assert_eq!(connector.renew_calls(), 1);
}

/// Test that error categories render with their distinguishing prefix
#[test]
fn test_connector_error_display_categories() {
    let err = ConnectorError::SecretUnavailable("no body".to_string());
    assert_eq!(err.to_string(), "Secret unavailable: no body");

    let err = ConnectorError::RenewalFailed("no header".to_string());
    assert_eq!(err.to_string(), "Renewal failed: no header");
}

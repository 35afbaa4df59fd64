use crate::connectors::AuthServiceConfig;

#[derive(Debug, serde::Deserialize)]
pub struct Settings {
    pub auth: AuthServiceConfig,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?; // .json, .toml, .yaml, .yml

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_pick_up_default_timeouts() {
        let mut cfg = config::Config::default();
        cfg.merge(config::File::from_str(
            r#"
auth:
  jwt_secret_url: "http://127.0.0.1:4100/securities/secret"
  refresh_request_url: "http://127.0.0.1:4100/tokens/refresh"
"#,
            config::FileFormat::Yaml,
        ))
        .expect("Failed to merge test configuration");

        let settings: Settings = cfg.try_deserialize().expect("Failed to deserialize settings");
        assert_eq!(settings.auth.secret_timeout_secs, 3);
        assert_eq!(settings.auth.refresh_timeout_secs, 3);
    }
}

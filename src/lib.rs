pub mod configuration;
pub mod connectors;
pub mod jwt;
pub mod telemetry;

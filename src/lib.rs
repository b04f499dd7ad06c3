pub mod api_client;
pub mod assertions;
pub mod configuration;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod runner;
pub mod scenarios;
pub mod telemetry;

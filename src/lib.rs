pub mod configuration;
pub mod content;
pub mod domain;
pub mod form;
pub mod provider_client;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;

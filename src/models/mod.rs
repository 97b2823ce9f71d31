pub mod client;
pub mod client_config;
pub mod feature;
pub mod schema;

pub mod clients_controller;
pub mod config_controller;

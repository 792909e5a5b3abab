pub mod config;
pub mod gateway;
pub mod gui;
pub mod receipt;
pub mod types;
pub mod user_settings;

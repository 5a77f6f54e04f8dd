pub mod api;
pub mod config;
pub mod dns;
pub mod provider;

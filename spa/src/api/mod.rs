pub mod admin_api;
pub mod auth_api;
pub mod client;
pub mod data_api;

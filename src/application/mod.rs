/// Session token cache
pub mod auth;
/// Session client
pub mod client;
/// Application configuration module
pub mod config;
/// Module containing service interfaces and traits
pub mod interfaces;
/// Module containing service implementations for the client
pub mod services;

pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod infrastructure;
pub mod services;

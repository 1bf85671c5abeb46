//! Category gateway library.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod http;
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;

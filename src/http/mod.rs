//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, trace, timeout, CORS)
//!     → handlers.rs (cache lookup → upstream fetch → filter → respond)
//!     → Send to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};

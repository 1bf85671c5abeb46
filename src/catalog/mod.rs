//! Category catalog subsystem.
//!
//! # Data Flow
//! ```text
//! upstream GraphQL endpoint
//!     → upstream.rs (fixed categoryList query, normalized errors)
//!     → types.rs (Category tree, synthetic "Default Category" root)
//!     → filter.rs (prune to menu-visible nodes)
//!     → [http handler caches & serves the result]
//! ```
//!
//! # Design Decisions
//! - The filter is a pure function; all I/O lives in the upstream client
//! - Upstream failures collapse into one normalized error (cause logged only)
//! - The client sits behind a trait so handlers can be tested with fakes

pub mod filter;
pub mod types;
pub mod upstream;

pub use filter::filter_menu_visible;
pub use types::{Category, UpstreamError, UpstreamResult};
pub use upstream::{CategorySource, GraphqlCategorySource};

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or in-code declarations
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → routing::table::RouteTable::compile
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table never mutates at runtime
//! - All sections have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::FallbackPolicy;
pub use schema::RouteConfig;
pub use schema::RouterConfig;

//! View router for the YourView single-page application.
//!
//! Route declarations bind literal URL paths to named, renderable views.
//! They are compiled once into an immutable [`RouteTable`]; a [`Router`]
//! resolves exact paths (or symbolic names) against it and tracks which
//! view the session is currently on.
//!
//! ```text
//! RouterConfig (TOML or in-code)  +  ViewRegistry
//!     → RouteTable::compile (validated, immutable)
//!     → Router (resolve / navigate / back / forward)
//!     → Resolved(entry) or Unresolved
//! ```

pub mod config;
pub mod observability;
pub mod pages;
pub mod routing;
pub mod view;

pub use config::schema::RouterConfig;
pub use routing::router::Router;
pub use routing::table::{Resolution, RouteEntry, RouteTable};
pub use view::{View, ViewRegistry};

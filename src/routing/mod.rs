//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! RouteConfig[] + ViewRegistry
//!     → table.rs (bind views, enforce uniqueness, freeze)
//!     → RouteTable (immutable)
//!
//! Navigation request (path or name)
//!     → router.rs (exact lookup against the table)
//!     → state.rs (next NavigationState snapshot, atomically swapped)
//!     → Return: Resolved(entry) or Unresolved
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact literal matching only; no patterns, no parameters
//! - Deterministic: same input always resolves the same entry
//! - Unresolved is an explicit outcome, never an error

pub mod router;
pub mod state;
pub mod table;

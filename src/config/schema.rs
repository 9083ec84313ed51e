//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the view router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Route declarations binding paths to named views.
    pub routes: Vec<RouteConfig>,

    /// Navigation behavior.
    pub navigation: NavigationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// A single route declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Literal URL path to match exactly (e.g., "/about").
    pub path: String,

    /// Symbolic route name, unique across the table.
    pub name: String,

    /// Identifier of the registered view this route activates.
    pub view: String,
}

/// Navigation behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Path the application resolves at startup.
    pub initial_path: String,

    /// What happens to the active entry when navigation matches no route.
    pub on_unresolved: FallbackPolicy,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            initial_path: "/".to_string(),
            on_unresolved: FallbackPolicy::Clear,
        }
    }
}

/// Policy applied when a navigation request matches no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Record the requested path with no active entry.
    #[default]
    Clear,

    /// Keep the previous active entry untouched.
    Stay,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

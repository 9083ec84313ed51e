//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Enforce route table invariants (unique paths, unique names)
//! - Validate path shape (absolute, non-empty)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two route declarations share the same path.
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),

    /// Two route declarations share the same name.
    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    /// A route path does not start with '/'.
    #[error("route path must start with '/': {0:?}")]
    RelativePath(String),

    /// A route declaration has an empty name.
    #[error("route {0} has an empty name")]
    EmptyName(String),

    /// A route declaration has an empty view identifier.
    #[error("route {0} has an empty view identifier")]
    EmptyView(String),
}

/// Check semantic invariants over an already-parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut paths = HashSet::new();
    let mut names = HashSet::new();

    for route in &config.routes {
        if !route.path.starts_with('/') {
            errors.push(ValidationError::RelativePath(route.path.clone()));
        }
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyName(route.path.clone()));
        }
        if route.view.is_empty() {
            errors.push(ValidationError::EmptyView(route.path.clone()));
        }
        if !paths.insert(route.path.clone()) {
            errors.push(ValidationError::DuplicatePath(route.path.clone()));
        }
        if !names.insert(route.name.clone()) {
            errors.push(ValidationError::DuplicateName(route.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

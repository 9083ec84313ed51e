//! Route table compilation and lookup.
//!
//! # Responsibilities
//! - Compile route declarations into an immutable table
//! - Bind view identifiers to registered views
//! - Look up entries by exact path or by symbolic name
//!
//! # Design Decisions
//! - Immutable after compilation (thread-safe without locks)
//! - O(1) path and name lookup via HashMap
//! - Path matching is exact and case-sensitive; no prefixes, no wildcards
//! - Explicit Unresolved rather than silent default

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::config::schema::RouteConfig;
use crate::view::{View, ViewRegistry};

/// An immutable binding of a literal path to a named view.
pub struct RouteEntry {
    path: String,
    name: String,
    view: Arc<dyn View>,
}

impl RouteEntry {
    /// Literal URL path this entry matches.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Symbolic route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view this entry activates.
    pub fn view(&self) -> &Arc<dyn View> {
        &self.view
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Outcome of a resolution attempt.
///
/// An unmatched path is a valid outcome, not an error; callers decide what
/// an unresolved session shows.
#[derive(Debug, Clone, Default)]
pub enum Resolution {
    /// No entry matches.
    #[default]
    Unresolved,

    /// The matching entry.
    Resolved(Arc<RouteEntry>),
}

impl Resolution {
    /// The matched entry, if any.
    pub fn entry(&self) -> Option<&RouteEntry> {
        match self {
            Resolution::Resolved(entry) => Some(entry),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Errors detected while compiling a route table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Two declarations share the same path.
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),

    /// Two declarations share the same name.
    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    /// A declaration references a view that was never registered.
    #[error("route {name} references unregistered view: {view}")]
    UnknownView { name: String, view: String },
}

/// Immutable table of compiled routes.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<Arc<RouteEntry>>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Compile route declarations against a view registry.
    ///
    /// Fails on a duplicate path, a duplicate name, or a view identifier
    /// with no registered view. Declaration order is preserved for
    /// iteration; it never affects lookup, paths are exact literals.
    pub fn compile(routes: &[RouteConfig], registry: &ViewRegistry) -> Result<Self, TableError> {
        let mut entries = Vec::with_capacity(routes.len());
        let mut by_path = HashMap::with_capacity(routes.len());
        let mut by_name = HashMap::with_capacity(routes.len());

        for route in routes {
            let view = registry
                .get(&route.view)
                .ok_or_else(|| TableError::UnknownView {
                    name: route.name.clone(),
                    view: route.view.clone(),
                })?;

            let index = entries.len();
            if by_path.insert(route.path.clone(), index).is_some() {
                return Err(TableError::DuplicatePath(route.path.clone()));
            }
            if by_name.insert(route.name.clone(), index).is_some() {
                return Err(TableError::DuplicateName(route.name.clone()));
            }
            entries.push(Arc::new(RouteEntry {
                path: route.path.clone(),
                name: route.name.clone(),
                view,
            }));
        }

        Ok(Self {
            entries,
            by_path,
            by_name,
        })
    }

    /// Exact-match lookup by path.
    pub fn entry_for_path(&self, path: &str) -> Resolution {
        match self.by_path.get(path) {
            Some(&index) => Resolution::Resolved(self.entries[index].clone()),
            None => Resolution::Unresolved,
        }
    }

    /// Lookup by symbolic name.
    pub fn entry_named(&self, name: &str) -> Resolution {
        match self.by_name.get(name) {
            Some(&index) => Resolution::Resolved(self.entries[index].clone()),
            None => Resolution::Unresolved,
        }
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &Arc<RouteEntry>> {
        self.entries.iter()
    }

    /// Number of routes in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Resolution and navigation.
//!
//! # Responsibilities
//! - Resolve requested paths and names against the compiled table
//! - Track the active entry and session history
//! - Emit a log event per transition
//!
//! # Design Decisions
//! - The table is immutable and shared; only NavigationState changes
//! - State is an atomically swapped snapshot, so reads never block
//! - Unresolved navigation applies the configured fallback policy

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::FallbackPolicy;
use crate::routing::state::NavigationState;
use crate::routing::table::{Resolution, RouteTable};

/// Resolves paths against an immutable route table and tracks which view
/// the session is on.
///
/// One instance per application, explicitly constructed and passed by
/// reference to whatever needs it.
pub struct Router {
    table: Arc<RouteTable>,
    fallback: FallbackPolicy,
    state: ArcSwap<NavigationState>,
}

impl Router {
    /// Build a router over a compiled table with the default fallback policy.
    pub fn new(table: RouteTable) -> Self {
        Self::with_fallback(table, FallbackPolicy::default())
    }

    /// Build a router with an explicit unresolved-navigation policy.
    pub fn with_fallback(table: RouteTable, fallback: FallbackPolicy) -> Self {
        tracing::info!(routes = table.len(), "router constructed");
        Self {
            table: Arc::new(table),
            fallback,
            state: ArcSwap::from_pointee(NavigationState::default()),
        }
    }

    /// The compiled table backing this router.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Exact-match resolution.
    ///
    /// On a match the active entry transitions; session history is left
    /// untouched. An unmatched path leaves the previous state in place.
    pub fn resolve(&self, path: &str) -> Resolution {
        let resolution = self.table.entry_for_path(path);

        match &resolution {
            Resolution::Resolved(entry) => {
                tracing::debug!(path, route = entry.name(), "route resolved");
                let mut next = (**self.state.load()).clone();
                next.active = resolution.clone();
                next.active_path = Some(path.to_string());
                self.state.store(Arc::new(next));
            }
            Resolution::Unresolved => {
                tracing::debug!(path, "no route matches");
            }
        }

        resolution
    }

    /// Resolution by symbolic name, for navigation independent of path
    /// strings.
    pub fn resolve_by_name(&self, name: &str) -> Resolution {
        match self.table.entry_named(name) {
            Resolution::Resolved(entry) => {
                let path = entry.path().to_string();
                self.resolve(&path)
            }
            Resolution::Unresolved => {
                tracing::debug!(name, "no route with that name");
                Resolution::Unresolved
            }
        }
    }

    /// Request a transition to `path`, recording it in session history.
    ///
    /// When nothing matches, the configured [`FallbackPolicy`] decides
    /// whether the unmatched path replaces the active entry or the session
    /// stays where it was.
    pub fn navigate(&self, path: &str) -> Resolution {
        let resolution = self.table.entry_for_path(path);
        let mut next = (**self.state.load()).clone();

        match &resolution {
            Resolution::Resolved(entry) => {
                tracing::debug!(path, route = entry.name(), "navigating");
                next.active = resolution.clone();
                next.active_path = Some(path.to_string());
                next.push_history(path.to_string());
                self.state.store(Arc::new(next));
            }
            Resolution::Unresolved => match self.fallback {
                FallbackPolicy::Clear => {
                    tracing::warn!(path, "no route matches, clearing active entry");
                    next.active = Resolution::Unresolved;
                    next.active_path = Some(path.to_string());
                    next.push_history(path.to_string());
                    self.state.store(Arc::new(next));
                }
                FallbackPolicy::Stay => {
                    tracing::warn!(path, "no route matches, staying put");
                }
            },
        }

        resolution
    }

    /// Navigate to a route by its symbolic name.
    pub fn navigate_by_name(&self, name: &str) -> Resolution {
        match self.table.entry_named(name) {
            Resolution::Resolved(entry) => {
                let path = entry.path().to_string();
                self.navigate(&path)
            }
            Resolution::Unresolved => {
                tracing::warn!(name, "no route with that name");
                Resolution::Unresolved
            }
        }
    }

    /// Step back in session history, re-resolving the previous path.
    /// A no-op at the start of the history.
    pub fn back(&self) -> Resolution {
        let mut next = (**self.state.load()).clone();
        match next.step_back() {
            Some(path) => self.commit_step(next, path),
            None => next.active,
        }
    }

    /// Step forward in session history. A no-op at the end of the history.
    pub fn forward(&self) -> Resolution {
        let mut next = (**self.state.load()).clone();
        match next.step_forward() {
            Some(path) => self.commit_step(next, path),
            None => next.active,
        }
    }

    fn commit_step(&self, mut state: NavigationState, path: String) -> Resolution {
        let resolution = self.table.entry_for_path(&path);
        tracing::debug!(path = %path, "history step");
        state.active = resolution.clone();
        state.active_path = Some(path);
        self.state.store(Arc::new(state));
        resolution
    }

    /// The entry the session is currently on.
    pub fn active_entry(&self) -> Resolution {
        self.state.load().active.clone()
    }

    /// The path the session is currently on, once anything has resolved.
    pub fn active_path(&self) -> Option<String> {
        self.state.load().active_path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;
    use crate::view::{View, ViewRegistry};

    struct Stub;

    impl View for Stub {
        fn render(&self) -> String {
            "stub".to_string()
        }
    }

    fn router(fallback: FallbackPolicy) -> Router {
        let mut registry = ViewRegistry::new();
        registry.register("A", Arc::new(Stub)).unwrap();
        registry.register("B", Arc::new(Stub)).unwrap();

        let routes = vec![
            RouteConfig {
                path: "/".to_string(),
                name: "root".to_string(),
                view: "A".to_string(),
            },
            RouteConfig {
                path: "/b".to_string(),
                name: "bee".to_string(),
                view: "B".to_string(),
            },
        ];
        let table = RouteTable::compile(&routes, &registry).unwrap();
        Router::with_fallback(table, fallback)
    }

    #[test]
    fn starts_unresolved() {
        let router = router(FallbackPolicy::Clear);
        assert!(!router.active_entry().is_resolved());
        assert_eq!(router.active_path(), None);
    }

    #[test]
    fn resolve_transitions_the_active_entry() {
        let router = router(FallbackPolicy::Clear);

        let resolution = router.resolve("/b");
        assert_eq!(resolution.entry().unwrap().name(), "bee");
        assert_eq!(router.active_entry().entry().unwrap().name(), "bee");
        assert_eq!(router.active_path(), Some("/b".to_string()));
    }

    #[test]
    fn resolve_is_idempotent() {
        let router = router(FallbackPolicy::Clear);

        router.resolve("/b");
        let first = router.active_path();
        router.resolve("/b");

        assert_eq!(router.active_path(), first);
        assert_eq!(router.active_entry().entry().unwrap().name(), "bee");
        // resolve never touches history
        assert!(router.state.load().history.is_empty());
    }

    #[test]
    fn unmatched_resolve_leaves_state_in_place() {
        let router = router(FallbackPolicy::Clear);
        router.resolve("/b");

        assert!(!router.resolve("/nope").is_resolved());
        assert_eq!(router.active_entry().entry().unwrap().name(), "bee");
    }

    #[test]
    fn resolve_by_name_transitions_like_resolve() {
        let router = router(FallbackPolicy::Clear);

        let resolution = router.resolve_by_name("root");
        assert_eq!(resolution.entry().unwrap().path(), "/");
        assert_eq!(router.active_path(), Some("/".to_string()));

        assert!(!router.resolve_by_name("ghost").is_resolved());
        assert_eq!(router.active_path(), Some("/".to_string()));
    }

    #[test]
    fn navigation_records_history() {
        let router = router(FallbackPolicy::Clear);

        router.navigate("/");
        router.navigate("/b");

        assert_eq!(router.back().entry().unwrap().name(), "root");
        assert_eq!(router.forward().entry().unwrap().name(), "bee");
        // at the end of history, forward stays put
        assert_eq!(router.forward().entry().unwrap().name(), "bee");
    }

    #[test]
    fn navigating_after_back_drops_forward_entries() {
        let router = router(FallbackPolicy::Clear);

        router.navigate("/");
        router.navigate("/b");
        router.back();
        router.navigate("/b");

        // without truncation this would read ["/", "/b", "/b"]
        assert_eq!(router.state.load().history, vec!["/", "/b"]);
        assert_eq!(router.forward().entry().unwrap().name(), "bee");
    }

    #[test]
    fn clear_policy_records_the_unmatched_path() {
        let router = router(FallbackPolicy::Clear);
        router.navigate("/b");

        assert!(!router.navigate("/nope").is_resolved());
        assert!(!router.active_entry().is_resolved());
        assert_eq!(router.active_path(), Some("/nope".to_string()));
        // the unmatched path is part of history; back returns to "/b"
        assert_eq!(router.back().entry().unwrap().name(), "bee");
    }

    #[test]
    fn stay_policy_keeps_the_previous_entry() {
        let router = router(FallbackPolicy::Stay);
        router.navigate("/b");

        assert!(!router.navigate("/nope").is_resolved());
        assert_eq!(router.active_entry().entry().unwrap().name(), "bee");
        assert_eq!(router.active_path(), Some("/b".to_string()));
    }

    #[test]
    fn navigate_by_name_uses_the_entry_path() {
        let router = router(FallbackPolicy::Clear);

        let resolution = router.navigate_by_name("bee");
        assert_eq!(resolution.entry().unwrap().path(), "/b");
        assert_eq!(router.active_path(), Some("/b".to_string()));

        assert!(!router.navigate_by_name("ghost").is_resolved());
        assert_eq!(router.active_path(), Some("/b".to_string()));
    }
}

//! Views and the view registry.
//!
//! # Design Decisions
//! - A view is an opaque renderable unit; the router never inspects it
//! - Views are held as `Arc<dyn View>` so route entries stay cheap to share
//! - Identifiers are bound to views once, before the route table is compiled

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

/// A renderable unit with no required input parameters.
///
/// The router only selects which view is active; what the rendered output
/// is and where it goes are the host's concern.
pub trait View: Send + Sync {
    /// Render this view to its textual representation.
    fn render(&self) -> String;
}

/// Errors from view registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two views were registered under the same identifier.
    #[error("view identifier registered twice: {0}")]
    DuplicateView(String),
}

/// Registry mapping view identifiers to registered views.
///
/// Route declarations reference views by identifier; the table compile
/// step binds each declaration to the registered instance.
#[derive(Default)]
pub struct ViewRegistry {
    views: HashMap<String, Arc<dyn View>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
        }
    }

    /// Register a view under an identifier.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        view: Arc<dyn View>,
    ) -> Result<(), RegistryError> {
        let id = id.into();
        if self.views.contains_key(&id) {
            return Err(RegistryError::DuplicateView(id));
        }
        self.views.insert(id, view);
        Ok(())
    }

    /// Look up a registered view by identifier.
    pub fn get(&self, id: &str) -> Option<Arc<dyn View>> {
        self.views.get(id).cloned()
    }

    /// Number of registered views.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

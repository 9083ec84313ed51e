//! The YourView pages and their route declarations.
//!
//! Page content lives with the host application; the types here are the
//! renderable units the route table binds, with no constructor input.

use std::sync::Arc;

use thiserror::Error;

use crate::config::schema::{RouteConfig, RouterConfig};
use crate::routing::router::Router;
use crate::routing::table::{RouteTable, TableError};
use crate::view::{RegistryError, View, ViewRegistry};

/// Landing page.
#[derive(Debug, Default)]
pub struct HomePage;

impl View for HomePage {
    fn render(&self) -> String {
        "<main><h1>YourView</h1></main>".to_string()
    }
}

/// Green-space index.
#[derive(Debug, Default)]
pub struct GreenIndex;

impl View for GreenIndex {
    fn render(&self) -> String {
        "<main><h1>Green index</h1></main>".to_string()
    }
}

#[derive(Debug, Default)]
pub struct YourAreaPage;

impl View for YourAreaPage {
    fn render(&self) -> String {
        "<main><h1>Your area</h1></main>".to_string()
    }
}

#[derive(Debug, Default)]
pub struct AboutPage;

impl View for AboutPage {
    fn render(&self) -> String {
        "<main><h1>About</h1></main>".to_string()
    }
}

/// Data sources page.
#[derive(Debug, Default)]
pub struct SourcePage;

impl View for SourcePage {
    fn render(&self) -> String {
        "<main><h1>Sources</h1></main>".to_string()
    }
}

/// Surface temperature page.
#[derive(Debug, Default)]
pub struct TempPage;

impl View for TempPage {
    fn render(&self) -> String {
        "<main><h1>Temperature</h1></main>".to_string()
    }
}

#[derive(Debug, Default)]
pub struct YourWindowPage;

impl View for YourWindowPage {
    fn render(&self) -> String {
        "<main><h1>Your window</h1></main>".to_string()
    }
}

/// The application's route declarations, in display order.
pub fn routes() -> Vec<RouteConfig> {
    [
        ("/", "home", "HomePage"),
        ("/greenpage", "green", "GreenIndex"),
        ("/YourArea", "YourArea", "YourAreaPage"),
        ("/about", "about", "AboutPage"),
        ("/source", "source", "SourcePage"),
        ("/temp", "temp", "TempPage"),
        ("/YourWindow", "YourWindow", "YourWindowPage"),
    ]
    .into_iter()
    .map(|(path, name, view)| RouteConfig {
        path: path.to_string(),
        name: name.to_string(),
        view: view.to_string(),
    })
    .collect()
}

/// A registry holding every page view under its identifier.
pub fn view_registry() -> Result<ViewRegistry, RegistryError> {
    let mut registry = ViewRegistry::new();
    registry.register("HomePage", Arc::new(HomePage))?;
    registry.register("GreenIndex", Arc::new(GreenIndex))?;
    registry.register("YourAreaPage", Arc::new(YourAreaPage))?;
    registry.register("AboutPage", Arc::new(AboutPage))?;
    registry.register("SourcePage", Arc::new(SourcePage))?;
    registry.register("TempPage", Arc::new(TempPage))?;
    registry.register("YourWindowPage", Arc::new(YourWindowPage))?;
    Ok(registry)
}

/// The default configuration: the full page table plus default navigation
/// and observability settings.
pub fn default_config() -> RouterConfig {
    RouterConfig {
        routes: routes(),
        ..Default::default()
    }
}

/// Errors assembling the application router.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// View registration failed.
    #[error("view registration failed: {0}")]
    Registry(#[from] RegistryError),

    /// The route table failed to compile.
    #[error("route table failed to compile: {0}")]
    Table(#[from] TableError),
}

/// Build the application router from a configuration.
///
/// The host constructs this once at startup and passes it by reference to
/// whatever renders the active view.
pub fn router(config: &RouterConfig) -> Result<Router, BootstrapError> {
    let registry = view_registry()?;
    let table = RouteTable::compile(&config.routes, &registry)?;
    Ok(Router::with_fallback(table, config.navigation.on_unresolved))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declared_view_is_registered() {
        let registry = view_registry().unwrap();
        for route in routes() {
            assert!(
                registry.get(&route.view).is_some(),
                "no view registered for {}",
                route.path
            );
        }
    }

    #[test]
    fn default_table_compiles() {
        let router = router(&default_config()).unwrap();
        assert_eq!(router.table().len(), 7);
    }

    #[test]
    fn pages_render_without_input() {
        let registry = view_registry().unwrap();
        for route in routes() {
            let view = registry.get(&route.view).unwrap();
            assert!(!view.render().is_empty());
        }
    }
}

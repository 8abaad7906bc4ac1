//! Route table
//!
//! The ordered list of logical sections. It is the one source of truth shared
//! by the section navigator (adjacency) and the view composer (stacking order
//! and anchors), so the two can never disagree about which sections exist.

use crate::config::{ConfigError, RouteConfig};
use std::collections::HashSet;
use tracing::warn;

/// Login-gated production tracking page
pub const PRODUCTION_PATH: &str = "/production";
/// Trivia-gated easter egg
pub const HYPERSPACE_PATH: &str = "/hyperspace";

const RESERVED_PATHS: [&str; 2] = [PRODUCTION_PATH, HYPERSPACE_PATH];

/// A logical section of the portfolio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Stable identifier, also the anchor id in the single-page layout
    pub id: String,
    pub path: String,
    pub title: String,
}

/// Anything a path can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// A section of the route table, by index
    Section(usize),
    Production,
    Hyperspace,
    NotFound,
}

impl Page {
    /// Standalone pages render on their own regardless of viewport mode
    pub fn is_standalone(&self) -> bool {
        matches!(self, Page::Production | Page::Hyperspace)
    }
}

/// Immutable, ordered, non-empty list of routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(configs: &[RouteConfig]) -> Result<Self, ConfigError> {
        if configs.is_empty() {
            return Err(ConfigError::EmptyRoutes);
        }

        let mut seen = HashSet::new();
        let mut routes = Vec::with_capacity(configs.len());

        for config in configs {
            if !config.path.starts_with('/') {
                return Err(ConfigError::InvalidPath(config.path.clone()));
            }
            let path = normalize_path(&config.path);
            if RESERVED_PATHS.contains(&path.as_str()) {
                return Err(ConfigError::ReservedPath(path));
            }
            if !seen.insert(format!("id:{}", config.id)) {
                return Err(ConfigError::DuplicateRoute(config.id.clone()));
            }
            if !seen.insert(format!("path:{path}")) {
                return Err(ConfigError::DuplicateRoute(path));
            }

            let title = if config.title.is_empty() {
                config.id.clone()
            } else {
                config.title.clone()
            };
            routes.push(Route {
                id: config.id.clone(),
                path,
                title,
            });
        }

        Ok(Self { routes })
    }

    /// Build from config, falling back to the default section list
    pub fn from_config_or_default(configs: &[RouteConfig]) -> Self {
        Self::new(configs).unwrap_or_else(|e| {
            warn!("Route list rejected, using defaults: {e}");
            Self::defaults()
        })
    }

    pub fn defaults() -> Self {
        let routes = RouteConfig::defaults()
            .into_iter()
            .map(|c| Route {
                id: c.id,
                path: c.path,
                title: c.title,
            })
            .collect();
        Self { routes }
    }

    /// Shorthand for tests and fixtures: ids become `/id` paths, the first is `/`
    pub fn from_ids(ids: &[&str]) -> Result<Self, ConfigError> {
        let configs: Vec<RouteConfig> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| RouteConfig {
                id: id.to_string(),
                path: if i == 0 {
                    "/".to_string()
                } else {
                    format!("/{id}")
                },
                title: String::new(),
            })
            .collect();
        Self::new(&configs)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Route> + ExactSizeIterator {
        self.routes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    pub fn first(&self) -> &Route {
        &self.routes[0]
    }

    pub fn index_of_id(&self, id: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.id == id)
    }

    pub fn index_of_path(&self, path: &str) -> Option<usize> {
        let path = normalize_path(path);
        self.routes.iter().position(|r| r.path == path)
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.routes.len()
    }

    /// Resolve a location path to the page it renders
    pub fn resolve(&self, path: &str) -> Page {
        let normalized = normalize_path(path);
        match normalized.as_str() {
            PRODUCTION_PATH => Page::Production,
            HYPERSPACE_PATH => Page::Hyperspace,
            _ => self
                .index_of_path(&normalized)
                .map(Page::Section)
                .unwrap_or(Page::NotFound),
        }
    }
}

/// Drop query/fragment and trailing slashes; empty becomes `/`
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/about/"), "/about");
        assert_eq!(normalize_path("about"), "/about");
        assert_eq!(normalize_path("/resume?x=1#top"), "/resume");
    }

    #[test]
    fn test_resolve_pages() {
        let table = RouteTable::defaults();
        assert_eq!(table.resolve("/"), Page::Section(0));
        assert_eq!(table.resolve("/projects/"), Page::Section(3));
        assert_eq!(table.resolve("/production"), Page::Production);
        assert_eq!(table.resolve("/hyperspace"), Page::Hyperspace);
        assert_eq!(table.resolve("/nope"), Page::NotFound);
        assert!(Page::Production.is_standalone());
        assert!(!Page::Section(1).is_standalone());
    }

    #[test]
    fn test_from_ids_order_and_paths() {
        let table = RouteTable::from_ids(&["a", "b", "c"]).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.first().path, "/");
        assert_eq!(table.index_of_id("c"), Some(2));
        assert_eq!(table.index_of_path("/b"), Some(1));
        assert!(table.is_last(2));
        assert!(!table.is_last(1));
    }

    #[test]
    fn test_rejects_bad_route_lists() {
        assert!(matches!(RouteTable::new(&[]), Err(ConfigError::EmptyRoutes)));
        assert!(matches!(
            RouteTable::from_ids(&["a", "a"]),
            Err(ConfigError::DuplicateRoute(_))
        ));

        let reserved = [RouteConfig {
            id: "prod".to_string(),
            path: "/production".to_string(),
            title: String::new(),
        }];
        assert!(matches!(
            RouteTable::new(&reserved),
            Err(ConfigError::ReservedPath(_))
        ));
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let table = RouteTable::from_config_or_default(&[]);
        assert_eq!(table, RouteTable::defaults());
    }
}

//! View composition
//!
//! Per frame, decide what the central area renders:
//! - mobile: every section stacked in route-table order, each with an anchor
//! - desktop: the one section the location points at, inside an entry transition
//! - standalone pages (production form, easter egg) regardless of mode
//!
//! The stacked section list is produced from the same `RouteTable` the
//! navigator pages through, so every navigation target exists in the layout.

use crate::routes::{Page, RouteTable};
use crate::viewport::ViewportMode;
use std::sync::Arc;

/// One stacked section in the single-page layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSlot {
    /// Index in the route table
    pub index: usize,
    /// Anchor id, identical to the route id
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    SinglePage {
        sections: Vec<SectionSlot>,
        /// Section the location points at, if any
        active: Option<usize>,
    },
    Routed {
        /// `None` for paths outside the route table
        section: Option<usize>,
        /// Changes whenever the entry animation must restart
        transition_key: String,
    },
    Standalone(Page),
}

pub struct ViewComposer {
    routes: Arc<RouteTable>,
}

impl ViewComposer {
    pub fn new(routes: Arc<RouteTable>) -> Self {
        Self { routes }
    }

    pub fn compose(&self, mode: ViewportMode, path: &str) -> Composition {
        let page = self.routes.resolve(path);
        if page.is_standalone() {
            return Composition::Standalone(page);
        }

        let active = match page {
            Page::Section(index) => Some(index),
            _ => None,
        };

        match mode {
            ViewportMode::Mobile => Composition::SinglePage {
                sections: self
                    .routes
                    .iter()
                    .enumerate()
                    .map(|(index, route)| SectionSlot {
                        index,
                        anchor: route.id.clone(),
                    })
                    .collect(),
                active,
            },
            ViewportMode::Desktop => Composition::Routed {
                section: active,
                transition_key: active
                    .and_then(|i| self.routes.get(i))
                    .map(|r| r.id.clone())
                    .unwrap_or_else(|| format!("missing:{path}")),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer() -> ViewComposer {
        ViewComposer::new(Arc::new(
            RouteTable::from_ids(&["home", "about", "resume"]).unwrap(),
        ))
    }

    #[test]
    fn test_mobile_stacks_every_route_in_order() {
        let composer = composer();
        let Composition::SinglePage { sections, active } =
            composer.compose(ViewportMode::Mobile, "/about")
        else {
            panic!("expected single page layout");
        };

        let anchors: Vec<&str> = sections.iter().map(|s| s.anchor.as_str()).collect();
        assert_eq!(anchors, ["home", "about", "resume"]);
        assert_eq!(active, Some(1));
    }

    #[test]
    fn test_desktop_routes_single_section() {
        let composer = composer();
        assert_eq!(
            composer.compose(ViewportMode::Desktop, "/resume"),
            Composition::Routed {
                section: Some(2),
                transition_key: "resume".to_string(),
            }
        );
    }

    #[test]
    fn test_transition_key_changes_with_route() {
        let composer = composer();
        let key = |path: &str| match composer.compose(ViewportMode::Desktop, path) {
            Composition::Routed { transition_key, .. } => transition_key,
            other => panic!("unexpected {other:?}"),
        };
        assert_ne!(key("/"), key("/about"));
        assert_eq!(key("/about"), key("/about/"));
    }

    #[test]
    fn test_unknown_path() {
        let composer = composer();
        match composer.compose(ViewportMode::Desktop, "/missing") {
            Composition::Routed { section, .. } => assert_eq!(section, None),
            other => panic!("unexpected {other:?}"),
        }
        match composer.compose(ViewportMode::Mobile, "/missing") {
            Composition::SinglePage { sections, active } => {
                assert_eq!(sections.len(), 3);
                assert_eq!(active, None);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_standalone_pages_ignore_mode() {
        let composer = composer();
        for mode in [ViewportMode::Mobile, ViewportMode::Desktop] {
            assert_eq!(
                composer.compose(mode, "/production"),
                Composition::Standalone(Page::Production)
            );
            assert_eq!(
                composer.compose(mode, "/hyperspace"),
                Composition::Standalone(Page::Hyperspace)
            );
        }
    }
}

//! Location access
//!
//! The active route is always derived from the location, never stored next to
//! it. On the web this is `window.location` plus the History API; natively (and
//! in tests) an in-memory history stands in.

use crate::routes::normalize_path;

pub trait Location {
    /// Current path, e.g. `/about`
    fn path(&self) -> String;

    /// Push a new history entry
    fn navigate(&mut self, path: &str);
}

/// In-memory history used natively and in tests
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    entries: Vec<String>,
}

impl MemoryLocation {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![normalize_path(initial)],
        }
    }

    /// Pop one entry, like the browser's back button
    pub fn back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Location for MemoryLocation {
    fn path(&self) -> String {
        self.entries.last().cloned().unwrap_or_else(|| "/".to_string())
    }

    fn navigate(&mut self, path: &str) {
        let path = normalize_path(path);
        if self.entries.last() != Some(&path) {
            self.entries.push(path);
        }
    }
}

// =============================================================================
// BROWSER LOCATION
// =============================================================================

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserLocation;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::Location;
    use crate::routes::normalize_path;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{Event, Window};

    /// `window.location` + History API.
    ///
    /// Back/forward navigation fires `popstate` outside egui's input loop, so a
    /// listener asks egui to repaint. The listener is removed on drop.
    pub struct BrowserLocation {
        window: Option<Window>,
        popstate: Option<Closure<dyn Fn(Event)>>,
    }

    impl BrowserLocation {
        pub fn new(ctx: &egui::Context) -> Self {
            let Some(window) = web_sys::window() else {
                tracing::warn!("BrowserLocation: no window, location is fixed at /");
                return Self {
                    window: None,
                    popstate: None,
                };
            };

            let ctx = ctx.clone();
            let callback = Closure::<dyn Fn(Event)>::new(move |_event: Event| {
                ctx.request_repaint();
            });
            let registered = window
                .add_event_listener_with_callback("popstate", callback.as_ref().unchecked_ref())
                .is_ok();
            if registered {
                tracing::info!("BrowserLocation: popstate listener registered");
            } else {
                tracing::warn!("BrowserLocation: failed to register popstate listener");
            }

            Self {
                window: Some(window),
                popstate: registered.then_some(callback),
            }
        }
    }

    impl Location for BrowserLocation {
        fn path(&self) -> String {
            self.window
                .as_ref()
                .and_then(|w| w.location().pathname().ok())
                .map(|p| normalize_path(&p))
                .unwrap_or_else(|| "/".to_string())
        }

        fn navigate(&mut self, path: &str) {
            let path = normalize_path(path);
            if self.path() == path {
                return;
            }
            let Some(window) = self.window.as_ref() else {
                return;
            };
            let pushed = window.history().and_then(|history| {
                history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path))
            });
            if let Err(e) = pushed {
                tracing::warn!("history.pushState({path}) failed: {:?}", e);
            }
        }
    }

    impl Drop for BrowserLocation {
        fn drop(&mut self) {
            if let (Some(window), Some(callback)) = (self.window.as_ref(), self.popstate.take()) {
                let _ = window.remove_event_listener_with_callback(
                    "popstate",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_location_navigation() {
        let mut location = MemoryLocation::default();
        assert_eq!(location.path(), "/");

        location.navigate("/about/");
        assert_eq!(location.path(), "/about");
        location.navigate("/about");
        assert_eq!(location.history_len(), 2);

        assert!(location.back());
        assert_eq!(location.path(), "/");
        assert!(!location.back());
    }
}

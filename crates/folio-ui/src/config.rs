//! Site configuration
//!
//! Loaded once at startup from the embedded `config/site.yaml` and passed
//! explicitly to the components that need it. Every field has a serde default,
//! so a partial file (or a broken one) still yields a usable config.

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Embedded default site configuration
pub const DEFAULT_SITE_CONFIG: &str = include_str!("../config/site.yaml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("route list is empty")]
    EmptyRoutes,

    #[error("duplicate route id or path: {0}")]
    DuplicateRoute(String),

    #[error("route path must start with '/': {0}")]
    InvalidPath(String),

    #[error("route path {0} is reserved for a standalone page")]
    ReservedPath(String),
}

// =============================================================================
// SITE CONFIG
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Widths at or below this are mobile
    pub breakpoint_px: f32,
    pub routes: Vec<RouteConfig>,
    pub navigator: NavigatorConfig,
    pub scroll: ScrollConfig,
    pub api: ApiConfig,
    pub gate: GateConfig,
    pub auth: AuthConfig,
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768.0,
            routes: RouteConfig::defaults(),
            navigator: NavigatorConfig::default(),
            scroll: ScrollConfig::default(),
            api: ApiConfig::default(),
            gate: GateConfig::default(),
            auth: AuthConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load the embedded config, falling back to built-in defaults
    pub fn load() -> Self {
        Self::from_yaml(DEFAULT_SITE_CONFIG).unwrap_or_else(|e| {
            warn!("Embedded site config rejected, using defaults: {e}");
            Self::default()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteConfig {
    pub id: String,
    pub path: String,
    #[serde(default)]
    pub title: String,
}

impl RouteConfig {
    pub fn defaults() -> Vec<RouteConfig> {
        [
            ("home", "/", "Home"),
            ("about", "/about", "About"),
            ("resume", "/resume", "Resume"),
            ("projects", "/projects", "Projects"),
            ("contact", "/contact", "Contact"),
        ]
        .into_iter()
        .map(|(id, path, title)| RouteConfig {
            id: id.to_string(),
            path: path.to_string(),
            title: title.to_string(),
        })
        .collect()
    }
}

/// Mobile auto-navigation tuning
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub enabled: bool,
    /// Distance from the top/bottom edge that triggers a transition
    pub threshold_px: f32,
    /// Minimum time between two auto-triggered transitions
    pub cooldown_ms: u64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold_px: 120.0,
            cooldown_ms: 900,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Duration of the smooth scroll started by a progress-bar click
    pub smooth_scroll_ms: u64,
    /// Duration of the fade-in when a section is first revealed
    pub reveal_ms: u64,
    /// Fraction of a section that must be on screen before it is revealed
    pub reveal_fraction: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_scroll_ms: 450,
            reveal_ms: 600,
            reveal_fraction: 0.15,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub storage_key: String,
    pub question: String,
    pub answer: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            storage_key: "folio.verified".to_string(),
            question: "What is the answer to life, the universe and everything?".to_string(),
            answer: "42".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub token_key: String,
    pub user_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: "folio.auth.token".to_string(),
            user_key: "folio.auth.user".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "hello@example.com".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_yaml(DEFAULT_SITE_CONFIG).unwrap();
        assert_eq!(config.breakpoint_px, 768.0);
        assert_eq!(config.navigator.threshold_px, 120.0);
        assert_eq!(config.navigator.cooldown_ms, 900);
        assert_eq!(config.routes.len(), 5);
        assert_eq!(config.routes[0].path, "/");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SiteConfig::from_yaml("navigator:\n  cooldown_ms: 1500\n").unwrap();
        assert_eq!(config.navigator.cooldown_ms, 1500);
        assert_eq!(config.navigator.threshold_px, 120.0);
        assert!(config.navigator.enabled);
        assert_eq!(config.routes, RouteConfig::defaults());
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(matches!(
            SiteConfig::from_yaml("routes: 12"),
            Err(ConfigError::Parse(_))
        ));
    }
}

//! Portfolio copy
//!
//! Text shown on the content pages, embedded from `config/content.yaml`.

use crate::config::ConfigError;
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_CONTENT: &str = include_str!("../config/content.yaml");

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub about: About,
    pub resume: Resume,
    pub projects: Vec<Project>,
}

impl PortfolioContent {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load() -> Self {
        Self::from_yaml(DEFAULT_CONTENT).unwrap_or_else(|e| {
            warn!("Embedded content rejected, pages will be empty: {e}");
            Self::default()
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
}

/// A headline number animated by a count-up
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u32,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub experience: Vec<TimelineEntry>,
    pub education: Vec<TimelineEntry>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineEntry {
    pub role: String,
    pub organization: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Site path (starts with `/`) or external URL
    #[serde(default)]
    pub url: Option<String>,
}

impl Project {
    /// Internal links navigate in-app instead of opening a new tab
    pub fn internal_path(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| u.starts_with('/'))
    }
}

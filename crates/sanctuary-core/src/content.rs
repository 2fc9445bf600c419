//! Site content: navigation links, releases, and devotions.
//!
//! Content is the markup contract of the page. Releases become carousel cards
//! in file order, devotions become accordion panels in file order.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Tuning;
use crate::error::{PageError, PageResult};

/// A link in the navigation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// `#section` for in-page anchors, anything else navigates normally
    pub href: String,
}

impl NavLink {
    /// Target element id for in-page anchors.
    pub fn anchor_id(&self) -> Option<&str> {
        self.href.strip_prefix('#')
    }
}

/// One album/single shown as a carousel card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub year: Option<u16>,
    /// Cover image URL for the card front
    #[serde(default)]
    pub cover: Option<String>,
    /// Text shown on the card back once flipped
    #[serde(default)]
    pub back_text: Option<String>,
    /// Devotion opened when the card is clicked
    #[serde(default)]
    pub devotion_id: Option<String>,
    /// Card starts as the showcase
    #[serde(default)]
    pub showcase: bool,
}

/// One expandable devotion panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Devotion {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub verse: Option<String>,
    #[serde(default)]
    pub body: Vec<String>,
}

/// Everything rendered on the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
    #[serde(default)]
    pub releases: Vec<Release>,
    #[serde(default)]
    pub devotions: Vec<Devotion>,
    #[serde(default)]
    pub tuning: Tuning,
}

impl SiteContent {
    /// Parse content from JSON without validating cross references.
    pub fn from_json(json: &str) -> PageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read, parse, and validate a content file.
    pub fn load(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json(&json)?;
        content.validate()?;
        tracing::debug!(
            path = %path.display(),
            releases = content.releases.len(),
            devotions = content.devotions.len(),
            "Loaded site content"
        );
        Ok(content)
    }

    /// Check identifier uniqueness and release → devotion links.
    pub fn validate(&self) -> PageResult<()> {
        let mut release_ids = HashSet::new();
        for release in &self.releases {
            if !release_ids.insert(release.id.as_str()) {
                return Err(PageError::DuplicateId {
                    kind: "release",
                    id: release.id.clone(),
                });
            }
        }

        let mut devotion_ids = HashSet::new();
        for devotion in &self.devotions {
            if !devotion_ids.insert(devotion.id.as_str()) {
                return Err(PageError::DuplicateId {
                    kind: "devotion",
                    id: devotion.id.clone(),
                });
            }
        }

        for release in &self.releases {
            if let Some(ref devotion) = release.devotion_id {
                if !devotion_ids.contains(devotion.as_str()) {
                    return Err(PageError::UnknownDevotion {
                        release: release.id.clone(),
                        devotion: devotion.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn devotion_ids(&self) -> Vec<String> {
        self.devotions.iter().map(|d| d.id.clone()).collect()
    }
}

use serde::{Deserialize, Serialize};

/// Listening links on the three supported platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformLinks {
    pub apple: String,
    pub google: String,
    pub spotify: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Podcast {
    pub title: String,
    pub description: String,
    pub explicit: bool,
    /// Content API path the episodes are listed under (a series tag).
    pub path: String,
    /// Identifier of the bundled artwork.
    pub thumbnail: String,
    pub links: PlatformLinks,
}

impl Podcast {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            ..Default::default()
        }
    }
}

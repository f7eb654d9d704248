use std::sync::Arc;

use serde::Serialize;

use crate::domain::{EpisodeLayout, Podcast};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Episode {
    pub headline: String,
    pub description: String,
    pub byline: String,
    pub date: String,
    pub thumbnail: String,
    pub url: String,
    /// Shared with the catalog; only read for fallback display data.
    #[serde(skip)]
    pub podcast: Option<Arc<Podcast>>,
    pub expanded: bool,
    pub layout: Option<EpisodeLayout>,
}

impl Episode {
    pub fn display_thumbnail(&self) -> &str {
        if !self.thumbnail.is_empty() {
            return &self.thumbnail;
        }
        self.podcast
            .as_deref()
            .map(|p| p.thumbnail.as_str())
            .unwrap_or("")
    }

    pub fn display_byline(&self) -> &str {
        if !self.byline.is_empty() {
            return &self.byline;
        }
        self.podcast
            .as_deref()
            .map(|p| p.title.as_str())
            .unwrap_or("")
    }
}

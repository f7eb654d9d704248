use serde::Serialize;

use crate::domain::{Article, FeedLayout};

/// A labeled group of articles from one content path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsFeed {
    pub name: String,
    pub label: String,
    /// Content path of the full list, for "see more".
    pub path: String,
    pub layout: FeedLayout,
    pub articles: Vec<Article>,
}

impl NewsFeed {
    pub fn new(path: impl Into<String>, label: impl Into<String>, layout: FeedLayout) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or_default().to_string();
        Self {
            name,
            label: label.into(),
            path,
            layout,
            articles: Vec::new(),
        }
    }

    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_path() {
        let feed = NewsFeed::new("uk/technology", "Tech", FeedLayout::Grid);
        assert_eq!(feed.name, "technology");
        assert_eq!(feed.display_label(), "Tech");
        assert!(feed.articles.is_empty());
    }

    #[test]
    fn test_display_label_falls_back_to_name() {
        let feed = NewsFeed::new("world", "", FeedLayout::List);
        assert_eq!(feed.display_label(), "world");
    }
}

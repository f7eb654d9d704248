//! Sections shown on the headlines screen and the podcast catalog.

use serde::{Deserialize, Serialize};

use crate::domain::{FeedLayout, Podcast};

/// One section aggregated into the headlines screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub path: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub layout: FeedLayout,
}

impl SectionConfig {
    pub fn new(path: &str, label: &str, layout: FeedLayout) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
            layout,
        }
    }
}

pub fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig::new("world", "World", FeedLayout::Carousel),
        SectionConfig::new("politics", "Politics", FeedLayout::List),
        SectionConfig::new("business", "Business", FeedLayout::List),
        SectionConfig::new("technology", "Technology", FeedLayout::Grid),
        SectionConfig::new("sport", "Sport", FeedLayout::Carousel),
        SectionConfig::new("culture", "Culture", FeedLayout::Grid),
    ]
}

pub fn default_podcasts() -> Vec<Podcast> {
    vec![
        Podcast {
            description: "The day's biggest story, explained".to_string(),
            thumbnail: "today_in_focus".to_string(),
            ..Podcast::new("Today in Focus", "news/series/todayinfocus")
        },
        Podcast {
            description: "The best science news from the week".to_string(),
            thumbnail: "science_weekly".to_string(),
            ..Podcast::new("Science Weekly", "science/series/science")
        },
        Podcast {
            description: "Analysis of the week in football".to_string(),
            explicit: true,
            thumbnail: "football_weekly".to_string(),
            ..Podcast::new("Football Weekly", "football/series/footballweekly")
        },
        Podcast {
            description: "The week in Westminster".to_string(),
            thumbnail: "politics_weekly".to_string(),
            ..Podcast::new("Politics Weekly", "politics/series/politicsweekly")
        },
    ]
}

use serde::{Deserialize, Serialize};

/// A piece of article data a card layout displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayField {
    Headline,
    Section,
    Byline,
    Publication,
    Date,
    Thumbnail,
}

/// The twelve card layouts an article can be rendered with.
///
/// Each variant carries a stable integer tag (its position in
/// [`ViewType::ALL`]) and a fixed set of fields the card needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewType {
    Hero,
    Standard,
    Compact,
    ThumbnailLeft,
    ThumbnailRight,
    TextOnly,
    Wide,
    Opinion,
    Feature,
    Gallery,
    Brief,
    Minimal,
}

impl ViewType {
    pub const ALL: [ViewType; 12] = [
        ViewType::Hero,
        ViewType::Standard,
        ViewType::Compact,
        ViewType::ThumbnailLeft,
        ViewType::ThumbnailRight,
        ViewType::TextOnly,
        ViewType::Wide,
        ViewType::Opinion,
        ViewType::Feature,
        ViewType::Gallery,
        ViewType::Brief,
        ViewType::Minimal,
    ];

    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Fields that must be populated for this card to render.
    pub fn required_fields(self) -> &'static [DisplayField] {
        use DisplayField::*;

        match self {
            ViewType::Hero => &[Headline, Section, Byline, Thumbnail, Date],
            ViewType::Standard => &[Headline, Section, Thumbnail, Date],
            ViewType::Compact => &[Headline, Section],
            ViewType::ThumbnailLeft => &[Headline, Thumbnail, Date],
            ViewType::ThumbnailRight => &[Headline, Thumbnail, Byline],
            ViewType::TextOnly => &[Headline, Byline, Date],
            ViewType::Wide => &[Headline, Thumbnail],
            ViewType::Opinion => &[Headline, Byline, Thumbnail],
            ViewType::Feature => &[Headline, Section, Thumbnail, Publication],
            ViewType::Gallery => &[Thumbnail, Headline],
            ViewType::Brief => &[Headline, Date],
            ViewType::Minimal => &[Headline],
        }
    }

    pub fn shows(self, field: DisplayField) -> bool {
        self.required_fields().contains(&field)
    }
}

/// Presentation style of a whole feed on the headlines screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedLayout {
    #[default]
    List,
    Carousel,
    Grid,
}

/// Layout of a podcast episode row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeLayout {
    /// The newest episode, shown expanded at the top.
    Latest,
    Archive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_dense() {
        for (i, view_type) in ViewType::ALL.iter().enumerate() {
            assert_eq!(view_type.tag() as usize, i);
        }
    }

    #[test]
    fn test_every_layout_shows_headline() {
        for view_type in ViewType::ALL {
            assert!(view_type.shows(DisplayField::Headline), "{view_type:?}");
        }
    }

    #[test]
    fn test_minimal_shows_nothing_else() {
        assert_eq!(ViewType::Minimal.required_fields(), &[DisplayField::Headline]);
        assert!(!ViewType::Minimal.shows(DisplayField::Thumbnail));
    }
}

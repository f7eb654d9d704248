use serde::{Deserialize, Serialize};

use crate::domain::{DisplayField, ViewType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub headline: String,
    pub section: String,
    pub url: String,
    pub byline: String,
    pub publication: String,
    pub date: String,
    pub thumbnail: String,
    pub view_type: Option<ViewType>,
}

impl Article {
    pub fn field(&self, field: DisplayField) -> &str {
        match field {
            DisplayField::Headline => &self.headline,
            DisplayField::Section => &self.section,
            DisplayField::Byline => &self.byline,
            DisplayField::Publication => &self.publication,
            DisplayField::Date => &self.date,
            DisplayField::Thumbnail => &self.thumbnail,
        }
    }

    /// Fields the assigned layout needs but this article lacks.
    pub fn missing_fields(&self) -> Vec<DisplayField> {
        self.view_type
            .map(|v| {
                v.required_fields()
                    .iter()
                    .copied()
                    .filter(|f| self.field(*f).is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn display_headline(&self) -> &str {
        if self.headline.is_empty() {
            "(Untitled)"
        } else {
            &self.headline
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_headline_without_headline() {
        let article = Article::default();
        assert_eq!(article.display_headline(), "(Untitled)");
    }

    #[test]
    fn test_missing_fields_unassigned() {
        let article = Article::default();
        assert!(article.missing_fields().is_empty());
    }

    #[test]
    fn test_missing_fields_follow_layout() {
        let article = Article {
            headline: "Markets rally".into(),
            date: "Dec 3, 2021".into(),
            view_type: Some(ViewType::ThumbnailLeft),
            ..Default::default()
        };
        assert_eq!(article.missing_fields(), vec![DisplayField::Thumbnail]);
    }
}

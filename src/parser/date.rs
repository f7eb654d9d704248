use chrono::NaiveDateTime;

use crate::app::{NewsdeskError, Result};

/// Timestamp format the content API publishes dates in.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    /// `Dec 3, 2021`
    ArticleList,
    /// `3 December 2021`
    EpisodeList,
}

impl DatePattern {
    pub fn format_str(self) -> &'static str {
        match self {
            DatePattern::ArticleList => "%b %-d, %Y",
            DatePattern::EpisodeList => "%-d %B %Y",
        }
    }
}

pub fn format_date(raw: &str, pattern: DatePattern) -> Result<String> {
    let parsed = NaiveDateTime::parse_from_str(raw, INPUT_FORMAT)
        .map_err(|e| NewsdeskError::DateFormat(format!("{raw}: {e}")))?;
    Ok(parsed.format(pattern.format_str()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_pattern() {
        assert_eq!(
            format_date("2021-12-03T10:15:30Z", DatePattern::ArticleList).unwrap(),
            "Dec 3, 2021"
        );
    }

    #[test]
    fn test_episode_pattern() {
        assert_eq!(
            format_date("2021-12-03T10:15:30Z", DatePattern::EpisodeList).unwrap(),
            "3 December 2021"
        );
    }

    #[test]
    fn test_two_digit_day() {
        assert_eq!(
            format_date("2020-02-29T23:59:59Z", DatePattern::ArticleList).unwrap(),
            "Feb 29, 2020"
        );
    }

    #[test]
    fn test_malformed_date_errors() {
        let err = format_date("yesterday", DatePattern::ArticleList).unwrap_err();
        assert!(matches!(err, NewsdeskError::DateFormat(_)));
        assert!(format_date("2021-12-03", DatePattern::EpisodeList).is_err());
    }
}

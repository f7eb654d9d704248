pub mod date;

use std::sync::Arc;

use html_escape::decode_html_entities;
use serde_json::Value;

use crate::app::{NewsdeskError, Result};
use crate::domain::{Article, Episode, Podcast};

pub use date::{format_date, DatePattern};

/// Turns content API responses into domain records.
///
/// Parsing never fails outright: a payload without a `response.results`
/// array yields an empty list and a missing field yields an empty string.
/// A date that is present but malformed drops its record.
#[derive(Clone, Default)]
pub struct ContentParser;

impl ContentParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_articles(&self, body: &str) -> Vec<Article> {
        self.parse_list(body, |result| self.article(result))
    }

    pub fn parse_episodes(&self, body: &str, podcast: Option<Arc<Podcast>>) -> Vec<Episode> {
        self.parse_list(body, |result| self.episode(result, podcast.clone()))
    }

    pub fn article(&self, result: &Value) -> Result<Article> {
        let fields = result.get("fields").unwrap_or(&Value::Null);

        Ok(Article {
            headline: decode_html_entities(&text(fields, "headline")).to_string(),
            section: text(result, "sectionName"),
            url: text(result, "webUrl"),
            byline: decode_html_entities(&text(fields, "byline")).to_string(),
            publication: text(fields, "publication"),
            date: date(result, DatePattern::ArticleList)?,
            thumbnail: text(fields, "thumbnail"),
            view_type: None,
        })
    }

    pub fn episode(&self, result: &Value, podcast: Option<Arc<Podcast>>) -> Result<Episode> {
        let fields = result.get("fields").unwrap_or(&Value::Null);

        Ok(Episode {
            headline: decode_html_entities(&text(fields, "headline")).to_string(),
            description: plain_text(&text(fields, "trailText")),
            byline: decode_html_entities(&text(fields, "byline")).to_string(),
            date: date(result, DatePattern::EpisodeList)?,
            thumbnail: text(fields, "thumbnail"),
            url: text(result, "webUrl"),
            podcast,
            expanded: false,
            layout: None,
        })
    }

    fn parse_list<T, F>(&self, body: &str, mut record: F) -> Vec<T>
    where
        F: FnMut(&Value) -> Result<T>,
    {
        let results = match results(body) {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!("Could not parse content response: {}", e);
                return Vec::new();
            }
        };

        results
            .iter()
            .filter_map(|result| match record(result) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!("Dropping result {}: {}", text(result, "id"), e);
                    None
                }
            })
            .collect()
    }
}

fn results(body: &str) -> Result<Vec<Value>> {
    let mut root: Value = serde_json::from_str(body)?;

    match root.pointer_mut("/response/results").map(Value::take) {
        Some(Value::Array(results)) => Ok(results),
        _ => Err(NewsdeskError::MalformedPayload(
            "missing response.results array".into(),
        )),
    }
}

fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn date(result: &Value, pattern: DatePattern) -> Result<String> {
    match result.get("webPublicationDate").and_then(Value::as_str) {
        Some(raw) => format_date(raw, pattern),
        None => Ok(String::new()),
    }
}

/// Strip inline markup and decode entities.
fn plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    decode_html_entities(out.trim()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
      "response": {
        "status": "ok",
        "results": [
          {
            "id": "world/2021/dec/03/summit",
            "sectionName": "World news",
            "webPublicationDate": "2021-12-03T10:15:30Z",
            "webUrl": "https://example.com/world/summit",
            "fields": {
              "headline": "Leaders meet &amp; agree",
              "byline": "Jane Reporter &amp; Sam O&#39;Neill",
              "publication": "The Observer",
              "thumbnail": "https://img.example.com/summit.jpg",
              "trailText": "<strong>Listen</strong> to the &quot;full&quot; story"
            }
          },
          {
            "id": "sport/2021/dec/04/final",
            "sectionName": "Sport",
            "webPublicationDate": "2021-12-04T18:00:00Z",
            "webUrl": "https://example.com/sport/final"
          }
        ]
      }
    }"#;

    #[test]
    fn test_parse_articles() {
        let articles = ContentParser::new().parse_articles(SAMPLE);

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].headline, "Leaders meet & agree");
        assert_eq!(articles[0].section, "World news");
        assert_eq!(articles[0].url, "https://example.com/world/summit");
        assert_eq!(articles[0].byline, "Jane Reporter & Sam O'Neill");
        assert_eq!(articles[0].publication, "The Observer");
        assert_eq!(articles[0].date, "Dec 3, 2021");
        assert_eq!(articles[0].thumbnail, "https://img.example.com/summit.jpg");
        assert_eq!(articles[0].view_type, None);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let articles = ContentParser::new().parse_articles(SAMPLE);
        let sport = &articles[1];

        assert_eq!(sport.headline, "");
        assert_eq!(sport.byline, "");
        assert_eq!(sport.publication, "");
        assert_eq!(sport.thumbnail, "");
        assert_eq!(sport.section, "Sport");
    }

    #[test]
    fn test_single_result_without_fields() {
        let body = r#"{"response":{"results":[{"webUrl":"https://example.com/a"}]}}"#;
        let articles = ContentParser::new().parse_articles(body);

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].headline, "");
        assert_eq!(articles[0].byline, "");
        assert_eq!(articles[0].publication, "");
        assert_eq!(articles[0].thumbnail, "");
        assert_eq!(articles[0].date, "");
    }

    #[test]
    fn test_empty_and_garbage_bodies() {
        let parser = ContentParser::new();
        assert!(parser.parse_articles("").is_empty());
        assert!(parser.parse_articles("<html>nope</html>").is_empty());
        assert!(parser.parse_episodes("{", None).is_empty());
    }

    #[test]
    fn test_missing_results_array() {
        let parser = ContentParser::new();
        assert!(parser.parse_articles(r#"{"response":{}}"#).is_empty());
        assert!(parser.parse_articles(r#"{"response":{"results":{}}}"#).is_empty());
        assert!(parser.parse_articles(r#"[1, 2, 3]"#).is_empty());
    }

    #[test]
    fn test_empty_results_is_empty_list() {
        let articles = ContentParser::new().parse_articles(r#"{"response":{"results":[]}}"#);
        assert!(articles.is_empty());
    }

    #[test]
    fn test_malformed_date_drops_record() {
        let body = r#"{"response":{"results":[
            {"webPublicationDate":"last tuesday","fields":{"headline":"Bad"}},
            {"webPublicationDate":"2021-12-03T10:15:30Z","fields":{"headline":"Good"}}
        ]}}"#;
        let articles = ContentParser::new().parse_articles(body);

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].headline, "Good");
    }

    #[test]
    fn test_parse_episodes() {
        let podcast = Arc::new(Podcast::new("Today in Focus", "news/series/todayinfocus"));
        let episodes = ContentParser::new().parse_episodes(SAMPLE, Some(podcast.clone()));

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].date, "3 December 2021");
        assert_eq!(episodes[0].description, "Listen to the \"full\" story");
        assert_eq!(episodes[0].url, "https://example.com/world/summit");
        assert_eq!(episodes[0].byline, "Jane Reporter & Sam O'Neill");
        assert!(!episodes[0].expanded);
        assert_eq!(episodes[1].description, "");
        assert_eq!(episodes[1].podcast.as_deref(), Some(podcast.as_ref()));
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(plain_text("<p>One &amp; two</p>"), "One & two");
        assert_eq!(plain_text("no markup"), "no markup");
        assert_eq!(plain_text(""), "");
    }
}

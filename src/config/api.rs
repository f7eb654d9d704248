use serde::{Deserialize, Serialize};

/// Content API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root URL of the content API
    pub base_url: String,

    /// API key sent with every request (overridden by `NEWSDESK_API_KEY`)
    pub api_key: String,

    /// Results per request (default: 20)
    pub page_size: u32,

    /// Fields requested through `show-fields`
    pub fields: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://content.guardianapis.com".to_string(),
            api_key: "test".to_string(),
            page_size: 20,
            fields: vec![
                "headline".to_string(),
                "byline".to_string(),
                "publication".to_string(),
                "thumbnail".to_string(),
                "trailText".to_string(),
            ],
        }
    }
}

use url::Url;

use crate::app::{NewsdeskError, Result};
use crate::config::ApiConfig;

pub const SEARCH_PATH: &str = "search";

/// Parameters of one content API request.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentQuery {
    pub base_url: String,
    pub api_key: String,
    /// Content path such as `world` or `news/series/todayinfocus`.
    pub path: String,
    pub fields: Vec<String>,
    pub page_size: u32,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub order_by: Option<String>,
}

impl ContentQuery {
    pub fn new(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.clone(),
            api_key: api.api_key.clone(),
            path: SEARCH_PATH.to_string(),
            fields: api.fields.clone(),
            page_size: api.page_size,
            search: None,
            page: None,
            order_by: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn newest_first(mut self) -> Self {
        self.order_by = Some("newest".to_string());
        self
    }

    pub fn to_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        let path = self.path.trim_matches('/');
        let path = if path.is_empty() { SEARCH_PATH } else { path };

        // Content path goes after any prefix already on the base URL.
        url.path_segments_mut()
            .map_err(|_| NewsdeskError::Other(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(path.split('/').filter(|s| !s.is_empty()));

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api-key", &self.api_key);
            if !self.fields.is_empty() {
                pairs.append_pair("show-fields", &self.fields.join(","));
            }
            pairs.append_pair("page-size", &self.page_size.to_string());
            if let Some(term) = self.search.as_deref().filter(|t| !t.trim().is_empty()) {
                pairs.append_pair("q", term.trim());
            }
            if let Some(page) = self.page {
                pairs.append_pair("page", &page.to_string());
            }
            if let Some(order) = &self.order_by {
                pairs.append_pair("order-by", order);
            }
        }

        Ok(url)
    }
}

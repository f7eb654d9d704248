pub mod http_fetcher;
pub mod query;

use async_trait::async_trait;

use crate::app::Result;

pub use query::ContentQuery;

#[async_trait]
pub trait Fetcher {
    /// GET `url` and return the body of a 200 response.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fixed message for a non-200 status code.
pub fn status_message(code: u16) -> &'static str {
    match code {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        _ => "Error",
    }
}

/// Fetch `url`, logging any failure and returning an empty body in its place.
pub async fn fetch_or_empty(fetcher: &(dyn Fetcher + Send + Sync), url: &str) -> String {
    match fetcher.fetch(url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Fetch of {} failed: {}", url, e);
            String::new()
        }
    }
}

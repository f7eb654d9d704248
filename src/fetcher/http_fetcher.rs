use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::app::{NewsdeskError, Result};
use crate::fetcher::{status_message, Fetcher};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("newsdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let url = Url::parse(url)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(NewsdeskError::Status {
                code: status.as_u16(),
                message: status_message(status.as_u16()),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_ok_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/world"))
            .and(query_param("api-key", "test"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"response":{}}"#))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let url = format!("{}/world?api-key=test", mock_server.uri());
        let body = fetcher.fetch(&url).await.unwrap();
        assert_eq!(body, r#"{"response":{}}"#);
    }

    #[tokio::test]
    async fn test_fetch_not_found_maps_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let url = format!("{}/missing", mock_server.uri());
        match fetcher.fetch(&url).await {
            Err(NewsdeskError::Status { code, message }) => {
                assert_eq!(code, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_other_status_is_generic_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch(&mock_server.uri()).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP 503: Error");
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("").await.unwrap_err();
        assert!(matches!(err, NewsdeskError::InvalidUrl(_)));
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::api::{CheckResponse, FavoritesApi};
use crate::app::{FavError, Result};
use crate::config::ApiConfig;
use crate::domain::{ResourceFamily, Session};

pub struct HttpFavoritesApi {
    client: Client,
    base_url: Url,
}

impl HttpFavoritesApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(FavError::Config(format!(
                "API base URL cannot carry paths: {}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FavError::Config(format!("Invalid API base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(request: RequestBuilder, session: &Session) -> Result<reqwest::Response> {
        let response = request.bearer_auth(&session.token).send().await?;
        response.error_for_status_ref()?;
        Ok(response)
    }
}

#[async_trait]
impl FavoritesApi for HttpFavoritesApi {
    async fn check(
        &self,
        family: &ResourceFamily,
        item_id: &str,
        session: &Session,
    ) -> Result<bool> {
        let url = self.endpoint(&family.check_segments(item_id))?;
        tracing::debug!("GET {}", url);

        let response = Self::send(self.client.get(url), session).await?;
        let body = response.bytes().await?;
        let parsed: CheckResponse = serde_json::from_slice(&body)?;

        Ok(parsed.is_favorite)
    }

    async fn add(&self, family: &ResourceFamily, item_id: &str, session: &Session) -> Result<()> {
        let url = self.endpoint(&family.create_segments())?;
        let body = serde_json::to_vec(&family.create_body(item_id))?;
        tracing::debug!("POST {}", url);

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body);
        Self::send(request, session).await?;

        Ok(())
    }

    async fn remove(
        &self,
        family: &ResourceFamily,
        item_id: &str,
        session: &Session,
    ) -> Result<()> {
        let url = self.endpoint(&family.delete_segments(item_id))?;
        tracing::debug!("DELETE {}", url);

        Self::send(self.client.delete(url), session).await?;

        Ok(())
    }
}

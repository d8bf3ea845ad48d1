pub mod http;

use async_trait::async_trait;
use serde::Deserialize;

use crate::app::Result;
use crate::domain::{ResourceFamily, Session};

pub use http::HttpFavoritesApi;

/// Body of `GET {prefix}/check/{id}`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CheckResponse {
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

/// The favorites REST collaborator.
///
/// All calls are authenticated with the session's bearer token. Non-2xx
/// responses surface as errors.
#[async_trait]
pub trait FavoritesApi {
    async fn check(
        &self,
        family: &ResourceFamily,
        item_id: &str,
        session: &Session,
    ) -> Result<bool>;

    async fn add(&self, family: &ResourceFamily, item_id: &str, session: &Session) -> Result<()>;

    async fn remove(
        &self,
        family: &ResourceFamily,
        item_id: &str,
        session: &Session,
    ) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod mock;

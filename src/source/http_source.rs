use crate::{domain::Card, error::Result, source::CardSource};
use async_trait::async_trait;
use tracing::debug;

/// HTTP-backed card source hitting the backend's `GET /cards` endpoint.
///
/// Schema validation happens through deserialization: a payload that does not
/// match the card schema is a serialization error, not a silently accepted
/// card list.
pub struct HttpCardSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCardSource {
    const CARDS_PATH: &'static str = "cards";

    /// Creates a source for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn cards_url(&self) -> String {
        format!("{}/{}", self.base_url, Self::CARDS_PATH)
    }
}

#[async_trait]
impl CardSource for HttpCardSource {
    async fn fetch_cards(&self) -> Result<Vec<Card>> {
        let url = self.cards_url();
        debug!(%url, "fetching cards");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let cards: Vec<Card> = response.json().await?;

        debug!(count = cards.len(), "fetched cards");
        Ok(cards)
    }
}

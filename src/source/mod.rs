use crate::{domain::Card, error::Result};
use async_trait::async_trait;

pub mod file_source;
pub mod http_source;

pub use file_source::FileCardSource;
pub use http_source::HttpCardSource;

/// Read-only boundary to wherever the cards come from.
///
/// The engine never writes back through this boundary; a completed fetch is
/// fed to [`crate::BoardState::ingest`], and a failed one is surfaced to the
/// caller as an error with no automatic retry.
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Fetches the full card dataset.
    async fn fetch_cards(&self) -> Result<Vec<Card>>;
}

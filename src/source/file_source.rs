use crate::{
    domain::Card,
    error::{BoardError, Result},
    source::CardSource,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Card source reading the backend JSON shape from a local file.
///
/// Useful for fixtures and demos where no backend is running; the payload
/// format is identical to what `GET /cards` returns.
pub struct FileCardSource {
    path: PathBuf,
}

impl FileCardSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CardSource for FileCardSource {
    async fn fetch_cards(&self) -> Result<Vec<Card>> {
        if !self.path.exists() {
            return Err(BoardError::SourceUnavailable(
                self.path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.path).await?;
        let cards: Vec<Card> = serde_json::from_str(&contents)?;

        Ok(cards)
    }
}

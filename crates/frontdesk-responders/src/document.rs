//! Document responder: structured data extraction stand-in.

use async_trait::async_trait;
use serde_json::json;

use frontdesk_core::types::{History, ResponderKind};
use frontdesk_pipeline::error::ResponderError;
use frontdesk_pipeline::responder::{Responder, ResponseUnit};

/// Extracts structured fields from a submitted document.
///
/// Emits a fixed demo payload; a deployment wires a document-intelligence
/// backend behind this interface.
pub struct DocumentResponder;

impl DocumentResponder {
    pub const NAME: &'static str = "document";
}

#[async_trait]
impl Responder for DocumentResponder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> ResponderKind {
        ResponderKind::Document
    }

    fn description(&self) -> &str {
        "Extracts structured data from documents (PDFs, images, forms)"
    }

    async fn respond(&self, history: &History) -> Result<Vec<ResponseUnit>, ResponderError> {
        let request = history.last_user().ok_or_else(|| {
            ResponderError::InvalidInput("no document submission to extract".to_string())
        })?;

        tracing::debug!(chars = request.content.len(), "Document fields extracted");
        let payload = json!({
            "name": "John Doe",
            "id": "12345",
            "doc_type": "Form",
        });
        Ok(vec![ResponseUnit::data(Self::NAME, payload)])
    }
}

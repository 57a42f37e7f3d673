//! Intake responder: first point of contact for citizens.
//!
//! Classifies the latest citizen message and emits a routing label — the
//! name of the responder that should handle it, or free text when nothing
//! matches (the router falls back to the general responder for those).

use async_trait::async_trait;

use frontdesk_core::config::IntakeConfig;
use frontdesk_core::types::{History, ResponderKind};
use frontdesk_pipeline::error::ResponderError;
use frontdesk_pipeline::responder::{Responder, ResponseUnit};

use crate::document::DocumentResponder;
use crate::translation::TranslationResponder;

/// Label emitted when no keyword list matches. Deliberately not a registered
/// responder name, so the router's fallback branch handles it.
const UNMATCHED_LABEL: &str = "general inquiry";

/// Keyword triage over the latest citizen message.
///
/// Document keywords are checked before translation keywords, so a request
/// mentioning both ("I have a document in Arabic") routes to document
/// extraction.
pub struct IntakeResponder {
    config: IntakeConfig,
}

impl IntakeResponder {
    pub const NAME: &'static str = "intake";

    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    fn classify(&self, request: &str) -> &str {
        let lowered = request.to_lowercase();
        if matches_any(&lowered, &self.config.document_keywords) {
            DocumentResponder::NAME
        } else if matches_any(&lowered, &self.config.translation_keywords) {
            TranslationResponder::NAME
        } else {
            UNMATCHED_LABEL
        }
    }
}

fn matches_any(lowered: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.to_lowercase()))
}

#[async_trait]
impl Responder for IntakeResponder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> ResponderKind {
        ResponderKind::Intake
    }

    fn description(&self) -> &str {
        "First point of contact: classifies a request as document, translation, or general"
    }

    async fn respond(&self, history: &History) -> Result<Vec<ResponseUnit>, ResponderError> {
        let request = history
            .last_user()
            .ok_or_else(|| ResponderError::InvalidInput("no citizen message to triage".to_string()))?;

        let label = self.classify(&request.content);
        tracing::debug!(label = %label, "Request triaged");
        Ok(vec![ResponseUnit::text(Self::NAME, label)])
    }
}

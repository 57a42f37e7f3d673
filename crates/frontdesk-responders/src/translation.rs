//! Translation responder: Arabic/English translation stand-in.

use async_trait::async_trait;

use frontdesk_core::types::{History, ResponderKind};
use frontdesk_pipeline::error::ResponderError;
use frontdesk_pipeline::responder::{Responder, ResponseUnit};

/// Translates the latest citizen message between Arabic and English.
///
/// The direction is inferred from the script of the source text; the
/// translation itself is a placeholder a real backend would replace.
pub struct TranslationResponder;

impl TranslationResponder {
    pub const NAME: &'static str = "translation";
}

/// True if the text contains characters from the Arabic Unicode block.
fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

#[async_trait]
impl Responder for TranslationResponder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> ResponderKind {
        ResponderKind::Translation
    }

    fn description(&self) -> &str {
        "Translates between Arabic and English, maintaining context and accuracy"
    }

    async fn respond(&self, history: &History) -> Result<Vec<ResponseUnit>, ResponderError> {
        let request = history.last_user().ok_or_else(|| {
            ResponderError::InvalidInput("no citizen message to translate".to_string())
        })?;

        let text = request.content.trim();
        let line = if contains_arabic(text) {
            format!("Translated to English: {}", text)
        } else {
            format!("Translated to Arabic: {}", text)
        };
        tracing::debug!(chars = text.len(), "Text translated");
        Ok(vec![ResponseUnit::text(Self::NAME, line)])
    }
}

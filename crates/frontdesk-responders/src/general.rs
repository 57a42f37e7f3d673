//! General responder: fallback for requests no specialist covers.

use async_trait::async_trait;

use frontdesk_core::types::{History, ResponderKind};
use frontdesk_pipeline::error::ResponderError;
use frontdesk_pipeline::responder::{Responder, ResponseUnit};

/// Handles general inquiries about application status, service info, or
/// anything else not related to translation or documents.
pub struct GeneralResponder;

impl GeneralResponder {
    pub const NAME: &'static str = "general";
}

#[async_trait]
impl Responder for GeneralResponder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> ResponderKind {
        ResponderKind::General
    }

    fn description(&self) -> &str {
        "Handles general citizen inquiries not related to translation or documents"
    }

    async fn respond(&self, history: &History) -> Result<Vec<ResponseUnit>, ResponderError> {
        let request = history.last_user().ok_or_else(|| {
            ResponderError::InvalidInput("no citizen message to answer".to_string())
        })?;

        let answer = if request.content.to_lowercase().contains("status") {
            "You can find your application status on the citizen portal or by contacting support."
        } else {
            "Thank you for your inquiry. We will get back to you soon."
        };
        tracing::debug!("General inquiry answered");
        Ok(vec![ResponseUnit::text(Self::NAME, answer)])
    }
}

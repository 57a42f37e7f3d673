//! Reporting responder: dashboard and report generation stand-in.

use async_trait::async_trait;

use frontdesk_core::types::{History, ResponderKind};
use frontdesk_pipeline::error::ResponderError;
use frontdesk_pipeline::responder::{Responder, ResponseUnit};

/// Generates dashboards and summary reports from stored data.
pub struct ReportingResponder;

impl ReportingResponder {
    pub const NAME: &'static str = "reporting";
}

#[async_trait]
impl Responder for ReportingResponder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> ResponderKind {
        ResponderKind::Reporting
    }

    fn description(&self) -> &str {
        "Generates dashboards and reports from stored data"
    }

    async fn respond(&self, history: &History) -> Result<Vec<ResponseUnit>, ResponderError> {
        tracing::debug!(messages = history.len(), "Report rendered");
        Ok(vec![ResponseUnit::text(
            Self::NAME,
            "Dashboard and summary report generated",
        )])
    }
}

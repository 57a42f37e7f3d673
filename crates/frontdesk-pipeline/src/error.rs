//! Error types for the pipeline core.

use frontdesk_core::error::FrontdeskError;
use frontdesk_core::types::ResponderKind;
use thiserror::Error;

/// Errors a responder capability may surface from an invocation.
///
/// An invocation fails as a whole: the controller never sees partial output
/// alongside an error.
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Capability unavailable: {0}")]
    Unavailable(String),
    #[error("Invocation failed: {0}")]
    Failed(String),
}

/// Errors from registry construction and the conversation loop.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("request cannot be empty")]
    EmptyRequest,
    #[error("request exceeds maximum length of {0} characters")]
    RequestTooLong(usize),
    #[error("responder name already registered: {0}")]
    DuplicateName(String),
    #[error("responder station already registered: {0}")]
    DuplicateKind(ResponderKind),
    #[error("responder {name} failed: {source}")]
    Invocation {
        name: String,
        #[source]
        source: ResponderError,
    },
    #[error("routing exceeded hop limit of {0}")]
    HopLimitExceeded(usize),
}

impl From<PipelineError> for FrontdeskError {
    fn from(err: PipelineError) -> Self {
        FrontdeskError::Pipeline(err.to_string())
    }
}

impl From<ResponderError> for FrontdeskError {
    fn from(err: ResponderError) -> Self {
        FrontdeskError::Responder(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responder_error_display() {
        let err = ResponderError::InvalidInput("no user message".to_string());
        assert_eq!(err.to_string(), "Invalid input: no user message");

        let err = ResponderError::Unavailable("OCR engine offline".to_string());
        assert_eq!(err.to_string(), "Capability unavailable: OCR engine offline");

        let err = ResponderError::Failed("connection reset".to_string());
        assert_eq!(err.to_string(), "Invocation failed: connection reset");
    }

    #[test]
    fn test_pipeline_error_display() {
        assert_eq!(
            PipelineError::EmptyRequest.to_string(),
            "request cannot be empty"
        );
        assert_eq!(
            PipelineError::RequestTooLong(2000).to_string(),
            "request exceeds maximum length of 2000 characters"
        );
        assert_eq!(
            PipelineError::DuplicateName("intake".to_string()).to_string(),
            "responder name already registered: intake"
        );
        assert_eq!(
            PipelineError::DuplicateKind(ResponderKind::Audit).to_string(),
            "responder station already registered: audit"
        );
        assert_eq!(
            PipelineError::HopLimitExceeded(8).to_string(),
            "routing exceeded hop limit of 8"
        );
    }

    #[test]
    fn test_invocation_error_carries_name_and_source() {
        let err = PipelineError::Invocation {
            name: "document".to_string(),
            source: ResponderError::Failed("scanner jam".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("document"));
        assert!(msg.contains("scanner jam"));
    }

    #[test]
    fn test_conversion_to_frontdesk_error() {
        let err: FrontdeskError = PipelineError::EmptyRequest.into();
        assert!(matches!(err, FrontdeskError::Pipeline(_)));

        let err: FrontdeskError = ResponderError::Failed("x".to_string()).into();
        assert!(matches!(err, FrontdeskError::Responder(_)));
    }
}

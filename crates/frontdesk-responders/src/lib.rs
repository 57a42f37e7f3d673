//! Concrete responders for the Frontdesk pipeline.
//!
//! One module per pipeline station, each behind the `Responder` capability
//! interface. These are deliberately thin capability stand-ins: a production
//! deployment swaps their internals (translation models, document
//! intelligence, BI rendering) without touching the routing core.

pub mod audit;
pub mod document;
pub mod general;
pub mod intake;
pub mod reporting;
pub mod storage;
pub mod translation;

pub use audit::AuditResponder;
pub use document::DocumentResponder;
pub use general::GeneralResponder;
pub use intake::IntakeResponder;
pub use reporting::ReportingResponder;
pub use storage::StorageResponder;
pub use translation::TranslationResponder;

use std::sync::Arc;

use frontdesk_core::config::IntakeConfig;
use frontdesk_pipeline::{PipelineError, ResponderRegistry};

/// Build the standard registry with all seven pipeline responders.
pub fn default_registry(intake: IntakeConfig) -> Result<ResponderRegistry, PipelineError> {
    let mut registry = ResponderRegistry::new();
    registry.register(Arc::new(IntakeResponder::new(intake)))?;
    registry.register(Arc::new(TranslationResponder))?;
    registry.register(Arc::new(DocumentResponder))?;
    registry.register(Arc::new(StorageResponder))?;
    registry.register(Arc::new(ReportingResponder))?;
    registry.register(Arc::new(AuditResponder))?;
    registry.register(Arc::new(GeneralResponder))?;
    Ok(registry)
}

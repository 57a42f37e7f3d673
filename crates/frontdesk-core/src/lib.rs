//! Core domain model for Frontdesk.
//!
//! Shared message/history types, the responder vocabulary, configuration,
//! and the top-level error type used across the workspace.

pub mod config;
pub mod error;
pub mod types;

pub use config::{FrontdeskConfig, GeneralConfig, IntakeConfig, PipelineConfig};
pub use error::{FrontdeskError, Result};
pub use types::{AuthorRole, Conversation, History, Message, ResponderKind, AUDIT_MARKER};

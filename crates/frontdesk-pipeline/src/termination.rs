//! Termination predicate.
//!
//! Decides when an interaction is fully logged and complete. Intentionally
//! decoupled from the routing machine's notion of "last author is audit":
//! termination stays detectable even if audit logging ran more than once or
//! out of the expected order.

use frontdesk_core::types::{AuthorRole, History, AUDIT_MARKER};

/// True once any responder message contains the audit marker phrase.
///
/// A substring check over responder-authored content only; citizen messages
/// quoting the phrase do not terminate. Side-effect free and safe to call
/// repeatedly.
pub fn interaction_complete(history: &History) -> bool {
    history
        .iter()
        .any(|m| m.role == AuthorRole::Responder && m.content.contains(AUDIT_MARKER))
}

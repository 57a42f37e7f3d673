//! Routing state machine.
//!
//! A pure function of (registry, history). State is reconstructed on every
//! step from the author of the most recent message, so the machine carries no
//! mutable state and is trivially restartable.
//!
//! Routing is content-driven only at the intake step, where the intake
//! output is read as a routing label; after that it is topology-driven, with
//! the translation and document paths converging into the fixed downstream
//! chain store -> report -> audit.

use std::sync::Arc;

use tracing::warn;

use frontdesk_core::types::{AuthorRole, History, ResponderKind};

use crate::registry::ResponderRegistry;
use crate::responder::Responder;

/// Result of one transition step.
pub enum RoutingDecision {
    /// Invoke this responder next.
    Invoke(Arc<dyn Responder>),
    /// No further responder; the interaction is over.
    Halt,
}

impl RoutingDecision {
    /// Name of the chosen responder, if any.
    pub fn responder_name(&self) -> Option<&str> {
        match self {
            RoutingDecision::Invoke(responder) => Some(responder.name()),
            RoutingDecision::Halt => None,
        }
    }

    pub fn is_halt(&self) -> bool {
        matches!(self, RoutingDecision::Halt)
    }
}

/// Pick the next responder for the given history.
///
/// Intake output is matched as a routing label: trimmed, case-sensitive,
/// exact-match against registered names, with unmatched labels falling back
/// to the general responder. Authors the table does not recognize halt the
/// pipeline rather than raising an error.
pub fn next_responder(registry: &ResponderRegistry, history: &History) -> RoutingDecision {
    let last = match history.last() {
        None => return invoke_station(registry, ResponderKind::Intake),
        Some(message) => message,
    };

    if last.role == AuthorRole::User {
        return invoke_station(registry, ResponderKind::Intake);
    }

    let author_kind = last
        .author
        .as_deref()
        .and_then(|name| registry.kind_of(name));

    match author_kind {
        Some(ResponderKind::Intake) => {
            let label = last.content.trim();
            match registry.lookup(label) {
                Some(responder) => RoutingDecision::Invoke(responder),
                None => invoke_station(registry, ResponderKind::General),
            }
        }
        Some(ResponderKind::Translation) | Some(ResponderKind::Document) => {
            invoke_station(registry, ResponderKind::Storage)
        }
        Some(ResponderKind::Storage) => invoke_station(registry, ResponderKind::Reporting),
        Some(ResponderKind::Reporting) => invoke_station(registry, ResponderKind::Audit),
        Some(ResponderKind::Audit) | Some(ResponderKind::General) => RoutingDecision::Halt,
        // Unknown author (e.g. a responder invoked out of band): fail-safe
        // termination, not fail-fast error.
        None => RoutingDecision::Halt,
    }
}

fn invoke_station(registry: &ResponderRegistry, kind: ResponderKind) -> RoutingDecision {
    match registry.of_kind(kind) {
        Some(responder) => RoutingDecision::Invoke(responder),
        None => {
            warn!(station = %kind, "No responder registered for station; halting");
            RoutingDecision::Halt
        }
    }
}

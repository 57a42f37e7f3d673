//! Named, capability-tagged responder registry.
//!
//! Built once at process start from a static configuration list and
//! read-only thereafter. Routing correctness never depends on iteration
//! order.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use frontdesk_core::types::ResponderKind;

use crate::error::PipelineError;
use crate::responder::Responder;

/// Immutable set of responders, keyed by name and by station.
///
/// Names are unique; so are stations, since the routing table addresses each
/// station as a single downstream target.
#[derive(Default)]
pub struct ResponderRegistry {
    by_name: HashMap<String, Arc<dyn Responder>>,
    by_kind: HashMap<ResponderKind, Arc<dyn Responder>>,
}

impl ResponderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a responder. Fails if its name or station is already taken.
    pub fn register(&mut self, responder: Arc<dyn Responder>) -> Result<(), PipelineError> {
        let name = responder.name().to_string();
        if self.by_name.contains_key(&name) {
            return Err(PipelineError::DuplicateName(name));
        }
        let kind = responder.kind();
        if self.by_kind.contains_key(&kind) {
            return Err(PipelineError::DuplicateKind(kind));
        }
        debug!(name = %name, kind = %kind, description = responder.description(), "Responder registered");
        self.by_name.insert(name, Arc::clone(&responder));
        self.by_kind.insert(kind, responder);
        Ok(())
    }

    /// Look up a responder by exact name.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Responder>> {
        self.by_name.get(name).cloned()
    }

    /// Look up the responder occupying a station.
    pub fn of_kind(&self, kind: ResponderKind) -> Option<Arc<dyn Responder>> {
        self.by_kind.get(&kind).cloned()
    }

    /// The station of a registered name, if any.
    pub fn kind_of(&self, name: &str) -> Option<ResponderKind> {
        self.by_name.get(name).map(|r| r.kind())
    }

    /// Iterate over all responders in unspecified order.
    pub fn all(&self) -> impl Iterator<Item = &Arc<dyn Responder>> {
        self.by_name.values()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

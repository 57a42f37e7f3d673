//! Responder capability interface.
//!
//! The boundary contract every pluggable responder satisfies. The core only
//! talks to a responder through this trait; how an implementation produces
//! its answer (LLM call, OCR engine, BI renderer) is its own affair.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use frontdesk_core::types::{History, ResponderKind};

use crate::error::ResponderError;

/// Payload of one response unit: plain text or a structured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Text(String),
    Data(serde_json::Value),
}

impl ResponseBody {
    /// Render for history storage. Structured payloads become compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            ResponseBody::Text(s) => s.clone(),
            ResponseBody::Data(v) => serde_json::to_string(v).unwrap_or_default(),
        }
    }
}

/// One output produced by a responder invocation, tagged with the emitting
/// responder's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseUnit {
    pub name: String,
    pub body: ResponseBody,
}

impl ResponseUnit {
    /// A plain-text unit.
    pub fn text(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: ResponseBody::Text(content.into()),
        }
    }

    /// A structured-payload unit.
    pub fn data(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            body: ResponseBody::Data(value),
        }
    }
}

/// A pluggable pipeline responder.
///
/// Implementations may suspend internally (network calls, OCR, report
/// rendering); the controller awaits each invocation's full result before the
/// next routing step. An invocation returns its complete, finite sequence of
/// units or a single error — never partial output plus an error.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Unique registry key. Intake output is matched against these names.
    fn name(&self) -> &str;

    /// Station this responder occupies in the routing table.
    fn kind(&self) -> ResponderKind;

    /// One-line purpose, logged at registration.
    fn description(&self) -> &str;

    /// Produce this invocation's response units from the conversation so far.
    async fn respond(&self, history: &History) -> Result<Vec<ResponseUnit>, ResponderError>;
}

/// Scriptable responder for testing.
///
/// Returns a fixed unit sequence (or a fixed error), counts invocations, and
/// records the history length seen at each call.
pub struct MockResponder {
    name: String,
    kind: ResponderKind,
    output: Result<Vec<ResponseUnit>, String>,
    calls: AtomicUsize,
    seen_lens: Mutex<Vec<usize>>,
}

impl MockResponder {
    /// Responds with a single default line.
    pub fn new(name: &str, kind: ResponderKind) -> Self {
        let unit = ResponseUnit::text(name, format!("{} reply", name));
        Self::with_units(name, kind, vec![unit])
    }

    /// Responds with one text line per entry, each tagged with its own name.
    pub fn with_lines(name: &str, kind: ResponderKind, lines: &[&str]) -> Self {
        let units = lines
            .iter()
            .map(|line| ResponseUnit::text(name, *line))
            .collect();
        Self::with_units(name, kind, units)
    }

    /// Responds with exactly the given units. Units may claim a different
    /// author name, which is how out-of-band authorship is simulated.
    pub fn with_units(name: &str, kind: ResponderKind, units: Vec<ResponseUnit>) -> Self {
        Self {
            name: name.to_string(),
            kind,
            output: Ok(units),
            calls: AtomicUsize::new(0),
            seen_lens: Mutex::new(Vec::new()),
        }
    }

    /// Responds with zero units.
    pub fn silent(name: &str, kind: ResponderKind) -> Self {
        Self::with_units(name, kind, Vec::new())
    }

    /// Fails every invocation with the given message.
    pub fn failing(name: &str, kind: ResponderKind, message: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            output: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            seen_lens: Mutex::new(Vec::new()),
        }
    }

    /// How many times `respond` was called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// History lengths observed at each invocation, in call order.
    pub fn seen_history_lens(&self) -> Vec<usize> {
        self.seen_lens.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Responder for MockResponder {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ResponderKind {
        self.kind
    }

    fn description(&self) -> &str {
        "Scripted responder for tests"
    }

    async fn respond(&self, history: &History) -> Result<Vec<ResponseUnit>, ResponderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut lens) = self.seen_lens.lock() {
            lens.push(history.len());
        }
        match &self.output {
            Ok(units) => Ok(units.clone()),
            Err(msg) => Err(ResponderError::Failed(msg.clone())),
        }
    }
}

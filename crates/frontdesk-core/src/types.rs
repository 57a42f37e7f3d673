//! Core types and value objects for the frontdesk pipeline.
//!
//! Defines messages, conversation history, and the responder vocabulary the
//! routing machine transitions over.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Literal phrase the audit responder emits once an interaction is fully
/// logged. The termination predicate checks for it as a substring of
/// responder output.
pub const AUDIT_MARKER: &str = "Interaction logged";

// =============================================================================
// Enums
// =============================================================================

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorRole {
    User,
    Responder,
}

impl fmt::Display for AuthorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorRole::User => write!(f, "user"),
            AuthorRole::Responder => write!(f, "responder"),
        }
    }
}

/// Pipeline stations a responder can occupy.
///
/// Routing transitions are keyed by this enum, never by free-text comparison
/// of live responder names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponderKind {
    Intake,
    Translation,
    Document,
    Storage,
    Reporting,
    Audit,
    General,
}

impl fmt::Display for ResponderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponderKind::Intake => write!(f, "intake"),
            ResponderKind::Translation => write!(f, "translation"),
            ResponderKind::Document => write!(f, "document"),
            ResponderKind::Storage => write!(f, "storage"),
            ResponderKind::Reporting => write!(f, "reporting"),
            ResponderKind::Audit => write!(f, "audit"),
            ResponderKind::General => write!(f, "general"),
        }
    }
}

impl std::str::FromStr for ResponderKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intake" => Ok(ResponderKind::Intake),
            "translation" => Ok(ResponderKind::Translation),
            "document" => Ok(ResponderKind::Document),
            "storage" => Ok(ResponderKind::Storage),
            "reporting" => Ok(ResponderKind::Reporting),
            "audit" => Ok(ResponderKind::Audit),
            "general" => Ok(ResponderKind::General),
            _ => Err(format!("Unknown responder kind: {}", s)),
        }
    }
}

// =============================================================================
// Messages & history
// =============================================================================

/// One turn in a conversation. Immutable once appended to a history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: AuthorRole,
    /// Responder name for responder turns; `None` exactly for citizen turns.
    pub author: Option<String>,
    pub content: String,
    /// Position in the history; strictly increasing from zero.
    pub seq: usize,
    pub created_at: DateTime<Utc>,
}

/// Append-only ordered sequence of messages for one conversation.
///
/// Messages can only be added at the end; `seq` always equals the message's
/// position. Not thread-safe: a history is exclusively owned by one
/// conversation at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    messages: Vec<Message>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a citizen (user) message and return a reference to it.
    pub fn append_user(&mut self, content: impl Into<String>) -> &Message {
        self.push(AuthorRole::User, None, content.into())
    }

    /// Append a responder message tagged with the responder's name.
    pub fn append_responder(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> &Message {
        self.push(AuthorRole::Responder, Some(name.into()), content.into())
    }

    fn push(&mut self, role: AuthorRole, author: Option<String>, content: String) -> &Message {
        let seq = self.messages.len();
        self.messages.push(Message {
            role,
            author,
            content,
            seq,
            created_at: Utc::now(),
        });
        &self.messages[seq]
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// The most recent user message, if any.
    pub fn last_user(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == AuthorRole::User)
    }

    /// Iterate over messages in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Replace the sequence with an empty one.
    pub fn reset(&mut self) {
        self.messages = Vec::new();
    }
}

/// One citizen request's history plus identity.
///
/// Owned exclusively by the loop controller for the duration of that request
/// and discarded afterward; no conversation outlives its request.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub history: History,
}

impl Conversation {
    /// Start a fresh conversation with an empty history.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            history: History::new(),
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    // ---- AuthorRole ----

    #[test]
    fn test_author_role_display() {
        assert_eq!(AuthorRole::User.to_string(), "user");
        assert_eq!(AuthorRole::Responder.to_string(), "responder");
    }

    #[test]
    fn test_author_role_serde_snake_case() {
        assert_eq!(serde_json::to_string(&AuthorRole::User).unwrap(), "\"user\"");
        let role: AuthorRole = serde_json::from_str("\"responder\"").unwrap();
        assert_eq!(role, AuthorRole::Responder);
    }

    // ---- ResponderKind ----

    #[test]
    fn test_responder_kind_display_roundtrip() {
        let kinds = [
            ResponderKind::Intake,
            ResponderKind::Translation,
            ResponderKind::Document,
            ResponderKind::Storage,
            ResponderKind::Reporting,
            ResponderKind::Audit,
            ResponderKind::General,
        ];
        for kind in kinds {
            let parsed = ResponderKind::from_str(&kind.to_string()).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_responder_kind_from_str_unknown() {
        let err = ResponderKind::from_str("concierge").unwrap_err();
        assert!(err.contains("concierge"));
    }

    #[test]
    fn test_responder_kind_serde() {
        assert_eq!(
            serde_json::to_string(&ResponderKind::Reporting).unwrap(),
            "\"reporting\""
        );
        let kind: ResponderKind = serde_json::from_str("\"audit\"").unwrap();
        assert_eq!(kind, ResponderKind::Audit);
    }

    // ---- History append ----

    #[test]
    fn test_new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.last().is_none());
        assert!(history.last_user().is_none());
    }

    #[test]
    fn test_append_user_has_no_author() {
        let mut history = History::new();
        let msg = history.append_user("hello");
        assert_eq!(msg.role, AuthorRole::User);
        assert_eq!(msg.author, None);
        assert_eq!(msg.content, "hello");
        assert_eq!(msg.seq, 0);
    }

    #[test]
    fn test_append_responder_tagged_with_name() {
        let mut history = History::new();
        history.append_user("hello");
        let msg = history.append_responder("intake", "translation");
        assert_eq!(msg.role, AuthorRole::Responder);
        assert_eq!(msg.author.as_deref(), Some("intake"));
        assert_eq!(msg.seq, 1);
    }

    #[test]
    fn test_seq_equals_position_and_strictly_increases() {
        let mut history = History::new();
        history.append_user("a");
        history.append_responder("intake", "b");
        history.append_responder("general", "c");
        for (i, msg) in history.iter().enumerate() {
            assert_eq!(msg.seq, i);
        }
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_last_returns_most_recent() {
        let mut history = History::new();
        history.append_user("first");
        history.append_responder("intake", "second");
        assert_eq!(history.last().unwrap().content, "second");
    }

    #[test]
    fn test_last_user_skips_responder_messages() {
        let mut history = History::new();
        history.append_user("the request");
        history.append_responder("intake", "translation");
        history.append_responder("translation", "Translated");
        let last_user = history.last_user().unwrap();
        assert_eq!(last_user.content, "the request");
        assert_eq!(last_user.role, AuthorRole::User);
    }

    #[test]
    fn test_last_user_picks_latest_of_several() {
        let mut history = History::new();
        history.append_user("first request");
        history.append_responder("general", "reply");
        history.append_user("second request");
        assert_eq!(history.last_user().unwrap().content, "second request");
    }

    // ---- Reset ----

    #[test]
    fn test_reset_replaces_with_empty_sequence() {
        let mut history = History::new();
        history.append_user("hello");
        history.append_responder("intake", "general inquiry");
        history.reset();
        assert!(history.is_empty());
        assert!(history.last().is_none());
        // Sequence numbering restarts from zero after reset.
        let msg = history.append_user("again");
        assert_eq!(msg.seq, 0);
    }

    // ---- Serde ----

    #[test]
    fn test_history_serde_roundtrip() {
        let mut history = History::new();
        history.append_user("hello");
        history.append_responder("audit", "Interaction logged and workflow triggered");
        let json = serde_json::to_string(&history).unwrap();
        let back: History = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.last().unwrap().author.as_deref(), Some("audit"));
    }

    // ---- Conversation ----

    #[test]
    fn test_new_conversation_starts_empty() {
        let convo = Conversation::new();
        assert!(convo.history.is_empty());
        assert_ne!(convo.id, Uuid::nil());
    }

    #[test]
    fn test_conversations_have_distinct_ids() {
        assert_ne!(Conversation::new().id, Conversation::new().id);
    }

    // ---- Marker constant ----

    #[test]
    fn test_audit_marker_phrase() {
        assert_eq!(AUDIT_MARKER, "Interaction logged");
    }
}

//! In-memory session store: one dialogue context per conversation.
//!
//! No persistence and no eviction; contexts live until process exit. Unbounded
//! growth is an accepted limitation of the design, not an oversight.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use gemini_client::ChatTurn;
use tokio::sync::Mutex;
use tracing::info;

/// Ordered prompt/response history for one conversation, plus creation time.
#[derive(Debug)]
pub struct DialogueContext {
    turns: Vec<ChatTurn>,
    created_at: DateTime<Utc>,
}

impl DialogueContext {
    fn new() -> Self {
        Self {
            turns: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Dialogue history in submission order.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Records one completed exchange. Called only after the gateway returned
    /// successfully; failed calls must leave the context untouched.
    pub fn record_turn(&mut self, prompt: impl Into<String>, reply: impl Into<String>) {
        self.turns.push(ChatTurn::user(prompt));
        self.turns.push(ChatTurn::model(reply));
    }
}

/// Shared handle to one conversation's context.
///
/// The dispatcher holds this lock across the whole resolve → gateway call →
/// append sequence, so two events for the same conversation serialize while
/// distinct conversations proceed concurrently.
pub type SessionHandle = Arc<Mutex<DialogueContext>>;

/// Map from conversation id to dialogue context. `get_or_create` and `reset`
/// are atomic with respect to other callers for the same key: the map is
/// guarded by its own mutex, and each entry carries a per-conversation mutex.
pub struct SessionStore {
    sessions: Mutex<HashMap<i64, SessionHandle>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the existing context for `chat_id` or creates an empty one.
    pub async fn get_or_create(&self, chat_id: i64) -> SessionHandle {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(chat_id)
            .or_insert_with(|| {
                info!(chat_id, "Initialized new chat session");
                Arc::new(Mutex::new(DialogueContext::new()))
            })
            .clone()
    }

    /// Replaces any existing context for `chat_id` with a fresh empty one.
    pub async fn reset(&self, chat_id: i64) -> SessionHandle {
        let handle: SessionHandle = Arc::new(Mutex::new(DialogueContext::new()));
        let mut sessions = self.sessions.lock().await;
        sessions.insert(chat_id, handle.clone());
        info!(chat_id, "Started new chat session");
        handle
    }

    /// Number of tracked conversations.
    pub async fn count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Whether a context exists for `chat_id`.
    pub async fn contains(&self, chat_id: i64) -> bool {
        self.sessions.lock().await.contains_key(&chat_id)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_or_create_returns_same_handle() {
        let store = SessionStore::new();
        let first = store.get_or_create(42).await;
        let second = store.get_or_create(42).await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_get_or_create_distinct_chats_are_independent() {
        let store = SessionStore::new();
        let a = store.get_or_create(1).await;
        let b = store.get_or_create(2).await;

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn test_reset_replaces_context() {
        let store = SessionStore::new();
        let old = store.get_or_create(42).await;
        old.lock().await.record_turn("sawaal", "jawab");

        let fresh = store.reset(42).await;

        assert!(!Arc::ptr_eq(&old, &fresh));
        assert!(fresh.lock().await.is_empty());
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_record_turn_appends_in_order() {
        let store = SessionStore::new();
        let handle = store.get_or_create(7).await;
        {
            let mut context = handle.lock().await;
            context.record_turn("sawaal", "jawab");
        }

        let context = handle.lock().await;
        let turns = context.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0], ChatTurn::user("sawaal"));
        assert_eq!(turns[1], ChatTurn::model("jawab"));
        assert!(context.created_at() <= Utc::now());
    }
}

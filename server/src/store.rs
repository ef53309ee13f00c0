//! In-memory store for the two collections.
//!
//! `Store` owns both sequences and is shared between handlers as
//! [`Db`], so every read-modify-write happens under one lock. Input is
//! validated by the handlers before it reaches the store.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{MessageRecord, Todo};

pub type Db = Arc<RwLock<Store>>;

pub const SAMPLE_TODOS: [&str; 3] = [
    "Learn React and Flask integration",
    "Set up local development environment",
    "Deploy to Render",
];

#[derive(Debug, Default)]
pub struct Store {
    todos: Vec<Todo>,
    messages: Vec<MessageRecord>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_todos() -> Self {
        let mut store = Self::new();
        for text in SAMPLE_TODOS {
            store.add_todo(text.to_string());
        }
        tracing::info!(count = SAMPLE_TODOS.len(), "Initialized sample todos");
        store
    }

    pub fn into_shared(self) -> Db {
        Arc::new(RwLock::new(self))
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn messages(&self) -> &[MessageRecord] {
        &self.messages
    }

    pub fn add_todo(&mut self, text: String) -> Todo {
        let todo = Todo {
            id: self.fresh_id(|s, id| s.todos.iter().any(|t| t.id == id)),
            text,
            completed: false,
            created_at: Utc::now(),
        };
        self.todos.push(todo.clone());
        todo
    }

    /// Removes the todo with `id`, preserving the order of the rest.
    pub fn remove_todo(&mut self, id: &str) -> Option<Todo> {
        let index = self.todos.iter().position(|t| t.id == id)?;
        Some(self.todos.remove(index))
    }

    pub fn add_message(&mut self, message: String) -> MessageRecord {
        let record = MessageRecord {
            id: self.fresh_id(|s, id| s.messages.iter().any(|m| m.id == id)),
            response: format!("Echo: {message}"),
            message,
            timestamp: Utc::now(),
        };
        self.messages.push(record.clone());
        record
    }

    fn fresh_id(&self, taken: impl Fn(&Self, &str) -> bool) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !taken(self, &id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = Store::new();
        assert!(store.todos().is_empty());
        assert!(store.messages().is_empty());
    }

    #[test]
    fn sample_todos_are_seeded_in_order() {
        let store = Store::with_sample_todos();
        let texts: Vec<&str> = store.todos().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, SAMPLE_TODOS);
        assert!(store.todos().iter().all(|t| !t.completed));
    }

    #[test]
    fn add_todo_appends_incomplete_item() {
        let mut store = Store::new();
        store.add_todo("first".to_string());
        let todo = store.add_todo("second".to_string());

        assert!(!todo.id.is_empty());
        assert!(!todo.completed);
        assert_eq!(store.todos().len(), 2);
        assert_eq!(store.todos()[1].id, todo.id);
    }

    #[test]
    fn remove_todo_keeps_remaining_order() {
        let mut store = Store::new();
        let a = store.add_todo("a".to_string());
        let b = store.add_todo("b".to_string());
        let c = store.add_todo("c".to_string());

        let removed = store.remove_todo(&b.id).unwrap();
        assert_eq!(removed.id, b.id);

        let ids: Vec<&str> = store.todos().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec![a.id.as_str(), c.id.as_str()]);
    }

    #[test]
    fn remove_unknown_todo_leaves_store_untouched() {
        let mut store = Store::with_sample_todos();
        assert!(store.remove_todo("does-not-exist").is_none());
        assert_eq!(store.todos().len(), SAMPLE_TODOS.len());
    }

    #[test]
    fn add_message_builds_echo_response() {
        let mut store = Store::new();
        let record = store.add_message("hi".to_string());
        assert_eq!(record.message, "hi");
        assert_eq!(record.response, "Echo: hi");
        assert_eq!(store.messages().len(), 1);
    }

    #[test]
    fn ids_are_unique_within_collection() {
        let mut store = Store::new();
        let ids: HashSet<String> = (0..200)
            .map(|i| store.add_todo(format!("todo {i}")).id)
            .collect();
        assert_eq!(ids.len(), 200);
    }

    #[tokio::test]
    async fn concurrent_writers_do_not_lose_updates() {
        let db = Store::new().into_shared();
        let mut tasks = Vec::new();
        for i in 0..50 {
            let db = db.clone();
            tasks.push(tokio::spawn(async move {
                db.write().await.add_message(format!("msg {i}"));
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(db.read().await.messages().len(), 50);
    }
}

//! In-process document-style store.
//!
//! Todos are kept in insertion order and addressed by object ids: 12 bytes
//! rendered as 24 hex digits, laid out as a big-endian seconds timestamp,
//! five bytes fixed per store, and a big-endian 24-bit counter.

use std::fmt::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::sync::RwLock;
use todo_core::todo::Todo;
use todo_core::types::TodoId;

use crate::store::{StoreError, StoreResult, TodoStore};

const OBJECT_ID_LEN: usize = 12;
const COUNTER_MASK: u32 = 0x00ff_ffff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ObjectId([u8; OBJECT_ID_LEN]);

impl ObjectId {
    fn new(timestamp: u32, process: [u8; 5], counter: u32) -> Self {
        let mut bytes = [0u8; OBJECT_ID_LEN];
        bytes[..4].copy_from_slice(&timestamp.to_be_bytes());
        bytes[4..9].copy_from_slice(&process);
        bytes[9..].copy_from_slice(&(counter & COUNTER_MASK).to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Parse 24 hex digits, either case.
    fn parse(s: &str) -> Option<Self> {
        if s.len() != OBJECT_ID_LEN * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let mut bytes = [0u8; OBJECT_ID_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(Self(bytes))
    }

    fn to_hex(self) -> String {
        self.0.iter().fold(String::with_capacity(24), |mut out, b| {
            let _ = write!(out, "{b:02x}");
            out
        })
    }
}

/// [`TodoStore`] held entirely in memory.
///
/// Nothing survives a restart. Useful for local runs without PostgreSQL and
/// for exercising the HTTP layer in tests.
#[derive(Debug)]
pub struct MemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
    process: [u8; 5],
    counter: AtomicU32,
}

impl Default for MemoryTodoStore {
    fn default() -> Self {
        Self {
            todos: RwLock::new(Vec::new()),
            process: rand::random(),
            counter: AtomicU32::new(rand::random::<u32>() & COUNTER_MASK),
        }
    }
}

impl MemoryTodoStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> TodoId {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or_default();
        let counter = self.counter.fetch_add(1, Ordering::Relaxed);
        TodoId::new(ObjectId::new(timestamp, self.process, counter).to_hex())
    }
}

/// Normalize a client id to the stored lowercase form, rejecting malformed ones.
fn parse_id(id: &TodoId) -> StoreResult<String> {
    ObjectId::parse(id.as_str())
        .map(ObjectId::to_hex)
        .ok_or_else(|| StoreError::invalid_id(id))
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, body: &str) -> StoreResult<Todo> {
        let todo = Todo {
            id: self.next_id(),
            body: body.to_owned(),
            completed: false,
        };
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        Ok(self.todos.read().await.clone())
    }

    async fn find_by_id(&self, id: &TodoId) -> StoreResult<Option<Todo>> {
        let key = parse_id(id)?;
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|t| t.id.as_str() == key).cloned())
    }

    async fn update_completed(&self, id: &TodoId) -> StoreResult<()> {
        let key = parse_id(id)?;
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|t| t.id.as_str() == key)
            .ok_or_else(|| StoreError::not_found(id))?;
        todo.completed = true;
        Ok(())
    }

    async fn delete_by_id(&self, id: &TodoId) -> StoreResult<()> {
        let key = parse_id(id)?;
        let mut todos = self.todos.write().await;
        let index = todos
            .iter()
            .position(|t| t.id.as_str() == key)
            .ok_or_else(|| StoreError::not_found(id))?;
        todos.remove(index);
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

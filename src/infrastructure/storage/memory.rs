//! In-memory document store for development and testing

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};

use crate::domain::ports::DocumentStore;
use crate::domain::DomainResult;

/// In-memory store keyed by path. Entries keep insertion order so
/// generated-key enumeration behaves like the remote store's key order.
#[derive(Default)]
pub struct MemoryDocumentStore {
    subtrees: DashMap<String, Vec<(String, Value)>>,
    key_counter: AtomicU64,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_key(&self) -> String {
        // Zero-padded so lexicographic order equals generation order
        format!("-k{:010}", self.key_counter.fetch_add(1, Ordering::SeqCst))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get_all(&self, path: &str) -> DomainResult<Map<String, Value>> {
        Ok(self
            .subtrees
            .get(path)
            .map(|entries| {
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn push(&self, path: &str, value: Value) -> DomainResult<String> {
        let key = self.next_key();
        self.subtrees
            .entry(path.to_string())
            .or_default()
            .push((key.clone(), value));
        Ok(key)
    }

    async fn set(&self, path: &str, key: &str, value: Value) -> DomainResult<()> {
        let mut entries = self.subtrees.entry(path.to_string()).or_default();
        if let Some(slot) = entries.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            entries.push((key.to_string(), value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn pushed_documents_enumerate_in_order() {
        let store = MemoryDocumentStore::new();
        store.push("ratings", json!({"n": 1})).await.unwrap();
        store.push("ratings", json!({"n": 2})).await.unwrap();
        store.push("ratings", json!({"n": 3})).await.unwrap();

        let all = store.get_all("ratings").await.unwrap();
        let values: Vec<i64> = all.values().map(|v| v["n"].as_i64().unwrap()).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn set_overwrites_existing_key() {
        let store = MemoryDocumentStore::new();
        store.set("users", "user_1", json!({"v": 1})).await.unwrap();
        store.set("users", "user_1", json!({"v": 2})).await.unwrap();

        let all = store.get_all("users").await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all["user_1"]["v"], 2);
    }

    #[tokio::test]
    async fn missing_path_reads_empty() {
        let store = MemoryDocumentStore::new();
        assert!(store.get_all("nothing").await.unwrap().is_empty());
    }
}

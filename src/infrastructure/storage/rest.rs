//! REST client for the remote document store
//!
//! Speaks the Firebase Realtime Database REST dialect: a subtree lives at
//! `{base}/{path}.json`, POST appends under a generated key, PUT writes at
//! an explicit key. Failures map to `DomainError::Storage` and propagate;
//! no retries happen here.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::ports::DocumentStore;
use crate::domain::{DomainError, DomainResult};

pub struct RestDocumentStore {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct PushResponse {
    name: String,
}

impl RestDocumentStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn subtree_url(&self, path: &str) -> String {
        format!("{}/{}.json", self.base_url, path)
    }

    fn document_url(&self, path: &str, key: &str) -> String {
        format!("{}/{}/{}.json", self.base_url, path, key)
    }
}

fn storage_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn get_all(&self, path: &str) -> DomainResult<Map<String, Value>> {
        let response = self
            .client
            .get(self.subtree_url(path))
            .send()
            .await
            .map_err(storage_err)?
            .error_for_status()
            .map_err(storage_err)?;

        // An absent subtree serializes as JSON null
        let subtree: Option<Map<String, Value>> =
            response.json().await.map_err(storage_err)?;
        Ok(subtree.unwrap_or_default())
    }

    async fn push(&self, path: &str, value: Value) -> DomainResult<String> {
        let response = self
            .client
            .post(self.subtree_url(path))
            .json(&value)
            .send()
            .await
            .map_err(storage_err)?
            .error_for_status()
            .map_err(storage_err)?;

        let push: PushResponse = response.json().await.map_err(storage_err)?;
        Ok(push.name)
    }

    async fn set(&self, path: &str, key: &str, value: Value) -> DomainResult<()> {
        self.client
            .put(self.document_url(path, key))
            .json(&value)
            .send()
            .await
            .map_err(storage_err)?
            .error_for_status()
            .map_err(storage_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let store = RestDocumentStore::new("https://db.example.test/");
        assert_eq!(
            store.subtree_url("ratings"),
            "https://db.example.test/ratings.json"
        );
        assert_eq!(
            store.document_url("users", "user_7"),
            "https://db.example.test/users/user_7.json"
        );
    }
}

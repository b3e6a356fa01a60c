//! User repository backed by the remote document store

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::events::{Event, EventPublisher, NoopPublisher, UserCreatedEvent};
use crate::domain::ports::DocumentStore;
use crate::domain::user::{User, UserRepositoryInterface};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::crypto::hash_password;

const USERS_PATH: &str = "users";

/// Wire shape of a persisted user document, keyed by `user_<n>`.
#[derive(Debug, Serialize, Deserialize)]
struct UserRecord {
    username: String,
    password: String,
    date_joined: String,
}

impl UserRecord {
    fn from_user(user: &User) -> Self {
        Self {
            username: user.name().to_string(),
            password: user.password().to_string(),
            date_joined: user.date_joined().to_string(),
        }
    }
}

/// Keeps the loaded account list in memory and persists new accounts to
/// the injected document store.
pub struct DocumentUserRepository {
    store: Arc<dyn DocumentStore>,
    users: RwLock<Vec<User>>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DocumentUserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_publisher(store, Arc::new(NoopPublisher))
    }

    pub fn with_publisher(
        store: Arc<dyn DocumentStore>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            store,
            users: RwLock::new(Vec::new()),
            event_publisher,
        }
    }
}

#[async_trait]
impl UserRepositoryInterface for DocumentUserRepository {
    async fn load_from_database(&self) -> DomainResult<Vec<User>> {
        let subtree = self.store.get_all(USERS_PATH).await?;

        let mut loaded = Vec::with_capacity(subtree.len());
        for (user_id, value) in subtree {
            let record: UserRecord = serde_json::from_value(value).map_err(|e| {
                DomainError::Storage(format!("Malformed user record '{}': {}", user_id, e))
            })?;
            loaded.push(User::new(
                user_id,
                record.username,
                record.password,
                record.date_joined,
            )?);
        }

        let mut users = self.users.write().expect("users lock");
        users.extend(loaded);
        Ok(users.clone())
    }

    async fn check_if_username_exists(&self, username: &str) -> DomainResult<bool> {
        Ok(self
            .users
            .read()
            .expect("users lock")
            .iter()
            .any(|u| u.name() == username))
    }

    async fn get_next_user_id(&self) -> DomainResult<String> {
        let max_id = self
            .users
            .read()
            .expect("users lock")
            .iter()
            .map(|u| u.id_number())
            .max()
            .unwrap_or(0);
        Ok(format!("user_{}", max_id + 1))
    }

    async fn create_user(
        &self,
        user_id: &str,
        username: &str,
        password: &str,
    ) -> DomainResult<User> {
        let user = User::new(
            user_id,
            username.trim(),
            hash_password(password.trim()),
            Utc::now().to_rfc3339(),
        )?;

        self.event_publisher
            .publish(Event::UserCreated(UserCreatedEvent::new(user.clone())));

        Ok(user)
    }

    async fn save_to_repo(&self, user: User) -> DomainResult<()> {
        self.users.write().expect("users lock").push(user);
        Ok(())
    }

    async fn save_to_database(&self, user: &User) -> DomainResult<()> {
        let record = UserRecord::from_user(user);
        let value: Value = serde_json::to_value(&record)
            .map_err(|e| DomainError::Storage(format!("Cannot serialize user: {}", e)))?;
        self.store.set(USERS_PATH, user.id(), value).await?;
        Ok(())
    }

    async fn users(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.read().expect("users lock").clone())
    }
}

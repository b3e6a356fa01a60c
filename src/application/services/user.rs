//! Account management service

use std::sync::Arc;

use log::info;

use crate::domain::user::{User, UserRepositoryInterface};
use crate::domain::{DomainError, DomainResult};

/// Service for account registration and lookup.
pub struct UserService<R: UserRepositoryInterface> {
    repository: Arc<R>,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Pull all persisted accounts into the repository.
    pub async fn load_all_users(&self) -> DomainResult<Vec<User>> {
        self.repository.load_from_database().await
    }

    /// Snapshot of all loaded accounts.
    pub async fn get_all_users(&self) -> DomainResult<Vec<User>> {
        self.repository.users().await
    }

    /// Register a new account.
    ///
    /// Username and password are trimmed before any check, so a
    /// whitespace-only input is rejected as empty. Id allocation assumes
    /// this service is the only writer of the user subtree.
    pub async fn create_user(&self, username: &str, password: &str) -> DomainResult<User> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() {
            return Err(DomainError::Validation("Username cannot be empty.".into()));
        }
        if password.is_empty() {
            return Err(DomainError::Validation("Password cannot be empty.".into()));
        }
        if self.repository.check_if_username_exists(username).await? {
            return Err(DomainError::Conflict(
                "Username already exists. Please choose another.".into(),
            ));
        }

        let user_id = self.repository.get_next_user_id().await?;
        let user = self.repository.create_user(&user_id, username, password).await?;
        self.repository.save_to_repo(user.clone()).await?;
        self.repository.save_to_database(&user).await?;

        info!("User {} registered as {}", username, user.id());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::DocumentStore;
    use crate::infrastructure::crypto::hash_password;
    use crate::infrastructure::repositories::DocumentUserRepository;
    use crate::infrastructure::storage::MemoryDocumentStore;

    fn service() -> (UserService<DocumentUserRepository>, Arc<MemoryDocumentStore>) {
        let store = Arc::new(MemoryDocumentStore::new());
        let repo = Arc::new(DocumentUserRepository::new(store.clone()));
        (UserService::new(repo), store)
    }

    #[tokio::test]
    async fn create_user_allocates_sequential_ids() {
        let (service, store) = service();

        let alice = service.create_user("alice", "pw1").await.unwrap();
        assert_eq!(alice.id(), "user_1");
        assert_eq!(alice.name(), "alice");
        assert_eq!(alice.password(), hash_password("pw1"));

        let bob = service.create_user("bob", "pw2").await.unwrap();
        assert_eq!(bob.id(), "user_2");

        let subtree = store.get_all("users").await.unwrap();
        assert_eq!(subtree.len(), 2);
        assert_eq!(subtree["user_1"]["username"], "alice");
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let (service, _) = service();
        service.create_user("alice", "pw1").await.unwrap();

        let err = service.create_user("alice", "pw2").await.unwrap_err();
        match err {
            DomainError::Conflict(msg) => {
                assert_eq!(msg, "Username already exists. Please choose another.")
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(service.get_all_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_or_blank_inputs_are_rejected() {
        let (service, store) = service();

        for (name, pass, expected) in [
            ("", "pw", "Username cannot be empty."),
            ("   ", "pw", "Username cannot be empty."),
            ("alice", "", "Password cannot be empty."),
            ("alice", "   ", "Password cannot be empty."),
        ] {
            let err = service.create_user(name, pass).await.unwrap_err();
            match err {
                DomainError::Validation(msg) => assert_eq!(msg, expected),
                other => panic!("unexpected error {:?}", other),
            }
        }
        assert!(store.get_all("users").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn trimmed_username_collides_with_existing() {
        let (service, _) = service();
        service.create_user("alice", "pw1").await.unwrap();

        let err = service.create_user("  alice  ", "pw2").await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn get_all_users_reflects_loaded_and_created() {
        let (service, store) = service();
        service.create_user("alice", "pw1").await.unwrap();

        // fresh service over the same store sees the persisted account
        let repo = Arc::new(DocumentUserRepository::new(store));
        let rebooted = UserService::new(repo);
        rebooted.load_all_users().await.unwrap();
        let users = rebooted.get_all_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name(), "alice");
    }
}

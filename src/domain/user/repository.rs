//! User repository interface

use async_trait::async_trait;

use super::model::User;
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepositoryInterface: Send + Sync {
    /// Read all persisted users from the remote store into the loaded set.
    async fn load_from_database(&self) -> DomainResult<Vec<User>>;

    /// Exact-match scan over the loaded users.
    async fn check_if_username_exists(&self, username: &str) -> DomainResult<bool>;

    /// Highest numeric `user_<n>` suffix among loaded users, plus one.
    ///
    /// Read-then-compute with no cross-process atomicity guarantee; the
    /// portal assumes a single writer per deployment (see DESIGN.md).
    async fn get_next_user_id(&self) -> DomainResult<String>;

    /// Build a user with a hashed password and a current join timestamp,
    /// publishing a `UserCreatedEvent`.
    async fn create_user(&self, user_id: &str, username: &str, password: &str)
        -> DomainResult<User>;

    /// Append to the in-memory loaded set only.
    async fn save_to_repo(&self, user: User) -> DomainResult<()>;

    /// Persist to the remote store only, keyed by the user id.
    async fn save_to_database(&self, user: &User) -> DomainResult<()>;

    /// Snapshot of the loaded users, in load order.
    async fn users(&self) -> DomainResult<Vec<User>>;
}

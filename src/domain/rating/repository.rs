//! Rating repository interface

use async_trait::async_trait;

use super::model::Rating;
use crate::domain::DomainResult;

#[async_trait]
pub trait RatingRepositoryInterface: Send + Sync {
    /// Read all persisted ratings from the remote store into the loaded
    /// set. Returns the full set after loading.
    async fn load_station_ratings_from_database(&self) -> DomainResult<Vec<Rating>>;

    /// Build a new rating stamped with the current time.
    async fn create_rating(
        &self,
        user_id: &str,
        station_id: i32,
        value: i32,
        comment: &str,
    ) -> DomainResult<Rating>;

    /// Append to the in-memory loaded set only.
    async fn save_rating_to_repo(&self, rating: Rating) -> DomainResult<()>;

    /// Persist to the remote store only.
    async fn save_rating_to_database(&self, rating: &Rating) -> DomainResult<()>;

    /// Snapshot of the loaded ratings, in load order.
    async fn station_ratings(&self) -> DomainResult<Vec<Rating>>;
}

//! Rating repository backed by the remote document store

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::ports::DocumentStore;
use crate::domain::rating::{Rating, RatingRepositoryInterface};
use crate::domain::{DomainError, DomainResult};

const RATINGS_PATH: &str = "ratings";

/// Wire shape of a persisted rating document.
#[derive(Debug, Serialize, Deserialize)]
struct RatingRecord {
    user_id: String,
    charging_station_id: i32,
    review_star: i32,
    review_text: String,
    review_date: String,
}

impl RatingRecord {
    fn from_rating(rating: &Rating) -> Self {
        Self {
            user_id: rating.user_id().to_string(),
            charging_station_id: rating.station_id(),
            review_star: rating.value(),
            review_text: rating.comment().to_string(),
            review_date: rating.date().to_string(),
        }
    }

    fn into_rating(self) -> DomainResult<Rating> {
        Rating::new(
            self.user_id,
            self.charging_station_id,
            self.review_date,
            self.review_star,
            self.review_text,
        )
    }
}

/// Keeps the loaded rating log in memory and persists new entries to the
/// injected document store.
pub struct DocumentRatingRepository {
    store: Arc<dyn DocumentStore>,
    station_ratings: RwLock<Vec<Rating>>,
}

impl DocumentRatingRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            station_ratings: RwLock::new(Vec::new()),
        }
    }

    fn snapshot(&self) -> Vec<Rating> {
        self.station_ratings.read().expect("ratings lock").clone()
    }
}

#[async_trait]
impl RatingRepositoryInterface for DocumentRatingRepository {
    async fn load_station_ratings_from_database(&self) -> DomainResult<Vec<Rating>> {
        let subtree = self.store.get_all(RATINGS_PATH).await?;

        let mut loaded = Vec::with_capacity(subtree.len());
        for (key, value) in subtree {
            let record: RatingRecord = serde_json::from_value(value).map_err(|e| {
                DomainError::Storage(format!("Malformed rating record '{}': {}", key, e))
            })?;
            loaded.push(record.into_rating()?);
        }

        let mut ratings = self.station_ratings.write().expect("ratings lock");
        ratings.extend(loaded);
        Ok(ratings.clone())
    }

    async fn create_rating(
        &self,
        user_id: &str,
        station_id: i32,
        value: i32,
        comment: &str,
    ) -> DomainResult<Rating> {
        Rating::new(
            user_id,
            station_id,
            Utc::now().to_rfc3339(),
            value,
            comment,
        )
    }

    async fn save_rating_to_repo(&self, rating: Rating) -> DomainResult<()> {
        self.station_ratings
            .write()
            .expect("ratings lock")
            .push(rating);
        Ok(())
    }

    async fn save_rating_to_database(&self, rating: &Rating) -> DomainResult<()> {
        let record = RatingRecord::from_rating(rating);
        let value: Value = serde_json::to_value(&record)
            .map_err(|e| DomainError::Storage(format!("Cannot serialize rating: {}", e)))?;
        self.store.push(RATINGS_PATH, value).await?;
        Ok(())
    }

    async fn station_ratings(&self) -> DomainResult<Vec<Rating>> {
        Ok(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryDocumentStore;
    use serde_json::json;

    fn repo_with_store() -> (DocumentRatingRepository, Arc<MemoryDocumentStore>) {
        let store = Arc::new(MemoryDocumentStore::new());
        (DocumentRatingRepository::new(store.clone()), store)
    }

    #[tokio::test]
    async fn created_rating_has_parseable_timestamp() {
        let (repo, _) = repo_with_store();
        let rating = repo.create_rating("user_1", 4, 5, "great").await.unwrap();
        // The stamp satisfies the same validation Rating applies
        assert!(Rating::new("user_1", 4, rating.date(), 5, "").is_ok());
    }

    #[tokio::test]
    async fn save_and_reload_round_trip() {
        let (repo, _) = repo_with_store();
        let rating = Rating::new("user_2", 7, "2023-03-04T09:00:00", 4, "ok").unwrap();
        repo.save_rating_to_database(&rating).await.unwrap();

        let loaded = repo.load_station_ratings_from_database().await.unwrap();
        assert_eq!(loaded, vec![rating]);
    }

    #[tokio::test]
    async fn persisted_record_uses_review_field_names() {
        let (repo, store) = repo_with_store();
        let rating = Rating::new("user_2", 7, "2023-03-04T09:00:00", 4, "ok").unwrap();
        repo.save_rating_to_database(&rating).await.unwrap();

        let subtree = store.get_all("ratings").await.unwrap();
        let (_, doc) = subtree.iter().next().unwrap();
        assert_eq!(doc["user_id"], "user_2");
        assert_eq!(doc["charging_station_id"], 7);
        assert_eq!(doc["review_star"], 4);
        assert_eq!(doc["review_text"], "ok");
        assert_eq!(doc["review_date"], "2023-03-04T09:00:00");
    }

    #[tokio::test]
    async fn ratings_load_in_store_key_order() {
        let (repo, store) = repo_with_store();
        for (user, star) in [("user_1", 5), ("user_2", 3), ("user_3", 1)] {
            store
                .push(
                    "ratings",
                    json!({
                        "user_id": user,
                        "charging_station_id": 1,
                        "review_star": star,
                        "review_text": "",
                        "review_date": "2023-01-01",
                    }),
                )
                .await
                .unwrap();
        }

        let loaded = repo.load_station_ratings_from_database().await.unwrap();
        let stars: Vec<i32> = loaded.iter().map(|r| r.value()).collect();
        assert_eq!(stars, vec![5, 3, 1]);
    }

    #[tokio::test]
    async fn malformed_remote_record_propagates() {
        let (repo, store) = repo_with_store();
        store
            .push("ratings", json!({"unexpected": true}))
            .await
            .unwrap();

        let err = repo.load_station_ratings_from_database().await.unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[tokio::test]
    async fn save_to_repo_appends_in_order() {
        let (repo, _) = repo_with_store();
        for star in [2, 4] {
            let rating = Rating::new("user_1", 1, "2023-01-01", star, "").unwrap();
            repo.save_rating_to_repo(rating).await.unwrap();
        }
        let values: Vec<i32> = repo
            .station_ratings()
            .await
            .unwrap()
            .iter()
            .map(|r| r.value())
            .collect();
        assert_eq!(values, vec![2, 4]);
    }
}

//! Combined station + rating repository
//!
//! Composes the two focused stores behind one surface so the service
//! layer can bootstrap stations, bootstrap ratings and attach one to the
//! other through a single handle.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::domain::events::EventPublisher;
use crate::domain::ports::{DocumentStore, TelemetrySimulator};
use crate::domain::rating::{Rating, RatingRepositoryInterface};
use crate::domain::station::{
    RatedChargingStation, StationRatingRepositoryInterface, StationRepositoryInterface,
};
use crate::domain::{DomainError, DomainResult};

use super::rating_repository::DocumentRatingRepository;
use super::station_repository::CsvStationRepository;

pub struct StationRatingRepository {
    stations: CsvStationRepository,
    ratings: DocumentRatingRepository,
}

impl StationRatingRepository {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        simulator: Box<dyn TelemetrySimulator>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            stations: CsvStationRepository::new(simulator, event_publisher),
            ratings: DocumentRatingRepository::new(store),
        }
    }

    /// Compose from already-built sub-repositories.
    pub fn from_parts(stations: CsvStationRepository, ratings: DocumentRatingRepository) -> Self {
        Self { stations, ratings }
    }
}

#[async_trait]
impl StationRepositoryInterface for StationRatingRepository {
    async fn load_stations_from_csv(&self, path: &Path) -> DomainResult<Vec<RatedChargingStation>> {
        self.stations.load_stations_from_csv(path).await
    }

    async fn stations(&self) -> DomainResult<Vec<RatedChargingStation>> {
        self.stations.stations().await
    }

    async fn find_station(&self, station_id: i32) -> DomainResult<Option<RatedChargingStation>> {
        self.stations.find_station(station_id).await
    }
}

#[async_trait]
impl RatingRepositoryInterface for StationRatingRepository {
    async fn load_station_ratings_from_database(&self) -> DomainResult<Vec<Rating>> {
        self.ratings.load_station_ratings_from_database().await
    }

    async fn create_rating(
        &self,
        user_id: &str,
        station_id: i32,
        value: i32,
        comment: &str,
    ) -> DomainResult<Rating> {
        self.ratings
            .create_rating(user_id, station_id, value, comment)
            .await
    }

    async fn save_rating_to_repo(&self, rating: Rating) -> DomainResult<()> {
        self.ratings.save_rating_to_repo(rating).await
    }

    async fn save_rating_to_database(&self, rating: &Rating) -> DomainResult<()> {
        self.ratings.save_rating_to_database(rating).await
    }

    async fn station_ratings(&self) -> DomainResult<Vec<Rating>> {
        self.ratings.station_ratings().await
    }
}

#[async_trait]
impl StationRatingRepositoryInterface for StationRatingRepository {
    async fn add_rating_to_station(&self, rating: Rating) -> DomainResult<()> {
        self.stations.attach_rating(rating)
    }

    async fn add_all_ratings_to_stations(&self) -> DomainResult<usize> {
        let mut attached = 0usize;
        for rating in self.ratings.station_ratings().await? {
            match self.stations.attach_rating(rating.clone()) {
                Ok(()) => attached += 1,
                Err(DomainError::NotFound { .. }) => {
                    // Stale remote data must not abort the bootstrap
                    warn!(
                        "Skipping rating by {} for unknown station {}",
                        rating.user_id(),
                        rating.station_id()
                    );
                }
                Err(e) => return Err(e),
            }
        }
        Ok(attached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryDocumentStore;
    use serde_json::json;

    const CSV: &str = "stationID,stationName,stationOperator,KW,Latitude,Longitude,PLZ\n\
        1,Alexanderplatz,Vattenfall,22,52.5219,13.4132,10178\n\
        2,Hauptbahnhof,EnBW,50,52.5250,13.3694,10557\n";

    async fn seeded_repo() -> (StationRatingRepository, Arc<MemoryDocumentStore>) {
        let store = Arc::new(MemoryDocumentStore::new());
        let stations = CsvStationRepository::default();
        stations.load_stations_from_reader(CSV.as_bytes()).unwrap();
        let ratings = DocumentRatingRepository::new(store.clone());
        (StationRatingRepository::from_parts(stations, ratings), store)
    }

    async fn push_rating(store: &MemoryDocumentStore, user: &str, station: i32, star: i32) {
        store
            .push(
                "ratings",
                json!({
                    "user_id": user,
                    "charging_station_id": station,
                    "review_star": star,
                    "review_text": "",
                    "review_date": "2023-01-01",
                }),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn attaches_ratings_to_matching_stations_in_load_order() {
        let (repo, store) = seeded_repo().await;
        push_rating(&store, "user_1", 1, 4).await;
        push_rating(&store, "user_2", 1, 3).await;
        push_rating(&store, "user_3", 2, 5).await;
        repo.load_station_ratings_from_database().await.unwrap();

        let attached = repo.add_all_ratings_to_stations().await.unwrap();
        assert_eq!(attached, 3);

        let station1 = repo.find_station(1).await.unwrap().unwrap();
        let users: Vec<&str> = station1.ratings().iter().map(|r| r.user_id()).collect();
        assert_eq!(users, vec!["user_1", "user_2"]);

        let station2 = repo.find_station(2).await.unwrap().unwrap();
        assert_eq!(station2.ratings().len(), 1);
        assert_eq!(station2.ratings()[0].user_id(), "user_3");
    }

    #[tokio::test]
    async fn orphan_ratings_are_skipped_not_fatal() {
        let (repo, store) = seeded_repo().await;
        push_rating(&store, "user_1", 1, 4).await;
        push_rating(&store, "user_2", 99, 5).await;
        repo.load_station_ratings_from_database().await.unwrap();

        let attached = repo.add_all_ratings_to_stations().await.unwrap();
        assert_eq!(attached, 1);
    }

    #[tokio::test]
    async fn direct_attach_to_unknown_station_fails() {
        let (repo, _) = seeded_repo().await;
        let rating = Rating::new("user_1", 42, "2023-01-01", 5, "").unwrap();
        let err = repo.add_rating_to_station(rating).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}

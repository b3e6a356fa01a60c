//! Charging station business logic service

use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::domain::rating::Rating;
use crate::domain::station::{RatedChargingStation, StationRatingRepositoryInterface};
use crate::domain::DomainResult;

/// Service for station browsing and rating use-cases.
///
/// Generic over the combined repository interface so it stays decoupled
/// from the concrete persistence layer.
pub struct ChargingStationService<R: StationRatingRepositoryInterface> {
    repository: Arc<R>,
}

impl<R: StationRatingRepositoryInterface> ChargingStationService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Load seed stations from the CSV export.
    pub async fn load_stations_from_csv(
        &self,
        path: &Path,
    ) -> DomainResult<Vec<RatedChargingStation>> {
        self.repository.load_stations_from_csv(path).await
    }

    /// Bootstrap: pull all persisted ratings and attach them to their
    /// stations, in load order. Returns the number attached.
    pub async fn load_all_ratings_to_stations(&self) -> DomainResult<usize> {
        self.repository.load_station_ratings_from_database().await?;
        let attached = self.repository.add_all_ratings_to_stations().await?;
        info!("Attached {} ratings to stations", attached);
        Ok(attached)
    }

    /// Create a rating and record it everywhere: remote store first, then
    /// the in-memory log, then the station aggregate.
    ///
    /// The sequence is not transactional. A failed remote write aborts
    /// before any local mutation; a local failure after a successful
    /// remote write leaves the stores divergent until the next bootstrap.
    pub async fn add_rating_to_station(
        &self,
        user_id: &str,
        station_id: i32,
        value: i32,
        comment: &str,
    ) -> DomainResult<Rating> {
        let rating = self
            .repository
            .create_rating(user_id, station_id, value, comment)
            .await?;
        self.repository.save_rating_to_database(&rating).await?;
        self.repository.save_rating_to_repo(rating.clone()).await?;
        self.repository.add_rating_to_station(rating.clone()).await?;

        info!(
            "Rating {} added by {} for station {}",
            rating.value(),
            rating.user_id(),
            station_id
        );
        Ok(rating)
    }

    /// Snapshot of all loaded stations.
    pub async fn stations(&self) -> DomainResult<Vec<RatedChargingStation>> {
        self.repository.stations().await
    }

    /// Look up one station by id.
    pub async fn find_station(
        &self,
        station_id: i32,
    ) -> DomainResult<Option<RatedChargingStation>> {
        self.repository.find_station(station_id).await
    }
}

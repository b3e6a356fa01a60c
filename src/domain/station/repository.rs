//! Station repository interfaces

use std::path::Path;

use async_trait::async_trait;

use super::model::RatedChargingStation;
use crate::domain::rating::{Rating, RatingRepositoryInterface};
use crate::domain::DomainResult;

#[async_trait]
pub trait StationRepositoryInterface: Send + Sync {
    /// Parse seed stations from a CSV export and add them to the loaded
    /// set. Returns the full set after loading.
    async fn load_stations_from_csv(&self, path: &Path) -> DomainResult<Vec<RatedChargingStation>>;

    /// Snapshot of all loaded stations, in load order.
    async fn stations(&self) -> DomainResult<Vec<RatedChargingStation>>;

    async fn find_station(&self, station_id: i32) -> DomainResult<Option<RatedChargingStation>>;
}

/// Combined surface over the station set and the rating log. One type
/// composes both focused stores; there is no inheritance between them.
#[async_trait]
pub trait StationRatingRepositoryInterface:
    StationRepositoryInterface + RatingRepositoryInterface
{
    /// Attach a rating to the station with the matching id.
    /// Fails with `NotFound` when no loaded station matches.
    async fn add_rating_to_station(&self, rating: Rating) -> DomainResult<()>;

    /// Attach every loaded rating to its station, in load order, so a
    /// station's review log mirrors the order ratings were created.
    /// Ratings referencing unknown stations are skipped and logged.
    /// Returns the number attached.
    async fn add_all_ratings_to_stations(&self) -> DomainResult<usize>;
}

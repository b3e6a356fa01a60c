//! Concrete repository implementations

pub mod rating_repository;
pub mod station_rating_repository;
pub mod station_repository;
pub mod user_repository;

pub use rating_repository::DocumentRatingRepository;
pub use station_rating_repository::StationRatingRepository;
pub use station_repository::CsvStationRepository;
pub use user_repository::DocumentUserRepository;

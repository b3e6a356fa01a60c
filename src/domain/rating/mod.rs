//! Rating entity and repository interface

pub mod model;
pub mod repository;

pub use model::Rating;
pub use repository::RatingRepositoryInterface;

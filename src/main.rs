//!
//! Bootstrap for the charging portal core: wires the remote document
//! store, repositories and services, loads the station seed data and
//! attaches persisted ratings.

use std::sync::Arc;

use log::{error, info, warn};

use charging_portal::application::services::{ChargingStationService, UserService};
use charging_portal::infrastructure::repositories::{
    DocumentUserRepository, StationRatingRepository,
};
use charging_portal::infrastructure::simulation::RandomTelemetry;
use charging_portal::infrastructure::storage::RestDocumentStore;
use charging_portal::{create_event_bus, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    info!("Starting charging portal core...");
    info!("Database: {}", config.database_url);

    let store = Arc::new(RestDocumentStore::new(&config.database_url));
    let event_bus = create_event_bus();

    // Log domain events as they happen
    let mut subscriber = event_bus.subscribe();
    tokio::spawn(async move {
        while let Some(message) = subscriber.recv().await {
            info!(
                "Domain event {} at {}",
                message.event.event_type(),
                message.timestamp
            );
        }
    });

    let station_repo = Arc::new(StationRatingRepository::new(
        store.clone(),
        Box::new(RandomTelemetry::default()),
        event_bus.clone(),
    ));
    let user_repo = Arc::new(DocumentUserRepository::with_publisher(
        store,
        event_bus.clone(),
    ));

    let station_service = ChargingStationService::new(station_repo);
    let user_service = UserService::new(user_repo);

    // ── Seed stations ──────────────────────────────────────────
    match station_service.load_stations_from_csv(&config.seed_csv).await {
        Ok(stations) => info!(
            "Loaded {} stations from {}",
            stations.len(),
            config.seed_csv.display()
        ),
        Err(e) => {
            error!("Failed to load seed stations: {}", e);
            return Err(e.into());
        }
    }

    // ── Bootstrap persisted state ──────────────────────────────
    match station_service.load_all_ratings_to_stations().await {
        Ok(attached) => info!("Bootstrapped {} ratings", attached),
        Err(e) => warn!("Rating bootstrap failed: {}", e),
    }
    match user_service.load_all_users().await {
        Ok(users) => info!("Loaded {} user accounts", users.len()),
        Err(e) => warn!("User bootstrap failed: {}", e),
    }

    let stations = station_service.stations().await?;
    for station in &stations {
        info!(
            "Station {} '{}' ({}) avg rating {:.1}",
            station.station_id(),
            station.name(),
            station.status(),
            station.average_rating()
        );
    }

    info!("Portal core ready");
    Ok(())
}

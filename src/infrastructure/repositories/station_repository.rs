//! Station repository backed by a CSV seed export

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::info;

use crate::domain::events::{EventPublisher, NoopPublisher};
use crate::domain::ports::TelemetrySimulator;
use crate::domain::rating::Rating;
use crate::domain::station::{ChargingStation, RatedChargingStation, StationRepositoryInterface};
use crate::domain::value_objects::{Location, PostalCode, DEFAULT_TIME_SLOTS};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::simulation::RandomTelemetry;

/// Columns the seed export must carry.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "stationID",
    "stationName",
    "stationOperator",
    "KW",
    "Latitude",
    "Longitude",
    "PLZ",
];

/// Placeholder for rows with a blank station name.
const UNKNOWN_NAME: &str = "Unknown";

/// Holds the loaded station aggregates and builds them from CSV rows,
/// stamping each with simulated live data from the injected simulator.
pub struct CsvStationRepository {
    stations: RwLock<Vec<RatedChargingStation>>,
    simulator: Box<dyn TelemetrySimulator>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl Default for CsvStationRepository {
    fn default() -> Self {
        Self::new(
            Box::new(RandomTelemetry::default()),
            Arc::new(NoopPublisher),
        )
    }
}

impl CsvStationRepository {
    pub fn new(
        simulator: Box<dyn TelemetrySimulator>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            stations: RwLock::new(Vec::new()),
            simulator,
            event_publisher,
        }
    }

    /// Parse stations from any CSV source and add them to the loaded set.
    pub fn load_stations_from_reader<R: Read>(
        &self,
        reader: R,
    ) -> DomainResult<Vec<RatedChargingStation>> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| DomainError::Validation(format!("Unreadable CSV header: {}", e)))?
            .clone();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !headers.iter().any(|h| h == **col))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::Validation(format!(
                "Missing required columns: {}",
                missing.join(", ")
            )));
        }

        let column = |name: &str| -> usize {
            headers
                .iter()
                .position(|h| h == name)
                .unwrap_or_default() // unreachable, presence checked above
        };
        let id_col = column("stationID");
        let name_col = column("stationName");
        let operator_col = column("stationOperator");
        let kw_col = column("KW");
        let lat_col = column("Latitude");
        let lon_col = column("Longitude");
        let plz_col = column("PLZ");

        let mut loaded = 0usize;
        for (row, record) in csv_reader.records().enumerate() {
            let record = record.map_err(|e| {
                DomainError::Validation(format!("Unreadable CSV row {}: {}", row + 1, e))
            })?;
            let field = |idx: usize| record.get(idx).unwrap_or("").trim();

            let station_id = parse_station_id(field(id_col), row + 1)?;
            let name = match field(name_col) {
                "" => UNKNOWN_NAME.to_string(),
                name => name.to_string(),
            };
            let operator = field(operator_col).to_string();
            let power = parse_numeric("KW", field(kw_col), row + 1)?;
            let latitude = parse_numeric("Latitude", field(lat_col), row + 1)?;
            let longitude = parse_numeric("Longitude", field(lon_col), row + 1)?;

            let station = RatedChargingStation::with_publisher(
                ChargingStation::new(station_id, name, operator, power)?,
                Location::new(latitude, longitude)?,
                PostalCode::new(field(plz_col))?,
                self.simulator.station_status(),
                self.simulator.rush_hours(&DEFAULT_TIME_SLOTS)?,
                self.event_publisher.clone(),
            );
            self.stations.write().expect("stations lock").push(station);
            loaded += 1;
        }

        info!("Loaded {} stations from CSV seed", loaded);
        Ok(self.snapshot())
    }

    /// Attach a rating to the station with the matching id.
    pub(crate) fn attach_rating(&self, rating: Rating) -> DomainResult<()> {
        let mut stations = self.stations.write().expect("stations lock");
        match stations
            .iter_mut()
            .find(|s| s.station_id() == rating.station_id())
        {
            Some(station) => {
                station.add_rating(rating);
                Ok(())
            }
            None => Err(DomainError::NotFound {
                entity: "ChargingStation",
                field: "station_id",
                value: rating.station_id().to_string(),
            }),
        }
    }

    fn snapshot(&self) -> Vec<RatedChargingStation> {
        self.stations.read().expect("stations lock").clone()
    }
}

/// Station ids export as plain integers, but spreadsheet round-trips can
/// leave them as decimals like `17.0`.
fn parse_station_id(raw: &str, row: usize) -> DomainResult<i32> {
    if let Ok(id) = raw.parse::<i32>() {
        return Ok(id);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i32),
        _ => Err(DomainError::Validation(format!(
            "Invalid stationID '{}' on row {}",
            raw, row
        ))),
    }
}

fn parse_numeric(column: &str, raw: &str, row: usize) -> DomainResult<f64> {
    raw.parse::<f64>().map_err(|_| {
        DomainError::Validation(format!("Invalid {} '{}' on row {}", column, raw, row))
    })
}

#[async_trait]
impl StationRepositoryInterface for CsvStationRepository {
    async fn load_stations_from_csv(&self, path: &Path) -> DomainResult<Vec<RatedChargingStation>> {
        let file = File::open(path).map_err(|e| {
            DomainError::Storage(format!("Cannot open CSV file {}: {}", path.display(), e))
        })?;
        self.load_stations_from_reader(file)
    }

    async fn stations(&self) -> DomainResult<Vec<RatedChargingStation>> {
        Ok(self.snapshot())
    }

    async fn find_station(&self, station_id: i32) -> DomainResult<Option<RatedChargingStation>> {
        Ok(self
            .stations
            .read()
            .expect("stations lock")
            .iter()
            .find(|s| s.station_id() == station_id)
            .cloned())
    }
}

//! Configuration module

use std::path::PathBuf;

const DEFAULT_DATABASE_URL: &str =
    "https://ase-charging-default-rtdb.europe-west1.firebasedatabase.app";
const DEFAULT_SEED_CSV: &str = "data/charging_stations.csv";

/// Runtime configuration, read from the environment with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote document database
    pub database_url: String,
    /// Path to the station seed CSV
    pub seed_csv: PathBuf,
}

impl Config {
    /// Read `PORTAL_DATABASE_URL` and `PORTAL_SEED_CSV`, falling back to
    /// the defaults for anything unset.
    pub fn from_env() -> Self {
        let database_url = std::env::var("PORTAL_DATABASE_URL")
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let seed_csv = std::env::var("PORTAL_SEED_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SEED_CSV));
        Self {
            database_url,
            seed_csv,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            seed_csv: PathBuf::from(DEFAULT_SEED_CSV),
        }
    }
}

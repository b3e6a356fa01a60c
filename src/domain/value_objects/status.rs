//! Station status value object

use rand::Rng;

/// Operational status of a charging station.
///
/// With no live telemetry available, statuses are simulated; see
/// `infrastructure::simulation::RandomTelemetry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Available,
    Occupied,
    OutOfService,
    Maintenance,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Available,
        Status::Occupied,
        Status::OutOfService,
        Status::Maintenance,
    ];

    /// Uniformly chosen status, a stand-in for real-time telemetry.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Occupied => write!(f, "occupied"),
            Self::OutOfService => write!(f, "out of service"),
            Self::Maintenance => write!(f, "maintenance"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_labels() {
        assert_eq!(Status::Available.to_string(), "available");
        assert_eq!(Status::Occupied.to_string(), "occupied");
        assert_eq!(Status::OutOfService.to_string(), "out of service");
        assert_eq!(Status::Maintenance.to_string(), "maintenance");
    }

    #[test]
    fn random_returns_a_known_variant() {
        for _ in 0..32 {
            let status = Status::random();
            assert!(Status::ALL.contains(&status));
        }
    }
}

//! Rush-hour occupancy series value object

use indexmap::IndexMap;
use rand_distr::{Distribution, Normal};

use crate::domain::{DomainError, DomainResult};

/// Hourly slots shown on the station dashboard.
pub const DEFAULT_TIME_SLOTS: [&str; 12] = [
    "6 AM", "7 AM", "8 AM", "9 AM", "10 AM", "11 AM", "12 PM", "1 PM", "2 PM", "3 PM", "4 PM",
    "5 PM",
];

/// An ordered series of time-slot labels with one occupancy value per slot.
#[derive(Debug, Clone, PartialEq)]
pub struct RushHours {
    time_slots: Vec<String>,
    data: Vec<f64>,
}

impl RushHours {
    pub fn new(time_slots: Vec<String>, data: Vec<f64>) -> DomainResult<Self> {
        if time_slots.len() != data.len() {
            return Err(DomainError::Validation(
                "Length of data must match length of time_slots".into(),
            ));
        }
        Ok(Self { time_slots, data })
    }

    /// Draw one sample per slot from `Normal(mean, std_dev)`, clamped to
    /// `[min_val, max_val]`. The result always has exactly one bounded value
    /// per slot regardless of distribution tails.
    pub fn generate_random(
        time_slots: &[&str],
        mean: f64,
        std_dev: f64,
        min_val: f64,
        max_val: f64,
    ) -> DomainResult<Self> {
        let normal = Normal::new(mean, std_dev)
            .map_err(|e| DomainError::Validation(format!("Invalid distribution: {}", e)))?;
        let mut rng = rand::thread_rng();
        let data = time_slots
            .iter()
            .map(|_| normal.sample(&mut rng).clamp(min_val, max_val))
            .collect();
        Ok(Self {
            time_slots: time_slots.iter().map(|s| s.to_string()).collect(),
            data,
        })
    }

    pub fn time_slots(&self) -> &[String] {
        &self.time_slots
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Slot label → value mapping, in slot order.
    pub fn to_map(&self) -> IndexMap<String, f64> {
        self.time_slots
            .iter()
            .cloned()
            .zip(self.data.iter().copied())
            .collect()
    }

    /// Inverse of [`to_map`]: `from_map(x.to_map())` reproduces `x`.
    pub fn from_map(map: &IndexMap<String, f64>) -> Self {
        Self {
            time_slots: map.keys().cloned().collect(),
            data: map.values().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_is_rejected() {
        let err = RushHours::new(vec!["6 AM".into()], vec![1.0, 2.0]).unwrap_err();
        assert!(err.to_string().contains("must match"));
    }

    #[test]
    fn generated_data_has_one_bounded_value_per_slot() {
        let rh = RushHours::generate_random(&DEFAULT_TIME_SLOTS, 2.5, 1.0, 0.0, 5.0).unwrap();
        assert_eq!(rh.data().len(), DEFAULT_TIME_SLOTS.len());
        assert!(rh.data().iter().all(|v| (0.0..=5.0).contains(v)));
    }

    #[test]
    fn negative_std_dev_is_rejected() {
        assert!(RushHours::generate_random(&["6 AM"], 2.5, -1.0, 0.0, 5.0).is_err());
    }

    #[test]
    fn map_round_trip_preserves_order_and_values() {
        let rh = RushHours::new(
            vec!["6 AM".into(), "7 AM".into(), "8 AM".into()],
            vec![1.5, 3.0, 4.5],
        )
        .unwrap();
        let restored = RushHours::from_map(&rh.to_map());
        assert_eq!(restored.time_slots(), rh.time_slots());
        assert_eq!(restored.data(), rh.data());
    }
}

//! Router configuration.

use serde::{Deserialize, Serialize};

use super::RouterError;

const METRES_IN_KM: f64 = 1000.0;
const MINUTES_IN_HOUR: f64 = 60.0;

/// Configuration parameters for the transit router.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouterSettings {
    /// Time spent waiting for a bus at every boarding (minutes).
    pub bus_wait_time: u32,

    /// Bus speed (km/h).
    pub bus_velocity: f64,
}

impl RouterSettings {
    /// Create a new configuration with the given parameters.
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Returns the wait time in minutes.
    pub fn wait_time(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Returns the bus speed in metres per minute.
    pub fn velocity_meters_per_minute(&self) -> f64 {
        self.bus_velocity * METRES_IN_KM / MINUTES_IN_HOUR
    }

    /// Minutes needed to ride `metres` of road.
    pub fn ride_time(&self, metres: u32) -> f64 {
        f64::from(metres) / self.velocity_meters_per_minute()
    }

    /// Check that the settings yield finite, non-negative travel times.
    pub fn validate(&self) -> Result<(), RouterError> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(RouterError::InvalidSettings(
                "bus velocity must be a positive number",
            ));
        }
        Ok(())
    }
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = RouterSettings::default();

        assert_eq!(settings.bus_wait_time, 6);
        assert_eq!(settings.bus_velocity, 40.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn unit_conversions() {
        let settings = RouterSettings::new(5, 30.0);

        assert_eq!(settings.wait_time(), 5.0);
        assert_eq!(settings.velocity_meters_per_minute(), 500.0);
        assert_eq!(settings.ride_time(1000), 2.0);
        assert_eq!(settings.ride_time(0), 0.0);
    }

    #[test]
    fn reject_bad_velocity() {
        assert!(RouterSettings::new(6, 0.0).validate().is_err());
        assert!(RouterSettings::new(6, -40.0).validate().is_err());
        assert!(RouterSettings::new(6, f64::NAN).validate().is_err());
        assert!(RouterSettings::new(6, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn zero_wait_is_allowed() {
        assert!(RouterSettings::new(0, 40.0).validate().is_ok());
    }

    #[test]
    fn deserialize_from_json() {
        let settings: RouterSettings =
            serde_json::from_str(r#"{"bus_wait_time": 2, "bus_velocity": 30}"#).unwrap();

        assert_eq!(settings, RouterSettings::new(2, 30.0));
    }
}

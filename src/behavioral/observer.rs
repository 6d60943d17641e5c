//! Observer Pattern
//!
//! A subject keeps a list of dependents and notifies all of them whenever its
//! state changes, so they stay in sync without polling.
//!
//! Run with: cargo run --bin observer

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

pub trait Observer {
    /// Returns the line the observer displays, if any.
    fn update(&mut self, measurements: &Measurements) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

pub trait Subject {
    fn attach(&mut self, observer: Box<dyn Observer>) -> ObserverId;
    fn detach(&mut self, id: ObserverId) -> bool;
    fn notify(&mut self) -> Vec<String>;
}

// ============================================================================
// Subject
// ============================================================================

#[derive(Default)]
pub struct WeatherStation {
    observers: Vec<(ObserverId, Box<dyn Observer>)>,
    measurements: Measurements,
    next_id: u64,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn measurements(&self) -> Measurements {
        self.measurements
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set_measurements(&mut self, temperature: f64, humidity: f64, pressure: f64) -> Vec<String> {
        self.measurements = Measurements {
            temperature,
            humidity,
            pressure,
        };
        self.notify()
    }
}

impl Subject for WeatherStation {
    fn attach(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn notify(&mut self) -> Vec<String> {
        let measurements = self.measurements;
        tracing::debug!(observers = self.observers.len(), "notifying observers");
        self.observers
            .iter_mut()
            .filter_map(|(_, observer)| observer.update(&measurements))
            .collect()
    }
}

// ============================================================================
// Observers
// ============================================================================

pub struct TemperatureDisplay;

impl Observer for TemperatureDisplay {
    fn update(&mut self, measurements: &Measurements) -> Option<String> {
        Some(format!(
            "TemperatureDisplay: New temperature is {}",
            measurements.temperature
        ))
    }
}

pub struct HumidityDisplay;

impl Observer for HumidityDisplay {
    fn update(&mut self, measurements: &Measurements) -> Option<String> {
        Some(format!(
            "HumidityDisplay: New humidity is {}",
            measurements.humidity
        ))
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut weather_station = WeatherStation::new();
    weather_station.attach(Box::new(TemperatureDisplay));
    weather_station.attach(Box::new(HumidityDisplay));

    out.extend(weather_station.set_measurements(25.4, 65.0, 1013.1));
    out.extend(weather_station.set_measurements(22.3, 70.0, 1012.5));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl Observer for Silent {
        fn update(&mut self, _measurements: &Measurements) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_detach_stops_notifications() {
        let mut station = WeatherStation::new();
        let temperature = station.attach(Box::new(TemperatureDisplay));
        station.attach(Box::new(HumidityDisplay));

        assert!(station.detach(temperature));
        assert!(!station.detach(temperature));
        assert_eq!(
            station.set_measurements(10.0, 50.5, 1000.0),
            vec!["HumidityDisplay: New humidity is 50.5"]
        );
    }

    #[test]
    fn test_silent_observer_adds_no_lines() {
        let mut station = WeatherStation::new();
        station.attach(Box::new(Silent));
        assert!(station.set_measurements(1.0, 2.0, 3.0).is_empty());
        assert_eq!(station.observer_count(), 1);
        assert_eq!(station.measurements().pressure, 3.0);
    }

    #[test]
    fn test_demo_transcript() {
        assert_eq!(
            demo().unwrap().lines(),
            [
                "TemperatureDisplay: New temperature is 25.4",
                "HumidityDisplay: New humidity is 65",
                "TemperatureDisplay: New temperature is 22.3",
                "HumidityDisplay: New humidity is 70",
            ]
        );
    }
}

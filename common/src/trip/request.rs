use chrono::NaiveTime;

use crate::error::TripError;
use crate::trip::{TrafficLevel, TravelMode, WeatherCondition};

/// One question asked of the estimator.
///
/// The distance is stored as given; it is validated by the estimator, not here,
/// so a request can always be built from whatever the input layer collected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripRequest {
    pub distance_km: f64,
    pub mode: TravelMode,
    pub weather: WeatherCondition,
    pub traffic: TrafficLevel,
    pub departure_time: NaiveTime,
}

impl TripRequest {
    pub fn new(
        distance_km: f64,
        mode: TravelMode,
        weather: WeatherCondition,
        traffic: TrafficLevel,
        departure_time: NaiveTime,
    ) -> Self {
        Self {
            distance_km,
            mode,
            weather,
            traffic,
            departure_time,
        }
    }

    /// Same trip, different distance.
    pub fn with_distance(self, distance_km: f64) -> Self {
        Self {
            distance_km,
            ..self
        }
    }

    /// Same trip, different departure time.
    pub fn with_departure(self, departure_time: NaiveTime) -> Self {
        Self {
            departure_time,
            ..self
        }
    }
}

/// Parses a clock time given as `HH:MM` or `HH:MM:SS`.
pub fn parse_departure(s: &str) -> Result<NaiveTime, TripError> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| TripError::InvalidTime {
            input: s.to_string(),
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

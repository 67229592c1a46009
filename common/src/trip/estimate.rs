use chrono::NaiveTime;

use crate::trip::TravelMode;

/// The estimator's answer, with every factor that went into it.
///
/// `effective_speed_kmh` is the product of the base speed and the three
/// factors, floored at a small positive speed. `estimated_minutes` is the
/// distance-based travel time plus `buffer_minutes`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripEstimate {
    pub distance_km: f64,
    pub mode: TravelMode,
    pub base_speed_kmh: f64,
    pub weather_factor: f64,
    pub traffic_factor: f64,
    pub peak_factor_applied: f64,
    pub effective_speed_kmh: f64,
    pub buffer_minutes: f64,
    pub estimated_minutes: f64,
    pub departure_time: NaiveTime,
    /// Clock time only; wraps past midnight without tracking the date.
    pub arrival_time: NaiveTime,
}

impl TripEstimate {
    /// Minutes spent moving, i.e. without the fixed per-mode buffer.
    pub fn travel_minutes(&self) -> f64 {
        self.estimated_minutes - self.buffer_minutes
    }

    /// `true` when the rush-hour penalty slowed this trip down.
    pub fn hit_peak_hours(&self) -> bool {
        self.peak_factor_applied < 1.0
    }
}

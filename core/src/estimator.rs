//! The travel-time **estimator**.
//!
//! Speed is modelled as a product of independent factors:
//!
//! ```text
//! effective = max(0.1, base[mode] * weather[w] * traffic[t] * peak(mode, departure))
//! minutes   = distance / effective * 60 + buffer[mode]
//! ```
//!
//! Each factor is returned alongside the result so a front-end can show the
//! user exactly how the figure was reached.

use chrono::TimeDelta;
use tracing::debug;

use tripcalc_common::TripError;
use tripcalc_common::trip::{TripEstimate, TripRequest};

use crate::peak::peak_adjustment;
use crate::tables::{self, MIN_EFFECTIVE_SPEED_KMH};

const MICROS_PER_MINUTE: f64 = 60_000_000.0;
const MICROS_PER_DAY: f64 = 86_400_000_000.0;
const MINUTES_PER_DAY: f64 = 1440.0;

/// Estimates how long `request` takes and when it arrives.
///
/// Fails with [`TripError::InvalidInput`] when the distance is zero, negative,
/// not finite, or so large that the travel time itself is not finite; no
/// partial estimate is produced in that case.
pub fn estimate(request: TripRequest) -> Result<TripEstimate, TripError> {
    let distance_km: f64 = request.distance_km;
    if !distance_km.is_finite() || distance_km <= 0.0 {
        return Err(TripError::InvalidInput { distance_km });
    }

    let base_speed_kmh: f64 = tables::base_speed_kmh(request.mode);
    let weather_factor: f64 = tables::weather_factor(request.weather);
    let traffic_factor: f64 = tables::traffic_factor(request.traffic);
    let peak_factor: f64 = peak_adjustment(request.mode, request.departure_time);

    let effective_speed_kmh: f64 =
        (base_speed_kmh * weather_factor * traffic_factor * peak_factor).max(MIN_EFFECTIVE_SPEED_KMH);

    let travel_hours: f64 = distance_km / effective_speed_kmh;
    let buffer_minutes: f64 = tables::buffer_minutes(request.mode);
    let estimated_minutes: f64 = travel_hours * 60.0 + buffer_minutes;
    if !estimated_minutes.is_finite() {
        return Err(TripError::InvalidInput { distance_km });
    }

    let arrival_time = request.departure_time + clock_offset(estimated_minutes);

    debug!(
        mode = %request.mode,
        weather = %request.weather,
        traffic = %request.traffic,
        base_speed_kmh,
        weather_factor,
        traffic_factor,
        peak_factor,
        effective_speed_kmh,
        estimated_minutes,
        "trip estimated"
    );

    Ok(TripEstimate {
        distance_km,
        mode: request.mode,
        base_speed_kmh,
        weather_factor,
        traffic_factor,
        peak_factor_applied: peak_factor,
        effective_speed_kmh,
        buffer_minutes,
        estimated_minutes,
        departure_time: request.departure_time,
        arrival_time,
    })
}

/// Converts a duration in minutes to a clock offset of less than one day.
///
/// Whole days are discarded first, then the remainder is rounded to whole
/// microseconds, so an arrival at `hh:mm:59.9996` still shows `hh:mm`.
fn clock_offset(minutes: f64) -> TimeDelta {
    let minute_of_day: f64 = minutes.rem_euclid(MINUTES_PER_DAY);
    let micros: f64 = (minute_of_day * MICROS_PER_MINUTE).round().rem_euclid(MICROS_PER_DAY);
    if micros.is_finite() {
        TimeDelta::microseconds(micros as i64)
    } else {
        TimeDelta::zero()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

//! Fixed per-variant constants used by the estimator.
//!
//! Each table is an exhaustive `match`, so adding a variant to one of the
//! enumerations fails to compile until every table covers it.

use tripcalc_common::trip::{TrafficLevel, TravelMode, WeatherCondition};

/// Floor for the effective speed, in km/h.
pub const MIN_EFFECTIVE_SPEED_KMH: f64 = 0.1;

/// Nominal speed of a mode with no adverse factors, in km/h.
pub const fn base_speed_kmh(mode: TravelMode) -> f64 {
    match mode {
        TravelMode::Car => 40.0,
        TravelMode::Motorcycle => 45.0,
        TravelMode::PublicTransit => 25.0,
        TravelMode::Bicycle => 15.0,
        TravelMode::Walking => 5.0,
    }
}

/// Fixed overhead added after the distance-based time, in minutes.
pub const fn buffer_minutes(mode: TravelMode) -> f64 {
    match mode {
        // parking
        TravelMode::Car => 5.0,
        TravelMode::Motorcycle => 2.0,
        // waiting and boarding
        TravelMode::PublicTransit => 8.0,
        TravelMode::Bicycle => 1.0,
        TravelMode::Walking => 0.0,
    }
}

pub const fn weather_factor(weather: WeatherCondition) -> f64 {
    match weather {
        WeatherCondition::Sunny => 1.00,
        WeatherCondition::Cloudy => 0.95,
        WeatherCondition::Rainy => 0.80,
        WeatherCondition::Foggy => 0.85,
        WeatherCondition::Stormy => 0.60,
    }
}

/// Speed multiplier for a congestion level.
///
/// `Moderate` is the baseline the base speeds are quoted at, so free-flowing
/// `Light` traffic is faster than nominal and its factor is above 1.
pub const fn traffic_factor(traffic: TrafficLevel) -> f64 {
    match traffic {
        TrafficLevel::Light => 1.10,
        TrafficLevel::Moderate => 0.90,
        TrafficLevel::Heavy => 0.70,
        TrafficLevel::Severe => 0.50,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_speeds_are_positive() {
        for mode in TravelMode::ALL {
            assert!(base_speed_kmh(mode) > 0.0, "{mode} has no speed");
            assert!(buffer_minutes(mode) >= 0.0, "{mode} has a negative buffer");
        }
    }

    #[test]
    fn test_weather_factors_in_unit_interval() {
        for weather in WeatherCondition::ALL {
            let factor = weather_factor(weather);
            assert!(factor > 0.0 && factor <= 1.0, "{weather}: {factor}");
        }
        assert_eq!(weather_factor(WeatherCondition::Sunny), 1.0);
    }

    #[test]
    fn test_traffic_factors_decrease_with_severity() {
        let factors: Vec<f64> = TrafficLevel::ALL.iter().map(|t| traffic_factor(*t)).collect();
        assert!(factors.windows(2).all(|pair| pair[0] > pair[1]));
        assert!(factors.iter().all(|f| *f > 0.0));
    }

    #[test]
    fn test_light_traffic_is_faster_than_nominal() {
        assert!(traffic_factor(TrafficLevel::Light) > 1.0);
        for level in &TrafficLevel::ALL[1..] {
            assert!(traffic_factor(*level) <= 1.0);
        }
    }
}

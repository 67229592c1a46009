#![cfg(test)]
use approx::assert_relative_eq;
use chrono::NaiveTime;
use tripcalc_common::TripError;
use tripcalc_common::trip::{
    TrafficLevel, TravelMode, TripEstimate, TripRequest, WeatherCondition, parse_departure,
};
use tripcalc_core::{estimate, peak_adjustment};

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Every combination of mode, weather and traffic at a given time and distance.
fn all_requests(distance_km: f64, departure: NaiveTime) -> Vec<TripRequest> {
    let mut requests = Vec::new();
    for mode in TravelMode::ALL {
        for weather in WeatherCondition::ALL {
            for traffic in TrafficLevel::ALL {
                requests.push(TripRequest::new(distance_km, mode, weather, traffic, departure));
            }
        }
    }
    requests
}

/// Reproduces the worked example shown on the dashboard: a 10 km car commute
/// on a clear morning in moderate traffic, leaving at 08:00.
#[test]
fn estimation_reference_commute() {
    let request = TripRequest::new(
        10.0,
        "car".parse().unwrap(),
        "sunny".parse().unwrap(),
        "moderate".parse().unwrap(),
        parse_departure("08:00").unwrap(),
    );

    let est: TripEstimate = estimate(request).expect("valid request");

    assert_eq!(est.base_speed_kmh, 40.0);
    assert_eq!(est.weather_factor, 1.00);
    assert_eq!(est.traffic_factor, 0.90);
    assert_eq!(est.peak_factor_applied, 0.85);
    assert_relative_eq!(est.effective_speed_kmh, 30.6, epsilon = 1e-9);
    assert_relative_eq!(est.estimated_minutes, 24.6078, epsilon = 1e-3);
    assert_eq!(est.arrival_time.format("%H:%M").to_string(), "08:24");
}

#[test]
fn estimation_positive_for_every_valid_input() {
    for departure in [at(3, 0), at(8, 0), at(12, 15), at(17, 0), at(23, 59)] {
        for request in all_requests(7.25, departure) {
            let est = estimate(request).unwrap();
            assert!(
                est.estimated_minutes.is_finite() && est.estimated_minutes > 0.0,
                "bad duration for {request:?}: {}",
                est.estimated_minutes
            );
            assert!(est.effective_speed_kmh >= 0.1, "speed under floor for {request:?}");
        }
    }
}

#[test]
fn estimation_monotonic_in_distance() {
    for request in all_requests(1.0, at(8, 30)) {
        let mut previous: f64 = 0.0;
        for km in [0.5, 1.0, 2.0, 5.0, 10.0, 42.195, 100.0] {
            let minutes = estimate(request.with_distance(km)).unwrap().estimated_minutes;
            assert!(
                minutes > previous,
                "{km} km took {minutes} min, not more than {previous} for {request:?}"
            );
            previous = minutes;
        }
    }
}

#[test]
fn estimation_peak_hour_containment() {
    assert_eq!(peak_adjustment(TravelMode::Car, at(8, 0)), 0.85);
    assert_eq!(peak_adjustment(TravelMode::Car, at(10, 0)), 1.0);
    assert_eq!(peak_adjustment(TravelMode::Walking, at(8, 0)), 1.0);

    let rush = TripRequest::new(
        10.0,
        TravelMode::PublicTransit,
        WeatherCondition::Rainy,
        TrafficLevel::Heavy,
        at(17, 0),
    );
    let calm = rush.with_departure(at(14, 0));

    assert!(estimate(rush).unwrap().estimated_minutes > estimate(calm).unwrap().estimated_minutes);
}

#[test]
fn estimation_walking_ignores_time_of_day() {
    let morning = TripRequest::new(
        3.0,
        TravelMode::Walking,
        WeatherCondition::Cloudy,
        TrafficLevel::Severe,
        at(8, 0),
    );
    let midday = morning.with_departure(at(12, 0));

    let a = estimate(morning).unwrap();
    let b = estimate(midday).unwrap();

    assert_eq!(a.peak_factor_applied, 1.0);
    assert_eq!(a.estimated_minutes, b.estimated_minutes);
}

#[test]
fn estimation_zero_distance_is_advisory() {
    for request in all_requests(0.0, at(8, 0)) {
        match estimate(request) {
            Err(err @ TripError::InvalidInput { .. }) => assert!(err.is_advisory()),
            other => panic!("expected InvalidInput for {request:?}, got {other:?}"),
        }
    }
}

#[test]
fn estimation_is_idempotent() {
    for request in all_requests(12.3, at(18, 45)) {
        let first = estimate(request).unwrap();
        let second = estimate(request).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.estimated_minutes.to_bits(),
            second.estimated_minutes.to_bits()
        );
    }
}

#[test]
fn estimation_from_thai_labels() -> anyhow::Result<()> {
    let request = TripRequest::new(
        10.0,
        "มอเตอร์ไซค์".parse()?,
        "พายุฝน".parse()?,
        "น้อย".parse()?,
        parse_departure("20:00")?,
    );

    let est = estimate(request)?;

    // 45 km/h in a storm (0.60) with free-flowing traffic (1.10), off peak.
    assert_relative_eq!(est.effective_speed_kmh, 29.7, epsilon = 1e-9);
    assert_relative_eq!(est.estimated_minutes, 10.0 / 29.7 * 60.0 + 2.0, epsilon = 1e-9);
    Ok(())
}

//! # Trip Model
//!
//! The inputs a trip estimate is computed from and the estimate itself.
//!
//! * [`TravelMode`], [`WeatherCondition`] and [`TrafficLevel`] are closed sets.
//!   Each parses from an English keyword or from the Thai label shown on the
//!   original dashboard.
//! * [`TripRequest`] bundles one choice of each with a distance and a clock time.
//! * [`TripEstimate`] carries the result plus every factor that produced it.

pub mod estimate;
pub mod mode;
pub mod request;
pub mod traffic;
pub mod weather;

pub use estimate::TripEstimate;
pub use mode::TravelMode;
pub use request::{TripRequest, parse_departure};
pub use traffic::TrafficLevel;
pub use weather::WeatherCondition;

/// Lowercases a label and folds `_` and spaces into `-` so that
/// `Public Transit`, `public_transit` and `public-transit` compare equal.
pub(crate) fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

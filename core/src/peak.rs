//! Rush-hour detection.
//!
//! Two fixed windows, both inclusive at each end. Only modes that share the
//! road with congested traffic are slowed down inside them.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use tripcalc_common::trip::TravelMode;

/// Speed multiplier applied inside a rush-hour window.
pub const PEAK_FACTOR: f64 = 0.85;

pub const MORNING_PEAK: PeakWindow = PeakWindow::new((7, 0), (9, 0));
pub const EVENING_PEAK: PeakWindow = PeakWindow::new((16, 30), (19, 30));
pub const RUSH_HOURS: [PeakWindow; 2] = [MORNING_PEAK, EVENING_PEAK];

/// A closed interval of clock time, stored as seconds from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakWindow {
    start_secs: u32,
    end_secs: u32,
}

impl PeakWindow {
    const fn new(start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            start_secs: start.0 * 3600 + start.1 * 60,
            end_secs: end.0 * 3600 + end.1 * 60,
        }
    }

    /// Inclusive at both ends. Sub-second precision counts, so
    /// `09:00:00.5` is already outside a window ending at `09:00`.
    pub fn contains(&self, t: NaiveTime) -> bool {
        let at = (t.num_seconds_from_midnight(), t.nanosecond());
        at >= (self.start_secs, 0) && at <= (self.end_secs, 0)
    }
}

impl fmt::Display for PeakWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hm = |secs: u32| (secs / 3600, (secs % 3600) / 60);
        let (sh, sm) = hm(self.start_secs);
        let (eh, em) = hm(self.end_secs);
        write!(f, "{sh:02}:{sm:02}-{eh:02}:{em:02}")
    }
}

/// Modes stuck in the same congestion as everyone else at rush hour.
pub fn is_congestion_affected(mode: TravelMode) -> bool {
    match mode {
        TravelMode::Car | TravelMode::Motorcycle | TravelMode::PublicTransit => true,
        TravelMode::Bicycle | TravelMode::Walking => false,
    }
}

/// Rush-hour speed multiplier for `mode` departing at `departure`.
///
/// [`PEAK_FACTOR`] for congestion-affected modes inside a rush-hour window,
/// otherwise `1.0`.
pub fn peak_adjustment(mode: TravelMode, departure: NaiveTime) -> f64 {
    if !is_congestion_affected(mode) {
        return 1.0;
    }

    if RUSH_HOURS.iter().any(|window| window.contains(departure)) {
        PEAK_FACTOR
    } else {
        1.0
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

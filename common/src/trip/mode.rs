use std::fmt;
use std::str::FromStr;

use crate::error::TripError;
use crate::trip::normalize_label;

/// How the trip is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    Car,
    Motorcycle,
    PublicTransit,
    Bicycle,
    Walking,
}

impl TravelMode {
    pub const ALL: [TravelMode; 5] = [
        TravelMode::Car,
        TravelMode::Motorcycle,
        TravelMode::PublicTransit,
        TravelMode::Bicycle,
        TravelMode::Walking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TravelMode::Car => "car",
            TravelMode::Motorcycle => "motorcycle",
            TravelMode::PublicTransit => "public-transit",
            TravelMode::Bicycle => "bicycle",
            TravelMode::Walking => "walking",
        }
    }

    pub fn thai_label(self) -> &'static str {
        match self {
            TravelMode::Car => "รถยนต์",
            TravelMode::Motorcycle => "มอเตอร์ไซค์",
            TravelMode::PublicTransit => "ขนส่งสาธารณะ",
            TravelMode::Bicycle => "จักรยาน",
            TravelMode::Walking => "เดินเท้า",
        }
    }
}

impl FromStr for TravelMode {
    type Err = TripError;

    /// Accepts the English keyword (plus a few short aliases) or the Thai label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);

        if let Some(mode) = TravelMode::ALL
            .into_iter()
            .find(|mode| mode.label() == normalized || mode.thai_label() == normalized)
        {
            return Ok(mode);
        }

        match normalized.as_str() {
            "auto" | "driving" => Ok(TravelMode::Car),
            "moto" | "motorbike" | "scooter" => Ok(TravelMode::Motorcycle),
            "transit" | "bus" | "train" => Ok(TravelMode::PublicTransit),
            "bike" | "cycling" => Ok(TravelMode::Bicycle),
            "walk" | "foot" => Ok(TravelMode::Walking),
            _ => Err(TripError::Configuration {
                kind: "travel mode",
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
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
    fn test_from_str_keywords() {
        assert_eq!(TravelMode::from_str("car"), Ok(TravelMode::Car));
        assert_eq!(TravelMode::from_str("Motorcycle"), Ok(TravelMode::Motorcycle));
        assert_eq!(
            TravelMode::from_str("public transit"),
            Ok(TravelMode::PublicTransit)
        );
        assert_eq!(TravelMode::from_str("transit"), Ok(TravelMode::PublicTransit));
        assert_eq!(TravelMode::from_str("BIKE"), Ok(TravelMode::Bicycle));
        assert_eq!(TravelMode::from_str("walk"), Ok(TravelMode::Walking));
    }

    #[test]
    fn test_from_str_thai_labels() {
        for mode in TravelMode::ALL {
            assert_eq!(TravelMode::from_str(mode.thai_label()), Ok(mode));
        }
    }

    #[test]
    fn test_display_round_trips_through_label() {
        for mode in TravelMode::ALL {
            assert_eq!(mode.to_string().parse::<TravelMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = TravelMode::from_str("hovercraft").unwrap_err();
        assert_eq!(
            err,
            TripError::Configuration {
                kind: "travel mode",
                label: "hovercraft".to_string()
            }
        );
        assert!(!err.is_advisory());
    }
}

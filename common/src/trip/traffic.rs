use std::fmt;
use std::str::FromStr;

use crate::error::TripError;
use crate::trip::normalize_label;

/// Road congestion, ordered from free-flowing to gridlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
    Severe,
}

impl TrafficLevel {
    pub const ALL: [TrafficLevel; 4] = [
        TrafficLevel::Light,
        TrafficLevel::Moderate,
        TrafficLevel::Heavy,
        TrafficLevel::Severe,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TrafficLevel::Light => "light",
            TrafficLevel::Moderate => "moderate",
            TrafficLevel::Heavy => "heavy",
            TrafficLevel::Severe => "severe",
        }
    }

    pub fn thai_label(self) -> &'static str {
        match self {
            TrafficLevel::Light => "น้อย",
            TrafficLevel::Moderate => "ปานกลาง",
            TrafficLevel::Heavy => "หนาแน่น",
            TrafficLevel::Severe => "ติดมาก",
        }
    }
}

impl FromStr for TrafficLevel {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);

        if let Some(level) = TrafficLevel::ALL
            .into_iter()
            .find(|t| t.label() == normalized || t.thai_label() == normalized)
        {
            return Ok(level);
        }

        match normalized.as_str() {
            "low" => Ok(TrafficLevel::Light),
            "medium" => Ok(TrafficLevel::Moderate),
            "high" => Ok(TrafficLevel::Heavy),
            "jam" | "gridlock" => Ok(TrafficLevel::Severe),
            _ => Err(TripError::Configuration {
                kind: "traffic level",
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TrafficLevel {
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

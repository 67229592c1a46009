use std::fmt;
use std::str::FromStr;

use crate::error::TripError;
use crate::trip::normalize_label;

/// Weather at departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Foggy,
    Stormy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 5] = [
        WeatherCondition::Sunny,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Foggy,
        WeatherCondition::Stormy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Foggy => "foggy",
            WeatherCondition::Stormy => "stormy",
        }
    }

    pub fn thai_label(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "แดดออก",
            WeatherCondition::Cloudy => "เมฆมาก",
            WeatherCondition::Rainy => "ฝนตก",
            WeatherCondition::Foggy => "หมอก",
            WeatherCondition::Stormy => "พายุฝน",
        }
    }
}

impl FromStr for WeatherCondition {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);

        if let Some(weather) = WeatherCondition::ALL
            .into_iter()
            .find(|w| w.label() == normalized || w.thai_label() == normalized)
        {
            return Ok(weather);
        }

        match normalized.as_str() {
            "sun" | "clear" => Ok(WeatherCondition::Sunny),
            "overcast" => Ok(WeatherCondition::Cloudy),
            "rain" => Ok(WeatherCondition::Rainy),
            "fog" => Ok(WeatherCondition::Foggy),
            "storm" => Ok(WeatherCondition::Stormy),
            _ => Err(TripError::Configuration {
                kind: "weather condition",
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for WeatherCondition {
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

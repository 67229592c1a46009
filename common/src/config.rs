use std::fmt;
use std::str::FromStr;

use crate::error::TripError;

pub struct Config {
    /// Output verbosity reduction.
    ///
    /// `0` prints everything, `1` drops the banner and section headers,
    /// `2` prints only the one-line result.
    pub quiet: u8,
    /// Suppresses the banner even when `quiet` is `0`.
    pub no_banner: bool,
    /// Language of rendered durations, enumeration labels and terminal text.
    ///
    /// Log events written by the library crates stay in English.
    pub locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            no_banner: false,
            locale: Locale::English,
        }
    }
}

/// Output language for rendered durations and enumeration labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Thai,
}

impl FromStr for Locale {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "th" | "thai" => Ok(Locale::Thai),
            _ => Err(TripError::Configuration {
                kind: "locale",
                label: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => write!(f, "en"),
            Locale::Thai => write!(f, "th"),
        }
    }
}

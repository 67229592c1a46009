pub mod estimate;
pub mod tables;

use chrono::NaiveTime;
use clap::{ArgAction, Args, Parser, Subcommand};
use tripcalc_common::config::Locale;
use tripcalc_common::trip::{
    TrafficLevel, TravelMode, TripRequest, WeatherCondition, parse_departure,
};

#[derive(Parser)]
#[command(name = "tripcalc")]
#[command(version, about = "Estimate how long a trip takes and when you arrive.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q drops headers, -qq prints only the result)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Language for durations and labels (en, th)
    #[arg(long, global = true, default_value = "en")]
    pub locale: Locale,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate travel time and arrival for a single trip
    #[command(alias = "e")]
    Estimate(EstimateArgs),
    /// Show the speeds, factors and rush-hour windows the estimate uses
    #[command(alias = "t")]
    Tables,
}

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Distance in kilometres
    #[arg(short, long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub distance: f64,

    /// car, motorcycle, transit, bicycle or walking
    #[arg(short, long, default_value = "car")]
    pub mode: TravelMode,

    /// sunny, cloudy, rainy, foggy or stormy
    #[arg(short, long, default_value = "sunny")]
    pub weather: WeatherCondition,

    /// light, moderate, heavy or severe
    #[arg(short, long, default_value = "moderate")]
    pub traffic: TrafficLevel,

    /// Departure clock time, HH:MM
    #[arg(long, default_value = "08:00", value_parser = parse_departure)]
    pub depart: NaiveTime,
}

impl EstimateArgs {
    pub fn to_request(&self) -> TripRequest {
        TripRequest::new(
            self.distance,
            self.mode,
            self.weather,
            self.traffic,
            self.depart,
        )
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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

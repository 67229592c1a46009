use chrono::NaiveTime;
use colored::*;

use crate::terminal::colors;
use crate::terminal::text::Text;
use tripcalc_common::config::Locale;
use tripcalc_common::trip::{TrafficLevel, TravelMode, TripEstimate, WeatherCondition};
use tripcalc_common::utils::duration;

type Detail = (String, ColoredString);

pub fn clock(t: NaiveTime) -> ColoredString {
    t.format("%H:%M").to_string().color(colors::CLOCK)
}

pub fn duration(minutes: f64, locale: Locale) -> ColoredString {
    duration::format_duration(minutes, locale).color(colors::DURATION).bold()
}

pub fn speed(kmh: f64, precision: usize, locale: Locale) -> ColoredString {
    let unit = Text::KmPerHour.get(locale);
    format!("{kmh:.precision$} {unit}").color(colors::SPEED)
}

/// Renders a multiplier as `× 0.85`, coloured by whether it helps or hurts.
pub fn factor(value: f64) -> ColoredString {
    let text: String = format!("× {value:.2}");
    if value > 1.0 {
        text.color(colors::FACTOR_BOOST)
    } else if value < 1.0 {
        text.color(colors::FACTOR_PENALTY)
    } else {
        text.color(colors::TEXT_DEFAULT)
    }
}

pub fn minutes(value: f64, locale: Locale) -> ColoredString {
    let unit = Text::Minutes.get(locale);
    format!("{value:.0} {unit}").color(colors::TEXT_DEFAULT)
}

pub fn mode_label(mode: TravelMode, locale: Locale) -> &'static str {
    match locale {
        Locale::English => mode.label(),
        Locale::Thai => mode.thai_label(),
    }
}

pub fn weather_label(weather: WeatherCondition, locale: Locale) -> &'static str {
    match locale {
        Locale::English => weather.label(),
        Locale::Thai => weather.thai_label(),
    }
}

pub fn traffic_label(traffic: TrafficLevel, locale: Locale) -> &'static str {
    match locale {
        Locale::English => traffic.label(),
        Locale::Thai => traffic.thai_label(),
    }
}

/// Every assumption behind an estimate, in the order they are applied.
pub fn breakdown_to_details(estimate: &TripEstimate, locale: Locale) -> Vec<Detail> {
    let key = |text: Text| text.get(locale).to_string();
    vec![
        (key(Text::BaseSpeed), speed(estimate.base_speed_kmh, 0, locale)),
        (key(Text::WeatherFactor), factor(estimate.weather_factor)),
        (key(Text::TrafficFactor), factor(estimate.traffic_factor)),
        (key(Text::RushHourFactor), factor(estimate.peak_factor_applied)),
        (key(Text::EffectiveSpeed), speed(estimate.effective_speed_kmh, 1, locale).bold()),
        (key(Text::Buffer), minutes(estimate.buffer_minutes, locale)),
    ]
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
    use tripcalc_common::trip::TripRequest;
    use tripcalc_core::estimator;

    fn sample_estimate() -> TripEstimate {
        let request = TripRequest::new(
            10.0,
            TravelMode::Car,
            WeatherCondition::Sunny,
            TrafficLevel::Moderate,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        );
        estimator::estimate(request).unwrap()
    }

    #[test]
    fn test_breakdown_keys_follow_locale() {
        let estimate = sample_estimate();

        let english: Vec<String> = breakdown_to_details(&estimate, Locale::English)
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(
            english,
            ["Base speed", "Weather", "Traffic", "Rush hour", "Effective", "Buffer"]
        );

        let thai: Vec<String> = breakdown_to_details(&estimate, Locale::Thai)
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(
            thai,
            [
                "ความเร็วฐาน",
                "ปัจจัยอากาศ",
                "ปัจจัยการจราจร",
                "ปัจจัยชั่วโมงเร่งด่วน",
                "ความเร็วที่คำนวณได้",
                "เวลาเผื่อ",
            ]
        );
    }

    #[test]
    fn test_breakdown_values_use_localised_units() {
        colored::control::set_override(false);
        let estimate = sample_estimate();

        let thai = breakdown_to_details(&estimate, Locale::Thai);
        assert_eq!(thai[0].1.to_string(), "40 กม./ชม.");
        assert_eq!(thai[4].1.to_string(), "30.6 กม./ชม.");
        assert_eq!(thai[5].1.to_string(), "5 นาที");

        let english = breakdown_to_details(&estimate, Locale::English);
        assert_eq!(english[0].1.to_string(), "40 km/h");
        assert_eq!(english[3].1.to_string(), "× 0.85");
        assert_eq!(english[5].1.to_string(), "5 min");
    }
}

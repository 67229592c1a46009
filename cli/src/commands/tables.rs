use colored::*;

use crate::mprint;
use crate::terminal::text::Text;
use crate::terminal::{colors, format, print};
use tripcalc_common::config::Config;
use tripcalc_common::trip::{TrafficLevel, TravelMode, WeatherCondition};
use tripcalc_core::peak::{self, PEAK_FACTOR, RUSH_HOURS};
use tripcalc_core::tables;

type Detail = (String, ColoredString);

pub fn tables(cfg: &Config) -> anyhow::Result<()> {
    let locale = cfg.locale;

    let modes: Vec<Detail> = TravelMode::ALL
        .into_iter()
        .map(|mode| {
            let value: ColoredString = format!(
                "{} {} {}",
                format::speed(tables::base_speed_kmh(mode), 0, locale),
                "+".color(colors::SEPARATOR),
                format::minutes(tables::buffer_minutes(mode), locale),
            )
            .normal();
            (format::mode_label(mode, locale).to_string(), value)
        })
        .collect();

    let weather: Vec<Detail> = WeatherCondition::ALL
        .into_iter()
        .map(|w| {
            let label = format::weather_label(w, locale).to_string();
            (label, format::factor(tables::weather_factor(w)))
        })
        .collect();

    let traffic: Vec<Detail> = TrafficLevel::ALL
        .into_iter()
        .map(|t| {
            let label = format::traffic_label(t, locale).to_string();
            (label, format::factor(tables::traffic_factor(t)))
        })
        .collect();

    let affected: Vec<&str> = TravelMode::ALL
        .into_iter()
        .filter(|mode| peak::is_congestion_affected(*mode))
        .map(|mode| format::mode_label(mode, locale))
        .collect();
    let mut rush: Vec<Detail> = RUSH_HOURS
        .iter()
        .map(|window| (window.to_string(), format::factor(PEAK_FACTOR)))
        .collect();
    rush.push((Text::AppliesTo.get(locale).to_string(), affected.join(", ").normal()));

    let sections: [(&str, Vec<Detail>); 4] = [
        (Text::BaseSpeedAndBuffer.get(locale), modes),
        (Text::Weather.get(locale), weather),
        (Text::Traffic.get(locale), traffic),
        (Text::RushHour.get(locale), rush),
    ];

    let last = sections.len() - 1;
    for (idx, (title, details)) in sections.into_iter().enumerate() {
        print::tree_head(idx, title);
        print::as_tree_one_level(details);
        if idx != last {
            mprint!();
        }
    }

    if cfg.quiet == 0 {
        print::end_of_program();
    }
    Ok(())
}

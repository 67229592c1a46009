use colored::*;
use tracing::{info, warn};

use crate::commands::EstimateArgs;
use crate::mprint;
use crate::terminal::text::Text;
use crate::terminal::{colors, format, print};
use tripcalc_common::config::Config;
use tripcalc_common::trip::TripEstimate;
use tripcalc_core::estimator;

pub fn estimate(args: EstimateArgs, cfg: &Config) -> anyhow::Result<()> {
    let request = args.to_request();

    let estimate: TripEstimate = match estimator::estimate(request) {
        Ok(estimate) => estimate,
        Err(err) if err.is_advisory() => {
            warn!("{err}; {}", Text::DistanceAdvisory.get(cfg.locale));
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if estimate.hit_peak_hours() && cfg.quiet == 0 {
        info!("{}", Text::RushHourNotice.get(cfg.locale));
    }

    match cfg.quiet {
        0 | 1 => print_estimate(&estimate, cfg),
        _ => print_one_line(&estimate, cfg),
    }
    Ok(())
}

fn print_one_line(estimate: &TripEstimate, cfg: &Config) {
    let output: String = format!(
        "{} {} {} {} {}",
        format::duration(estimate.estimated_minutes, cfg.locale),
        "·".color(colors::SEPARATOR),
        format::clock(estimate.departure_time),
        "→".color(colors::SEPARATOR),
        format::clock(estimate.arrival_time),
    );
    print::print(&output);
}

fn print_estimate(estimate: &TripEstimate, cfg: &Config) {
    let locale = cfg.locale;
    let estimated = Text::EstimatedTime.get(locale);
    let departure = Text::Departure.get(locale);
    let arrival = Text::Arrival.get(locale);

    print::set_key_width([estimated, departure, arrival]);
    print::aligned_line(estimated, format::duration(estimate.estimated_minutes, locale));
    print::aligned_line(departure, format::clock(estimate.departure_time));
    print::aligned_line(arrival, format::clock(estimate.arrival_time));

    mprint!();
    print::header(Text::AssumptionsHeader.get(locale), cfg.quiet);
    print::tree_head(0, format::mode_label(estimate.mode, locale));
    print::as_tree_one_level(format::breakdown_to_details(estimate, locale));

    if cfg.quiet == 0 {
        let disclaimer = Text::Disclaimer.get(locale);
        print::fat_separator();
        print::centerln(&format!("{}", disclaimer.italic().color(colors::TEXT_DEFAULT)));
        print::end_of_program();
    }
}

//! Human-readable rendering of minute counts.

use crate::config::Locale;

/// Renders a number of minutes as hours and minutes.
///
/// Negative and NaN inputs render as zero. The value is rounded to whole
/// minutes before it is split, so `59.6` renders as `1 h 0 min`, never as
/// `60 min`.
pub fn format_duration(minutes: f64, locale: Locale) -> String {
    let total: u64 = if minutes.is_nan() || minutes <= 0.0 {
        0
    } else {
        minutes.round() as u64
    };

    let hours: u64 = total / 60;
    let mins: u64 = total % 60;

    match (locale, hours) {
        (Locale::English, 0) => format!("{mins} min"),
        (Locale::English, _) => format!("{hours} h {mins} min"),
        (Locale::Thai, 0) => format!("{mins} นาที"),
        (Locale::Thai, _) => format!("{hours} ชั่วโมง {mins} นาที"),
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
    fn test_format_duration_english() {
        assert_eq!(format_duration(24.6, Locale::English), "25 min");
        assert_eq!(format_duration(0.4, Locale::English), "0 min");
        assert_eq!(format_duration(60.0, Locale::English), "1 h 0 min");
        assert_eq!(format_duration(135.2, Locale::English), "2 h 15 min");
    }

    #[test]
    fn test_format_duration_rounds_before_splitting() {
        assert_eq!(format_duration(59.6, Locale::English), "1 h 0 min");
        assert_eq!(format_duration(119.5, Locale::English), "2 h 0 min");
    }

    #[test]
    fn test_format_duration_thai() {
        assert_eq!(format_duration(24.6, Locale::Thai), "25 นาที");
        assert_eq!(format_duration(90.0, Locale::Thai), "1 ชั่วโมง 30 นาที");
    }

    #[test]
    fn test_format_duration_clamps_bad_input() {
        assert_eq!(format_duration(-5.0, Locale::English), "0 min");
        assert_eq!(format_duration(f64::NAN, Locale::English), "0 min");
    }
}

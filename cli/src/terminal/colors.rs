use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 200, b: 255 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 190, b: 90 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };

pub const DURATION: Color = Color::BrightGreen;
pub const CLOCK: Color = Color::TrueColor { r: 190, g: 160, b: 255 };
pub const SPEED: Color = Color::TrueColor { r: 90, g: 210, b: 190 };

/// Factor above 1.0, the trip gets faster.
pub const FACTOR_BOOST: Color = Color::Green;
/// Factor below 1.0, the trip gets slower.
pub const FACTOR_PENALTY: Color = Color::Yellow;

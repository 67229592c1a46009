//! Fixed user-facing phrases in every supported language.

use tripcalc_common::config::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    EstimatingHeader,
    TablesHeader,
    AssumptionsHeader,
    EstimatedTime,
    Departure,
    Arrival,
    BaseSpeed,
    WeatherFactor,
    TrafficFactor,
    RushHourFactor,
    EffectiveSpeed,
    Buffer,
    BaseSpeedAndBuffer,
    Weather,
    Traffic,
    RushHour,
    AppliesTo,
    KmPerHour,
    Minutes,
    DistanceAdvisory,
    RushHourNotice,
    Disclaimer,
}

impl Text {
    pub const ALL: [Text; 22] = [
        Text::EstimatingHeader,
        Text::TablesHeader,
        Text::AssumptionsHeader,
        Text::EstimatedTime,
        Text::Departure,
        Text::Arrival,
        Text::BaseSpeed,
        Text::WeatherFactor,
        Text::TrafficFactor,
        Text::RushHourFactor,
        Text::EffectiveSpeed,
        Text::Buffer,
        Text::BaseSpeedAndBuffer,
        Text::Weather,
        Text::Traffic,
        Text::RushHour,
        Text::AppliesTo,
        Text::KmPerHour,
        Text::Minutes,
        Text::DistanceAdvisory,
        Text::RushHourNotice,
        Text::Disclaimer,
    ];

    pub fn get(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.english(),
            Locale::Thai => self.thai(),
        }
    }

    fn english(self) -> &'static str {
        match self {
            Text::EstimatingHeader => "estimating travel time",
            Text::TablesHeader => "model assumptions",
            Text::AssumptionsHeader => "assumptions",
            Text::EstimatedTime => "Estimated time",
            Text::Departure => "Departure",
            Text::Arrival => "Arrival",
            Text::BaseSpeed => "Base speed",
            Text::WeatherFactor => "Weather",
            Text::TrafficFactor => "Traffic",
            Text::RushHourFactor => "Rush hour",
            Text::EffectiveSpeed => "Effective",
            Text::Buffer => "Buffer",
            Text::BaseSpeedAndBuffer => "Base speed + buffer",
            Text::Weather => "Weather",
            Text::Traffic => "Traffic",
            Text::RushHour => "Rush hour",
            Text::AppliesTo => "Applies to",
            Text::KmPerHour => "km/h",
            Text::Minutes => "min",
            Text::DistanceAdvisory => "enter a distance greater than 0 km",
            Text::RushHourNotice => "Departure falls in rush hour, motorised traffic is slower",
            Text::Disclaimer => "Estimate only: roads, incidents and route choice change real times.",
        }
    }

    fn thai(self) -> &'static str {
        match self {
            Text::EstimatingHeader => "คำนวณเวลาเดินทาง",
            Text::TablesHeader => "สมมติฐานของแบบจำลอง",
            Text::AssumptionsHeader => "รายละเอียดสมมติฐาน",
            Text::EstimatedTime => "เวลาโดยประมาณ",
            Text::Departure => "เวลาออกเดินทาง",
            Text::Arrival => "เวลาไปถึงโดยประมาณ",
            Text::BaseSpeed => "ความเร็วฐาน",
            Text::WeatherFactor => "ปัจจัยอากาศ",
            Text::TrafficFactor => "ปัจจัยการจราจร",
            Text::RushHourFactor => "ปัจจัยชั่วโมงเร่งด่วน",
            Text::EffectiveSpeed => "ความเร็วที่คำนวณได้",
            Text::Buffer => "เวลาเผื่อ",
            Text::BaseSpeedAndBuffer => "ความเร็วฐาน + เวลาเผื่อ",
            Text::Weather => "สภาพอากาศ",
            Text::Traffic => "สภาพการจราจร",
            Text::RushHour => "ชั่วโมงเร่งด่วน",
            Text::AppliesTo => "ใช้กับ",
            Text::KmPerHour => "กม./ชม.",
            Text::Minutes => "นาที",
            Text::DistanceAdvisory => "โปรดกรอกระยะทางที่มากกว่า 0 กม.",
            Text::RushHourNotice => "ออกเดินทางในชั่วโมงเร่งด่วน การจราจรจะช้าลง",
            Text::Disclaimer => "หมายเหตุ: ผลลัพธ์เป็นการประมาณจากสมมติฐานทั่วไป",
        }
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

//! Condition code and description to icon resolution.
//!
//! Codes follow the OpenWeatherMap condition list:
//! https://openweathermap.org/weather-conditions

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Reference to a display icon (an image URL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IconReference(&'static str);

impl IconReference {
    pub const fn new(url: &'static str) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for IconReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

const THUNDERSTORM_ICON: IconReference =
    IconReference::new("https://img.icons8.com/doodle/96/cloud-lighting.png");
const DRIZZLE_ICON: IconReference =
    IconReference::new("https://img.icons8.com/doodle/96/rain--v1.png");
const RAIN_ICON: IconReference =
    IconReference::new("https://img.icons8.com/doodle/96/rainwater-catchment.png");
const SNOW_ICON: IconReference =
    IconReference::new("https://img.icons8.com/doodle/96/snow--v2.png");
const ATMOSPHERE_ICON: IconReference =
    IconReference::new("https://img.icons8.com/doodle/96/cloud--v1.png");
const CLEAR_ICON: IconReference =
    IconReference::new("https://img.icons8.com/doodle/96/sun--v1.png");
const CLOUDS_ICON: IconReference =
    IconReference::new("https://img.icons8.com/doodle/96/partly-cloudy-day--v1.png");
const EXTREME_ICON: IconReference =
    IconReference::new("https://img.icons8.com/doodle/96/windsock--v2.png");
const ADDITIONAL_ICON: IconReference =
    IconReference::new("https://img.icons8.com/doodle/96/wind.png");

/// Icon shown when neither the code nor the description is recognized
pub const FALLBACK_ICON: IconReference = CLEAR_ICON;

/// Condition groups, each with exactly one icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
    Extreme,
    Additional,
    Unknown,
}

impl ConditionCategory {
    /// Every category that owns condition codes
    pub const DECLARED: [ConditionCategory; 9] = [
        Self::Thunderstorm,
        Self::Drizzle,
        Self::Rain,
        Self::Snow,
        Self::Atmosphere,
        Self::Clear,
        Self::Clouds,
        Self::Extreme,
        Self::Additional,
    ];

    /// Condition codes belonging to this category
    pub fn codes(&self) -> &'static [i32] {
        match self {
            Self::Thunderstorm => &[200, 201, 202, 210, 211, 212, 221, 230, 231, 232],
            Self::Drizzle => &[300, 301, 302, 310, 311, 312, 313, 314, 321],
            Self::Rain => &[500, 501, 502, 503, 504, 511, 520, 521, 522, 531],
            Self::Snow => &[600, 601, 602, 611, 612, 613, 615, 616, 620, 621, 622],
            Self::Atmosphere => &[701, 711, 721, 731, 741, 751, 761, 762, 771, 781],
            Self::Clear => &[800],
            Self::Clouds => &[801, 802, 803, 804],
            Self::Extreme => &[900, 901, 902, 903, 904, 905, 906],
            Self::Additional => &[951, 952, 953, 954, 955, 956, 957, 958, 959, 960, 961, 962],
            Self::Unknown => &[],
        }
    }

    pub fn icon(&self) -> IconReference {
        match self {
            Self::Thunderstorm => THUNDERSTORM_ICON,
            Self::Drizzle => DRIZZLE_ICON,
            Self::Rain => RAIN_ICON,
            Self::Snow => SNOW_ICON,
            Self::Atmosphere => ATMOSPHERE_ICON,
            Self::Clear => CLEAR_ICON,
            Self::Clouds => CLOUDS_ICON,
            Self::Extreme => EXTREME_ICON,
            Self::Additional => ADDITIONAL_ICON,
            Self::Unknown => FALLBACK_ICON,
        }
    }

    /// Get a human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "Thunderstorm",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Atmosphere => "Atmosphere",
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Extreme => "Extreme",
            Self::Additional => "Wind",
            Self::Unknown => "Unknown",
        }
    }

    /// Category owning `code`, if any
    pub fn from_code(code: i32) -> Option<Self> {
        CODE_INDEX.get(&code).copied()
    }

    /// Category for a condition description, compared case-insensitively
    pub fn from_text(text: &str) -> Option<Self> {
        let normalized = text.trim().to_lowercase();
        TEXT_INDEX.get(normalized.as_str()).copied()
    }
}

/// Standard condition descriptions, used when no code is available
const TEXT_TABLE: &[(&str, ConditionCategory)] = &[
    ("thunderstorm with light rain", ConditionCategory::Thunderstorm),
    ("thunderstorm with rain", ConditionCategory::Thunderstorm),
    ("thunderstorm with heavy rain", ConditionCategory::Thunderstorm),
    ("light thunderstorm", ConditionCategory::Thunderstorm),
    ("thunderstorm", ConditionCategory::Thunderstorm),
    ("heavy thunderstorm", ConditionCategory::Thunderstorm),
    ("ragged thunderstorm", ConditionCategory::Thunderstorm),
    ("thunderstorm with light drizzle", ConditionCategory::Thunderstorm),
    ("thunderstorm with drizzle", ConditionCategory::Thunderstorm),
    ("thunderstorm with heavy drizzle", ConditionCategory::Thunderstorm),
    ("light intensity drizzle", ConditionCategory::Drizzle),
    ("drizzle", ConditionCategory::Drizzle),
    ("heavy intensity drizzle", ConditionCategory::Drizzle),
    ("light intensity drizzle rain", ConditionCategory::Drizzle),
    ("drizzle rain", ConditionCategory::Drizzle),
    ("heavy intensity drizzle rain", ConditionCategory::Drizzle),
    ("shower rain and drizzle", ConditionCategory::Drizzle),
    ("heavy shower rain and drizzle", ConditionCategory::Drizzle),
    ("shower drizzle", ConditionCategory::Drizzle),
    ("light rain", ConditionCategory::Rain),
    ("moderate rain", ConditionCategory::Rain),
    ("heavy intensity rain", ConditionCategory::Rain),
    ("very heavy rain", ConditionCategory::Rain),
    ("extreme rain", ConditionCategory::Rain),
    ("freezing rain", ConditionCategory::Rain),
    ("light intensity shower rain", ConditionCategory::Rain),
    ("shower rain", ConditionCategory::Rain),
    ("heavy intensity shower rain", ConditionCategory::Rain),
    ("ragged shower rain", ConditionCategory::Rain),
    ("light snow", ConditionCategory::Snow),
    ("snow", ConditionCategory::Snow),
    ("heavy snow", ConditionCategory::Snow),
    ("sleet", ConditionCategory::Snow),
    ("light shower sleet", ConditionCategory::Snow),
    ("shower sleet", ConditionCategory::Snow),
    ("light rain and snow", ConditionCategory::Snow),
    ("rain and snow", ConditionCategory::Snow),
    ("light shower snow", ConditionCategory::Snow),
    ("shower snow", ConditionCategory::Snow),
    ("heavy shower snow", ConditionCategory::Snow),
    ("mist", ConditionCategory::Atmosphere),
    ("smoke", ConditionCategory::Atmosphere),
    ("haze", ConditionCategory::Atmosphere),
    ("sand/dust whirls", ConditionCategory::Atmosphere),
    ("fog", ConditionCategory::Atmosphere),
    ("sand", ConditionCategory::Atmosphere),
    ("dust", ConditionCategory::Atmosphere),
    ("volcanic ash", ConditionCategory::Atmosphere),
    ("squalls", ConditionCategory::Atmosphere),
    ("tornado", ConditionCategory::Atmosphere),
    ("clear sky", ConditionCategory::Clear),
    ("few clouds", ConditionCategory::Clouds),
    ("scattered clouds", ConditionCategory::Clouds),
    ("broken clouds", ConditionCategory::Clouds),
    ("overcast clouds", ConditionCategory::Clouds),
    ("tropical storm", ConditionCategory::Extreme),
    ("hurricane", ConditionCategory::Extreme),
    ("cold", ConditionCategory::Extreme),
    ("hot", ConditionCategory::Extreme),
    ("windy", ConditionCategory::Extreme),
    ("hail", ConditionCategory::Extreme),
    ("calm", ConditionCategory::Additional),
    ("light breeze", ConditionCategory::Additional),
    ("gentle breeze", ConditionCategory::Additional),
    ("moderate breeze", ConditionCategory::Additional),
    ("fresh breeze", ConditionCategory::Additional),
    ("strong breeze", ConditionCategory::Additional),
    ("high wind, near gale", ConditionCategory::Additional),
    ("gale", ConditionCategory::Additional),
    ("severe gale", ConditionCategory::Additional),
    ("storm", ConditionCategory::Additional),
    ("violent storm", ConditionCategory::Additional),
];

static CODE_INDEX: LazyLock<HashMap<i32, ConditionCategory>> = LazyLock::new(|| {
    index_codes(
        ConditionCategory::DECLARED
            .iter()
            .map(|&category| (category, category.codes())),
    )
});

/// Build the code lookup. Categories must not share codes.
fn index_codes<'a>(
    tables: impl IntoIterator<Item = (ConditionCategory, &'a [i32])>,
) -> HashMap<i32, ConditionCategory> {
    let mut index = HashMap::new();
    for (category, codes) in tables {
        for &code in codes {
            let previous = index.insert(code, category);
            assert!(
                previous.is_none(),
                "condition code {code} claimed by {previous:?} and {category:?}"
            );
        }
    }
    index
}

static TEXT_INDEX: LazyLock<HashMap<&'static str, ConditionCategory>> =
    LazyLock::new(|| TEXT_TABLE.iter().copied().collect());

/// Category for a report: the code wins, then the description, then `Unknown`.
pub fn categorize(code: Option<i32>, text: Option<&str>) -> ConditionCategory {
    code.and_then(ConditionCategory::from_code)
        .or_else(|| text.and_then(ConditionCategory::from_text))
        .unwrap_or_else(|| {
            tracing::debug!(?code, ?text, "No icon mapped for condition, using fallback");
            ConditionCategory::Unknown
        })
}

/// Icon for a report's condition. Never fails; unmapped input yields [`FALLBACK_ICON`].
pub fn resolve(code: Option<i32>, text: Option<&str>) -> IconReference {
    categorize(code, text).icon()
}

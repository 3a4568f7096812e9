use super::number::{DEFAULT_PRECISION, Precision, coerce_number, format_number};
use super::{LOG_TARGET, SENTINEL, display_text, is_empty};
use crate::document::Value;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Physical unit attached to a numeric field.
///
/// The serialized names are the identifiers used in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Display, EnumIter)]
pub enum UnitKind {
    #[serde(rename = "mm")]
    #[strum(serialize = "mm")]
    Mm,
    #[serde(rename = "kg")]
    #[strum(serialize = "kg")]
    Kg,
    #[serde(rename = "mph")]
    #[strum(serialize = "mph")]
    Mph,
    #[serde(rename = "kph")]
    #[strum(serialize = "kph")]
    Kph,
    #[serde(rename = "bhp")]
    #[strum(serialize = "bhp")]
    Bhp,
    #[serde(rename = "ps")]
    #[strum(serialize = "ps")]
    Ps,
    #[serde(rename = "kw")]
    #[strum(serialize = "kw")]
    Kw,
    #[serde(rename = "nm")]
    #[strum(serialize = "nm")]
    Nm,
    #[serde(rename = "lbft")]
    #[strum(serialize = "lbft")]
    LbFt,
    #[serde(rename = "mpg")]
    #[strum(serialize = "mpg")]
    Mpg,
    #[serde(rename = "lPer100km")]
    #[strum(serialize = "lPer100km")]
    LPer100Km,
    #[serde(rename = "gPerKm")]
    #[strum(serialize = "gPerKm")]
    GPerKm,
    #[serde(rename = "miles")]
    #[strum(serialize = "miles")]
    Miles,
    #[serde(rename = "cc")]
    #[strum(serialize = "cc")]
    Cc,
    #[serde(rename = "litres")]
    #[strum(serialize = "litres")]
    Litres,
    #[serde(rename = "seconds")]
    #[strum(serialize = "seconds")]
    Seconds,
    #[serde(rename = "db")]
    #[strum(serialize = "db")]
    Db,
    #[serde(rename = "rpm")]
    #[strum(serialize = "rpm")]
    Rpm,
    #[serde(rename = "days")]
    #[strum(serialize = "days")]
    Days,
}

impl UnitKind {
    /// Text appended after the number.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Mm => "mm",
            Self::Kg => "kg",
            Self::Mph => "mph",
            Self::Kph => "kph",
            Self::Bhp => "bhp",
            Self::Ps => "PS",
            Self::Kw => "kW",
            Self::Nm => "Nm",
            Self::LbFt => "lb ft",
            Self::Mpg => "mpg",
            Self::LPer100Km => "L/100km",
            Self::GPerKm => "g/km",
            Self::Miles => "miles",
            Self::Cc => "cc",
            Self::Litres => "litres",
            Self::Seconds => "s",
            Self::Db => "dB",
            Self::Rpm => "rpm",
            Self::Days => "days",
        }
    }

    #[must_use]
    pub const fn precision(self) -> Precision {
        match self {
            Self::Mpg | Self::LPer100Km | Self::Litres | Self::Seconds => Precision::Fixed(1),
            _ => DEFAULT_PRECISION,
        }
    }
}

/// Render a value as a number followed by the unit suffix.
///
/// Values that cannot be read as a number are still shown, verbatim, with the suffix appended. Only
/// empty values and containers produce the sentinel.
#[must_use]
pub fn format_with_unit(value: Option<&Value>, unit: UnitKind) -> String {
    let Some(value) = value.filter(|v| !is_empty(Some(v))) else {
        return SENTINEL.to_string();
    };

    if let Some(n) = coerce_number(value) {
        return format!("{} {}", format_number(n, unit.precision()), unit.suffix());
    }

    if value.is_container() {
        log::debug!(target: LOG_TARGET, "cannot render a {} with unit '{unit}'", value.kind());
        return SENTINEL.to_string();
    }

    display_text(value).map_or_else(|| SENTINEL.to_string(), |text| format!("{text} {}", unit.suffix()))
}

use calamine::Data;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

/// Days between the Excel epoch and the last representable date (9999-12-31).
const MAX_EXCEL_SERIAL: f64 = 2_958_466.0;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const ZONED_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%#z"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// A single source cell before it is coerced into a record field.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawCell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Timestamp(NaiveDateTime),
}

impl RawCell {
    pub(crate) fn from_text(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub(crate) fn to_identifier(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Number(value) => format_number(*value),
            Self::Bool(value) => value.to_string(),
            Self::Timestamp(value) => value.to_string(),
        }
    }

    pub(crate) fn to_category(&self) -> Option<String> {
        Some(self.to_identifier()).filter(|value| !value.is_empty())
    }

    pub(crate) fn to_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.parse::<f64>().ok()?,
            Self::Bool(value) => f64::from(u8::from(*value)),
            Self::Empty | Self::Timestamp(_) => return None,
        };
        Some(value).filter(|value| value.is_finite())
    }

    pub(crate) fn to_flag(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0.0 && !value.is_nan(),
            Self::Text(text) => matches!(
                text.to_ascii_lowercase().as_str(),
                "true" | "t" | "yes" | "y" | "1" | "1.0"
            ),
            Self::Empty | Self::Timestamp(_) => false,
        }
    }

    pub(crate) fn to_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Timestamp(value) => Some(*value),
            Self::Number(serial) => excel_serial_to_datetime(*serial),
            Self::Text(text) => parse_datetime(text),
            Self::Empty | Self::Bool(_) => None,
        }
    }
}

impl From<&Data> for RawCell {
    fn from(value: &Data) -> Self {
        match value {
            Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => {
                Self::from_text(text)
            }
            Data::Int(value) => Self::Number(*value as f64),
            Data::Float(value) => Self::Number(*value),
            Data::Bool(value) => Self::Bool(*value),
            Data::DateTime(value) if value.is_duration() => Self::Number(value.as_f64()),
            Data::DateTime(value) => value.as_datetime().map_or(Self::Empty, Self::Timestamp),
            _ => Self::Empty,
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

pub(crate) fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }

    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;
    excel_epoch.checked_add_signed(Duration::milliseconds(millis))
}

pub(crate) fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    for format in ZONED_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Some(dt.naive_utc());
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

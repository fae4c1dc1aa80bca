//! Decoders for temporal columns, registered per declared column type.
//!
//! The legacy store keeps dates and timestamps as text. Which parser applies is
//! decided by the type the column was declared with, matched on its first word
//! and case-insensitively, so `timestamp with time zone` uses the `timestamp`
//! decoder. The `person` table declares its audit columns as `timestam`, which
//! is registered separately.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A parsed temporal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalValue {
    Timestamp(DateTime<Utc>),
    Date(NaiveDate),
}

impl TemporalValue {
    /// Dates become midnight UTC.
    pub fn into_timestamp(self) -> DateTime<Utc> {
        match self {
            TemporalValue::Timestamp(value) => value,
            TemporalValue::Date(date) => date.and_time(chrono::NaiveTime::MIN).and_utc(),
        }
    }

    /// Timestamps keep their UTC calendar date.
    pub fn into_date(self) -> NaiveDate {
        match self {
            TemporalValue::Timestamp(value) => value.date_naive(),
            TemporalValue::Date(date) => date,
        }
    }
}

pub type TemporalDecoder = fn(&str) -> Option<TemporalValue>;

/// Registry of temporal decoders keyed by declared column type.
#[derive(Debug, Clone)]
pub struct TemporalDecoders {
    decoders: HashMap<String, TemporalDecoder>,
}

impl TemporalDecoders {
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Decoders for every declared type found in the legacy schema.
    pub fn standard() -> Self {
        let mut decoders = Self::empty();
        decoders
            .register("timestamp", decode_timestamp)
            .register("timestam", decode_timestamp)
            .register("datetime", decode_timestamp)
            .register("date", decode_date);
        decoders
    }

    pub fn register(&mut self, declared_type: &str, decoder: TemporalDecoder) -> &mut Self {
        self.decoders.insert(type_key(declared_type), decoder);
        self
    }

    pub fn lookup(&self, declared_type: &str) -> Option<TemporalDecoder> {
        self.decoders.get(&type_key(declared_type)).copied()
    }
}

impl Default for TemporalDecoders {
    fn default() -> Self {
        Self::standard()
    }
}

fn type_key(declared_type: &str) -> String {
    declared_type
        .split(|c: char| c.is_whitespace() || c == '(')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn decode_timestamp(raw: &str) -> Option<TemporalValue> {
    parse_timestamp(raw).map(TemporalValue::Timestamp)
}

fn decode_date(raw: &str) -> Option<TemporalValue> {
    parse_date(raw).map(TemporalValue::Date)
}

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses the timestamp spellings found in the legacy data.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.ffffff]` with an optional `+HH` or
/// `+HH:MM` offset, and bare dates. Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(value) = DateTime::parse_from_str(raw, format) {
            return Some(value.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(value.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| TemporalValue::Date(date).into_timestamp())
}

/// Parses a calendar date, falling back to the date part of a timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(raw).map(|value| value.date_naive()))
}

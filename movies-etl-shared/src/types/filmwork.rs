use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ColumnValue, EntityKind, MovieRecord, UnknownTag};
use crate::decode::{DecodeError, RawRow, TemporalDecoders};

/// Kind of a film work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilmworkType {
    Movie,
    TvShow,
}

impl FilmworkType {
    pub fn as_str(self) -> &'static str {
        match self {
            FilmworkType::Movie => "movie",
            FilmworkType::TvShow => "tv_show",
        }
    }
}

impl FromStr for FilmworkType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(FilmworkType::Movie),
            "tv_show" => Ok(FilmworkType::TvShow),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

impl fmt::Display for FilmworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A movie or TV show.
///
/// `rating` is carried as-is from the source. The destination enforces the
/// 0..=100 bound, so an out-of-range value surfaces as a rejected write rather
/// than a decode failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filmwork {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub rating: Option<f64>,
    #[serde(rename = "type")]
    pub film_type: FilmworkType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MovieRecord for Filmwork {
    const KIND: EntityKind = EntityKind::Filmwork;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "creation_date",
        "rating",
        "type",
        "created_at",
        "updated_at",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            ColumnValue::Uuid(self.id),
            ColumnValue::Text(Some(self.title.clone())),
            ColumnValue::Text(self.description.clone()),
            ColumnValue::Date(self.creation_date),
            ColumnValue::Float(self.rating),
            ColumnValue::Text(Some(self.film_type.as_str().to_string())),
            ColumnValue::Timestamp(self.created_at),
            ColumnValue::Timestamp(self.updated_at),
        ]
    }

    fn decode(row: &RawRow, decoders: &TemporalDecoders) -> Result<Self, DecodeError> {
        Ok(Self {
            id: row.uuid("id")?,
            title: row.text("title")?,
            description: row.optional_text("description")?,
            creation_date: row.optional_date("creation_date", decoders)?,
            rating: row.optional_float("rating")?,
            film_type: row.tag("type")?,
            created_at: row.timestamp("created_at", decoders)?,
            updated_at: row.timestamp("updated_at", decoders)?,
        })
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ColumnValue, EntityKind, MovieRecord};
use crate::decode::{DecodeError, RawRow, TemporalDecoders};

/// Links a film work to one of its genres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreFilmwork {
    pub film_work_id: Uuid,
    pub genre_id: Uuid,
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl MovieRecord for GenreFilmwork {
    const KIND: EntityKind = EntityKind::GenreFilmwork;
    const FIELDS: &'static [&'static str] = &["film_work_id", "genre_id", "id", "created_at"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            ColumnValue::Uuid(self.film_work_id),
            ColumnValue::Uuid(self.genre_id),
            ColumnValue::Uuid(self.id),
            ColumnValue::Timestamp(self.created_at),
        ]
    }

    fn decode(row: &RawRow, decoders: &TemporalDecoders) -> Result<Self, DecodeError> {
        Ok(Self {
            film_work_id: row.uuid("film_work_id")?,
            genre_id: row.uuid("genre_id")?,
            id: row.uuid("id")?,
            created_at: row.timestamp("created_at", decoders)?,
        })
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ColumnValue, EntityKind, MovieRecord};
use crate::decode::{DecodeError, RawRow, TemporalDecoders};

/// A film genre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MovieRecord for Genre {
    const KIND: EntityKind = EntityKind::Genre;
    const FIELDS: &'static [&'static str] =
        &["id", "name", "description", "created_at", "updated_at"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            ColumnValue::Uuid(self.id),
            ColumnValue::Text(Some(self.name.clone())),
            ColumnValue::Text(self.description.clone()),
            ColumnValue::Timestamp(self.created_at),
            ColumnValue::Timestamp(self.updated_at),
        ]
    }

    fn decode(row: &RawRow, decoders: &TemporalDecoders) -> Result<Self, DecodeError> {
        Ok(Self {
            id: row.uuid("id")?,
            name: row.text("name")?,
            description: row.optional_text("description")?,
            created_at: row.timestamp("created_at", decoders)?,
            updated_at: row.timestamp("updated_at", decoders)?,
        })
    }
}

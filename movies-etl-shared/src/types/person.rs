use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ColumnValue, EntityKind, MovieRecord};
use crate::decode::{DecodeError, RawRow, TemporalDecoders};

/// An actor, writer, director or producer.
///
/// The legacy `person` table declares its audit columns with the truncated
/// `timestam` type tag; decoding relies on that tag being registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MovieRecord for Person {
    const KIND: EntityKind = EntityKind::Person;
    const FIELDS: &'static [&'static str] = &["id", "full_name", "created_at", "updated_at"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            ColumnValue::Uuid(self.id),
            ColumnValue::Text(Some(self.full_name.clone())),
            ColumnValue::Timestamp(self.created_at),
            ColumnValue::Timestamp(self.updated_at),
        ]
    }

    fn decode(row: &RawRow, decoders: &TemporalDecoders) -> Result<Self, DecodeError> {
        Ok(Self {
            id: row.uuid("id")?,
            full_name: row.text("full_name")?,
            created_at: row.timestamp("created_at", decoders)?,
            updated_at: row.timestamp("updated_at", decoders)?,
        })
    }
}

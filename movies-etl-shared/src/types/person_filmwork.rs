use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ColumnValue, EntityKind, MovieRecord, UnknownTag};
use crate::decode::{DecodeError, RawRow, TemporalDecoders};

/// The part a person played in a film work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleType {
    Actor,
    Producer,
    Director,
    Writer,
}

impl RoleType {
    pub fn as_str(self) -> &'static str {
        match self {
            RoleType::Actor => "actor",
            RoleType::Producer => "producer",
            RoleType::Director => "director",
            RoleType::Writer => "writer",
        }
    }
}

impl FromStr for RoleType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "actor" => Ok(RoleType::Actor),
            "producer" => Ok(RoleType::Producer),
            "director" => Ok(RoleType::Director),
            "writer" => Ok(RoleType::Writer),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Links a person to a film work, tagged with their role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonFilmwork {
    pub film_work_id: Uuid,
    pub person_id: Uuid,
    pub id: Uuid,
    pub role: Option<RoleType>,
    pub created_at: DateTime<Utc>,
}

impl MovieRecord for PersonFilmwork {
    const KIND: EntityKind = EntityKind::PersonFilmwork;
    const FIELDS: &'static [&'static str] =
        &["film_work_id", "person_id", "id", "role", "created_at"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            ColumnValue::Uuid(self.film_work_id),
            ColumnValue::Uuid(self.person_id),
            ColumnValue::Uuid(self.id),
            ColumnValue::Text(self.role.map(|role| role.as_str().to_string())),
            ColumnValue::Timestamp(self.created_at),
        ]
    }

    fn decode(row: &RawRow, decoders: &TemporalDecoders) -> Result<Self, DecodeError> {
        Ok(Self {
            film_work_id: row.uuid("film_work_id")?,
            person_id: row.uuid("person_id")?,
            id: row.uuid("id")?,
            role: row.optional_tag("role")?,
            created_at: row.timestamp("created_at", decoders)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_tags_round_trip_through_display() {
        for role in [
            RoleType::Actor,
            RoleType::Producer,
            RoleType::Director,
            RoleType::Writer,
        ] {
            assert_eq!(role.to_string().parse::<RoleType>(), Ok(role));
        }
        assert!("stuntman".parse::<RoleType>().is_err());
    }

    #[test]
    fn test_missing_role_binds_null() {
        let link = PersonFilmwork {
            film_work_id: Uuid::new_v4(),
            person_id: Uuid::new_v4(),
            id: Uuid::new_v4(),
            role: None,
            created_at: Utc::now(),
        };

        assert_eq!(link.values()[3], ColumnValue::Text(None));
        assert_eq!(PersonFilmwork::table_name(), "person_film_work");
    }
}

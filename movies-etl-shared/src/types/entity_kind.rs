//! Entity kinds and the naming rules shared by the source and destination stores.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Filmwork, Genre, GenreFilmwork, MovieRecord, Person, PersonFilmwork};

/// One of the five record types moved by the migration.
///
/// The serialized form of a kind is its table name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "genre")]
    Genre,
    #[serde(rename = "film_work")]
    Filmwork,
    #[serde(rename = "person")]
    Person,
    #[serde(rename = "genre_film_work")]
    GenreFilmwork,
    #[serde(rename = "person_film_work")]
    PersonFilmwork,
}

impl EntityKind {
    /// Insertion order: parent tables first, join tables last.
    pub const LOAD_ORDER: [EntityKind; 5] = [
        EntityKind::Genre,
        EntityKind::Person,
        EntityKind::Filmwork,
        EntityKind::GenreFilmwork,
        EntityKind::PersonFilmwork,
    ];

    /// Table name shared by both stores.
    pub fn table_name(self) -> &'static str {
        match self {
            EntityKind::Genre => "genre",
            EntityKind::Filmwork => "film_work",
            EntityKind::Person => "person",
            EntityKind::GenreFilmwork => "genre_film_work",
            EntityKind::PersonFilmwork => "person_film_work",
        }
    }

    /// Field names in declaration order, as the source store spells them.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            EntityKind::Genre => Genre::FIELDS,
            EntityKind::Filmwork => Filmwork::FIELDS,
            EntityKind::Person => Person::FIELDS,
            EntityKind::GenreFilmwork => GenreFilmwork::FIELDS,
            EntityKind::PersonFilmwork => PersonFilmwork::FIELDS,
        }
    }

    /// Column names as the destination store knows them, in field order.
    pub fn destination_columns(self) -> Vec<&'static str> {
        self.fields().iter().copied().map(destination_column).collect()
    }

    /// Comma-separated column list as the source store knows it.
    pub fn source_columns(self) -> String {
        self.fields().join(", ")
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Maps a source field name to its destination column name.
///
/// The destination renames the audit timestamps; every other field keeps its name.
pub fn destination_column(field: &'static str) -> &'static str {
    match field {
        "created_at" => "created",
        "updated_at" => "modified",
        other => other,
    }
}

//! The capability set every migrated record shares, and the tagged `Record`
//! wrapper the reader and writer pass between each other.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::{EntityKind, Filmwork, Genre, GenreFilmwork, Person, PersonFilmwork};
use crate::decode::{DecodeError, RawRow, TemporalDecoders};

/// A single bindable value of a destination column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Uuid(Uuid),
    Text(Option<String>),
    Timestamp(DateTime<Utc>),
    Date(Option<NaiveDate>),
    Float(Option<f64>),
}

/// Behaviour shared by the five record types.
///
/// `FIELDS` lists the source field names in declaration order. `values` and
/// `decode` must follow that same order.
pub trait MovieRecord: Sized + Clone + Send + Sync + 'static {
    const KIND: EntityKind;
    const FIELDS: &'static [&'static str];

    fn table_name() -> &'static str {
        Self::KIND.table_name()
    }

    fn destination_columns() -> Vec<&'static str> {
        Self::KIND.destination_columns()
    }

    fn source_columns() -> String {
        Self::KIND.source_columns()
    }

    fn id(&self) -> Uuid;

    /// Bind values for an insert, one per field.
    fn values(&self) -> Vec<ColumnValue>;

    /// Builds the record from a raw source row.
    fn decode(row: &RawRow, decoders: &TemporalDecoders) -> Result<Self, DecodeError>;
}

/// A record of any entity kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Genre(Genre),
    Filmwork(Filmwork),
    Person(Person),
    GenreFilmwork(GenreFilmwork),
    PersonFilmwork(PersonFilmwork),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Genre(_) => EntityKind::Genre,
            Record::Filmwork(_) => EntityKind::Filmwork,
            Record::Person(_) => EntityKind::Person,
            Record::GenreFilmwork(_) => EntityKind::GenreFilmwork,
            Record::PersonFilmwork(_) => EntityKind::PersonFilmwork,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Record::Genre(r) => r.id(),
            Record::Filmwork(r) => r.id(),
            Record::Person(r) => r.id(),
            Record::GenreFilmwork(r) => r.id(),
            Record::PersonFilmwork(r) => r.id(),
        }
    }

    pub fn values(&self) -> Vec<ColumnValue> {
        match self {
            Record::Genre(r) => r.values(),
            Record::Filmwork(r) => r.values(),
            Record::Person(r) => r.values(),
            Record::GenreFilmwork(r) => r.values(),
            Record::PersonFilmwork(r) => r.values(),
        }
    }
}

impl From<Genre> for Record {
    fn from(record: Genre) -> Self {
        Record::Genre(record)
    }
}

impl From<Filmwork> for Record {
    fn from(record: Filmwork) -> Self {
        Record::Filmwork(record)
    }
}

impl From<Person> for Record {
    fn from(record: Person) -> Self {
        Record::Person(record)
    }
}

impl From<GenreFilmwork> for Record {
    fn from(record: GenreFilmwork) -> Self {
        Record::GenreFilmwork(record)
    }
}

impl From<PersonFilmwork> for Record {
    fn from(record: PersonFilmwork) -> Self {
        Record::PersonFilmwork(record)
    }
}

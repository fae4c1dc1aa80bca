//! Decoding of raw source rows into typed records.
//!
//! A `RawRow` is the store-independent shape of one result row: column name,
//! the column's declared type, and the dynamically typed value. Decoding is a
//! pure function of the row, the entity kind, and the registered temporal
//! decoders, so it can be tested without any database.

mod error;
mod raw_row;
mod temporal;

pub use error::DecodeError;
pub use raw_row::{RawColumn, RawRow, RawValue};
pub use temporal::{
    parse_date, parse_timestamp, TemporalDecoder, TemporalDecoders, TemporalValue,
};

use crate::types::{
    EntityKind, Filmwork, Genre, GenreFilmwork, MovieRecord, Person, PersonFilmwork, Record,
};

/// Decodes a raw row into the record type of `kind`.
pub fn decode_record(
    kind: EntityKind,
    row: &RawRow,
    decoders: &TemporalDecoders,
) -> Result<Record, DecodeError> {
    let record = match kind {
        EntityKind::Genre => Genre::decode(row, decoders)?.into(),
        EntityKind::Filmwork => Filmwork::decode(row, decoders)?.into(),
        EntityKind::Person => Person::decode(row, decoders)?.into(),
        EntityKind::GenreFilmwork => GenreFilmwork::decode(row, decoders)?.into(),
        EntityKind::PersonFilmwork => PersonFilmwork::decode(row, decoders)?.into(),
    };
    Ok(record)
}

//! # Movies ETL Shared
//!
//! This crate defines the record model shared by the legacy source reader and the
//! destination writer of the movies migration.
//!
//! It includes the five entity records, the `EntityKind` dispatch table that knows
//! each table's name and column lists, and the decoding of raw source rows into
//! typed records.

pub mod decode;
pub mod types;

pub use decode::{
    decode_record, DecodeError, RawColumn, RawRow, RawValue, TemporalDecoder, TemporalDecoders,
    TemporalValue,
};
pub use types::{
    destination_column, ColumnValue, EntityKind, Filmwork, FilmworkType, Genre, GenreFilmwork,
    MovieRecord, Person, PersonFilmwork, Record, RoleType, UnknownTag,
};

//! This module defines the records migrated from the legacy store and the
//! per-entity metadata both stores agree on.

mod entity_kind;
mod filmwork;
mod genre;
mod genre_filmwork;
mod person;
mod person_filmwork;
mod record;
mod tag;

pub use entity_kind::{destination_column, EntityKind};
pub use filmwork::{Filmwork, FilmworkType};
pub use genre::Genre;
pub use genre_filmwork::GenreFilmwork;
pub use person::Person;
pub use person_filmwork::{PersonFilmwork, RoleType};
pub use record::{ColumnValue, MovieRecord, Record};
pub use tag::UnknownTag;

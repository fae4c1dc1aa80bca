use std::collections::HashMap;

use movies_etl_shared::{RawColumn, RawRow, RawValue};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// Copies a SQLite row into a [`RawRow`], tagging each column with the type it
/// was declared with in the table schema.
///
/// SQLite stores values by storage class, not by declared type, so the value
/// is read according to what the cell actually holds.
pub(crate) fn raw_row(
    row: &SqliteRow,
    declared_types: &HashMap<String, String>,
) -> Result<RawRow, sqlx::Error> {
    let mut columns = Vec::with_capacity(row.len());

    for (index, column) in row.columns().iter().enumerate() {
        let storage_class = {
            let value = row.try_get_raw(index)?;
            if value.is_null() {
                None
            } else {
                Some(value.type_info().name().to_string())
            }
        };

        let value = match storage_class.as_deref() {
            None => RawValue::Null,
            Some("INTEGER") => RawValue::Integer(row.try_get_unchecked(index)?),
            Some("REAL") => RawValue::Real(row.try_get_unchecked(index)?),
            Some("BLOB") => RawValue::Blob(row.try_get_unchecked(index)?),
            Some(_) => RawValue::Text(row.try_get_unchecked(index)?),
        };

        columns.push(RawColumn {
            name: column.name().to_string(),
            declared_type: declared_types.get(column.name()).cloned(),
            value,
        });
    }

    Ok(RawRow::new(columns))
}

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::{DecodeError, TemporalDecoders, TemporalValue};
use crate::types::UnknownTag;

/// A dynamically typed value as stored by the source.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl RawValue {
    fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Integer(_) => "integer",
            RawValue::Real(_) => "real",
            RawValue::Text(_) => "text",
            RawValue::Blob(_) => "blob",
        }
    }
}

/// One column of a raw row.
#[derive(Debug, Clone, PartialEq)]
pub struct RawColumn {
    pub name: String,
    /// Type the column was declared with in the source schema, if known.
    pub declared_type: Option<String>,
    pub value: RawValue,
}

/// A single result row, columns in select order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    columns: Vec<RawColumn>,
}

impl RawRow {
    pub fn new(columns: Vec<RawColumn>) -> Self {
        Self { columns }
    }

    /// Appends a column, builder style.
    pub fn with(mut self, name: &str, declared_type: Option<&str>, value: RawValue) -> Self {
        self.columns.push(RawColumn {
            name: name.to_string(),
            declared_type: declared_type.map(str::to_string),
            value,
        });
        self
    }

    pub fn columns(&self) -> &[RawColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column(&self, name: &str) -> Result<&RawColumn, DecodeError> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .ok_or_else(|| DecodeError::MissingColumn(name.to_string()))
    }

    /// Textual form of the `id` column, used to point at a bad row in errors.
    pub fn id_text(&self) -> Option<String> {
        match self.column("id").ok().map(|column| &column.value) {
            Some(RawValue::Text(text)) => Some(text.clone()),
            Some(RawValue::Integer(value)) => Some(value.to_string()),
            Some(RawValue::Blob(bytes)) => Uuid::from_slice(bytes).ok().map(|id| id.to_string()),
            _ => None,
        }
    }

    pub fn uuid(&self, name: &str) -> Result<Uuid, DecodeError> {
        match &self.column(name)?.value {
            RawValue::Text(text) => Uuid::parse_str(text.trim()).map_err(|e| DecodeError::InvalidUuid {
                column: name.to_string(),
                message: e.to_string(),
            }),
            RawValue::Blob(bytes) => Uuid::from_slice(bytes).map_err(|e| DecodeError::InvalidUuid {
                column: name.to_string(),
                message: e.to_string(),
            }),
            other => Err(mismatch(name, "uuid", other)),
        }
    }

    pub fn text(&self, name: &str) -> Result<String, DecodeError> {
        match &self.column(name)?.value {
            RawValue::Text(text) => Ok(text.clone()),
            other => Err(mismatch(name, "text", other)),
        }
    }

    pub fn optional_text(&self, name: &str) -> Result<Option<String>, DecodeError> {
        match &self.column(name)?.value {
            RawValue::Null => Ok(None),
            RawValue::Text(text) => Ok(Some(text.clone())),
            other => Err(mismatch(name, "text", other)),
        }
    }

    pub fn optional_float(&self, name: &str) -> Result<Option<f64>, DecodeError> {
        match &self.column(name)?.value {
            RawValue::Null => Ok(None),
            RawValue::Real(value) => Ok(Some(*value)),
            RawValue::Integer(value) => Ok(Some(*value as f64)),
            other => Err(mismatch(name, "real", other)),
        }
    }

    pub fn tag<T>(&self, name: &str) -> Result<T, DecodeError>
    where
        T: FromStr<Err = UnknownTag>,
    {
        self.text(name)?
            .parse()
            .map_err(|UnknownTag(value)| DecodeError::UnknownTag {
                column: name.to_string(),
                value,
            })
    }

    pub fn optional_tag<T>(&self, name: &str) -> Result<Option<T>, DecodeError>
    where
        T: FromStr<Err = UnknownTag>,
    {
        match self.optional_text(name)? {
            None => Ok(None),
            Some(_) => self.tag(name).map(Some),
        }
    }

    pub fn timestamp(
        &self,
        name: &str,
        decoders: &TemporalDecoders,
    ) -> Result<DateTime<Utc>, DecodeError> {
        match self.temporal(name, "timestamp", decoders)? {
            Some(value) => Ok(value.into_timestamp()),
            None => Err(mismatch(name, "timestamp", &RawValue::Null)),
        }
    }

    pub fn optional_date(
        &self,
        name: &str,
        decoders: &TemporalDecoders,
    ) -> Result<Option<NaiveDate>, DecodeError> {
        Ok(self
            .temporal(name, "date", decoders)?
            .map(TemporalValue::into_date))
    }

    /// Runs the decoder registered for the column's declared type.
    fn temporal(
        &self,
        name: &str,
        expected: &'static str,
        decoders: &TemporalDecoders,
    ) -> Result<Option<TemporalValue>, DecodeError> {
        let column = self.column(name)?;
        let text = match &column.value {
            RawValue::Null => return Ok(None),
            RawValue::Text(text) => text,
            other => return Err(mismatch(name, expected, other)),
        };

        let declared = column.declared_type.as_deref().unwrap_or_default();
        let decoder = decoders
            .lookup(declared)
            .ok_or_else(|| DecodeError::NoDecoder {
                column: name.to_string(),
                declared: declared.to_string(),
            })?;

        decoder(text)
            .map(Some)
            .ok_or_else(|| DecodeError::InvalidTemporal {
                column: name.to_string(),
                expected,
                value: text.clone(),
            })
    }
}

fn mismatch(column: &str, expected: &'static str, found: &RawValue) -> DecodeError {
    DecodeError::TypeMismatch {
        column: column.to_string(),
        expected,
        found: found.type_name(),
    }
}

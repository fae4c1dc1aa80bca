use thiserror::Error;

/// Errors raised while turning a raw source row into a typed record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("missing column `{0}`")]
    MissingColumn(String),

    #[error("column `{column}` holds {found}, expected {expected}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("column `{column}` is not a valid uuid: {message}")]
    InvalidUuid { column: String, message: String },

    #[error("column `{column}` is not a valid {expected}: `{value}`")]
    InvalidTemporal {
        column: String,
        expected: &'static str,
        value: String,
    },

    #[error("column `{column}` is declared as `{declared}`, which has no registered decoder")]
    NoDecoder { column: String, declared: String },

    #[error("column `{column}` holds unknown tag `{value}`")]
    UnknownTag { column: String, value: String },
}

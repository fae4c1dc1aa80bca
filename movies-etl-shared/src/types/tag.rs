use thiserror::Error;

/// Returned when a textual enum tag does not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag `{0}`")]
pub struct UnknownTag(pub String);

use thiserror::Error;

/// Constraint violations reported by the validator.
///
/// One variant per constraint, each rendering the human-readable message
/// handed back to callers. Lookup misses in the store are not errors; they
/// are `None` returns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("\"id\" must be a number")]
    IdNotNumber,

    #[error("\"id\" must be an integer")]
    IdNotInteger,

    #[error("\"id\" must be greater than 0")]
    IdNotPositive,

    #[error("task must be an object")]
    NotAnObject,

    #[error("\"{0}\" is not allowed")]
    UnknownField(String),

    #[error("\"{0}\" is required")]
    MissingField(&'static str),

    #[error("\"id\" requires both \"name\" and \"priority\"")]
    IdWithoutPeers,

    #[error("\"name\" must be a string")]
    NameNotString,

    #[error("\"name\" length must be between {min} and {max} characters")]
    NameLength { min: usize, max: usize },

    #[error("\"name\" must only contain alphanumeric characters")]
    NameNotAlphanumeric,

    #[error("\"priority\" must be a string")]
    PriorityNotString,

    #[error("\"priority\" must be one of [low, normal, high], got \"{0}\"")]
    UnknownPriority(String),
}

use thiserror::Error;

/// Errors emitted by the generation engine.
///
/// Every error is raised before any output is produced; a caller gets either
/// the full result sequence or exactly one of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Range given with minimum above maximum. Reversed ranges are rejected,
    /// never swapped.
    #[error("invalid range: minimum {min} is greater than maximum {max}")]
    InvalidRange { min: String, max: String },
    /// The request asks for more values than the effective domain holds.
    #[error("not enough values available: need {needed}, have {available}")]
    InsufficientDomain { needed: u64, available: u64 },
    /// Character-class name not present in the registry.
    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
    /// List sampling over an empty item list.
    #[error("cannot sample from an empty list")]
    EmptyList,
}

impl GenerateError {
    pub(crate) fn invalid_range(min: impl std::fmt::Display, max: impl std::fmt::Display) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// Convenience alias for results returned by the engine.
pub type Result<T> = std::result::Result<T, GenerateError>;

//! Error types for classification and dispatch.
//!
//! Every failure here is a programmer error: a value outside the union, a
//! pattern that is not exhaustive, or a malformed variant declaration. They
//! are returned to the caller immediately and never retried.

use thiserror::Error;

use crate::label::Label;

/// Result of a dispatcher operation.
pub type SumResult<T> = Result<T, SumError>;

/// Failure raised by a sum type dispatcher.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SumError {
    /// No predicate matched, or the direct classifier returned `None`.
    #[error("value of type `{type_name}` does not belong to any variant")]
    ClassificationFailure { type_name: &'static str },

    /// The pattern has no handler for the resolved variant.
    #[error("no handler for variant `{label}`")]
    MissingHandler { label: Label },

    /// A predicate mapping declared the same label twice.
    #[error("variant `{label}` is declared more than once")]
    DuplicateVariant { label: Label },

    /// A pattern does not cover every declared variant.
    #[error("pattern is not exhaustive, missing {}", join_labels(.missing))]
    NonExhaustive { missing: Vec<Label> },
}

/// Discriminant of a `SumError`, for programmatic matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SumErrorKind {
    ClassificationFailure,
    MissingHandler,
    DuplicateVariant,
    NonExhaustive,
}

impl SumError {
    pub fn kind(&self) -> SumErrorKind {
        match self {
            SumError::ClassificationFailure { .. } => SumErrorKind::ClassificationFailure,
            SumError::MissingHandler { .. } => SumErrorKind::MissingHandler,
            SumError::DuplicateVariant { .. } => SumErrorKind::DuplicateVariant,
            SumError::NonExhaustive { .. } => SumErrorKind::NonExhaustive,
        }
    }
}

fn join_labels(labels: &[Label]) -> String {
    let quoted: Vec<String> = labels.iter().map(|label| format!("`{label}`")).collect();
    quoted.join(", ")
}

// Error Factories

#[cold]
pub(crate) fn classification_failure<A: ?Sized>() -> SumError {
    SumError::ClassificationFailure {
        type_name: std::any::type_name::<A>(),
    }
}

#[cold]
pub(crate) fn missing_handler(label: &Label) -> SumError {
    SumError::MissingHandler {
        label: label.clone(),
    }
}

#[cold]
pub(crate) fn duplicate_variant(label: Label) -> SumError {
    SumError::DuplicateVariant { label }
}

#[cold]
pub(crate) fn non_exhaustive(missing: Vec<Label>) -> SumError {
    SumError::NonExhaustive { missing }
}

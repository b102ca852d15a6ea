//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HearthError`]
//! via `#[from]` (or by boxing into [`HearthError::Storage`] for IO-layer
//! failures). No `String` variants.

/// Top-level error for the hearth workspace.
#[derive(Debug, thiserror::Error)]
pub enum HearthError {
    /// A domain invariant was violated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced entity does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A storage adapter failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A device name was empty.
    #[error("device name must not be empty")]
    EmptyName,

    /// A parameter name was empty.
    #[error("parameter name must not be empty")]
    EmptyParamName,

    /// Two parameters on one device share a name.
    #[error("duplicate parameter name: {0}")]
    DuplicateParam(String),

    /// A device was built without a kind.
    #[error("device kind must be specified")]
    MissingKind,

    /// Bounds were declared on a non-integer parameter.
    #[error("bounds require an integer parameter")]
    BoundsOnNonInteger,

    /// Bounds were inverted or declared a non-positive step.
    #[error("bounds must satisfy min <= max with a positive step")]
    InvalidBounds,

    /// A parameter's initial value fell outside its declared bounds.
    #[error("initial value violates declared bounds")]
    InitialValueOutOfBounds,

    /// An identifier string could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// A lookup failed to find the requested entity.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Kind of entity that was looked up (e.g. `"Device"`).
    pub entity: &'static str,
    /// The identifier that failed to resolve.
    pub id: String,
}

use compact_str::CompactString;
use thiserror::Error;

/// Raised when assigning to a relationship whose related type cannot be set.
///
/// Assignment is the only lifecycle operation that fails on a missing hook:
/// a write with nowhere to go would silently drop the new value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("relationship `{name}` of {owner} is not settable (related type `{related}` has no set_relationship hook)")]
pub struct NonSettableRelationshipError {
    /// Relationship that was assigned to
    pub name: CompactString,
    /// Type name of the related type, or `"<undeclared>"`
    pub related: &'static str,
    /// Debug rendering of the owning instance
    pub owner: String,
}

#[derive(Debug, Error)]
pub enum RelatableError {
    /// Assignment to a relationship without a `set_relationship` hook
    #[error(transparent)]
    NonSettable(#[from] NonSettableRelationshipError),

    /// Error raised by a related type's hook
    #[error("Hook error: {0}")]
    Hook(String),

    /// Error raised while lazily loading a relationship
    #[error("Load error: {0}")]
    Load(String),
}

/// Result type for relationship operations
pub type Result<T> = std::result::Result<T, RelatableError>;

//! Error types for lms-ordering

use crate::entity::EntityId;

/// Result type for lms-ordering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lms-ordering operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested order is not a permutation of the sibling id set.
    ///
    /// Indicates a caller bug or a stale snapshot; never retried here.
    #[error("Invalid reorder set: {issue}")]
    InvalidReorderSet { issue: ReorderIssue },

    /// The entity is not part of the supplied sibling scope
    #[error("Entity not in scope: {id}")]
    UnknownEntity { id: EntityId },
}

/// Why a requested order failed the permutation check
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReorderIssue {
    /// A sibling id is absent from the new order
    #[error("sibling {0} is missing from the new order")]
    MissingId(EntityId),

    /// An id appears more than once in the new order
    #[error("id {0} appears more than once in the new order")]
    DuplicateId(EntityId),

    /// An id in the new order does not belong to the sibling scope
    #[error("id {0} does not belong to this sibling scope")]
    ForeignId(EntityId),
}

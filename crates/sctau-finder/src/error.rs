//! Error types for terminology queries.

use sctau_types::SctId;
use thiserror::Error;

/// Errors that can occur while resolving concepts.
///
/// Absence is not an error: a lookup for an unknown or inactive concept id
/// yields `Ok(None)` and an unpopulated refset yields an empty `Vec`. Every
/// variant here is fatal to the operation that raised it; nothing is
/// retried and no partial results are returned.
#[derive(Error, Debug)]
pub enum FinderError {
    /// Error from the underlying data store: unreachable, query rejected,
    /// or a result row that does not have the expected shape.
    #[error("data access error: {0}")]
    DataAccess(String),

    /// A concept references a refset id that does not resolve to an active
    /// concept. This signals a data-integrity problem in the release, not a
    /// connectivity problem.
    #[error("invalid refset membership: unknown or inactive refset concept {refset_id}")]
    InvalidMembership {
        /// The refset id that failed to resolve.
        refset_id: SctId,
    },

    /// Recursive refset resolution reached a concept that is already being
    /// resolved in the same top-level call (e.g. concept A is a member of
    /// refset B while B is a member of refset A).
    #[error("cyclic refset membership detected at concept {concept_id}")]
    CyclicMembership {
        /// The concept id at which the cycle was detected.
        concept_id: SctId,
    },
}

/// Result type for finder operations.
pub type FinderResult<T> = std::result::Result<T, FinderError>;

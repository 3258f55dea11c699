//! The query-execution collaborator contract.
//!
//! This module defines the [`SqlExecutor`] trait the finder issues its
//! queries through, together with a minimal, store-agnostic row model. The
//! trait keeps the finder independent of any particular driver: the
//! provided [`SqliteExecutor`](crate::SqliteExecutor) implements it for
//! SQLite, and tests can substitute a stub.
//!
//! Queries are always parameterized: the SQL text carries `?n` placeholders
//! and user-supplied values travel as [`SqlParam`]s, never interpolated
//! into the query string.

use sctau_types::SctId;

use crate::{FinderError, FinderResult};

/// A positional query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// An SCTID value.
    Id(SctId),
    /// A text value (e.g. a `LIKE` pattern).
    Text(String),
}

/// A single column value from a result row.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// An SCTID column value.
    Id(SctId),
    /// A text column value.
    Text(String),
    /// An SQL NULL (e.g. from an unmatched `LEFT JOIN`).
    Null,
}

impl SqlValue {
    /// Reads this value as an SCTID.
    ///
    /// A non-integer value is malformed data from the store.
    pub fn as_id(&self) -> FinderResult<SctId> {
        match self {
            Self::Id(id) => Ok(*id),
            other => Err(FinderError::DataAccess(format!(
                "expected an SCTID column value, got {other:?}"
            ))),
        }
    }

    /// Reads this value as an SCTID, treating NULL as absent.
    pub fn as_id_opt(&self) -> FinderResult<Option<SctId>> {
        match self {
            Self::Null => Ok(None),
            other => other.as_id().map(Some),
        }
    }

    /// Reads this value as text.
    ///
    /// A non-text value is malformed data from the store.
    pub fn as_text(&self) -> FinderResult<&str> {
        match self {
            Self::Text(text) => Ok(text),
            other => Err(FinderError::DataAccess(format!(
                "expected a text column value, got {other:?}"
            ))),
        }
    }
}

/// A single result row.
pub type SqlRow = Vec<SqlValue>;

/// Trait for executing read queries against the terminology store.
///
/// The finder holds a reference to an implementation of this trait for the
/// duration of a query; it does not own the store's lifecycle. All
/// execution is synchronous and blocking, and a failed query surfaces
/// immediately as [`FinderError::DataAccess`] with no retry.
pub trait SqlExecutor {
    /// Executes a read query with bound parameters.
    ///
    /// `max_rows` caps the number of returned rows; `0` means unlimited.
    fn execute(&self, sql: &str, params: &[SqlParam], max_rows: usize) -> FinderResult<Vec<SqlRow>>;

    /// Returns the configured default row cap for find operations.
    fn max_rows(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_id() {
        assert_eq!(SqlValue::Id(301000).as_id().unwrap(), 301000);
        assert!(SqlValue::Null.as_id().is_err());
        assert!(SqlValue::Text("term".into()).as_id().is_err());
    }

    #[test]
    fn test_as_id_opt_treats_null_as_absent() {
        assert_eq!(SqlValue::Null.as_id_opt().unwrap(), None);
        assert_eq!(SqlValue::Id(1).as_id_opt().unwrap(), Some(1));
        assert!(SqlValue::Text("term".into()).as_id_opt().is_err());
    }

    #[test]
    fn test_as_text() {
        assert_eq!(SqlValue::Text("heart".into()).as_text().unwrap(), "heart");
        assert!(SqlValue::Id(1).as_text().is_err());
        assert!(SqlValue::Null.as_text().is_err());
    }
}

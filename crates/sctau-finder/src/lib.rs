//! # sctau-finder
//!
//! Query layer for SCT-AU (SNOMED CT Australian release) terminology lookup
//! over a relational store.
//!
//! The central type is [`ConceptFinder`], which translates three logical
//! lookups (by SCTID, by partial term, by refset membership) into
//! parameterized SQL, executes them through an injected [`SqlExecutor`]
//! collaborator, and assembles full [`Concept`](sctau_types::Concept)
//! graphs, recursively resolving each refset a concept belongs to so the
//! refset's own preferred term can be displayed.
//!
//! A [`SqliteExecutor`] implementation of the collaborator is provided for
//! SQLite databases holding the SCT-AU reference schema.
//!
//! ## Usage
//!
//! ```no_run
//! use sctau_finder::{ConceptFinder, SqliteExecutor};
//!
//! # fn main() -> Result<(), sctau_finder::FinderError> {
//! let executor = SqliteExecutor::open("sct-au.db", 100)?;
//! let finder = ConceptFinder::new(&executor);
//!
//! if let Some(concept) = finder.find_by_id(301000)? {
//!     println!("{concept}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod executor;
mod finder;
mod sqlite;

pub use error::{FinderError, FinderResult};
pub use executor::{SqlExecutor, SqlParam, SqlRow, SqlValue};
pub use finder::ConceptFinder;
pub use sqlite::SqliteExecutor;

// Re-export sctau-types for convenience
pub use sctau_types;

//! # sctau-types
//!
//! Domain types for SCT-AU (SNOMED CT Australian release) terminology lookup.
//!
//! This crate provides the entity types assembled by a terminology query
//! layer: a [`Concept`] with its descriptions and en-AU language
//! acceptability (as defined by the Australian Dialect Reference Set), and
//! the reference-set memberships the concept participates in.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use sctau_types::{Concept, LanguageAcceptability, SctId, well_known};
//!
//! let mut concept = Concept::new(301000);
//! concept.add_description("Fifth metatarsal structure", Some(well_known::PREFERRED));
//! concept.add_description("Structure of fifth metatarsal bone", Some(well_known::ACCEPTABLE));
//!
//! assert_eq!(concept.preferred_term(), Some("Fifth metatarsal structure"));
//! assert_eq!(
//!     LanguageAcceptability::for_sctid(Some(well_known::ACCEPTABLE)),
//!     LanguageAcceptability::Acceptable
//! );
//! ```

#![warn(missing_docs)]

mod acceptability;
mod concept;
mod refset;
mod sctid;
pub mod well_known;

// Re-export all public types at crate root
pub use acceptability::LanguageAcceptability;
pub use concept::Concept;
pub use refset::RefsetMember;
pub use sctid::SctId;

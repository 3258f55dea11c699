//! Reference set membership type.
//!
//! This module provides the [`RefsetMember`] struct, a single membership of
//! a concept in a reference set.

use crate::{Concept, SctId};

/// A single reference-set membership.
///
/// Captures just the elements this application presents:
///
/// - the referenced concept (the member), by SCTID
/// - the reference set itself, fully resolved so its preferred term can be
///   displayed
///
/// Both parts are present by construction; a membership cannot be built for
/// a refset that failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefsetMember {
    /// SCTID of the concept holding the membership.
    referenced_id: SctId,
    /// The resolved reference set concept.
    refset: Concept,
}

impl RefsetMember {
    /// Creates a membership of `refset` for the concept `referenced_id`.
    pub fn new(referenced_id: SctId, refset: Concept) -> Self {
        Self {
            referenced_id,
            refset,
        }
    }

    /// Returns the SCTID of the member concept.
    pub fn referenced_id(&self) -> SctId {
        self.referenced_id
    }

    /// Returns the resolved reference set concept.
    pub fn refset(&self) -> &Concept {
        &self.refset
    }
}

//! SNOMED CT Concept entity.
//!
//! This module provides the [`Concept`] aggregate assembled by the query
//! layer: a concept id together with its active descriptions (each tagged
//! with an en-AU acceptability) and its reference-set memberships.

use std::fmt;

use crate::{LanguageAcceptability, RefsetMember, SctId};

/// A SNOMED CT concept with resolved descriptions and refset memberships.
///
/// This is not a comprehensive model of the RF2 concept component; it holds
/// just the elements this application presents. It is constructed empty,
/// populated in one pass by the query layer, and treated as immutable by
/// every other collaborator. It is a transient query result, never
/// persisted.
///
/// Descriptions keep the order they were added in, which for data coming
/// from the query layer is the `term ASC, effectivetime DESC` order of the
/// description query. Re-adding an existing term overwrites its
/// acceptability (last-write-wins), collapsing duplicate rows to a single
/// entry.
///
/// # Examples
///
/// ```
/// use sctau_types::{Concept, well_known};
///
/// let mut concept = Concept::new(301000);
/// concept.add_description("Fifth metatarsal structure", Some(well_known::PREFERRED));
///
/// assert_eq!(concept.sct_id(), 301000);
/// assert_eq!(concept.preferred_term(), Some("Fifth metatarsal structure"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Concept {
    /// The SCTID of this concept.
    sct_id: SctId,
    /// Description terms with their en-AU acceptability, in insertion order.
    descriptions: Vec<(String, LanguageAcceptability)>,
    /// All the refset memberships this concept participates in.
    refset_memberships: Vec<RefsetMember>,
}

impl Concept {
    /// Creates an empty concept for the given SCTID.
    pub fn new(sct_id: SctId) -> Self {
        Self {
            sct_id,
            descriptions: Vec::new(),
            refset_memberships: Vec::new(),
        }
    }

    /// Returns the SCTID of this concept.
    pub fn sct_id(&self) -> SctId {
        self.sct_id
    }

    /// Adds a description term for this concept.
    ///
    /// `acceptability_id` is the ADRS attribute value assigned to the
    /// description, if any; absent or unrecognized values map to
    /// [`LanguageAcceptability::None`]. Adding a term that is already
    /// present overwrites its acceptability instead of duplicating the
    /// entry.
    pub fn add_description(&mut self, term: impl Into<String>, acceptability_id: Option<SctId>) {
        let term = term.into();
        let acceptability = LanguageAcceptability::for_sctid(acceptability_id);
        match self.descriptions.iter_mut().find(|(t, _)| *t == term) {
            Some(entry) => entry.1 = acceptability,
            None => self.descriptions.push((term, acceptability)),
        }
    }

    /// Adds a membership of the given (fully resolved) reference set.
    ///
    /// The caller is responsible for having resolved `refset` to an active
    /// concept; a membership can only be constructed from one.
    pub fn add_refset_membership(&mut self, refset: Concept) {
        self.refset_memberships
            .push(RefsetMember::new(self.sct_id, refset));
    }

    /// Returns the description terms with their acceptability, in insertion order.
    pub fn descriptions(&self) -> impl Iterator<Item = (&str, LanguageAcceptability)> {
        self.descriptions
            .iter()
            .map(|(term, acceptability)| (term.as_str(), *acceptability))
    }

    /// Returns the refset memberships this concept participates in.
    pub fn refset_memberships(&self) -> &[RefsetMember] {
        &self.refset_memberships
    }

    /// Returns the most preferable description for this concept, as defined
    /// by the Australian Dialect Reference Set.
    ///
    /// Falls back to the first description in insertion order when no
    /// description is tagged PREFERRED. Returns `None` only when the concept
    /// has no descriptions at all, which does not happen for well-formed
    /// release data.
    pub fn preferred_term(&self) -> Option<&str> {
        self.descriptions
            .iter()
            .find(|(_, acceptability)| *acceptability == LanguageAcceptability::Preferred)
            .or_else(|| self.descriptions.first())
            .map(|(term, _)| term.as_str())
    }
}

impl fmt::Display for Concept {
    /// Formats the full details of the concept:
    ///
    /// - the SCT ID
    /// - each description, tagging the ADRS preferred and acceptable terms
    /// - each refset membership, named by the refset's preferred term
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SCT ID {}", self.sct_id)?;

        for (term, acceptability) in self.descriptions() {
            match acceptability {
                LanguageAcceptability::None => writeln!(f, "\t{term}")?,
                tagged => writeln!(f, "\t{term} [EN-AU {tagged} TERM]")?,
            }
        }

        for membership in &self.refset_memberships {
            match membership.refset().preferred_term() {
                Some(term) => writeln!(f, "\t\t Is member of refset '{term}'")?,
                None => writeln!(f, "\t\t Is member of refset '{}'", membership.refset().sct_id())?,
            }
        }

        writeln!(f)
    }
}

//! Concept lookup and assembly.

use std::collections::BTreeSet;

use sctau_types::{Concept, SctId};

use crate::{FinderError, FinderResult, SqlExecutor, SqlParam, SqlRow, SqlValue};

/// Selects an active concept id by exact match.
const FIND_BY_ID_SQL: &str = "SELECT concept.id \
     FROM concepts concept \
     WHERE concept.id = ?1 \
     AND concept.active = 1";

/// Selects distinct active concept ids having an active description that
/// contains the search text.
const FIND_BY_TERM_SQL: &str = "SELECT DISTINCT concept.id \
     FROM concepts concept \
     JOIN descriptions description ON description.conceptid = concept.id \
     WHERE description.term LIKE ?1 \
     AND description.active = 1 \
     AND concept.active = 1 \
     ORDER BY concept.id";

/// Selects the member concept ids of a reference set.
const FIND_REFSET_MEMBERS_SQL: &str = "SELECT DISTINCT concept.id \
     FROM concepts concept \
     JOIN concept_refset clinical ON clinical.referencedconceptid = concept.id \
     WHERE clinical.refsetid = ?1 \
     ORDER BY concept.id";

/// Selects the refset ids a concept actively belongs to.
const CONCEPT_REFSETS_SQL: &str = "SELECT clinical.refsetid \
     FROM concepts concept \
     JOIN concept_refset clinical ON clinical.referencedconceptid = concept.id \
     WHERE concept.id = ?1 \
     AND concept.active = 1";

/// Selects the active description terms of a concept with their ADRS
/// acceptability value, ordered by term then effective time descending.
const CONCEPT_DESCRIPTIONS_SQL: &str = "SELECT description.term, adrs.valueid \
     FROM concepts concept \
     JOIN descriptions description ON description.conceptid = concept.id \
     LEFT JOIN description_refset adrs ON adrs.referenceddescriptionid = description.id \
     WHERE concept.id = ?1 \
     AND description.active = 1 \
     AND concept.active = 1 \
     ORDER BY description.term, description.effectivetime DESC";

/// Finds concepts in the terminology store for the given search parameters.
///
/// Each lookup assembles complete [`Concept`] entities: the matching
/// concept ids are resolved to their active descriptions (with en-AU
/// acceptability) and refset memberships, and each membership's reference
/// set is itself resolved to a full `Concept` through the same path so its
/// preferred term is available for display.
///
/// That resolution is recursive. A set of in-progress concept ids is
/// tracked per top-level lookup so a cyclic refset membership in the data
/// fails fast with [`FinderError::CyclicMembership`] instead of recursing
/// without bound.
pub struct ConceptFinder<'a, E: SqlExecutor> {
    executor: &'a E,
}

impl<'a, E: SqlExecutor> ConceptFinder<'a, E> {
    /// Creates a finder issuing its queries through `executor`.
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    /// Finds the matching active concept for `sct_id`.
    ///
    /// Returns `Ok(None)` when no active concept has that id; absence is a
    /// normal outcome, not an error.
    pub fn find_by_id(&self, sct_id: SctId) -> FinderResult<Option<Concept>> {
        let mut resolving = BTreeSet::new();
        self.find_by_id_guarded(sct_id, &mut resolving)
    }

    /// Finds the active concepts having an active description that contains
    /// `term`, ordered by concept id.
    ///
    /// At most [`result_limit`](Self::result_limit) concepts are returned;
    /// a result of exactly that length indicates truncation.
    pub fn find_by_term(&self, term: &str) -> FinderResult<Vec<Concept>> {
        let pattern = format!("%{term}%");
        let rows = self.executor.execute(
            FIND_BY_TERM_SQL,
            &[SqlParam::Text(pattern)],
            self.executor.max_rows(),
        )?;
        self.assemble_concepts(rows)
    }

    /// Finds all the member concepts of the reference set `refset_sct_id`,
    /// ordered by concept id.
    ///
    /// A refset with no members yields an empty `Vec`. At most
    /// [`result_limit`](Self::result_limit) concepts are returned.
    pub fn find_refset_members(&self, refset_sct_id: SctId) -> FinderResult<Vec<Concept>> {
        let rows = self.executor.execute(
            FIND_REFSET_MEMBERS_SQL,
            &[SqlParam::Id(refset_sct_id)],
            self.executor.max_rows(),
        )?;
        self.assemble_concepts(rows)
    }

    /// Returns the maximum number of concepts a find operation will return.
    ///
    /// Callers can detect truncation by comparing a result's length against
    /// this limit.
    pub fn result_limit(&self) -> usize {
        self.executor.max_rows()
    }

    fn find_by_id_guarded(
        &self,
        sct_id: SctId,
        resolving: &mut BTreeSet<SctId>,
    ) -> FinderResult<Option<Concept>> {
        let rows = self.executor.execute(
            FIND_BY_ID_SQL,
            &[SqlParam::Id(sct_id)],
            self.executor.max_rows(),
        )?;
        match rows.first() {
            Some(row) => {
                let id = column(row, 0)?.as_id()?;
                Ok(Some(self.concept_details(id, resolving)?))
            }
            None => Ok(None),
        }
    }

    fn assemble_concepts(&self, rows: Vec<SqlRow>) -> FinderResult<Vec<Concept>> {
        let mut concepts = Vec::with_capacity(rows.len());
        for row in &rows {
            let id = column(row, 0)?.as_id()?;
            let mut resolving = BTreeSet::new();
            concepts.push(self.concept_details(id, &mut resolving)?);
        }
        Ok(concepts)
    }

    /// Assembles the full `Concept` for `sct_id`: descriptions with
    /// acceptability, then each refset membership with its recursively
    /// resolved refset concept.
    fn concept_details(
        &self,
        sct_id: SctId,
        resolving: &mut BTreeSet<SctId>,
    ) -> FinderResult<Concept> {
        if !resolving.insert(sct_id) {
            return Err(FinderError::CyclicMembership { concept_id: sct_id });
        }

        let mut concept = Concept::new(sct_id);

        for (term, value_id) in self.concept_descriptions(sct_id)? {
            concept.add_description(term, value_id);
        }

        for refset_id in self.concept_refset_ids(sct_id)? {
            let refset = self
                .find_by_id_guarded(refset_id, resolving)?
                .ok_or(FinderError::InvalidMembership { refset_id })?;
            concept.add_refset_membership(refset);
        }

        resolving.remove(&sct_id);
        Ok(concept)
    }

    /// Finds the active description terms for `sct_id` with their ADRS
    /// attribute value, in `term ASC, effectivetime DESC` order.
    fn concept_descriptions(&self, sct_id: SctId) -> FinderResult<Vec<(String, Option<SctId>)>> {
        let rows = self
            .executor
            .execute(CONCEPT_DESCRIPTIONS_SQL, &[SqlParam::Id(sct_id)], 0)?;

        let mut descriptions = Vec::with_capacity(rows.len());
        for row in &rows {
            let term = column(row, 0)?.as_text()?.to_string();
            let value_id = column(row, 1)?.as_id_opt()?;
            descriptions.push((term, value_id));
        }
        Ok(descriptions)
    }

    /// Finds the refset ids `sct_id` actively belongs to, duplicates
    /// collapsed, in ascending order.
    fn concept_refset_ids(&self, sct_id: SctId) -> FinderResult<BTreeSet<SctId>> {
        let rows = self
            .executor
            .execute(CONCEPT_REFSETS_SQL, &[SqlParam::Id(sct_id)], 0)?;

        let mut refset_ids = BTreeSet::new();
        for row in &rows {
            refset_ids.insert(column(row, 0)?.as_id()?);
        }
        Ok(refset_ids)
    }
}

fn column(row: &SqlRow, index: usize) -> FinderResult<&SqlValue> {
    row.get(index).ok_or_else(|| {
        FinderError::DataAccess(format!("missing column {index} in result row"))
    })
}

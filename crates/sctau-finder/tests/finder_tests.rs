//! End-to-end finder tests against a seeded in-memory SQLite database.

use std::collections::HashSet;

use rusqlite::Connection;
use sctau_finder::{ConceptFinder, FinderError, SqlExecutor, SqliteExecutor};
use sctau_types::LanguageAcceptability;

const UNKNOWN_CONCEPT_ID: u64 = 123;

/// Concept: 'Access instrument'
const KNOWN_INACTIVE_CONCEPT_ID: u64 = 370127007;

/// Concept: 'Fifth metatarsal structure'
const KNOWN_ACTIVE_CONCEPT_ID: u64 = 301000;

/// Concept: 'Punch drunk' (inactive duplicate of the active concept below)
const INACTIVE_DRUNK_CONCEPT_ID: u64 = 51996004;

/// Concept: 'Punch drunk'
const ACTIVE_DRUNK_CONCEPT_ID: u64 = 230283005;

/// Refset: 'Cardiology reference set'
const POPULATED_REFSET_ID: u64 = 32570331000036102;

/// A refset id with no membership rows at all.
const UNUSED_REFSET_ID: u64 = 32570031000036104;

fn seeded_executor(max_rows: usize) -> SqliteExecutor {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE concepts (id INTEGER NOT NULL, active INTEGER NOT NULL);
         CREATE TABLE descriptions (
             id INTEGER NOT NULL,
             conceptid INTEGER NOT NULL,
             term TEXT NOT NULL,
             active INTEGER NOT NULL,
             effectivetime INTEGER NOT NULL
         );
         CREATE TABLE concept_refset (refsetid INTEGER NOT NULL, referencedconceptid INTEGER NOT NULL);
         CREATE TABLE description_refset (referenceddescriptionid INTEGER NOT NULL, valueid INTEGER NOT NULL);

         -- Fifth metatarsal structure, a member of the cardiology refset
         -- (twice over, to check duplicate membership rows collapse)
         INSERT INTO concepts VALUES (301000, 1);
         INSERT INTO descriptions VALUES (1001, 301000, 'Fifth metatarsal structure', 1, 20110531);
         INSERT INTO descriptions VALUES (1002, 301000, 'Structure of fifth metatarsal bone', 1, 20110531);
         INSERT INTO description_refset VALUES (1001, 900000000000548007);
         INSERT INTO description_refset VALUES (1002, 900000000000549004);
         INSERT INTO concept_refset VALUES (32570331000036102, 301000);
         INSERT INTO concept_refset VALUES (32570331000036102, 301000);

         -- Known inactive concept
         INSERT INTO concepts VALUES (370127007, 0);
         INSERT INTO descriptions VALUES (1003, 370127007, 'Access instrument', 1, 20110531);

         -- The same description text on an active and an inactive concept
         INSERT INTO concepts VALUES (230283005, 1);
         INSERT INTO descriptions VALUES (1004, 230283005, 'Punch drunk', 1, 20110531);
         INSERT INTO description_refset VALUES (1004, 900000000000548007);
         INSERT INTO concepts VALUES (51996004, 0);
         INSERT INTO descriptions VALUES (1005, 51996004, 'Punch drunk', 1, 20110531);
         INSERT INTO concepts VALUES (25702006, 1);
         INSERT INTO descriptions VALUES (1006, 25702006, 'Drunkenness', 1, 20110531);

         -- The refset concept itself
         INSERT INTO concepts VALUES (32570331000036102, 1);
         INSERT INTO descriptions VALUES (1007, 32570331000036102, 'Cardiology reference set', 1, 20110531);
         INSERT INTO description_refset VALUES (1007, 900000000000548007);

         -- Heart concepts: one with two matching descriptions (row
         -- multiplication through the join), one refset member, one whose
         -- only matching description is inactive
         INSERT INTO concepts VALUES (80891009, 1);
         INSERT INTO descriptions VALUES (1008, 80891009, 'Heart structure', 1, 20110531);
         INSERT INTO descriptions VALUES (1009, 80891009, 'Entire heart', 1, 20110531);
         INSERT INTO concepts VALUES (42343007, 1);
         INSERT INTO descriptions VALUES (1010, 42343007, 'Congestive heart failure', 1, 20110531);
         INSERT INTO concept_refset VALUES (32570331000036102, 42343007);
         INSERT INTO concepts VALUES (368009, 1);
         INSERT INTO descriptions VALUES (1011, 368009, 'Heart valve disorder', 1, 20110531);
         INSERT INTO concepts VALUES (444444, 1);
         INSERT INTO descriptions VALUES (1012, 444444, 'Old heart term', 0, 20110531);

         -- Duplicate active rows for one term, differing in effective time
         INSERT INTO concepts VALUES (333333, 1);
         INSERT INTO descriptions VALUES (1013, 333333, 'Duplicated term', 1, 20200131);
         INSERT INTO descriptions VALUES (1014, 333333, 'Duplicated term', 1, 20100131);
         INSERT INTO description_refset VALUES (1013, 900000000000548007);

         -- Membership pointing at a refset with no concept row
         INSERT INTO concepts VALUES (900001, 1);
         INSERT INTO descriptions VALUES (1015, 900001, 'Dangling membership target', 1, 20110531);
         INSERT INTO concept_refset VALUES (999999, 900001);

         -- A pair of refsets that are members of each other
         INSERT INTO concepts VALUES (111111, 1);
         INSERT INTO descriptions VALUES (1016, 111111, 'Cycle alpha reference set', 1, 20110531);
         INSERT INTO concepts VALUES (222222, 1);
         INSERT INTO descriptions VALUES (1017, 222222, 'Cycle beta reference set', 1, 20110531);
         INSERT INTO concept_refset VALUES (222222, 111111);
         INSERT INTO concept_refset VALUES (111111, 222222);",
    )
    .unwrap();
    SqliteExecutor::new(conn, max_rows)
}

// =============================================================================
// find_by_id
// =============================================================================

#[test]
fn test_find_known_id() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    let concept = finder
        .find_by_id(KNOWN_ACTIVE_CONCEPT_ID)
        .unwrap()
        .expect("known concept not found");

    assert_eq!(concept.sct_id(), KNOWN_ACTIVE_CONCEPT_ID);
    assert_eq!(concept.preferred_term(), Some("Fifth metatarsal structure"));
}

#[test]
fn test_find_unknown_id_is_not_an_error() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    assert!(finder.find_by_id(UNKNOWN_CONCEPT_ID).unwrap().is_none());
}

#[test]
fn test_find_inactive_concept_is_absent() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    assert!(finder
        .find_by_id(KNOWN_INACTIVE_CONCEPT_ID)
        .unwrap()
        .is_none());
}

#[test]
fn test_description_acceptability_tags() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    let concept = finder
        .find_by_id(KNOWN_ACTIVE_CONCEPT_ID)
        .unwrap()
        .unwrap();

    let descriptions: Vec<_> = concept.descriptions().collect();
    assert_eq!(
        descriptions,
        vec![
            ("Fifth metatarsal structure", LanguageAcceptability::Preferred),
            (
                "Structure of fifth metatarsal bone",
                LanguageAcceptability::Acceptable
            ),
        ]
    );
}

#[test]
fn test_duplicate_term_rows_collapse_to_one_entry() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    let concept = finder.find_by_id(333333).unwrap().unwrap();
    let descriptions: Vec<_> = concept.descriptions().collect();

    // Rows arrive in effectivetime DESC order and later rows overwrite
    // earlier ones, so the surviving acceptability comes from the oldest
    // active row. Inherited behavior, kept as documented.
    assert_eq!(
        descriptions,
        vec![("Duplicated term", LanguageAcceptability::None)]
    );
}

// =============================================================================
// find_by_term
// =============================================================================

#[test]
fn test_find_known_term_excludes_inactive_twin() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    let results = finder.find_by_term("drunk").unwrap();
    assert!(results.len() > 1, "known term not found");

    let ids: Vec<_> = results.iter().map(|c| c.sct_id()).collect();
    assert!(
        ids.contains(&ACTIVE_DRUNK_CONCEPT_ID),
        "expected active concept was not present in results"
    );
    assert!(
        !ids.contains(&INACTIVE_DRUNK_CONCEPT_ID),
        "inactive concept was present in the result"
    );
}

#[test]
fn test_find_unknown_term_is_empty() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    assert!(finder.find_by_term("wakawaka").unwrap().is_empty());
}

#[test]
fn test_find_by_term_has_no_duplicates() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    // 80891009 has two descriptions matching 'heart'; must appear once.
    let results = finder.find_by_term("heart").unwrap();
    let mut unique_ids = HashSet::new();
    for concept in &results {
        assert!(
            unique_ids.insert(concept.sct_id()),
            "duplicate concept with SCTID {} returned in result",
            concept.sct_id()
        );
    }
    assert!(unique_ids.contains(&80891009));
}

#[test]
fn test_find_by_term_skips_inactive_only_matches() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    // 444444 is active but its only 'heart' description is inactive.
    let results = finder.find_by_term("heart").unwrap();
    assert!(results.iter().all(|c| c.sct_id() != 444444));
}

#[test]
fn test_find_by_term_is_capped_at_result_limit() {
    let executor = seeded_executor(2);
    let finder = ConceptFinder::new(&executor);

    // Three active heart concepts in the fixture; the cap truncates to two,
    // and a result length equal to the limit is the truncation signal.
    let results = finder.find_by_term("heart").unwrap();
    assert_eq!(results.len(), finder.result_limit());

    // Ordered by concept id ascending.
    let ids: Vec<_> = results.iter().map(|c| c.sct_id()).collect();
    assert_eq!(ids, vec![368009, 42343007]);
}

// =============================================================================
// find_refset_members
// =============================================================================

#[test]
fn test_list_members_of_populated_refset() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    let members = finder.find_refset_members(POPULATED_REFSET_ID).unwrap();
    assert!(!members.is_empty(), "refset should contain members");

    let ids: Vec<_> = members.iter().map(|c| c.sct_id()).collect();
    assert_eq!(ids, vec![301000, 42343007]);
}

#[test]
fn test_list_members_of_unused_refset_is_empty() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    let members = finder.find_refset_members(UNUSED_REFSET_ID).unwrap();
    assert!(members.is_empty());
}

// =============================================================================
// Refset membership resolution
// =============================================================================

#[test]
fn test_memberships_are_resolved_and_unique() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    let concept = finder
        .find_by_id(KNOWN_ACTIVE_CONCEPT_ID)
        .unwrap()
        .unwrap();

    let memberships = concept.refset_memberships();
    assert!(!memberships.is_empty(), "expected refset memberships");

    let mut member_keys = HashSet::new();
    for membership in memberships {
        assert_eq!(membership.referenced_id(), KNOWN_ACTIVE_CONCEPT_ID);
        assert_eq!(
            membership.refset().preferred_term(),
            Some("Cardiology reference set")
        );
        assert!(
            member_keys.insert((membership.refset().sct_id(), membership.referenced_id())),
            "duplicate membership encountered"
        );
    }
}

#[test]
fn test_dangling_refset_membership_fails_resolution() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    let err = finder.find_by_id(900001).unwrap_err();
    assert!(matches!(
        err,
        FinderError::InvalidMembership { refset_id: 999999 }
    ));
}

#[test]
fn test_cyclic_refset_membership_fails_fast() {
    let executor = seeded_executor(100);
    let finder = ConceptFinder::new(&executor);

    let err = finder.find_by_id(111111).unwrap_err();
    assert!(matches!(err, FinderError::CyclicMembership { .. }));
}

// =============================================================================
// Error propagation
// =============================================================================

#[test]
fn test_missing_schema_surfaces_as_data_access_error() {
    let conn = Connection::open_in_memory().unwrap();
    let executor = SqliteExecutor::new(conn, 100);
    let finder = ConceptFinder::new(&executor);

    let err = finder.find_by_id(KNOWN_ACTIVE_CONCEPT_ID).unwrap_err();
    assert!(matches!(err, FinderError::DataAccess(_)));
}

#[test]
fn test_executor_cap_configuration() {
    let executor = seeded_executor(7);
    assert_eq!(executor.max_rows(), 7);
    assert_eq!(ConceptFinder::new(&executor).result_limit(), 7);
}

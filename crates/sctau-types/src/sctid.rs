//! SNOMED CT Identifier (SCTID) type.
//!
//! This module provides a type alias for SNOMED CT identifiers (SCTIDs).
//! SCTIDs are 64-bit unsigned integers that uniquely identify components
//! within SNOMED CT.

/// A SNOMED CT identifier (SCTID).
///
/// SCTIDs are 64-bit unsigned integers that uniquely identify components
/// within SNOMED CT, including the SCT-AU extension content.
///
/// # Examples
///
/// ```
/// use sctau_types::SctId;
///
/// let concept_id: SctId = 301000; // Fifth metatarsal structure
/// let refset_id: SctId = 32570271000036106; // Australian dialect reference set
/// ```
pub type SctId = u64;

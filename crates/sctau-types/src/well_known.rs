//! Well-known SNOMED CT and SCT-AU concept IDs.
//!
//! This module provides constants for the metadata concept identifiers this
//! application relies on: the language acceptability values assigned by the
//! Australian Dialect Reference Set and the RF2 active flag.
//!
//! # Examples
//!
//! ```
//! use sctau_types::well_known;
//!
//! // Check whether an ADRS attribute value means "preferred"
//! let value_id: u64 = 900000000000548007;
//! assert_eq!(value_id, well_known::PREFERRED);
//! ```

use crate::SctId;

// =============================================================================
// Language Acceptability Values
// =============================================================================

/// Preferred (foundation metadata concept) - 900000000000548007.
///
/// The ADRS attribute value marking a description as the en-AU preferred term.
pub const PREFERRED: SctId = 900000000000548007;

/// Acceptable (foundation metadata concept) - 900000000000549004.
///
/// The ADRS attribute value marking a description as an en-AU acceptable term.
pub const ACCEPTABLE: SctId = 900000000000549004;

// =============================================================================
// Reference Sets
// =============================================================================

/// Australian dialect reference set - 32570271000036106.
///
/// The language refset assigning en-AU acceptability to descriptions.
pub const AUSTRALIAN_DIALECT_REFSET: SctId = 32570271000036106;

// =============================================================================
// RF2 Metadata
// =============================================================================

/// SNOMED CT RF2 'active' status value.
pub const ACTIVE_STATUS_VALUE: i64 = 1;

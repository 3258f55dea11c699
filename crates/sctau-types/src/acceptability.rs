//! Language acceptability for SCT-AU descriptions.
//!
//! This module provides the enum representation of the attribute values
//! assignable to a member of the Australian Dialect Reference Set (ADRS).

use std::fmt;

use crate::{well_known, SctId};

/// Language acceptability of a description under the Australian Dialect
/// Reference Set (ADRS).
///
/// Each member of the ADRS carries an attribute value (itself a concept
/// SCTID) marking the referenced description as the preferred or an
/// acceptable en-AU term. A description with no ADRS membership, or with an
/// unrecognized attribute value, has no acceptability.
///
/// # Examples
///
/// ```
/// use sctau_types::LanguageAcceptability;
///
/// let acceptability = LanguageAcceptability::for_sctid(Some(900000000000548007));
/// assert_eq!(acceptability, LanguageAcceptability::Preferred);
///
/// // Absent or unrecognized values default to None
/// assert_eq!(LanguageAcceptability::for_sctid(Option::None), LanguageAcceptability::None);
/// assert_eq!(LanguageAcceptability::for_sctid(Some(12345)), LanguageAcceptability::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LanguageAcceptability {
    /// No ADRS acceptability assigned to the description.
    None,
    /// The en-AU preferred term for the concept.
    Preferred,
    /// An en-AU acceptable term for the concept.
    Acceptable,
}

impl LanguageAcceptability {
    /// SCTID for the preferred acceptability value.
    pub const PREFERRED_ID: SctId = well_known::PREFERRED;
    /// SCTID for the acceptable acceptability value.
    pub const ACCEPTABLE_ID: SctId = well_known::ACCEPTABLE;

    /// Creates a LanguageAcceptability from an ADRS attribute value SCTID.
    ///
    /// Returns [`LanguageAcceptability::None`] when the id is absent or does
    /// not match a known acceptability value.
    pub fn for_sctid(id: Option<SctId>) -> Self {
        match id {
            Some(Self::PREFERRED_ID) => Self::Preferred,
            Some(Self::ACCEPTABLE_ID) => Self::Acceptable,
            _ => Self::None,
        }
    }

    /// Returns the SCTID for this acceptability.
    ///
    /// Returns `None` for [`LanguageAcceptability::None`], which has no
    /// concept id of its own.
    pub fn to_sctid(self) -> Option<SctId> {
        match self {
            Self::None => None,
            Self::Preferred => Some(Self::PREFERRED_ID),
            Self::Acceptable => Some(Self::ACCEPTABLE_ID),
        }
    }
}

impl fmt::Display for LanguageAcceptability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Preferred => write!(f, "PREFERRED"),
            Self::Acceptable => write!(f, "ACCEPTABLE"),
        }
    }
}

//! Section identifiers for the pitch page.
//!
//! The set of sections is closed and ordered. Resolution walks sections in
//! [`SECTION_ORDER`] and the navigation bar lists them in the same order.

use crate::error::NavError;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// One of the four logical regions of the page.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// The opening problem statement.
    #[default]
    Problem,
    /// The proposed future state.
    Future,
    /// The technical architecture.
    Technical,
    /// Business value and roadmap.
    Value,
}

/// Declared section order. Earlier entries win resolution ties.
pub const SECTION_ORDER: [SectionId; 4] = [
    SectionId::Problem,
    SectionId::Future,
    SectionId::Technical,
    SectionId::Value,
];

impl SectionId {
    /// Stable identifier token, also used as the element anchor id.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Future => "future",
            Self::Technical => "technical",
            Self::Value => "value",
        }
    }

    /// Human-readable navigation button label.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Problem => "The Challenge",
            Self::Future => "The Vision",
            Self::Technical => "Architecture",
            Self::Value => "Impact",
        }
    }

    /// Position of this section in [`SECTION_ORDER`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Problem => 0,
            Self::Future => 1,
            Self::Technical => 2,
            Self::Value => 3,
        }
    }

    /// Look a section up by its navigation label (exact match).
    ///
    /// # Errors
    /// Returns [`NavError::UnknownLabel`] if no button carries `label`.
    pub fn from_label(label: &str) -> Result<Self, NavError> {
        SECTION_ORDER
            .into_iter()
            .find(|section| section.label() == label)
            .ok_or_else(|| NavError::UnknownLabel(label.to_owned()))
    }
}

impl Display for SectionId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = NavError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        SECTION_ORDER
            .into_iter()
            .find(|section| section.as_str() == token)
            .ok_or_else(|| NavError::UnknownSection(token.to_owned()))
    }
}

//! Two-dimensional features derived from phonetic codes.

use serde::{Deserialize, Serialize};

use crate::index::IndexEntry;
use crate::phonetic::PhoneticCode;

/// Weight of the leading-letter difference in [`FeatureVector::weighted_distance`].
pub const LEADING_WEIGHT: u32 = 10;

/// Clustering feature of a phonetic code.
///
/// `leading_ordinal` is the codepoint of the code's letter (65..=90) and
/// `trailing_magnitude` the integer value of its digits (0..=666). The two
/// axes are used unscaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Codepoint of the leading letter
    pub leading_ordinal: u32,
    /// Value of the three trailing digits
    pub trailing_magnitude: u32,
}

impl FeatureVector {
    /// Project a code onto the feature plane.
    #[inline]
    pub fn from_code(code: &PhoneticCode) -> Self {
        Self {
            leading_ordinal: u32::from(code.letter()),
            trailing_magnitude: code.magnitude(),
        }
    }

    /// The feature as a point for geometric clustering.
    #[inline]
    pub fn as_point(&self) -> [f64; 2] {
        [
            f64::from(self.leading_ordinal),
            f64::from(self.trailing_magnitude),
        ]
    }

    /// Ranking distance: `10 * |Δleading| + |Δtrailing|`.
    #[inline]
    pub fn weighted_distance(&self, other: &Self) -> u32 {
        LEADING_WEIGHT * self.leading_ordinal.abs_diff(other.leading_ordinal)
            + self.trailing_magnitude.abs_diff(other.trailing_magnitude)
    }
}

impl From<&PhoneticCode> for FeatureVector {
    fn from(code: &PhoneticCode) -> Self {
        Self::from_code(code)
    }
}

/// Project an index entry onto the feature plane.
#[inline]
pub fn project(entry: &IndexEntry) -> FeatureVector {
    FeatureVector::from_code(&entry.code)
}

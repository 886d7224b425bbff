use std::fmt;

use crate::richness::Richness;

/// Non-fatal problems found while scoring one document.
///
/// Records are still produced; the warning travels with them so the operator
/// can judge the affected rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataQualityWarning {
    /// Fewer memory markers resolved than expected.
    MemoryCountMismatch { found: usize, expected: usize },

    /// Richness marker count differs from the expected memory count.
    RichnessCountMismatch {
        found: usize,
        expected: usize,
        codes: Vec<Richness>,
    },

    /// Ratings were paired with memories by position while the counts differ,
    /// so some memories may carry another memory's rating.
    PositionalPairing { memories: usize, codes: usize },

    /// A `[ER` marker too short to hold a rating.
    ShortRichnessMarker { paragraph: usize },

    /// The first substantial paragraph after a marker lies past the next marker.
    ResponseOutsideSection {
        memory: usize,
        response: usize,
        end: usize,
    },
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemoryCountMismatch { found, expected } => write!(
                f,
                "number of memories found does not match number expected: {found} found, expected {expected}"
            ),
            Self::RichnessCountMismatch {
                found,
                expected,
                codes,
            } => {
                let codes: Vec<String> = codes.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "number of episodic richness codes does not match number of memories expected: {found} found, expected {expected} [{}]",
                    codes.join(", ")
                )
            }
            Self::PositionalPairing { memories, codes } => write!(
                f,
                "{codes} richness code(s) paired by position with {memories} memories; ratings may be misaligned"
            ),
            Self::ShortRichnessMarker { paragraph } => {
                write!(f, "richness marker at paragraph {paragraph} has no rating")
            }
            Self::ResponseOutsideSection {
                memory,
                response,
                end,
            } => write!(
                f,
                "memory {memory}: first response paragraph {response} is past the section end {end}; no tags counted"
            ),
        }
    }
}

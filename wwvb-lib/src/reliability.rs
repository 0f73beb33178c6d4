use std::fmt;

/// Worst-second scores below this tier as [`Reliability::LikelyOk`].
pub const LIKELY_OK_BELOW: u32 = 7;

/// Worst-second scores below this (and at or above [`LIKELY_OK_BELOW`]) tier
/// as [`Reliability::NotReliable`]; anything higher is
/// [`Reliability::ProbablyBad`].
pub const NOT_RELIABLE_BELOW: u32 = 10;

/// Coarse confidence tier for a decode, judged from the worst single-second
/// error score across the frame.
///
/// The thresholds are empirical, tuned against real receptions at the
/// reference 40 samples/second; treat them as approximate rather than
/// contractual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Reliability {
    LikelyOk,
    NotReliable,
    ProbablyBad,
}

impl Reliability {
    #[must_use]
    pub fn classify(worst_score: u32) -> Self {
        if worst_score < LIKELY_OK_BELOW {
            Reliability::LikelyOk
        } else if worst_score < NOT_RELIABLE_BELOW {
            Reliability::NotReliable
        } else {
            Reliability::ProbablyBad
        }
    }
}

impl fmt::Display for Reliability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Reliability::LikelyOk => "LIKELY OK",
            Reliability::NotReliable => "NOT RELIABLE",
            Reliability::ProbablyBad => "PROBABLY BAD",
        })
    }
}

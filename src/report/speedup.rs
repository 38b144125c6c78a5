//! Speedup of a candidate relative to a baseline.

use std::cmp::Ordering;
use std::fmt;

/// How a candidate time compares to a baseline time.
///
/// Rendered with one decimal: `2.0x faster`, `2.0x slower`, `same`, or `∞`
/// when the candidate took no measurable time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Speedup {
    /// Candidate time is zero.
    Unbounded,
    /// `baseline / candidate` when it is above 1.
    Faster(f64),
    /// `candidate / baseline` when the candidate is slower.
    Slower(f64),
    Same,
}

impl Speedup {
    /// Compare `candidate_ns` against `baseline_ns`.
    #[must_use]
    pub fn between(baseline_ns: f64, candidate_ns: f64) -> Self {
        if candidate_ns <= 0.0 {
            return Self::Unbounded;
        }
        let ratio = baseline_ns / candidate_ns;
        match ratio.partial_cmp(&1.0) {
            Some(Ordering::Greater) => Self::Faster(ratio),
            Some(Ordering::Less) => Self::Slower(1.0 / ratio),
            Some(Ordering::Equal) | None => Self::Same,
        }
    }
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "∞"),
            Self::Faster(ratio) => write!(f, "{ratio:.1}x faster"),
            // A zero baseline makes every candidate infinitely slower.
            Self::Slower(factor) if factor.is_infinite() => write!(f, "∞x slower"),
            Self::Slower(factor) => write!(f, "{factor:.1}x slower"),
            Self::Same => write!(f, "same"),
        }
    }
}

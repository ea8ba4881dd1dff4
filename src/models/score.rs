//! Aggregate label score for a patch.
//!
//! A score is either the NO_DATA sentinel (the label has no votes at all),
//! a plain integer, or one of two distinguished consensus tags. The tags
//! are deliberately distinct from `Int(1)`/`Int(2)`: `+1`/`+2` mean
//! "everyone agreed within the lenient window", while a plain integer is
//! the raw minimum vote.

use std::fmt;

/// Derived score for one label of one patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// The label carries no votes; distinguishable from a computed zero.
    NoData,
    /// Raw aggregate value, usually the minimum vote.
    Int(i32),
    /// Consensus tag: ceiling of +1 with no dissent below the floor.
    PlusOne,
    /// Consensus tag: ceiling of +2 with no dissent below the floor.
    PlusTwo,
}

impl Score {
    /// Aggregate for a label containing a vote without a value.
    ///
    /// Outside every recognized range, so classification resolves to
    /// Invalid and bucketing lands in the invalid column.
    pub const MALFORMED: Score = Score::Int(i32::MIN);

    /// Numeric equivalent used for ordering-style checks, if any.
    pub fn numeric(self) -> Option<i32> {
        match self {
            Score::NoData => None,
            Score::Int(i32::MIN) => None,
            Score::Int(n) => Some(n),
            Score::PlusOne => Some(1),
            Score::PlusTwo => Some(2),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::NoData => write!(f, "?"),
            Score::Int(i32::MIN) => write!(f, "?"),
            Score::Int(n) => write!(f, "{}", n),
            Score::PlusOne => write!(f, "+1"),
            Score::PlusTwo => write!(f, "+2"),
        }
    }
}

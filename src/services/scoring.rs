//! Score derivation from a patch's multi-voter label data.
//!
//! The two labels aggregate asymmetrically on purpose: verification
//! substitutes zero for unvalued votes and collapses everything outside
//! {-1, 0, 1} to zero, while code review keeps the raw minimum so that a
//! single objection blocks approval. Scores are pure functions of the
//! patch; nothing here mutates state.

use crate::models::{Patch, Score, CODE_REVIEW_LABEL, VERIFIED_LABEL};

/// Derive the verification score for a patch.
///
/// No votes → `NoData`. A maximum of exactly 1 wins over everything else
/// and yields the `+1` consensus tag; otherwise a minimum of -1 yields
/// `Int(-1)`, and anything else collapses to `Int(0)`.
pub fn verification_score(patch: &Patch) -> Score {
    let Some(votes) = patch.votes(VERIFIED_LABEL) else {
        return Score::NoData;
    };
    if votes.is_empty() {
        return Score::NoData;
    }

    let mut max = i32::MIN;
    let mut min = i32::MAX;
    for vote in votes {
        let value = vote.value.unwrap_or(0);
        max = max.max(value);
        min = min.min(value);
    }

    if max == 1 {
        Score::PlusOne
    } else if min == -1 {
        Score::Int(-1)
    } else {
        Score::Int(0)
    }
}

/// Derive the code-review score for a patch.
///
/// No votes → `NoData`. A vote without a value poisons the aggregate (no
/// zero-substitution on this label) and the score resolves to
/// `Score::MALFORMED`. Otherwise: max 2 with a 0 floor → `+2` tag, max 1
/// with a 0 floor → `+1` tag, anything else → the plain minimum.
pub fn review_score(patch: &Patch) -> Score {
    let Some(votes) = patch.votes(CODE_REVIEW_LABEL) else {
        return Score::NoData;
    };
    if votes.is_empty() {
        return Score::NoData;
    }

    let mut max = i32::MIN;
    let mut min = i32::MAX;
    for vote in votes {
        let Some(value) = vote.value else {
            log::warn!(
                "[scoring] Code-Review vote without value from '{}' on change {}",
                vote.name,
                patch.number
            );
            return Score::MALFORMED;
        };
        max = max.max(value);
        min = min.min(value);
    }

    if max == 2 && min == 0 {
        Score::PlusTwo
    } else if max == 1 && min == 0 {
        Score::PlusOne
    } else {
        Score::Int(min)
    }
}

/// List the human reviewers of a patch as `name(value)` strings.
///
/// The automation account is filtered out; a vote of exactly 1 renders as
/// `+1`; order follows the vote list as received.
pub fn code_reviewers(patch: &Patch, automation_voter: &str) -> Vec<String> {
    let Some(votes) = patch.votes(CODE_REVIEW_LABEL) else {
        return Vec::new();
    };
    votes
        .iter()
        .filter(|vote| vote.name != automation_voter)
        .map(|vote| {
            let value = vote.value.unwrap_or(0);
            if value == 1 {
                format!("{}(+1)", vote.name)
            } else {
                format!("{}({})", vote.name, value)
            }
        })
        .collect()
}

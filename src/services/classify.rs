//! Patch classification decision table.

use crate::models::{Category, Patch, Score};

/// Map a patch and its two scores to one display category.
///
/// Pure decision table: the work-in-progress flag dominates both scores;
/// a verified (+1) patch sub-classifies on the review score; anomalous
/// score values are logged and resolve to a visible category rather than
/// aborting the batch.
pub fn classify(patch: &Patch, v_score: Score, cr_score: Score) -> Category {
    if patch.work_in_progress {
        return Category::WorkInProgress;
    }

    match v_score {
        Score::PlusOne => match cr_score {
            // A raw minimum of 2 or 1 means everyone voted at that level
            // without a 0 floor; it ranks the same as the consensus tag.
            Score::PlusTwo | Score::Int(2) => Category::VerifiedWith2,
            Score::PlusOne | Score::Int(1) => Category::VerifiedWith1,
            Score::Int(0) => Category::VerifiedWith0,
            Score::Int(-1) => Category::VerifiedWithNeg1,
            Score::Int(-2) => Category::VerifiedWithNeg2,
            other => {
                log::warn!(
                    "[classify] invalid review score {:?} for change {}",
                    other,
                    patch.number
                );
                Category::Invalid
            }
        },
        // Reachable only when a voter can cast Verified -1 directly.
        Score::Int(-1) => Category::NotVerifiedVerifiedNeg1,
        Score::Int(-2) => Category::NotVerifiedVerifiedNeg2,
        Score::Int(0) => Category::NotVerified,
        Score::NoData => Category::NoVerificationData,
        other => {
            log::warn!(
                "[classify] unrecognized verification score {:?} for change {}",
                other,
                patch.number
            );
            Category::NoVerificationData
        }
    }
}

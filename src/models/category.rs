//! Display category for a classified patch.

/// One discrete dashboard category per patch per report cycle.
///
/// The CSS class strings are the presentation contract; the legend table
/// and row styling key off them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    WorkInProgress,
    VerifiedWith2,
    VerifiedWith1,
    VerifiedWith0,
    VerifiedWithNeg1,
    VerifiedWithNeg2,
    NotVerifiedVerifiedNeg1,
    NotVerifiedVerifiedNeg2,
    NotVerified,
    NoVerificationData,
    Invalid,
}

impl Category {
    /// CSS class attribute value for the patch's table row.
    pub fn css_class(self) -> &'static str {
        match self {
            Category::WorkInProgress => "WIP",
            Category::VerifiedWith2 => "VerifiedWith2",
            Category::VerifiedWith1 => "VerifiedWith1",
            Category::VerifiedWith0 => "VerifiedWith0",
            Category::VerifiedWithNeg1 => "VerifiedWithNeg1",
            Category::VerifiedWithNeg2 => "VerifiedWithNeg2",
            Category::NotVerifiedVerifiedNeg1 => "NotVerified Verified-1",
            Category::NotVerifiedVerifiedNeg2 => "NotVerified Verified-2",
            Category::NotVerified => "NotVerified",
            Category::NoVerificationData => "NoVerificationData",
            Category::Invalid => "INVALID",
        }
    }
}

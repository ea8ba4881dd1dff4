//! Bucket grid for rendered report rows.
//!
//! One list for work-in-progress patches plus a fixed 4×6 matrix indexed
//! by (verification score, review score). Index mapping is total: every
//! score value lands somewhere, unrecognized values in the invalid slot.
//! The grid is owned by a single report build; rows never move between
//! cells after insertion.

use crate::models::Score;

/// Verification axis slots: -1, 0, +1, invalid/no-data.
pub const V_SLOTS: usize = 4;

/// Review axis slots: -2, -1, 0, +1, +2, invalid/no-data.
pub const CR_SLOTS: usize = 6;

/// Display labels for the verification axis, in grid index order.
pub const V_LABELS: [&str; V_SLOTS] = ["-1", "0", "+1", "invalid"];

/// Display labels for the review axis, in grid index order.
pub const CR_LABELS: [&str; CR_SLOTS] = ["-2", "-1", "0", "+1", "+2", "invalid"];

/// The bucket grid for one report build.
#[derive(Debug, Default)]
pub struct ReviewGrid {
    wip: Vec<String>,
    cells: [[Vec<String>; CR_SLOTS]; V_SLOTS],
}

/// Per-bucket row counts, the shared read path for the statistics view
/// and the notification summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCounts {
    pub wip: usize,
    pub cells: [[usize; CR_SLOTS]; V_SLOTS],
}

impl GridCounts {
    /// Total rows across all cells plus the work-in-progress list.
    pub fn total(&self) -> usize {
        self.wip
            + self
                .cells
                .iter()
                .flat_map(|row| row.iter())
                .sum::<usize>()
    }
}

/// Map a verification score to its grid row index. Total: unrecognized
/// values map to the invalid slot.
pub fn v_index(score: Score) -> usize {
    match score {
        Score::Int(-1) => 0,
        Score::Int(0) => 1,
        Score::PlusOne | Score::Int(1) => 2,
        _ => 3,
    }
}

/// Map a review score to its grid column index. Total, like [`v_index`].
pub fn cr_index(score: Score) -> usize {
    match score {
        Score::Int(-2) => 0,
        Score::Int(-1) => 1,
        Score::Int(0) => 2,
        Score::PlusOne | Score::Int(1) => 3,
        Score::PlusTwo | Score::Int(2) => 4,
        _ => 5,
    }
}

impl ReviewGrid {
    /// An empty grid: one empty wip list, 24 empty cells.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rendered row to the wip list or to the cell the two
    /// scores map to. Never fails.
    pub fn push_row(&mut self, v_score: Score, cr_score: Score, row: String, is_wip: bool) {
        if is_wip {
            self.wip.push(row);
        } else {
            self.cells[v_index(v_score)][cr_index(cr_score)].push(row);
        }
    }

    /// Rows of one cell by grid indices.
    pub fn cell(&self, vi: usize, ci: usize) -> &[String] {
        &self.cells[vi][ci]
    }

    /// Rows of the work-in-progress list.
    pub fn wip_rows(&self) -> &[String] {
        &self.wip
    }

    /// Snapshot of all bucket sizes.
    pub fn counts(&self) -> GridCounts {
        let mut cells = [[0usize; CR_SLOTS]; V_SLOTS];
        for (vi, row) in self.cells.iter().enumerate() {
            for (ci, cell) in row.iter().enumerate() {
                cells[vi][ci] = cell.len();
            }
        }
        GridCounts {
            wip: self.wip.len(),
            cells,
        }
    }

    /// Total rows held by the grid.
    pub fn total_rows(&self) -> usize {
        self.counts().total()
    }
}

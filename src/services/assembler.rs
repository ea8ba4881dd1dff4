//! Report assembly from the bucket grid.
//!
//! Flattening is a presentation contract: verified work first, review
//! scores high to low within each verification group, work-in-progress
//! spliced between the verified and not-yet-verified groups, and the
//! fully-invalid bucket trailing. The cross-tab and the notification
//! summary both read bucket sizes only, never the flattened rows.

use crate::services::grid::{GridCounts, ReviewGrid, CR_LABELS, CR_SLOTS, V_LABELS, V_SLOTS};

/// Verification rows in flatten priority order: +1, 0, -1, no-data.
const V_FLATTEN_ORDER: [usize; V_SLOTS] = [2, 1, 0, 3];

/// Review columns in flatten priority order: +2, +1, 0, -1, -2.
const CR_FLATTEN_ORDER: [usize; CR_SLOTS - 1] = [4, 3, 2, 1, 0];

/// Flatten the grid into the report body.
///
/// The wip list follows the +1-verification group; the invalid×invalid
/// cell comes last. Cells in the invalid review column of valid
/// verification rows are not part of the sequence (they remain visible
/// through the cross-tab).
pub fn flatten(grid: &ReviewGrid) -> String {
    let mut body = String::new();
    for (group, &vi) in V_FLATTEN_ORDER.iter().enumerate() {
        for &ci in &CR_FLATTEN_ORDER {
            for row in grid.cell(vi, ci) {
                body.push_str(row);
            }
        }
        if group == 0 {
            for row in grid.wip_rows() {
                body.push_str(row);
            }
        }
    }
    for row in grid.cell(V_SLOTS - 1, CR_SLOTS - 1) {
        body.push_str(row);
    }
    body
}

/// One statistics row: a verification-axis label and its six bucket sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossTabRow {
    pub verification: &'static str,
    pub counts: [usize; CR_SLOTS],
}

/// Cross-tabulate bucket sizes, one row per verification slot in grid
/// index order.
pub fn cross_tab(counts: &GridCounts) -> Vec<CrossTabRow> {
    V_LABELS
        .iter()
        .enumerate()
        .map(|(vi, &verification)| CrossTabRow {
            verification,
            counts: counts.cells[vi],
        })
        .collect()
}

/// Format the distribution as a fixed-width text table for the push
/// notification, including the work-in-progress count.
pub fn summary_table(counts: &GridCounts) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>8}", "V\\CR"));
    for label in CR_LABELS {
        out.push_str(&format!("{:>9}", label));
    }
    out.push('\n');
    for row in cross_tab(counts) {
        out.push_str(&format!("{:>8}", row.verification));
        for count in row.counts {
            out.push_str(&format!("{:>9}", count));
        }
        out.push('\n');
    }
    out.push_str(&format!("{:>8}{:>9}\n", "WIP", counts.wip));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Score;
    use crate::services::grid::ReviewGrid;

    /// One marker row per flatten group, inserted out of order.
    fn marked_grid() -> ReviewGrid {
        let mut grid = ReviewGrid::new();
        let groups = [
            (Score::PlusOne, Score::PlusTwo, "v1cr2;"),
            (Score::PlusOne, Score::PlusOne, "v1cr1;"),
            (Score::PlusOne, Score::Int(0), "v1cr0;"),
            (Score::PlusOne, Score::Int(-1), "v1crn1;"),
            (Score::PlusOne, Score::Int(-2), "v1crn2;"),
            (Score::Int(0), Score::PlusTwo, "v0cr2;"),
            (Score::Int(0), Score::Int(-2), "v0crn2;"),
            (Score::Int(-1), Score::PlusTwo, "vn1cr2;"),
            (Score::Int(-1), Score::Int(-2), "vn1crn2;"),
            (Score::NoData, Score::PlusTwo, "vxcr2;"),
            (Score::NoData, Score::NoData, "vxcrx;"),
        ];
        for (v, cr, row) in groups.iter().rev() {
            grid.push_row(*v, *cr, row.to_string(), false);
        }
        grid.push_row(Score::NoData, Score::NoData, "wip;".into(), true);
        grid
    }

    #[test]
    fn test_flatten_group_order() {
        let body = flatten(&marked_grid());
        assert_eq!(
            body,
            "v1cr2;v1cr1;v1cr0;v1crn1;v1crn2;wip;v0cr2;v0crn2;vn1cr2;vn1crn2;vxcr2;vxcrx;"
        );
    }

    #[test]
    fn test_flatten_preserves_insertion_order_within_cell() {
        let mut grid = ReviewGrid::new();
        grid.push_row(Score::PlusOne, Score::PlusTwo, "first;".into(), false);
        grid.push_row(Score::PlusOne, Score::PlusTwo, "second;".into(), false);
        assert_eq!(flatten(&grid), "first;second;");
    }

    #[test]
    fn test_flatten_skips_invalid_column_of_valid_rows() {
        let mut grid = ReviewGrid::new();
        grid.push_row(Score::Int(0), Score::MALFORMED, "hidden;".into(), false);
        assert_eq!(flatten(&grid), "");
        // Still counted for the statistics view.
        assert_eq!(grid.counts().cells[1][5], 1);
    }

    #[test]
    fn test_cross_tab_labels_and_counts() {
        let grid = marked_grid();
        let rows = cross_tab(&grid.counts());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].verification, "-1");
        assert_eq!(rows[1].verification, "0");
        assert_eq!(rows[2].verification, "+1");
        assert_eq!(rows[3].verification, "invalid");
        // +1 row has one row in each of the five valid review columns.
        assert_eq!(rows[2].counts, [1, 1, 1, 1, 1, 0]);
        // no-data row: one at CR+2, one at invalid×invalid.
        assert_eq!(rows[3].counts, [0, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn test_summary_table_shape() {
        let grid = marked_grid();
        let table = summary_table(&grid.counts());
        let lines: Vec<&str> = table.lines().collect();
        // Header + four verification rows + WIP line.
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("V\\CR"));
        assert!(lines[0].contains("invalid"));
        assert!(lines[3].trim_start().starts_with("+1"));
        assert!(lines[5].contains("WIP"));
        assert!(lines[5].trim_end().ends_with('1'));
    }
}

//! End-to-end report pipeline verification.
//!
//! Feeds a Gerrit-shaped batch through deserialization, scoring,
//! classification, bucketing, and flattening, and checks the presentation
//! contract: group ordering, cache idempotence, force-refresh isolation,
//! and reviewer rendering.

use gerrit_dashboard::models::Patch;
use gerrit_dashboard::services::ReportCache;
use serde_json::json;
use std::time::Duration;

const URL_BASE: &str = "https://review.example.org";

fn patch(
    number: i64,
    verified: &[(&str, Option<i64>)],
    review: &[(&str, Option<i64>)],
    wip: bool,
) -> Patch {
    let votes = |entries: &[(&str, Option<i64>)]| {
        json!({
            "all": entries
                .iter()
                .map(|(name, value)| match value {
                    Some(v) => json!({ "name": name, "value": v }),
                    None => json!({ "name": name }),
                })
                .collect::<Vec<_>>()
        })
    };

    let mut labels = serde_json::Map::new();
    if !verified.is_empty() {
        labels.insert("Verified".into(), votes(verified));
    }
    if !review.is_empty() {
        labels.insert("Code-Review".into(), votes(review));
    }

    serde_json::from_value(json!({
        "_number": number,
        "subject": format!("Change {}", number),
        "owner": { "name": format!("owner{}", number) },
        "project": "platform/core",
        "work_in_progress": wip,
        "labels": labels,
    }))
    .expect("valid patch json")
}

fn cache() -> ReportCache {
    ReportCache::new(Duration::from_secs(600), URL_BASE, "jenkins")
}

/// One patch per flatten group, supplied in reverse order; the report
/// must come out in the fixed priority order regardless.
#[tokio::test]
async fn report_orders_groups_by_priority() {
    let jenkins_ok: &[(&str, Option<i64>)] = &[("jenkins", Some(1))];
    let batch = vec![
        // v = no-data group
        patch(110, &[], &[("alice", Some(2)), ("bob", Some(0))], false),
        patch(111, &[], &[], false),
        // v = -1 group
        patch(90, &[("jenkins", Some(-1))], &[("alice", Some(2)), ("bob", Some(0))], false),
        patch(91, &[("jenkins", Some(-1))], &[("alice", Some(-2))], false),
        // v = 0 group
        patch(80, &[("jenkins", Some(0))], &[("alice", Some(2)), ("bob", Some(0))], false),
        patch(81, &[("jenkins", Some(0))], &[("alice", Some(-2))], false),
        // wip, spliced after the verified group
        patch(70, jenkins_ok, &[("alice", Some(2)), ("bob", Some(0))], true),
        // v = +1 group, one patch per review column
        patch(15, jenkins_ok, &[("alice", Some(2)), ("bob", Some(0))], false),
        patch(14, jenkins_ok, &[("alice", Some(1)), ("bob", Some(0))], false),
        patch(13, jenkins_ok, &[("alice", Some(0))], false),
        patch(12, jenkins_ok, &[("alice", Some(-1))], false),
        patch(11, jenkins_ok, &[("alice", Some(-2))], false),
    ];

    let report = cache().get_or_build(&batch, false).await.unwrap();

    let expected_order = [15, 14, 13, 12, 11, 70, 80, 81, 90, 91, 110, 111];
    let positions: Vec<usize> = expected_order
        .iter()
        .map(|n| {
            report
                .body
                .find(&format!(">{}</a>", n))
                .unwrap_or_else(|| panic!("change {} missing from report", n))
        })
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "groups out of priority order");

    // Every patch landed in exactly one bucket.
    assert_eq!(report.counts.total(), batch.len());
    assert_eq!(report.counts.wip, 1);
}

#[tokio::test]
async fn cache_reads_are_idempotent() {
    let batch = vec![
        patch(1, &[("jenkins", Some(1))], &[("alice", Some(1)), ("bob", Some(0))], false),
        patch(2, &[], &[], false),
    ];
    let cache = cache();

    let first = cache.get_or_build(&batch, false).await.unwrap();
    let second = cache.get_or_build(&batch, false).await.unwrap();
    assert_eq!(first.body, second.body);
    assert_eq!(first.built_at, second.built_at);
    assert_eq!(second.counts.total(), 2);
}

#[tokio::test]
async fn force_refresh_drops_prior_rows() {
    let cache = cache();
    let first_batch = vec![patch(1, &[("jenkins", Some(1))], &[("alice", Some(0))], false)];
    let report = cache.get_or_build(&first_batch, false).await.unwrap();
    assert!(report.body.contains(">1</a>"));

    let second_batch = vec![patch(2, &[("jenkins", Some(1))], &[("alice", Some(0))], false)];
    let rebuilt = cache.get_or_build(&second_batch, true).await.unwrap();
    assert!(rebuilt.body.contains(">2</a>"));
    assert!(!rebuilt.body.contains(">1</a>"));
    assert_eq!(rebuilt.counts.total(), 1);
}

/// Automation votes never show up as reviewers; a vote of 1 renders +1.
#[tokio::test]
async fn reviewer_cell_filters_automation_voter() {
    let batch = vec![patch(
        5,
        &[("jenkins", Some(1))],
        &[("jenkins", Some(2)), ("alice", Some(1))],
        false,
    )];

    let report = cache().get_or_build(&batch, false).await.unwrap();
    assert!(report.body.contains("alice(+1)"));
    assert!(!report.body.contains("jenkins("));
}

/// An unvalued Code-Review vote poisons the patch into the invalid
/// bucket; the patch stays countable but leaves the dashboard body.
#[tokio::test]
async fn malformed_review_vote_is_contained() {
    let batch = vec![
        patch(1, &[("jenkins", Some(1))], &[("alice", None)], false),
        patch(2, &[("jenkins", Some(1))], &[("alice", Some(0))], false),
    ];

    let report = cache().get_or_build(&batch, false).await.unwrap();
    // The malformed patch never aborts the batch.
    assert!(report.body.contains(">2</a>"));
    assert_eq!(report.counts.total(), 2);
    // It lands in the +1 verification row's invalid review column.
    assert_eq!(report.counts.cells[2][5], 1);
}

/// Statistics and the report body describe the same grid.
#[tokio::test]
async fn stats_reflect_the_report_grid() {
    let batch = vec![
        patch(1, &[("jenkins", Some(1))], &[("alice", Some(2)), ("bob", Some(0))], false),
        patch(2, &[("jenkins", Some(1))], &[("alice", Some(2)), ("bob", Some(0))], false),
        patch(3, &[("jenkins", Some(0))], &[], false),
        patch(4, &[], &[], true),
    ];

    let report = cache().get_or_build(&batch, false).await.unwrap();
    // Two verified patches at CR+2.
    assert_eq!(report.counts.cells[2][4], 2);
    // One unverified patch with no review data.
    assert_eq!(report.counts.cells[1][5], 1);
    assert_eq!(report.counts.wip, 1);
    assert_eq!(report.counts.total(), 4);
}

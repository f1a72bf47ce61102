//! Freshness detection with a fixed clock

use chrono::{DateTime, Duration, TimeZone, Utc};
use ctx_core::{Freshness, FreshnessBasis, StateDetector, mark_generated};
use ctx_test_utils::TestRepo;
use rstest::rstest;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
}

#[rstest]
#[case::same_day(0, 7, Freshness::Fresh)]
#[case::at_threshold(7, 7, Freshness::Fresh)]
#[case::past_threshold(8, 7, Freshness::Outdated)]
#[case::custom_threshold(8, 14, Freshness::Fresh)]
#[case::zero_threshold(1, 0, Freshness::Outdated)]
fn classification_follows_threshold(
    #[case] age_days: i64,
    #[case] threshold: i64,
    #[case] expected: Freshness,
) {
    let repo = TestRepo::new();
    mark_generated(&repo.normalized_root(), fixed_now() - Duration::days(age_days)).unwrap();

    let state = StateDetector::new(repo.normalized_root())
        .with_threshold_days(threshold)
        .with_now(fixed_now())
        .detect();

    assert_eq!(state.freshness, expected);
    assert_eq!(state.days_behind, Some(age_days));
    assert_eq!(state.threshold_days, threshold);
    assert_eq!(state.basis, FreshnessBasis::Marker);
}

#[test]
fn marker_written_as_rfc3339() {
    let repo = TestRepo::new();
    let path = mark_generated(&repo.normalized_root(), fixed_now()).unwrap();

    assert!(path.as_str().ends_with(".context/.last-generated"));
    assert_eq!(repo.read(".context/.last-generated").trim(), "2026-03-15T12:00:00+00:00");
}

#[test]
fn garbled_marker_falls_back_to_its_mtime() {
    let repo = TestRepo::new();
    repo.write(".context/.last-generated", "yesterday-ish\n");

    let state = StateDetector::new(repo.normalized_root()).detect();

    assert_eq!(state.basis, FreshnessBasis::MarkerModified);
    assert_eq!(state.freshness, Freshness::Fresh);
    assert_eq!(state.days_behind, Some(0));
}

#[test]
fn docs_mtime_used_without_marker() {
    let repo = TestRepo::new();
    repo.write(".context/docs/overview.md", "# Overview\n");
    repo.write(".context/docs/notes.txt", "ignored\n");

    // Far-future clock makes the just-written doc look old
    let later = Utc::now() + Duration::days(40);
    let state = StateDetector::new(repo.normalized_root())
        .with_now(later)
        .detect();

    assert_eq!(state.basis, FreshnessBasis::DocsModified);
    assert_eq!(state.freshness, Freshness::Outdated);
    assert!(state.days_behind.unwrap() >= 39);
}

#[test]
fn detection_never_writes() {
    let repo = TestRepo::new();

    let state = StateDetector::new(repo.normalized_root()).detect();

    assert_eq!(state.freshness, Freshness::Unknown);
    assert_eq!(state.last_generated, None);
    assert!(repo.list_dir("").is_empty());
}

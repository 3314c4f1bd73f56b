//! Integration tests for filtering, sorting, comparison and statistics
//!
//! Runs the calculator against the built-in catalog, plus property tests
//! over generated records.

use gpu_bench::calculator::{
    compare_records, compute_benchmark_view, compute_statistics, filter_records, format_score,
    max_score, percentage_diff, score_percentage, search_suggestions, sort_records, FilterCriteria,
};
use gpu_bench::{Brand, Catalog, Filter, GpuRecord, ScoreType, Scores, SortOrder};
use proptest::prelude::*;

fn builtin() -> Vec<GpuRecord> {
    Catalog::builtin().records().to_vec()
}

// ============================================================================
// Built-in catalog
// ============================================================================

#[test]
fn test_top_time_spy_is_flagship() {
    let records = builtin();
    let sorted = sort_records(&records, ScoreType::TimeSpy, SortOrder::Desc);
    assert_eq!(sorted[0].name, "RTX 5090D");
    assert_eq!(max_score(&records, ScoreType::TimeSpy), 48732);
}

#[test]
fn test_brand_filters_partition_catalog() {
    let records = builtin();
    let count = |filter| filter_records(&records, &FilterCriteria::new("", filter)).len();

    assert_eq!(count(Filter::All), records.len());
    assert_eq!(count(Filter::Nvidia) + count(Filter::Amd) + count(Filter::Intel), records.len());
    assert_eq!(count(Filter::Desktop) + count(Filter::Mobile), records.len());
    assert_eq!(count(Filter::Intel), 6);
}

#[test]
fn test_search_is_case_insensitive_and_combines_with_filter() {
    let records = builtin();
    let hits = filter_records(&records, &FilterCriteria::new("rtx 40", Filter::Mobile));
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|r| r.mobile && r.name.starts_with("RTX 40")));
}

#[test]
fn test_unbenchmarked_scores_left_out_of_statistics() {
    let records = builtin();
    let laptop = records.iter().find(|r| r.name == "RTX 5050M").unwrap();
    assert_eq!(laptop.score(ScoreType::SteelNomad), 0);

    let all = compute_statistics(&records, ScoreType::TimeSpy);
    let nomad = compute_statistics(&records, ScoreType::SteelNomad);
    assert_eq!(all.count, records.len());
    assert!(nomad.count < all.count);
    assert!(nomad.min > 0);
}

#[test]
fn test_compare_flagships() {
    let records = builtin();
    let a = records.iter().find(|r| r.name == "RTX 4090").unwrap();
    let b = records.iter().find(|r| r.name == "RX 7900XTX").unwrap();

    let result = compare_records(a, b);
    assert_eq!(result.scores.len(), 4);
    let time_spy = result.for_score(ScoreType::TimeSpy).unwrap();
    assert_eq!(time_spy.winner.name, "RTX 4090");
    assert_eq!(time_spy.difference, 35856 - 30379);
    assert!((time_spy.percentage_diff - percentage_diff(35856.0, 30379.0)).abs() < 1e-9);
}

#[test]
fn test_benchmark_view_against_builtin_base() {
    let records = builtin();
    let base = records.iter().find(|r| r.name == "RTX 4080").unwrap().clone();
    let view = compute_benchmark_view(&records, &base, ScoreType::TimeSpy);

    let entry = view.iter().find(|e| e.is_base).unwrap();
    assert_eq!(entry.benchmark_percentage, 100.0);
    assert_eq!(entry.percentage_diff, 0.0);
    assert_eq!(view.iter().filter(|e| e.is_base).count(), 1);
}

#[test]
fn test_suggestions_are_limited() {
    let records = builtin();
    assert_eq!(search_suggestions("rtx", &records, 5).len(), 5);
    assert!(search_suggestions("r", &records, 5).is_empty());
    assert_eq!(search_suggestions("B580", &records, 5), vec!["ARC B580".to_string()]);
}

#[test]
fn test_format_score_samples() {
    assert_eq!(format_score(0), "0");
    assert_eq!(format_score(999), "999");
    assert_eq!(format_score(35856), "35,856");
    assert_eq!(format_score(1234567), "1,234,567");
}

// ============================================================================
// Properties
// ============================================================================

fn arb_record() -> impl Strategy<Value = GpuRecord> {
    (
        "[A-Z]{2,3} [0-9]{3,4}",
        prop_oneof![Just(Brand::Nvidia), Just(Brand::Amd), Just(Brand::Intel)],
        any::<bool>(),
        (0u32..60_000, 0u32..30_000, 0u32..40_000, 0u32..15_000),
    )
        .prop_map(|(name, brand, mobile, (ts, tse, pr, sn))| {
            GpuRecord::new(name, brand, mobile, Scores::new(ts, tse, pr, sn))
        })
}

proptest! {
    #[test]
    fn prop_sort_is_ordered_permutation(records in prop::collection::vec(arb_record(), 0..40)) {
        let sorted = sort_records(&records, ScoreType::PortRoyal, SortOrder::Desc);
        prop_assert_eq!(sorted.len(), records.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].score(ScoreType::PortRoyal) >= pair[1].score(ScoreType::PortRoyal));
        }

        let ascending = sort_records(&records, ScoreType::PortRoyal, SortOrder::Asc);
        for pair in ascending.windows(2) {
            prop_assert!(pair[0].score(ScoreType::PortRoyal) <= pair[1].score(ScoreType::PortRoyal));
        }
    }

    #[test]
    fn prop_filter_keeps_only_matches(
        records in prop::collection::vec(arb_record(), 0..40),
        query in "[a-z0-9 ]{0,3}",
    ) {
        let criteria = FilterCriteria::new(query.clone(), Filter::Mobile);
        let hits = filter_records(&records, &criteria);
        prop_assert!(hits.len() <= records.len());
        for hit in &hits {
            prop_assert!(hit.mobile);
            prop_assert!(hit.name.to_lowercase().contains(&query));
        }
    }

    #[test]
    fn prop_bar_percentage_bounded(records in prop::collection::vec(arb_record(), 1..40)) {
        let max = max_score(&records, ScoreType::TimeSpy);
        for record in &records {
            let pct = score_percentage(record.score(ScoreType::TimeSpy), max);
            prop_assert!((0.0..=100.0).contains(&pct));
        }
    }

    #[test]
    fn prop_statistics_ordered(records in prop::collection::vec(arb_record(), 0..40)) {
        let stats = compute_statistics(&records, ScoreType::SteelNomad);
        if stats.count > 0 {
            prop_assert!(stats.min <= stats.median && stats.median <= stats.max);
            prop_assert!(stats.average >= f64::from(stats.min) && stats.average <= f64::from(stats.max));
        }
    }

    #[test]
    fn prop_comparison_winner_has_higher_score(a in arb_record(), b in arb_record()) {
        for line in compare_records(&a, &b).scores {
            let winner_score = line.winner.score(line.score_type);
            prop_assert_eq!(winner_score, line.a_score.max(line.b_score));
            prop_assert!(line.percentage_diff >= 0.0);
        }
    }
}

//! View-models: plain data derived from the catalog and the interaction state.
//!
//! Nothing here paints; any front-end can consume these structs.

use crate::calculator::{
    self, compare_records, compute_benchmark_view, compute_statistics, filter_records,
    max_score, score_percentage, sort_records, FilterCriteria, Statistics,
};
use crate::models::{GpuRecord, ScoreType, SortOrder};
use crate::state::InteractionState;

/// Where a row sits relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselinePosition {
    Above,
    Base,
    Below,
}

/// Baseline annotation of one row in benchmark mode.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkAnnotation {
    pub benchmark_percentage: f64,
    pub percentage_diff: f64,
    pub position: BaselinePosition,
}

impl BenchmarkAnnotation {
    /// Short text shown next to the score.
    pub fn display_text(&self) -> String {
        match self.position {
            BaselinePosition::Base => "Baseline (100%)".to_string(),
            BaselinePosition::Above => format!("+{:.1}%", self.benchmark_percentage),
            BaselinePosition::Below => format!("{:.1}%", self.benchmark_percentage),
        }
    }
}

/// One row of the ranked list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    /// 1-based position in the displayed list
    pub rank: usize,
    pub record: GpuRecord,
    pub score: u32,
    /// Bar width relative to the best displayed score (0-100)
    pub bar_percentage: f64,
    pub in_comparison: bool,
    pub is_base: bool,
    pub benchmark: Option<BenchmarkAnnotation>,
}

/// The ranked, filtered list for the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub score_type: ScoreType,
    pub rows: Vec<ListRow>,
    pub max_score: u32,
    /// Rows matching the filter before truncation
    pub total_matches: usize,
}

/// Filter and sort the catalog the way the list shows it.
pub fn visible_records(records: &[GpuRecord], state: &InteractionState) -> Vec<GpuRecord> {
    let criteria = FilterCriteria::new(state.search_term.clone(), state.filter);
    let filtered = filter_records(records, &criteria);
    sort_records(&filtered, state.score_type, SortOrder::Desc)
}

/// Build the list view-model, keeping at most `max_items` rows.
pub fn build_list_view(records: &[GpuRecord], state: &InteractionState, max_items: usize) -> ListView {
    let score_type = state.score_type;
    let mut sorted = visible_records(records, state);
    let total_matches = sorted.len();
    sorted.truncate(max_items);

    let base = state.benchmark_base.as_ref().filter(|_| state.is_benchmark());
    let annotations: Option<Vec<BenchmarkAnnotation>> = base.map(|base| {
        let entries = compute_benchmark_view(&sorted, base, score_type);
        let base_index = entries.iter().position(|e| e.is_base);
        let base_score = base.score(score_type);
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let position = if entry.is_base {
                    BaselinePosition::Base
                } else {
                    match base_index {
                        Some(bi) if index < bi => BaselinePosition::Above,
                        Some(_) => BaselinePosition::Below,
                        None if entry.record.score(score_type) > base_score => BaselinePosition::Above,
                        None => BaselinePosition::Below,
                    }
                };
                BenchmarkAnnotation {
                    benchmark_percentage: entry.benchmark_percentage,
                    percentage_diff: entry.percentage_diff,
                    position,
                }
            })
            .collect()
    });

    let max = max_score(&sorted, score_type);
    let comparison_mode = !state.is_benchmark();
    let mut annotations = annotations.map(Vec::into_iter);

    let rows = sorted
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let score = record.score(score_type);
            let benchmark = annotations.as_mut().and_then(|it| it.next());
            ListRow {
                rank: index + 1,
                score,
                bar_percentage: score_percentage(score, max),
                in_comparison: comparison_mode && state.comparison.contains(&record.name),
                is_base: base.map_or(false, |b| b.name == record.name),
                benchmark,
                record,
            }
        })
        .collect();

    ListView {
        score_type,
        rows,
        max_score: max,
        total_matches,
    }
}

/// One score line on a comparison card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardScore {
    pub score_type: ScoreType,
    pub value: u32,
}

/// A selected record as shown in a comparison slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonCard {
    pub name: String,
    pub mobile: bool,
    pub scores: Vec<CardScore>,
}

impl ComparisonCard {
    pub fn from_record(record: &GpuRecord) -> Self {
        ComparisonCard {
            name: record.name.clone(),
            mobile: record.mobile,
            scores: ScoreType::ALL
                .into_iter()
                .map(|score_type| CardScore {
                    score_type,
                    value: record.score(score_type),
                })
                .collect(),
        }
    }
}

/// Winner line for one score type.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultLine {
    pub score_type: ScoreType,
    pub winner: String,
    pub percentage_diff: f64,
}

impl ResultLine {
    pub fn display_text(&self) -> String {
        format!("+{:.1}%", self.percentage_diff)
    }
}

/// Side-by-side comparison panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComparisonView {
    pub left: Option<ComparisonCard>,
    pub right: Option<ComparisonCard>,
    /// Present only when both slots are filled
    pub results: Option<Vec<ResultLine>>,
}

impl ComparisonView {
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

pub fn build_comparison_view(state: &InteractionState) -> ComparisonView {
    let pair = &state.comparison;
    let results: Option<Vec<ResultLine>> = pair.both().map(|(left, right)| {
        compare_records(left, right)
            .scores
            .iter()
            .map(|s| ResultLine {
                score_type: s.score_type,
                winner: s.winner.name.clone(),
                percentage_diff: s.percentage_diff,
            })
            .collect()
    });

    ComparisonView {
        left: pair.left.as_ref().map(ComparisonCard::from_record),
        right: pair.right.as_ref().map(ComparisonCard::from_record),
        results,
    }
}

/// Baseline summary line for benchmark mode.
pub fn benchmark_info(state: &InteractionState) -> String {
    match &state.benchmark_base {
        Some(base) => format!(
            "Current baseline: {} - {}: {}",
            base.name,
            state.score_type.label(),
            calculator::format_score(base.score(state.score_type))
        ),
        None => "Select a GPU to use as the baseline".to_string(),
    }
}

/// Statistics of the currently visible set for the current score type.
pub fn visible_statistics(records: &[GpuRecord], state: &InteractionState) -> Statistics {
    let criteria = FilterCriteria::new(state.search_term.clone(), state.filter);
    compute_statistics(&filter_records(records, &criteria), state.score_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Brand, Filter, Scores};

    fn catalog() -> Vec<GpuRecord> {
        vec![
            GpuRecord::new("Low", Brand::Amd, false, Scores::new(50, 1, 1, 1)),
            GpuRecord::new("High", Brand::Nvidia, false, Scores::new(200, 2, 2, 2)),
            GpuRecord::new("Mid", Brand::Intel, true, Scores::new(100, 3, 3, 3)),
        ]
    }

    fn record(name: &str) -> GpuRecord {
        catalog().into_iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_list_ranked_with_bars() {
        let view = build_list_view(&catalog(), &InteractionState::new(), 1000);
        let names: Vec<_> = view.rows.iter().map(|r| r.record.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
        assert_eq!(view.rows[0].rank, 1);
        assert_eq!(view.rows[0].bar_percentage, 100.0);
        assert_eq!(view.rows[1].bar_percentage, 50.0);
        assert!(view.rows.iter().all(|r| r.benchmark.is_none()));
    }

    #[test]
    fn test_list_truncates() {
        let view = build_list_view(&catalog(), &InteractionState::new(), 2);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.total_matches, 3);
    }

    #[test]
    fn test_list_marks_comparison_rows() {
        let state = InteractionState::new().select_for_comparison(record("Mid"));
        let view = build_list_view(&catalog(), &state, 1000);
        assert!(view.rows.iter().find(|r| r.record.name == "Mid").unwrap().in_comparison);
        assert!(!view.rows.iter().find(|r| r.record.name == "Low").unwrap().in_comparison);
    }

    #[test]
    fn test_benchmark_positions() {
        let state = InteractionState::new()
            .toggle_mode()
            .set_benchmark_base(record("Mid"));
        let view = build_list_view(&catalog(), &state, 1000);

        let positions: Vec<_> = view
            .rows
            .iter()
            .map(|r| r.benchmark.as_ref().unwrap().position)
            .collect();
        assert_eq!(
            positions,
            vec![BaselinePosition::Above, BaselinePosition::Base, BaselinePosition::Below]
        );
        assert!(view.rows[1].is_base);
        assert_eq!(view.rows[0].benchmark.as_ref().unwrap().benchmark_percentage, 200.0);
        assert_eq!(view.rows[2].benchmark.as_ref().unwrap().percentage_diff, -50.0);
        assert_eq!(view.rows[1].benchmark.as_ref().unwrap().display_text(), "Baseline (100%)");
        assert_eq!(view.rows[0].benchmark.as_ref().unwrap().display_text(), "+200.0%");
        assert_eq!(view.rows[2].benchmark.as_ref().unwrap().display_text(), "50.0%");
    }

    #[test]
    fn test_benchmark_positions_when_base_filtered_out() {
        let state = InteractionState::new()
            .toggle_mode()
            .set_benchmark_base(record("Mid"))
            .set_filter(Filter::Desktop);
        let view = build_list_view(&catalog(), &state, 1000);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].benchmark.as_ref().unwrap().position, BaselinePosition::Above);
        assert_eq!(view.rows[1].benchmark.as_ref().unwrap().position, BaselinePosition::Below);
    }

    #[test]
    fn test_comparison_view() {
        let state = InteractionState::new().select_for_comparison(record("Low"));
        let view = build_comparison_view(&state);
        assert!(view.left.is_some());
        assert!(view.right.is_none());
        assert!(view.results.is_none());

        let state = state.select_for_comparison(record("High"));
        let view = build_comparison_view(&state);
        let results = view.results.unwrap();
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].winner, "High");
        assert_eq!(results[0].display_text(), "+300.0%");
        assert_eq!(view.left.unwrap().scores.len(), 4);
    }

    #[test]
    fn test_benchmark_info() {
        let state = InteractionState::new().toggle_mode();
        assert_eq!(benchmark_info(&state), "Select a GPU to use as the baseline");

        let state = state.set_benchmark_base(record("High"));
        assert_eq!(benchmark_info(&state), "Current baseline: High - Time Spy: 200");
    }

    #[test]
    fn test_visible_statistics() {
        let state = InteractionState::new().set_filter(Filter::Desktop);
        let stats = visible_statistics(&catalog(), &state);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.median, 200);
    }
}

//! Derivation layer: filtering, sorting, percentages, comparisons and statistics.
//!
//! Every function here is pure and total. Division by a zero baseline yields
//! `0.0` rather than NaN or infinity, and a score of `0` always means "not
//! benchmarked".

use crate::models::{Filter, GpuRecord, ScoreType, SortOrder};
use serde::Serialize;

/// Label for a score-type id, or the id itself when unknown.
pub fn score_label(id: &str) -> String {
    id.parse::<ScoreType>()
        .map(|t| t.label().to_string())
        .unwrap_or_else(|_| id.to_string())
}

/// Description for a score-type id, or an empty string when unknown.
pub fn score_description(id: &str) -> &'static str {
    id.parse::<ScoreType>().map(|t| t.description()).unwrap_or("")
}

/// Search and filter inputs for `filter_records`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub filter: Filter,
}

impl FilterCriteria {
    pub fn new(search_term: impl Into<String>, filter: Filter) -> Self {
        FilterCriteria {
            search_term: search_term.into(),
            filter,
        }
    }
}

fn name_contains(name: &str, lower_query: &str) -> bool {
    name.to_lowercase().contains(lower_query)
}

/// Records whose name contains the search term (case-insensitive) and that
/// pass the brand / form factor filter. Relative order is preserved.
pub fn filter_records(records: &[GpuRecord], criteria: &FilterCriteria) -> Vec<GpuRecord> {
    let query = criteria.search_term.to_lowercase();
    records
        .iter()
        .filter(|r| name_contains(&r.name, &query) && criteria.filter.matches(r))
        .cloned()
        .collect()
}

/// Records sorted by one score. Equal scores are ordered by name ascending.
pub fn sort_records(records: &[GpuRecord], score_type: ScoreType, order: SortOrder) -> Vec<GpuRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let by_score = match order {
            SortOrder::Desc => b.score(score_type).cmp(&a.score(score_type)),
            SortOrder::Asc => a.score(score_type).cmp(&b.score(score_type)),
        };
        by_score.then_with(|| a.name.cmp(&b.name))
    });
    sorted
}

/// Signed relative difference of `value` against `base`, in percent.
pub fn percentage_diff(value: f64, base: f64) -> f64 {
    if base == 0.0 {
        return 0.0;
    }
    (value - base) / base * 100.0
}

/// `value` expressed as a percentage of `base`.
pub fn benchmark_percentage(value: f64, base: f64) -> f64 {
    if base == 0.0 {
        return 0.0;
    }
    value / base * 100.0
}

/// Highest score of the given type, `0` for an empty slice.
pub fn max_score(records: &[GpuRecord], score_type: ScoreType) -> u32 {
    records.iter().map(|r| r.score(score_type)).max().unwrap_or(0)
}

/// Width of a score bar relative to the best score shown (0-100).
pub fn score_percentage(score: u32, max_score: u32) -> f64 {
    if max_score == 0 {
        return 0.0;
    }
    f64::from(score) / f64::from(max_score) * 100.0
}

/// A record annotated relative to a baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkEntry {
    pub record: GpuRecord,
    pub benchmark_percentage: f64,
    pub percentage_diff: f64,
    pub is_base: bool,
}

/// Annotate every record against `base` for one score type.
///
/// Input order is preserved; sort before calling if the caller cares about
/// position relative to the baseline.
pub fn compute_benchmark_view(records: &[GpuRecord], base: &GpuRecord, score_type: ScoreType) -> Vec<BenchmarkEntry> {
    let base_score = f64::from(base.score(score_type));
    records
        .iter()
        .map(|record| {
            let score = f64::from(record.score(score_type));
            BenchmarkEntry {
                record: record.clone(),
                benchmark_percentage: benchmark_percentage(score, base_score),
                percentage_diff: percentage_diff(score, base_score),
                is_base: record.name == base.name,
            }
        })
        .collect()
}

/// Head-to-head result for a single score type.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreComparison<'a> {
    pub score_type: ScoreType,
    pub a_score: u32,
    pub b_score: u32,
    /// Strictly higher score wins; a tie goes to `b`
    pub winner: &'a GpuRecord,
    pub difference: u32,
    /// How far the winner is ahead, always `>= 0`
    pub percentage_diff: f64,
}

/// Per-score-type comparison of two records, in `ScoreType::ALL` order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordComparison<'a> {
    pub a: &'a GpuRecord,
    pub b: &'a GpuRecord,
    pub scores: Vec<ScoreComparison<'a>>,
}

impl<'a> RecordComparison<'a> {
    pub fn for_score(&self, score_type: ScoreType) -> Option<&ScoreComparison<'a>> {
        self.scores.iter().find(|s| s.score_type == score_type)
    }
}

pub fn compare_records<'a>(a: &'a GpuRecord, b: &'a GpuRecord) -> RecordComparison<'a> {
    let scores = ScoreType::ALL
        .into_iter()
        .map(|score_type| {
            let a_score = a.score(score_type);
            let b_score = b.score(score_type);
            let (winner, greater, lesser) = if a_score > b_score {
                (a, a_score, b_score)
            } else {
                (b, b_score, a_score)
            };
            ScoreComparison {
                score_type,
                a_score,
                b_score,
                winner,
                difference: a_score.abs_diff(b_score),
                percentage_diff: percentage_diff(f64::from(greater), f64::from(lesser)),
            }
        })
        .collect();

    RecordComparison { a, b, scores }
}

/// Summary statistics over benchmarked records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub min: u32,
    pub max: u32,
    pub average: f64,
    /// Upper-middle element for even counts
    pub median: u32,
}

/// Statistics over the strictly positive scores of one type.
pub fn compute_statistics(records: &[GpuRecord], score_type: ScoreType) -> Statistics {
    let mut scores: Vec<u32> = records
        .iter()
        .map(|r| r.score(score_type))
        .filter(|&s| s > 0)
        .collect();

    if scores.is_empty() {
        return Statistics::default();
    }

    scores.sort_unstable();
    let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    let count = scores.len();

    Statistics {
        count,
        min: scores[0],
        max: scores[count - 1],
        average: sum as f64 / count as f64,
        median: scores[count / 2],
    }
}

/// Up to `limit` distinct names containing `query`, in input order.
/// Queries shorter than two characters yield nothing.
pub fn search_suggestions(query: &str, records: &[GpuRecord], limit: usize) -> Vec<String> {
    if query.chars().count() < 2 {
        return Vec::new();
    }

    let lower_query = query.to_lowercase();
    let mut suggestions: Vec<String> = Vec::new();
    for record in records {
        if suggestions.len() >= limit {
            break;
        }
        if name_contains(&record.name, &lower_query) && !suggestions.contains(&record.name) {
            suggestions.push(record.name.clone());
        }
    }
    suggestions
}

/// Format a score with thousands separators (`35856` -> `35,856`).
pub fn format_score(score: u32) -> String {
    let digits = score.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

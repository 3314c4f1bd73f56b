//! Interaction state machine.
//!
//! `InteractionState` is a plain value. Every transition consumes the current
//! state and returns the next one, so a session can be replayed from a list of
//! `Action`s without a live UI.
//!
//! Comparison mode and benchmark mode own disjoint selections: entering
//! benchmark mode empties the comparison pair, leaving it drops the baseline.

use crate::models::{Filter, GpuRecord, Mode, ScoreType};

/// The two comparison slots, filled left first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonPair {
    pub left: Option<GpuRecord>,
    pub right: Option<GpuRecord>,
}

impl ComparisonPair {
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn is_full(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Whether a record with this name occupies either slot
    pub fn contains(&self, name: &str) -> bool {
        self.left.as_ref().map_or(false, |r| r.name == name)
            || self.right.as_ref().map_or(false, |r| r.name == name)
    }

    /// Both records when both slots are filled
    pub fn both(&self) -> Option<(&GpuRecord, &GpuRecord)> {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }
}

/// A user action, as replayed by `InteractionState::apply`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetScoreType(ScoreType),
    SetFilter(Filter),
    SetSearchTerm(String),
    ToggleMode,
    SetBenchmarkBase(GpuRecord),
    SelectForComparison(GpuRecord),
    ClearComparison,
}

/// Everything the user has chosen in the current session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub score_type: ScoreType,
    pub filter: Filter,
    pub search_term: String,
    pub comparison: ComparisonPair,
    pub mode: Mode,
    pub benchmark_base: Option<GpuRecord>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state with a non-default score type.
    pub fn with_score_type(score_type: ScoreType) -> Self {
        InteractionState {
            score_type,
            ..Self::default()
        }
    }

    pub fn is_benchmark(&self) -> bool {
        self.mode.is_benchmark()
    }

    pub fn set_score_type(self, score_type: ScoreType) -> Self {
        InteractionState { score_type, ..self }
    }

    pub fn set_filter(self, filter: Filter) -> Self {
        InteractionState { filter, ..self }
    }

    pub fn set_search_term(self, search_term: impl Into<String>) -> Self {
        InteractionState {
            search_term: search_term.into(),
            ..self
        }
    }

    /// Flip between comparison and benchmark mode.
    pub fn toggle_mode(self) -> Self {
        let mode = self.mode.toggled();
        let mut next = InteractionState { mode, ..self };
        if mode.is_benchmark() {
            next.comparison = ComparisonPair::default();
        } else {
            next.benchmark_base = None;
        }
        log::debug!("[State] Mode switched to {:?}", mode);
        next
    }

    /// Choose the baseline record. Ignored outside benchmark mode.
    pub fn set_benchmark_base(self, record: GpuRecord) -> Self {
        if !self.is_benchmark() {
            log::debug!("[State] Baseline '{}' ignored in comparison mode", record.name);
            return self;
        }
        log::debug!("[State] Baseline set to '{}'", record.name);
        InteractionState {
            benchmark_base: Some(record),
            ..self
        }
    }

    /// Single "record clicked" entry point.
    ///
    /// In benchmark mode the click picks the baseline. Otherwise a selected
    /// record is deselected, an unselected one fills `left` then `right`, and
    /// a click with both slots taken changes nothing.
    pub fn select_for_comparison(mut self, record: GpuRecord) -> Self {
        if self.is_benchmark() {
            return self.set_benchmark_base(record);
        }

        let pair = &mut self.comparison;
        if pair.left.as_ref().map_or(false, |r| r.same_as(&record)) {
            pair.left = None;
        } else if pair.right.as_ref().map_or(false, |r| r.same_as(&record)) {
            pair.right = None;
        } else if pair.left.is_none() {
            pair.left = Some(record);
        } else if pair.right.is_none() {
            pair.right = Some(record);
        } else {
            log::debug!("[State] Comparison full, '{}' not added", record.name);
        }
        self
    }

    pub fn clear_comparison(self) -> Self {
        InteractionState {
            comparison: ComparisonPair::default(),
            ..self
        }
    }

    /// Apply one action.
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::SetScoreType(t) => self.set_score_type(t),
            Action::SetFilter(f) => self.set_filter(f),
            Action::SetSearchTerm(s) => self.set_search_term(s),
            Action::ToggleMode => self.toggle_mode(),
            Action::SetBenchmarkBase(r) => self.set_benchmark_base(r),
            Action::SelectForComparison(r) => self.select_for_comparison(r),
            Action::ClearComparison => self.clear_comparison(),
        }
    }

    /// Replay a sequence of actions from this state.
    pub fn replay<I>(self, actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        actions.into_iter().fold(self, InteractionState::apply)
    }
}

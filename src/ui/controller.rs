//! BrowserController: event wiring between the egui front-end and the core
//!
//! Holds the catalog, the configuration and the current `InteractionState`.
//! Immediate events (score type, filter, mode, clear) are applied on the spot;
//! search edits and comparison picks go through the `EffectScheduler` and are
//! applied when `drain_effects` sees them fire.

use super::threading::{EffectScheduler, FiredEffect, TimerChannel};
use crate::calculator::{search_suggestions, Statistics};
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::models::{Filter, GpuRecord, ScoreType};
use crate::state::{Action, InteractionState};
use crate::view::{self, ComparisonView, ListView};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

pub struct BrowserController {
    catalog: Arc<Catalog>,
    config: AppConfig,
    state: InteractionState,
    /// Raw text of the search box; applied to the state after the debounce
    search_input: String,
    scheduler: EffectScheduler,
    effects_rx: mpsc::UnboundedReceiver<FiredEffect>,
}

impl BrowserController {
    pub fn new(catalog: Arc<Catalog>, config: AppConfig, handle: Handle) -> Self {
        let (scheduler, effects_rx) = EffectScheduler::new(handle);
        let state = InteractionState::with_score_type(config.default_score_type);
        log::info!(
            "[Controller] Ready with {} records (score type: {})",
            catalog.len(),
            state.score_type.id()
        );
        Self {
            catalog,
            config,
            state,
            search_input: String::new(),
            scheduler,
            effects_rx,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    fn apply(&mut self, action: Action) {
        log::debug!("[Controller] Applying {:?}", action);
        let current = std::mem::take(&mut self.state);
        self.state = current.apply(action);
    }

    pub fn set_score_type(&mut self, score_type: ScoreType) {
        self.apply(Action::SetScoreType(score_type));
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.apply(Action::SetFilter(filter));
    }

    /// Search box edited: debounce before filtering.
    pub fn on_search_input(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
        self.scheduler.schedule(
            TimerChannel::Search,
            Action::SetSearchTerm(self.search_input.clone()),
            self.config.search_delay(),
        );
    }

    /// Apply a search term right away (e.g. a picked suggestion).
    pub fn submit_search(&mut self, text: impl Into<String>) {
        self.search_input = text.into();
        self.scheduler.cancel(&TimerChannel::Search);
        self.apply(Action::SetSearchTerm(self.search_input.clone()));
    }

    /// Switch modes. Picks still in flight are dropped with the old mode.
    pub fn toggle_mode(&mut self) {
        self.scheduler.cancel_selections();
        self.apply(Action::ToggleMode);
        log::info!(
            "[Controller] {} mode",
            if self.state.is_benchmark() { "Benchmark" } else { "Comparison" }
        );
    }

    /// A list row was clicked.
    ///
    /// Benchmark mode sets the baseline immediately; comparison mode applies
    /// the pick after the animation delay.
    pub fn on_record_clicked(&mut self, record: &GpuRecord) {
        if self.state.is_benchmark() {
            self.apply(Action::SetBenchmarkBase(record.clone()));
            return;
        }

        self.scheduler.schedule(
            TimerChannel::Selection(record.name.clone()),
            Action::SelectForComparison(record.clone()),
            self.config.animation_duration(),
        );
    }

    pub fn clear_comparison(&mut self) {
        self.scheduler.cancel_selections();
        self.apply(Action::ClearComparison);
    }

    /// Whether a pick of this record is waiting on its animation
    pub fn is_selection_pending(&self, name: &str) -> bool {
        self.scheduler
            .is_pending(&TimerChannel::Selection(name.to_string()))
    }

    pub fn has_pending_effects(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Apply every fired effect. Returns how many changed the state.
    pub fn drain_effects(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(effect) = self.effects_rx.try_recv() {
            if let Some(action) = self.scheduler.accept(effect) {
                self.apply(action);
                applied += 1;
            }
        }
        applied
    }

    pub fn list_view(&self) -> ListView {
        view::build_list_view(
            self.catalog.records(),
            &self.state,
            self.config.max_display_items,
        )
    }

    pub fn comparison_view(&self) -> ComparisonView {
        view::build_comparison_view(&self.state)
    }

    pub fn benchmark_info(&self) -> String {
        view::benchmark_info(&self.state)
    }

    pub fn statistics(&self) -> Statistics {
        view::visible_statistics(self.catalog.records(), &self.state)
    }

    /// Suggestions for the text currently in the search box
    pub fn suggestions(&self) -> Vec<String> {
        search_suggestions(
            &self.search_input,
            self.catalog.records(),
            self.config.suggestion_limit,
        )
    }
}

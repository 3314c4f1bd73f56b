/// Main App and UI layout
///
/// Provides the eframe::App implementation for the browser. Every frame it
/// drains fired effects from the controller, then paints:
/// - top bar: score type, brand/form-factor filter, search, mode toggle
/// - central panel: the ranked score list
/// - right panel: comparison cards or baseline info
/// - bottom bar: statistics, version and data date

use super::controller::BrowserController;
use super::widgets;
use crate::calculator::format_score;
use crate::config::changelog::{self, CHANGELOG};
use crate::error::AppError;
use crate::models::{Filter, ScoreType};
use eframe::egui;
use std::time::Duration;

/// Repaint cadence while a debounce or pick animation is in flight
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(16);

/// Transient UI state that never reaches the interaction state
#[derive(Debug, Default)]
pub struct UIState {
    /// Whether the About/changelog window is open
    pub show_about: bool,
    /// Search box contents as typed
    pub search_buffer: String,
    /// Startup problems shown until dismissed
    pub warnings: Vec<AppError>,
}

/// Popup holding the search suggestions
pub fn suggestions_popup_id() -> egui::Id {
    egui::Id::new("search_suggestions")
}

/// Whether the suggestion list adds anything over what is already typed
pub fn should_offer_suggestions(suggestions: &[String], typed: &str) -> bool {
    !suggestions.is_empty() && !(suggestions.len() == 1 && suggestions[0] == typed)
}

pub struct AppUI {
    pub controller: BrowserController,
    pub ui_state: UIState,
}

impl AppUI {
    pub fn new(controller: BrowserController) -> Self {
        let search_buffer = controller.search_input().to_string();
        AppUI {
            controller,
            ui_state: UIState {
                show_about: false,
                search_buffer,
                warnings: Vec::new(),
            },
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<AppError>) -> Self {
        self.ui_state.warnings = warnings;
        self
    }

    pub fn dismiss_warning(&mut self, index: usize) {
        if index < self.ui_state.warnings.len() {
            self.ui_state.warnings.remove(index);
        }
    }

    /// Fill the search box with a suggestion and filter right away.
    pub fn pick_suggestion(&mut self, name: String) {
        self.ui_state.search_buffer = name.clone();
        self.controller.submit_search(name);
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("GPU Bench");
                ui.separator();

                let current = self.controller.state().score_type;
                for score_type in ScoreType::ALL {
                    let response = ui
                        .selectable_label(current == score_type, score_type.label())
                        .on_hover_text(score_type.description());
                    if response.clicked() {
                        self.controller.set_score_type(score_type);
                    }
                }

                ui.separator();
                let mode_label = if self.controller.state().is_benchmark() {
                    "Comparison mode"
                } else {
                    "Benchmark mode"
                };
                if ui.button(mode_label).clicked() {
                    self.controller.toggle_mode();
                }
            });

            ui.horizontal(|ui| {
                let current = self.controller.state().filter;
                for filter in Filter::ALL {
                    if ui.selectable_label(current == filter, filter.label()).clicked() {
                        self.controller.set_filter(filter);
                    }
                }

                ui.separator();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.ui_state.search_buffer)
                        .hint_text("Search GPUs...")
                        .desired_width(200.0),
                );
                if response.changed() {
                    self.controller.on_search_input(self.ui_state.search_buffer.clone());
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.controller.submit_search(self.ui_state.search_buffer.clone());
                }

                // Open state lives in egui memory, independent of focus
                let popup_id = suggestions_popup_id();
                let suggestions = self.controller.suggestions();
                let offer = should_offer_suggestions(&suggestions, &self.ui_state.search_buffer);
                if response.changed() || response.gained_focus() {
                    ui.memory_mut(|mem| {
                        if offer {
                            mem.open_popup(popup_id);
                        } else if mem.is_popup_open(popup_id) {
                            mem.close_popup();
                        }
                    });
                }

                let mut picked = None;
                egui::popup_below_widget(ui, popup_id, &response, |ui| {
                    ui.set_min_width(200.0);
                    for name in &suggestions {
                        if ui.selectable_label(false, name).clicked() {
                            picked = Some(name.clone());
                        }
                    }
                });
                if let Some(name) = picked {
                    ui.memory_mut(|mem| mem.close_popup());
                    self.pick_suggestion(name);
                }
            });
        });
    }

    fn render_warnings(&mut self, ctx: &egui::Context) {
        if self.ui_state.warnings.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::TopBottomPanel::top("warning_panel").show(ctx, |ui| {
            for (idx, warning) in self.ui_state.warnings.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::from_rgb(255, 180, 80), warning.user_message());
                    if ui.small_button("Dismiss").clicked() {
                        dismissed = Some(idx);
                    }
                });
            }
        });
        if let Some(idx) = dismissed {
            self.dismiss_warning(idx);
        }
    }

    fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("comparison_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                if self.controller.state().is_benchmark() {
                    ui.heading("Benchmark");
                    ui.label(self.controller.benchmark_info());
                    return;
                }

                ui.heading("Compare");
                let view = self.controller.comparison_view();
                widgets::comparison_card(ui, view.left.as_ref(), "Pick a GPU from the list");
                ui.add_space(4.0);
                widgets::comparison_card(ui, view.right.as_ref(), "Pick a second GPU");

                if let Some(results) = &view.results {
                    ui.add_space(8.0);
                    ui.strong("Results");
                    for line in results {
                        ui.label(format!(
                            "{}: {} {}",
                            line.score_type.label(),
                            line.winner,
                            line.display_text()
                        ));
                    }
                }

                if !view.is_empty() {
                    ui.add_space(8.0);
                    if ui.button("Clear").clicked() {
                        self.controller.clear_comparison();
                    }
                }
            });
    }

    fn render_bottom_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let stats = self.controller.statistics();
                if stats.count == 0 {
                    ui.weak("No scores to summarise");
                } else {
                    ui.label(format!(
                        "{} GPUs | min {} | median {} | avg {} | max {}",
                        stats.count,
                        format_score(stats.min),
                        format_score(stats.median),
                        format_score(stats.average.round() as u32),
                        format_score(stats.max),
                    ));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("About").clicked() {
                        self.ui_state.show_about = !self.ui_state.show_about;
                    }
                    ui.weak(format!(
                        "v{} | data {}",
                        crate::VERSION,
                        crate::catalog::DATA_UPDATED
                    ));
                });
            });
        });
    }

    fn render_list(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let view = self.controller.list_view();
            if view.rows.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.weak("No GPUs match the current search and filter");
                });
                return;
            }
            if view.total_matches > view.rows.len() {
                ui.weak(format!(
                    "Showing {} of {} matches",
                    view.rows.len(),
                    view.total_matches
                ));
            }

            let mut clicked = None;
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for row in &view.rows {
                        let pending = self.controller.is_selection_pending(&row.record.name);
                        if widgets::gpu_row(ui, row, pending).clicked() {
                            clicked = Some(row.record.clone());
                        }
                        ui.add_space(2.0);
                    }
                });

            if let Some(record) = clicked {
                self.controller.on_record_clicked(&record);
            }
        });
    }

    fn render_about(&mut self, ctx: &egui::Context) {
        if !self.ui_state.show_about {
            return;
        }
        let mut open = true;
        egui::Window::new("About")
            .open(&mut open)
            .collapsible(false)
            .show(ctx, |ui| {
                if let Some(latest) = changelog::latest() {
                    ui.label(format!("GPU Bench {} ({})", latest.version, latest.date));
                }
                ui.separator();
                for entry in CHANGELOG {
                    ui.strong(format!("{} - {}", entry.version, entry.date));
                    for change in entry.changes {
                        ui.label(format!("- {}", change));
                    }
                    ui.add_space(4.0);
                }
            });
        self.ui_state.show_about = open;
    }
}

impl eframe::App for AppUI {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let applied = self.controller.drain_effects();
        if applied > 0 {
            log::debug!("[UI] Applied {} delayed effect(s)", applied);
        }

        self.render_top_bar(ctx);
        self.render_warnings(ctx);
        self.render_bottom_bar(ctx);
        self.render_side_panel(ctx);
        self.render_list(ctx);
        self.render_about(ctx);

        // Timers fire off-frame; keep polling until they have all landed
        if self.controller.has_pending_effects() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}

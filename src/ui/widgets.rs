/// Custom egui Widgets
///
/// Painter-drawn pieces of the browser:
/// - gpu_row: ranked score bar for one list entry
/// - mobile_badge: small "M" tag next to laptop parts
/// - comparison_card: score summary of a picked GPU

use crate::calculator::format_score;
use crate::models::Brand;
use crate::view::{BaselinePosition, ComparisonCard, ListRow};
use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

pub const ROW_HEIGHT: f32 = 28.0;
const NAME_WIDTH: f32 = 180.0;
const RANK_WIDTH: f32 = 36.0;

const HIGHLIGHT: Color32 = Color32::from_rgb(255, 200, 60);
const BASE_OUTLINE: Color32 = Color32::from_rgb(120, 180, 255);

/// Brand colour used for the score bar fill
pub fn brand_color(brand: Brand) -> Color32 {
    match brand {
        Brand::Nvidia => Color32::from_rgb(0x76, 0xb9, 0x00),
        Brand::Amd => Color32::from_rgb(0xed, 0x1c, 0x24),
        Brand::Intel => Color32::from_rgb(0x00, 0x71, 0xc5),
    }
}

/// Colour for a benchmark percentage relative to the baseline
pub fn position_color(position: BaselinePosition) -> Color32 {
    match position {
        BaselinePosition::Above => Color32::from_rgb(100, 220, 120),
        BaselinePosition::Base => BASE_OUTLINE,
        BaselinePosition::Below => Color32::from_rgb(230, 110, 110),
    }
}

/// Width of the filled part of a bar, at least 2px so zero scores stay visible.
pub fn bar_fill_width(track_width: f32, bar_percentage: f64) -> f32 {
    let fraction = (bar_percentage / 100.0).clamp(0.0, 1.0) as f32;
    (track_width * fraction).max(2.0).min(track_width.max(0.0))
}

/// Small "M" tag for mobile parts.
pub fn mobile_badge(painter: &egui::Painter, anchor: Pos2) -> Rect {
    let rect = Rect::from_min_size(anchor, Vec2::new(18.0, 14.0));
    painter.rect_filled(rect, 3.0, Color32::from_gray(80));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "M",
        egui::FontId::new(10.0, egui::FontFamily::Proportional),
        Color32::WHITE,
    );
    rect
}

/// Draws one ranked list entry and returns its click response.
///
/// `pending` marks a pick waiting on its animation; the row pulses in the
/// highlight colour until the pick lands.
pub fn gpu_row(ui: &mut egui::Ui, row: &ListRow, pending: bool) -> egui::Response {
    let width = ui.available_width();
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(width, ROW_HEIGHT), egui::Sense::click());
    let painter = ui.painter_at(rect);

    let background = if response.hovered() {
        Color32::from_gray(45)
    } else {
        Color32::from_gray(30)
    };
    painter.rect_filled(rect, 4.0, background);

    if pending {
        let t = ui.input(|i| i.time) as f32;
        let alpha = (((t * 6.0).sin() * 0.5 + 0.5) * 180.0) as u8;
        painter.rect_stroke(
            rect.shrink(1.0),
            4.0,
            Stroke::new(2.0, Color32::from_rgba_unmultiplied(255, 200, 60, alpha)),
        );
    } else if row.in_comparison {
        painter.rect_stroke(rect.shrink(1.0), 4.0, Stroke::new(2.0, HIGHLIGHT));
    } else if row.is_base {
        painter.rect_stroke(rect.shrink(1.0), 4.0, Stroke::new(2.0, BASE_OUTLINE));
    }

    let text_font = egui::FontId::new(13.0, egui::FontFamily::Proportional);
    let mono_font = egui::FontId::new(12.0, egui::FontFamily::Monospace);
    let mid_y = rect.center().y;

    painter.text(
        Pos2::new(rect.left() + 8.0, mid_y),
        egui::Align2::LEFT_CENTER,
        format!("#{}", row.rank),
        mono_font.clone(),
        Color32::GRAY,
    );

    let name_x = rect.left() + 8.0 + RANK_WIDTH;
    let name_rect = painter.text(
        Pos2::new(name_x, mid_y),
        egui::Align2::LEFT_CENTER,
        &row.record.name,
        text_font,
        Color32::WHITE,
    );
    if row.record.mobile {
        mobile_badge(&painter, Pos2::new(name_rect.right() + 6.0, mid_y - 7.0));
    }

    // Right-hand column: score, or the benchmark percentage in baseline mode
    let trailing_width = 150.0;
    let track_left = name_x + NAME_WIDTH;
    let track_right = (rect.right() - trailing_width).max(track_left);
    let track = Rect::from_min_max(
        Pos2::new(track_left, mid_y - 6.0),
        Pos2::new(track_right, mid_y + 6.0),
    );
    painter.rect_filled(track, 3.0, Color32::from_gray(50));

    let fill = Rect::from_min_size(
        track.min,
        Vec2::new(bar_fill_width(track.width(), row.bar_percentage), track.height()),
    );
    painter.rect_filled(fill, 3.0, brand_color(row.record.brand));

    let (trailing, color) = match &row.benchmark {
        Some(annotation) => (annotation.display_text(), position_color(annotation.position)),
        None => (format_score(row.score), Color32::LIGHT_GRAY),
    };
    painter.text(
        Pos2::new(rect.right() - 8.0, mid_y),
        egui::Align2::RIGHT_CENTER,
        trailing,
        mono_font,
        color,
    );

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Score summary of one picked GPU.
pub fn comparison_card(ui: &mut egui::Ui, card: Option<&ComparisonCard>, placeholder: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        let Some(card) = card else {
            ui.weak(placeholder);
            return;
        };

        ui.horizontal(|ui| {
            ui.strong(&card.name);
            if card.mobile {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(18.0, 14.0), egui::Sense::hover());
                mobile_badge(ui.painter(), rect.min);
            }
        });
        egui::Grid::new(("card", card.name.as_str()))
            .num_columns(2)
            .show(ui, |ui| {
                for score in &card.scores {
                    ui.label(score.score_type.label());
                    ui.monospace(format_score(score.value));
                    ui.end_row();
                }
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_colors() {
        assert_eq!(brand_color(Brand::Nvidia), Color32::from_rgb(118, 185, 0));
        assert_eq!(brand_color(Brand::Amd), Color32::from_rgb(237, 28, 36));
        assert_eq!(brand_color(Brand::Intel), Color32::from_rgb(0, 113, 197));
    }

    #[test]
    fn test_bar_fill_width_bounds() {
        assert_eq!(bar_fill_width(200.0, 50.0), 100.0);
        assert_eq!(bar_fill_width(200.0, 0.0), 2.0);
        assert_eq!(bar_fill_width(200.0, 150.0), 200.0);
    }
}

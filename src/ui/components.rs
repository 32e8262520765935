//! Reusable UI components
//!
//! Standalone widgets used by the list and detail screens. They know nothing
//! about slots or navigation; callers pass plain data in and read the
//! response back.

use crate::theme;
use eframe::egui;

/// UV rect that crops an image to fill a frame of the given size without
/// distortion (the frame's aspect ratio wins, the overflow is cut evenly).
pub fn cover_uv(image_size: egui::Vec2, frame_size: egui::Vec2) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if image_size.x <= 0.0 || image_size.y <= 0.0 || frame_size.x <= 0.0 || frame_size.y <= 0.0 {
        return full;
    }

    let image_aspect = image_size.x / image_size.y;
    let frame_aspect = frame_size.x / frame_size.y;
    if image_aspect > frame_aspect {
        let margin = (1.0 - frame_aspect / image_aspect) / 2.0;
        egui::Rect::from_min_max(egui::pos2(margin, 0.0), egui::pos2(1.0 - margin, 1.0))
    } else {
        let margin = (1.0 - image_aspect / frame_aspect) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, margin), egui::pos2(1.0, 1.0 - margin))
    }
}

/// Poster image with rounded corners, or a placeholder while it is unavailable
pub fn poster(ui: &mut egui::Ui, texture: Option<&egui::TextureHandle>, size: egui::Vec2) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        match texture {
            Some(tex) => {
                // Textured RectShape so the image is clipped to the rounded corners
                let brush = egui::epaint::Brush {
                    fill_texture_id: tex.id(),
                    uv: cover_uv(tex.size_vec2(), size),
                };
                let mut shape = egui::epaint::RectShape::filled(
                    rect,
                    egui::CornerRadius::same(theme::RADIUS_DEFAULT as u8),
                    egui::Color32::WHITE,
                );
                shape.brush = Some(std::sync::Arc::new(brush));
                painter.add(shape);
            }
            None => {
                painter.rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_ELEVATED);
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    egui_phosphor::regular::FILM_SLATE,
                    egui::FontId::proportional(size.x * 0.25),
                    theme::TEXT_DIM,
                );
            }
        }
    }

    response
}

/// One movie card: poster, one-line title, one-line overview. Click sense
/// covers the whole card.
pub fn movie_card(
    ui: &mut egui::Ui,
    id: egui::Id,
    title: &str,
    overview: &str,
    texture: Option<&egui::TextureHandle>,
) -> egui::Response {
    let (w, h) = theme::POSTER_SIZE;

    let inner = ui.vertical(|ui| {
        ui.set_width(w);
        poster(ui, texture, egui::vec2(w, h));
        ui.add_space(theme::SPACING_SM);
        ui.add(
            egui::Label::new(
                egui::RichText::new(title)
                    .size(theme::FONT_LABEL)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .truncate(),
        );
        ui.add(
            egui::Label::new(
                egui::RichText::new(overview)
                    .size(theme::FONT_CAPTION)
                    .color(theme::TEXT_MUTED),
            )
            .truncate(),
        );
    });

    let response = ui.interact(inner.response.rect, id, egui::Sense::click());
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        ui.painter().rect_stroke(
            inner.response.rect.expand(2.0),
            theme::RADIUS_DEFAULT,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::ACCENT),
            egui::StrokeKind::Outside,
        );
    }
    response.on_hover_text(title)
}

/// Row heading ("Top rated", "Popular", ...)
pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::TEXT_SECONDARY),
        )
        .selectable(false),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_cover_uv_tall_image_crops_top_and_bottom() {
        // 2:3 poster into a 4:5 frame
        let uv = cover_uv(egui::vec2(500.0, 750.0), egui::vec2(120.0, 150.0));
        assert!(approx(uv.min.x, 0.0) && approx(uv.max.x, 1.0));
        let visible = (500.0 / 750.0) / (120.0 / 150.0);
        assert!(approx(uv.height(), visible));
        assert!(approx(uv.min.y, 1.0 - uv.max.y));
    }

    #[test]
    fn test_cover_uv_wide_image_crops_sides() {
        let uv = cover_uv(egui::vec2(1920.0, 1080.0), egui::vec2(120.0, 150.0));
        assert!(approx(uv.min.y, 0.0) && approx(uv.max.y, 1.0));
        assert!(uv.width() < 1.0);
        assert!(approx(uv.min.x, 1.0 - uv.max.x));
    }

    #[test]
    fn test_cover_uv_degenerate_sizes_use_full_image() {
        let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        assert_eq!(cover_uv(egui::vec2(0.0, 10.0), egui::vec2(120.0, 150.0)), full);
        assert_eq!(cover_uv(egui::vec2(10.0, 10.0), egui::vec2(0.0, 0.0)), full);
    }
}

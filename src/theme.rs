//! Centralized theme constants for CineNow
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0c, 0x0a, 0x09); // stone-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x1c, 0x19, 0x17); // stone-900
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x29, 0x25, 0x24); // stone-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x2b, 0x21, 0x12); // warm hover

// =============================================================================
// COLORS - Accent (Amber)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b); // amber-500
pub const ACCENT_DARK: Color32 = Color32::from_rgb(0x45, 0x1a, 0x03); // amber-950, text on accent

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe7, 0xe5, 0xe4); // stone-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xa8, 0xa2, 0x9e); // stone-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x78, 0x71, 0x6c); // stone-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x29, 0x25, 0x24); // stone-800

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x44, 0x40, 0x3c);

// =============================================================================
// FONT SIZES
// =============================================================================
pub const FONT_DISPLAY: f32 = 40.0;
pub const FONT_TITLE: f32 = 24.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_CAPTION: f32 = 11.0;

// =============================================================================
// SIZES
// =============================================================================
pub const POSTER_SIZE: (f32, f32) = (120.0, 150.0);
pub const DETAIL_POSTER_SIZE: (f32, f32) = (240.0, 360.0);
pub const DETAIL_TEXT_MAX_WIDTH: f32 = 560.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let widget = |bg_fill: Color32, fg: Color32| egui::style::WidgetVisuals {
        bg_fill,
        weak_bg_fill: bg_fill,
        bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
        fg_stroke: egui::Stroke::new(STROKE_DEFAULT, fg),
        corner_radius: RADIUS_DEFAULT.into(),
        expansion: 0.0,
    };

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        widgets: egui::style::Widgets {
            noninteractive: widget(BG_ELEVATED, TEXT_PRIMARY),
            inactive: widget(BTN_DEFAULT, TEXT_SECONDARY),
            hovered: widget(BG_HOVER, TEXT_PRIMARY),
            active: widget(BG_SURFACE, TEXT_PRIMARY),
            open: widget(BG_SURFACE, TEXT_PRIMARY),
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(SPACING_MD, 6.0);
        style.spacing.button_padding = egui::vec2(SPACING_LG, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = true;
    });
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent amber button (for primary actions like opening the web page)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(ACCENT_DARK))
        .fill(ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

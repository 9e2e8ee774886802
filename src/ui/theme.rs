//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(233, 207, 154);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(107, 74, 42);
pub const GRID_LINE: Color32 = Color32::from_rgb(107, 74, 42);
pub const STAR_POINT: Color32 = Color32::from_rgb(80, 55, 30);

// Stones
pub const BLACK_STONE: Color32 = Color32::from_rgb(20, 20, 22);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(74, 74, 74);
pub const WHITE_STONE: Color32 = Color32::from_rgb(255, 255, 255);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(187, 187, 187);

// Markers
pub const LAST_MOVE_RING: Color32 = Color32::from_rgb(255, 80, 0);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WAIT: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 40.0;
pub const STONE_RADIUS_RATIO: f32 = 0.42;
pub const STAR_POINT_RADIUS: f32 = 4.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;

/// Star points for a board of the given size: the center, plus the four
/// corner points on boards large enough to have them.
pub fn star_points(size: usize) -> Vec<(u8, u8)> {
    let mid = (size / 2) as u8;
    if size < 9 {
        return vec![(mid, mid)];
    }
    let near: u8 = if size >= 13 { 3 } else { 2 };
    let far = (size - 1 - near as usize) as u8;
    vec![(near, near), (near, far), (mid, mid), (far, near), (far, far)]
}

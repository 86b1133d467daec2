pub mod legend;

pub use legend::{LegendLine, legend_lines};

use macroquad::prelude::Color;

// Canvas configuration. Everything here is fixed at compile time.

/// Side length of one grid cell and one drawn sprite, in pixels
pub const TILE_SIZE: f32 = 100.0;

/// Directory holding the `A_00.png` .. `D_15.png` sprite sets,
/// written by the `sprites` binary
pub const ASSET_DIR: &str = "data";

pub const WINDOW_TITLE: &str = "Module Tiles";
pub const WINDOW_WIDTH: i32 = 1000;
pub const WINDOW_HEIGHT: i32 = 800;

/// Stroke width of the alignment overlay
pub const GRID_LINE_THICKNESS: f32 = 0.5;

/// Legend block metrics
pub const LEGEND_RIGHT_OFFSET: f32 = 160.0;
pub const LEGEND_TOP: f32 = 30.0;
pub const LEGEND_LINE_HEIGHT: f32 = 20.0;
pub const LEGEND_SECTION_GAP: f32 = 10.0;
pub const LEGEND_FONT_SIZE: f32 = 14.0;

// Palette helpers (Color::from_rgba is not const)

/// Linen page colour behind everything
pub fn background_color() -> Color {
    Color::from_rgba(246, 246, 234, 255)
}

/// Faint black for the cell outlines
pub fn grid_line_color() -> Color {
    Color::from_rgba(0, 0, 0, 50)
}

/// Oxblood, marks the active mode in the legend
pub fn accent_color() -> Color {
    Color::from_rgba(75, 34, 52, 255)
}

pub fn text_color() -> Color {
    Color::from_rgba(0, 0, 0, 255)
}

use tracing::{debug, info};
use crate::domain::{Cell, Grid, Style};

/// AppState holds everything the paint loop mutates between frames.
/// Controller operations are plain methods so they run without a window.
#[derive(Clone, Debug)]
pub struct AppState {
    pub grid: Grid,
    pub active_style: Style,
    pub show_grid: bool,
    pub tile_size: f32,
    viewport: (f32, f32),
}

impl AppState {
    /// Create state for a viewport of the given size
    pub fn new(viewport_width: f32, viewport_height: f32, tile_size: f32) -> Self {
        Self {
            grid: Grid::for_viewport(viewport_width, viewport_height, tile_size),
            active_style: Style::default(),
            show_grid: true,
            tile_size,
            viewport: (viewport_width, viewport_height),
        }
    }

    pub const fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Rebuild the grid if the viewport changed size.
    /// Painted content does not survive a resize. Returns whether it happened.
    pub fn handle_resize(&mut self, viewport_width: f32, viewport_height: f32) -> bool {
        if self.viewport == (viewport_width, viewport_height) {
            return false;
        }
        self.viewport = (viewport_width, viewport_height);
        self.grid = Grid::for_viewport(viewport_width, viewport_height, self.tile_size);
        let (cols, rows) = self.grid.dimensions();
        info!(viewport_width, viewport_height, cols, rows, "viewport resized, grid rebuilt");
        true
    }

    /// Paint (or erase) the cell under a pointer position
    pub fn paint_at(&mut self, pixel_x: f32, pixel_y: f32, erase: bool) {
        let Some((gx, gy)) = self.grid.to_grid_coord(pixel_x, pixel_y, self.tile_size) else {
            return;
        };
        if erase {
            self.grid.unset(gx, gy);
        } else {
            self.grid.set(gx, gy, Cell::Module(self.active_style));
        }
    }

    /// Empty the whole grid
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        debug!("grid cleared");
        self
    }

    /// Switch the style used for new paint
    pub fn select_style(mut self, style: Style) -> Self {
        self.active_style = style;
        debug!(style = style.label(), "style selected");
        self
    }

    /// Show or hide the alignment overlay
    pub fn toggle_grid(mut self) -> Self {
        self.show_grid = !self.show_grid;
        debug!(show_grid = self.show_grid, "grid overlay toggled");
        self
    }
}

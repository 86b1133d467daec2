use super::Cell;
use tracing::trace;

/// Grid owns the 2D array of cell states.
///
/// The outermost row and column on every side form a border that can never
/// be painted, so neighbour lookups around any interior cell stay in bounds
/// and always see `Cell::Empty` past the paintable area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell empty
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Empty; cols * rows],
        }
    }

    /// Create a grid sized for a viewport
    pub fn for_viewport(viewport_width: f32, viewport_height: f32, tile_size: f32) -> Self {
        let (cols, rows) = Self::dimensions_for(viewport_width, viewport_height, tile_size);
        Self::new(cols, rows)
    }

    /// Number of columns and rows needed to cover a viewport, border included
    pub fn dimensions_for(
        viewport_width: f32,
        viewport_height: f32,
        tile_size: f32,
    ) -> (usize, usize) {
        (
            tiles_across(viewport_width, tile_size) + 2,
            tiles_across(viewport_height, tile_size) + 2,
        )
    }

    /// Grid dimensions as (cols, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Whether any cell is paintable at all
    pub const fn has_interior(&self) -> bool {
        self.cols >= 3 && self.rows >= 3
    }

    /// Paintable cells exclude the one-cell border
    pub const fn is_interior(&self, gx: usize, gy: usize) -> bool {
        gx >= 1
            && gy >= 1
            && gx < self.cols.saturating_sub(1)
            && gy < self.rows.saturating_sub(1)
    }

    const fn get_index(&self, gx: usize, gy: usize) -> usize {
        gy * self.cols + gx
    }

    /// Map a pixel position to the interior cell under it.
    ///
    /// Positions outside the viewport clamp to the nearest interior cell.
    /// Returns `None` only when the grid has no interior.
    pub fn to_grid_coord(
        &self,
        pixel_x: f32,
        pixel_y: f32,
        tile_size: f32,
    ) -> Option<(usize, usize)> {
        if !self.has_interior() {
            return None;
        }
        Some((
            clamp_axis(pixel_x, tile_size, self.cols),
            clamp_axis(pixel_y, tile_size, self.rows),
        ))
    }

    /// Pixel coordinate of a cell's centre along one axis
    pub fn pixel_center(index: usize, tile_size: f32) -> f32 {
        tile_size * index as f32 - tile_size / 2.0
    }

    /// Get cell at position (`None` outside the full array)
    pub fn get(&self, gx: usize, gy: usize) -> Option<Cell> {
        (gx < self.cols && gy < self.rows).then(|| self.cells[self.get_index(gx, gy)])
    }

    /// Get cell at position, reading anything out of range as empty
    pub fn cell_at(&self, gx: usize, gy: usize) -> Cell {
        self.get(gx, gy).unwrap_or(Cell::Empty)
    }

    /// Set an interior cell. Writes to the border or beyond are ignored.
    pub fn set(&mut self, gx: usize, gy: usize, cell: Cell) {
        if !self.is_interior(gx, gy) {
            trace!(gx, gy, "ignoring write outside paintable area");
            return;
        }
        let idx = self.get_index(gx, gy);
        self.cells[idx] = cell;
    }

    pub fn unset(&mut self, gx: usize, gy: usize) {
        self.set(gx, gy, Cell::Empty);
    }

    /// Reset every cell, border included
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Empty);
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.cols, idx / self.cols, cell))
    }
}

fn tiles_across(extent: f32, tile_size: f32) -> usize {
    let tiles = (extent / tile_size).floor();
    if tiles.is_finite() && tiles > 0.0 {
        tiles as usize
    } else {
        0
    }
}

/// `clamp(floor(pixel / tile) + 1, 1, len - 2)`, total over every f32.
/// NaN saturates to 0 on the cast and ends up on the first interior cell.
fn clamp_axis(pixel: f32, tile_size: f32, len: usize) -> usize {
    let shifted = ((pixel / tile_size).floor() as i64).saturating_add(1);
    let max = (len - 2) as i64;
    shifted.clamp(1, max) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Style;
    use proptest::prelude::*;

    const TILE: f32 = 100.0;

    #[test]
    fn test_dimensions_add_border() {
        assert_eq!(Grid::dimensions_for(1000.0, 800.0, TILE), (12, 10));
        assert_eq!(Grid::dimensions_for(1050.0, 899.9, TILE), (12, 10));
        assert_eq!(Grid::dimensions_for(300.0, 300.0, TILE), (5, 5));
    }

    #[test]
    fn test_dimensions_of_degenerate_viewport() {
        assert_eq!(Grid::dimensions_for(0.0, 0.0, TILE), (2, 2));
        assert_eq!(Grid::dimensions_for(-50.0, f32::NAN, TILE), (2, 2));

        let grid = Grid::for_viewport(50.0, 50.0, TILE);
        assert!(!grid.has_interior());
        assert_eq!(grid.to_grid_coord(10.0, 10.0, TILE), None);
    }

    #[test]
    fn test_to_grid_coord_shifts_by_border() {
        let grid = Grid::for_viewport(300.0, 300.0, TILE);
        assert_eq!(grid.to_grid_coord(0.0, 0.0, TILE), Some((1, 1)));
        assert_eq!(grid.to_grid_coord(99.9, 150.0, TILE), Some((1, 2)));
        assert_eq!(grid.to_grid_coord(250.0, 299.0, TILE), Some((3, 3)));
    }

    #[test]
    fn test_to_grid_coord_clamps_outside_viewport() {
        let grid = Grid::for_viewport(300.0, 300.0, TILE);
        assert_eq!(grid.to_grid_coord(-500.0, 10_000.0, TILE), Some((1, 3)));
        assert_eq!(grid.to_grid_coord(f32::INFINITY, f32::NEG_INFINITY, TILE), Some((3, 1)));
        assert_eq!(grid.to_grid_coord(f32::NAN, f32::NAN, TILE), Some((1, 1)));
    }

    #[test]
    fn test_pixel_center() {
        assert_eq!(Grid::pixel_center(0, TILE), -50.0);
        assert_eq!(Grid::pixel_center(1, TILE), 50.0);
        assert_eq!(Grid::pixel_center(3, TILE), 250.0);
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = Grid::new(5, 5);
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.get(0, 5), None);
        assert_eq!(grid.cell_at(99, 99), Cell::Empty);
        assert_eq!(grid.get(4, 4), Some(Cell::Empty));
    }

    #[test]
    fn test_set_ignores_border() {
        let mut grid = Grid::new(5, 5);
        let far = usize::MAX;
        let outside = [
            (0, 0), (0, 2), (4, 2), (2, 0), (2, 4), (7, 7),
            (far, 2), (2, far), (far, far),
        ];
        for (gx, gy) in outside {
            grid.set(gx, gy, Cell::Module(Style::Round));
        }
        assert_eq!(grid.filled_count(), 0);

        grid.set(2, 2, Cell::Module(Style::Round));
        assert_eq!(grid.get(2, 2), Some(Cell::Module(Style::Round)));
        assert_eq!(grid.filled_count(), 1);
    }

    #[test]
    fn test_far_out_of_range_writes_are_ignored() {
        let mut grid = Grid::new(5, 5);
        grid.set(usize::MAX, 2, Cell::Module(Style::Round));
        grid.unset(2, usize::MAX);
        assert!(!grid.is_interior(usize::MAX, usize::MAX));
        assert_eq!(grid, Grid::new(5, 5));
    }

    #[test]
    fn test_unset() {
        let mut grid = Grid::new(5, 5);
        grid.set(3, 1, Style::Sharp.into());
        grid.unset(3, 1);
        assert_eq!(grid.cell_at(3, 1), Cell::Empty);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut grid = Grid::new(5, 5);
        for gy in 1..4 {
            for gx in 1..4 {
                grid.set(gx, gy, Style::RoundTwist.into());
            }
        }
        grid.clear();
        assert!(grid.iter_cells().all(|(_, _, cell)| cell == Cell::Empty));
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let grid = Grid::new(3, 2);
        let positions: Vec<(usize, usize)> = grid.iter_cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    proptest! {
        #[test]
        fn prop_to_grid_coord_always_interior(
            px in proptest::num::f32::ANY,
            py in proptest::num::f32::ANY,
            w in 100.0f32..3000.0,
            h in 100.0f32..3000.0,
        ) {
            let grid = Grid::for_viewport(w, h, TILE);
            let (cols, rows) = grid.dimensions();
            let (gx, gy) = grid.to_grid_coord(px, py, TILE).unwrap();
            prop_assert!((1..=cols - 2).contains(&gx));
            prop_assert!((1..=rows - 2).contains(&gy));
            prop_assert!(grid.is_interior(gx, gy));
        }

        #[test]
        fn prop_set_is_idempotent(
            gx in prop_oneof![0usize..8, Just(usize::MAX)],
            gy in prop_oneof![0usize..8, Just(usize::MAX)],
            style_idx in 0usize..4,
        ) {
            let cell = Cell::Module(Style::ALL[style_idx]);
            let mut once = Grid::new(6, 6);
            once.set(gx, gy, cell);
            let mut twice = once.clone();
            twice.set(gx, gy, cell);
            prop_assert_eq!(once, twice);
        }
    }
}

use super::{Grid, Style};

/// Number of connector sprites per style (one per 4-bit neighbour pattern)
pub const SPRITES_PER_STYLE: usize = 16;

/// Which orthogonal neighbours of a cell are filled.
///
/// The sprite index packs the flags North, West, South, East from the most
/// to the least significant bit. Sprite sets are drawn against this order:
/// sprite `i` shows connectors on exactly the sides set in `i`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Connectors {
    pub north: bool,
    pub west: bool,
    pub south: bool,
    pub east: bool,
}

impl Connectors {
    const NORTH: u8 = 0b1000;
    const WEST: u8 = 0b0100;
    const SOUTH: u8 = 0b0010;
    const EAST: u8 = 0b0001;

    /// Inspect the four neighbours of an interior cell
    pub fn around(grid: &Grid, gx: usize, gy: usize) -> Self {
        let filled = |x: Option<usize>, y: Option<usize>| match (x, y) {
            (Some(x), Some(y)) => grid.cell_at(x, y).is_filled(),
            _ => false,
        };
        Self {
            north: filled(Some(gx), gy.checked_sub(1)),
            west: filled(gx.checked_sub(1), Some(gy)),
            south: filled(Some(gx), gy.checked_add(1)),
            east: filled(gx.checked_add(1), Some(gy)),
        }
    }

    /// Sprite index in `0..16`
    pub const fn sprite_index(self) -> u8 {
        ((self.north as u8) << 3)
            | ((self.west as u8) << 2)
            | ((self.south as u8) << 1)
            | (self.east as u8)
    }

    /// Inverse of [`Connectors::sprite_index`]; only the low four bits are read
    pub const fn from_index(index: u8) -> Self {
        Self {
            north: index & Self::NORTH != 0,
            west: index & Self::WEST != 0,
            south: index & Self::SOUTH != 0,
            east: index & Self::EAST != 0,
        }
    }
}

/// A filled interior cell together with its resolved sprite
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlacedModule {
    pub gx: usize,
    pub gy: usize,
    pub style: Style,
    pub sprite_index: u8,
}

/// Sprite index for the cell at (gx, gy)
pub fn sprite_index(grid: &Grid, gx: usize, gy: usize) -> u8 {
    Connectors::around(grid, gx, gy).sprite_index()
}

/// Resolve every filled interior cell, row by row
pub fn placed_modules(grid: &Grid) -> impl Iterator<Item = PlacedModule> + '_ {
    grid.iter_cells()
        .filter(move |&(gx, gy, _)| grid.is_interior(gx, gy))
        .filter_map(move |(gx, gy, cell)| {
            cell.style().map(|style| PlacedModule {
                gx,
                gy,
                style,
                sprite_index: sprite_index(grid, gx, gy),
            })
        })
}

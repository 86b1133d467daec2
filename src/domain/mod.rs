mod cell;
mod grid;
pub mod adjacency;

pub use cell::{Cell, Style};
pub use grid::Grid;
pub use adjacency::{Connectors, PlacedModule, SPRITES_PER_STYLE};

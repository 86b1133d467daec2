//! Module tiles: paint cells on a grid and let each filled cell pick one of
//! 16 connector sprites from its four neighbours.
//!
//! The canvas loads its sprites from `data/` at startup and exits if any are
//! missing. Generate them once with `cargo run --bin sprites`, then start
//! the canvas with `cargo run`.

// Domain layer - grid model and adjacency resolution
pub mod domain;

// Application layer - explicit paint state
pub mod application;

// Infrastructure layer - assets, UI layout, rendering, input
pub mod assets;
pub mod ui;
pub mod rendering;
pub mod input;

pub mod error;
pub mod logging;

// Re-exports for convenience
pub use domain::{Cell, Grid, Style, Connectors};
pub use application::AppState;
pub use assets::SpriteAtlas;
pub use error::AssetError;

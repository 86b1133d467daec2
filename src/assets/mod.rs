pub mod procedural;

use std::collections::HashMap;
use macroquad::prelude::{load_texture, Texture2D};
use tracing::{debug, info};
use crate::domain::{Style, SPRITES_PER_STYLE};
use crate::error::AssetError;

/// One 16-entry connector table per style.
///
/// Generic over the sprite type so the lookup logic is testable without a
/// graphics context; the canvas uses `SpriteAtlas<Texture2D>`.
#[derive(Clone, Debug)]
pub struct SpriteAtlas<T> {
    sets: HashMap<Style, [T; SPRITES_PER_STYLE]>,
}

impl<T> SpriteAtlas<T> {
    pub fn new() -> Self {
        Self { sets: HashMap::new() }
    }

    /// Register a style's table from a list of sprites in index order
    pub fn insert(&mut self, style: Style, sprites: Vec<T>) -> Result<(), AssetError> {
        let found = sprites.len();
        let table: [T; SPRITES_PER_STYLE] = sprites.try_into().map_err(|_| AssetError::Incomplete {
            prefix: style.asset_prefix(),
            found,
            expected: SPRITES_PER_STYLE,
        })?;
        self.sets.insert(style, table);
        Ok(())
    }

    /// Sprite for a style and resolved connector index
    pub fn sprite(&self, style: Style, index: u8) -> Option<&T> {
        self.sets.get(&style).and_then(|table| table.get(index as usize))
    }

    /// First style without a table, in legend order
    pub fn missing_style(&self) -> Option<Style> {
        Style::ALL.into_iter().find(|style| !self.sets.contains_key(style))
    }

    /// Hand the atlas out only once every style is present
    pub fn ensure_complete(self) -> Result<Self, AssetError> {
        match self.missing_style() {
            Some(style) => Err(AssetError::Incomplete {
                prefix: style.asset_prefix(),
                found: 0,
                expected: SPRITES_PER_STYLE,
            }),
            None => Ok(self),
        }
    }
}

impl<T> Default for SpriteAtlas<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// File name of one sprite, e.g. `C_07.png`
pub fn sprite_file_name(style: Style, index: usize) -> String {
    format!("{}_{:02}.png", style.asset_prefix(), index)
}

/// Path of one sprite inside the asset directory
pub fn sprite_path(dir: &str, style: Style, index: usize) -> String {
    format!("{}/{}", dir.trim_end_matches('/'), sprite_file_name(style, index))
}

/// Load all four sprite sets. Any missing or undecodable file is an error.
pub async fn load_atlas(dir: &str) -> Result<SpriteAtlas<Texture2D>, AssetError> {
    let mut atlas = SpriteAtlas::new();

    for style in Style::ALL {
        let mut sprites = Vec::with_capacity(SPRITES_PER_STYLE);
        for index in 0..SPRITES_PER_STYLE {
            let path = sprite_path(dir, style, index);
            let texture = load_texture(&path).await.map_err(|err| AssetError::Load {
                path: path.clone(),
                reason: format!("{err:?}"),
            })?;
            sprites.push(texture);
        }
        atlas.insert(style, sprites)?;
        debug!(style = style.label(), "sprite set loaded");
    }

    let atlas = atlas.ensure_complete()?;
    info!(dir, styles = Style::ALL.len(), "sprite atlas ready");
    Ok(atlas)
}

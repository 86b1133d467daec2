//! Writes the procedural connector sprite sets.
//!
//! Usage: `sprites [OUT_DIR] [SIZE]` (defaults: `data`, 200 px)

use std::{fs, path::PathBuf};
use anyhow::{Context, Result};
use tracing::info;
use module_tiles::{
    assets::{procedural::render_sprite, sprite_file_name},
    domain::SPRITES_PER_STYLE,
    logging, Style,
    ui::ASSET_DIR,
};

const DEFAULT_SIZE: u32 = 200;

fn main() -> Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ASSET_DIR.to_owned()));
    let size = match args.next() {
        Some(raw) => raw.parse::<u32>().with_context(|| format!("invalid sprite size {raw:?}"))?,
        None => DEFAULT_SIZE,
    };
    anyhow::ensure!(size > 0, "sprite size must be positive");

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for style in Style::ALL {
        for index in 0..SPRITES_PER_STYLE {
            let path = out_dir.join(sprite_file_name(style, index));
            render_sprite(style, index as u8, size)
                .save(&path)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        info!(style = style.label(), "sprite set written");
    }

    println!(
        "Wrote {} sprites ({size}x{size}) to {}",
        Style::ALL.len() * SPRITES_PER_STYLE,
        out_dir.display()
    );
    Ok(())
}

use macroquad::prelude::*;
use crate::application::AppState;
use crate::assets::SpriteAtlas;
use crate::domain::{Grid, adjacency};
use crate::ui::{self, legend_lines, GRID_LINE_THICKNESS, LEGEND_FONT_SIZE};

/// Draw one complete frame: background, overlay, modules, legend
pub fn draw_frame(state: &AppState, atlas: &SpriteAtlas<Texture2D>) {
    clear_background(ui::background_color());

    if state.show_grid {
        draw_grid_overlay(&state.grid, state.tile_size);
    }
    draw_modules(&state.grid, atlas, state.tile_size);
    draw_legend(state, screen_width());
}

/// Outline every cell of the array, border cells included
pub fn draw_grid_overlay(grid: &Grid, tile_size: f32) {
    let color = ui::grid_line_color();
    let half = tile_size / 2.0;

    for (gx, gy, _) in grid.iter_cells() {
        let center_x = Grid::pixel_center(gx, tile_size);
        let center_y = Grid::pixel_center(gy, tile_size);
        draw_rectangle_lines(
            center_x - half,
            center_y - half,
            tile_size,
            tile_size,
            GRID_LINE_THICKNESS,
            color,
        );
    }
}

/// Draw the resolved connector sprite of every filled interior cell
pub fn draw_modules(grid: &Grid, atlas: &SpriteAtlas<Texture2D>, tile_size: f32) {
    let half = tile_size / 2.0;
    let params = DrawTextureParams {
        dest_size: Some(vec2(tile_size, tile_size)),
        ..Default::default()
    };

    for module in adjacency::placed_modules(grid) {
        // the atlas is complete once loading succeeded
        let Some(texture) = atlas.sprite(module.style, module.sprite_index) else {
            continue;
        };
        let center_x = Grid::pixel_center(module.gx, tile_size);
        let center_y = Grid::pixel_center(module.gy, tile_size);
        draw_texture_ex(texture, center_x - half, center_y - half, WHITE, params.clone());
    }
}

/// Draw the mode legend with the active mode in the accent colour
pub fn draw_legend(state: &AppState, screen_width: f32) {
    let accent = ui::accent_color();
    let neutral = ui::text_color();

    legend_lines(state.active_style, screen_width).iter().for_each(|line| {
        let color = if line.highlighted { accent } else { neutral };
        // legend positions are line tops; draw_text wants a baseline
        draw_text(&line.text, line.x, line.y + LEGEND_FONT_SIZE, LEGEND_FONT_SIZE, color);
    });
}

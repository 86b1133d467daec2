use macroquad::prelude::*;
use macroquad::miniquad::{window::set_mouse_cursor, CursorIcon};
use tracing::{error, info};
use module_tiles::{
    AppState, assets, logging, rendering,
    input::{self, FrameInput},
    ui::{self, TILE_SIZE},
};

fn window_conf() -> Conf {
    Conf {
        window_title: ui::WINDOW_TITLE.to_owned(),
        window_width: ui::WINDOW_WIDTH,
        window_height: ui::WINDOW_HEIGHT,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init();

    // A partial sprite set would draw wrong connectors, so bail out instead
    let atlas = match assets::load_atlas(ui::ASSET_DIR).await {
        Ok(atlas) => atlas,
        Err(err) => {
            error!(%err, "cannot start without the complete sprite set");
            std::process::exit(1);
        }
    };

    set_mouse_cursor(CursorIcon::Crosshair);

    let mut state = AppState::new(screen_width(), screen_height(), TILE_SIZE);
    let (width, height) = state.viewport();
    let (cols, rows) = state.grid.dimensions();
    info!(width, height, cols, rows, "canvas ready");

    loop {
        state.handle_resize(screen_width(), screen_height());

        let frame = FrameInput::capture();
        state = input::apply_frame(state, &frame);

        rendering::draw_frame(&state, &atlas);

        next_frame().await;
    }
}

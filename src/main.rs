use std::time::Duration;

use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use life_engine::{Settings, Simulation, input, rendering, ui};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("life_engine=info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn window_conf() -> Conf {
    let (window_width, window_height) = ui::window_size(&Settings::load().unwrap_or_default());
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            error!(%err, "invalid settings");
            return;
        }
    };
    let mut simulation = match Simulation::new(&settings) {
        Ok(simulation) => simulation,
        Err(err) => {
            error!(%err, "could not create simulation");
            return;
        }
    };
    let board = ui::board(&settings);
    info!(
        cols = settings.cols(),
        rows = settings.rows(),
        interval_ms = settings.interval_ms,
        "board ready"
    );

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(&settings, simulation.is_running);

        input::process_button_clicks(&mut simulation, &buttons, mouse_pos);
        input::handle_board_click(&mut simulation, &board, mouse_pos);
        input::process_keyboard_input(&mut simulation);

        simulation.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_header();
        rendering::draw_board(simulation.engine(), &board);
        rendering::draw_controls(&simulation, &settings, &buttons, mouse_pos);

        next_frame().await;
    }
}

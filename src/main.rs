//! Bowling Lane entry point
//!
//! Opens the window, samples the keyboard and runs the fixed-step game loop.

use std::path::PathBuf;

use macroquad::input::{KeyCode, is_key_down, is_key_pressed};
use macroquad::time::{get_fps, get_frame_time};
use macroquad::window::{Conf, next_frame};

use bowling_lane::Settings;
use bowling_lane::consts::*;
use bowling_lane::renderer;
use bowling_lane::sim::{GameEvent, GameState, TickInput, tick};

/// Game instance holding all state
struct Game {
    state: GameState,
    settings: Settings,
    accumulator: f32,
    input: TickInput,
}

impl Game {
    fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(),
            settings,
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    /// Sample held keys and latch edge-triggered ones until a tick consumes them
    fn poll_input(&mut self) {
        self.input.left = is_key_down(KeyCode::Left) || is_key_down(KeyCode::A);
        self.input.right = is_key_down(KeyCode::Right) || is_key_down(KeyCode::D);
        if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space) {
            self.input.roll = true;
        }
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.roll = false;
        }

        if substeps == MAX_SUBSTEPS {
            // Drop the backlog rather than fast-forwarding the ball
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        for event in self.state.drain_events() {
            log_event(&event);
        }
    }

    fn render(&self) {
        let fps = self.settings.show_fps.then(get_fps);
        renderer::draw_frame(&self.state, &self.settings, fps);
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::RollStarted { roll, x } => {
            log::info!("Roll {} started at x={}", roll.index() + 1, x);
        }
        GameEvent::PinKnocked { index } => log::debug!("Pin {} knocked down", index),
        GameEvent::RollScored { roll, score } => {
            log::info!("Roll {} finished, score this roll: {}", roll.index() + 1, score);
        }
        GameEvent::TurnReset => log::info!("Turn complete, pins reset"),
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Bowling Lane".to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Bowling Lane starting...");

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());
    let mut game = Game::new(settings);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            log::info!("Bowling Lane exiting after {} turns", game.state.turn);
            break;
        }

        game.poll_input();
        game.update(get_frame_time());
        game.render();

        next_frame().await;
    }
}

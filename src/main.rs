//! Alien Siege entry point
//!
//! Headless demo driver: runs the core simulation with a small autopilot and
//! a logging renderer. A real front-end replaces both sides - it translates
//! device input into [`InputEvent`]s and draws the [`Frame`] snapshots.

use glam::Vec2;

use alien_siege::HighScores;
use alien_siege::consts::TICK_HZ;
use alien_siege::render::{Frame, Renderer};
use alien_siege::settings::Settings;
use alien_siege::sim::{
    GameEvent, GamePhase, GameState, Geometry, InputEvent, Rect, TickInput, tick,
};

/// Demo runs this many games back to back
const DEMO_GAMES: u32 = 3;
/// Safety stop per game
const MAX_TICKS_PER_GAME: u64 = 200_000;

/// Renderer that just logs a heartbeat; stands in for a real front-end
struct LogRenderer {
    frames: u64,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        if self.frames % (TICK_HZ as u64 * 5) == 0 {
            log::debug!(
                "frame {}: {} aliens, {} bullets, score {}",
                self.frames,
                frame.aliens.len(),
                frame.bullets.len(),
                frame.hud.score
            );
        }
    }
}

/// Steer toward the column of the lowest alien and keep the trigger held
fn autopilot(state: &GameState, input: &mut TickInput) {
    input.absorb(InputEvent::FireRequested);

    let target = state.fleet.aliens.iter().max_by(|a, b| {
        a.rect
            .bottom()
            .partial_cmp(&b.rect.bottom())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if let Some(alien) = target {
        let dx = alien.rect.center().x - state.ship.rect.center().x;
        if dx < -1.0 {
            input.absorb(InputEvent::MoveLeftHeld);
        } else if dx > 1.0 {
            input.absorb(InputEvent::MoveRightHeld);
        }
    }
}

fn log_events(state: &mut GameState) {
    for event in state.drain_events() {
        match event {
            GameEvent::AlienDestroyed { points } => log::debug!("+{points}"),
            other => log::info!("{other:?}"),
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Alien Siege (headless demo) starting");

    let geometry = Geometry::default();
    let play_button = Rect::centered_at(geometry.screen / 2.0, Vec2::new(200.0, 50.0));
    let mut state = GameState::new(geometry, Settings::default());
    let mut renderer = LogRenderer { frames: 0 };
    let mut scores = HighScores::new();

    for game in 1..=DEMO_GAMES {
        // Press the play button
        let mut input = TickInput::default();
        input.absorb(InputEvent::StartRequestedAt(play_button.center()));
        tick(&mut state, &input, &play_button);
        input.clear_one_shot();
        log_events(&mut state);

        let mut game_ticks = 0u64;
        while state.phase == GamePhase::Active && game_ticks < MAX_TICKS_PER_GAME {
            let mut input = TickInput::default();
            autopilot(&state, &mut input);
            tick(&mut state, &input, &play_button);
            log_events(&mut state);
            renderer.draw(&state.frame());
            game_ticks += 1;
        }

        let rank = scores.add_score(state.score, state.level);
        log::info!(
            "game {game}: score={} level={} ticks={} rank={rank:?}",
            state.score,
            state.level,
            game_ticks
        );
    }

    match serde_json::to_string_pretty(&scores) {
        Ok(json) => log::info!("leaderboard:\n{json}"),
        Err(err) => log::warn!("could not serialize leaderboard: {err}"),
    }
    log::info!(
        "demo done: high_score={} best={:?}",
        state.high_score,
        scores.top_score()
    );
}

//! Per-tick simulation step
//!
//! One call to [`tick`] advances the session by exactly one discrete step, in
//! a fixed order: input, bullet motion, fleet motion, bullet-alien
//! resolution, ship-alien check, bottom-reach check. No step is skipped or
//! batched, and each reaction kind fires at most once per tick.

use glam::Vec2;

use super::collision;
use super::rect::Rect;
use super::state::GameState;

/// A discrete input event from the device-polling layer.
///
/// The core never polls; the driver translates whatever its windowing layer
/// produces into these and folds them into a [`TickInput`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    QuitRequested,
    FireRequested,
    MoveLeftHeld,
    MoveRightHeld,
    /// Pointer activation at a screen position (play-button clicks)
    StartRequestedAt(Vec2),
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move-left held this tick
    pub move_left: bool,
    /// Move-right held this tick
    pub move_right: bool,
    /// Fire requested (one-shot)
    pub fire: bool,
    /// Pointer activation position, if any (one-shot)
    pub start_click: Option<Vec2>,
    /// Quit requested; observed by the driver, ignored by the core
    pub quit: bool,
}

impl TickInput {
    /// Fold one event into this tick's input
    pub fn absorb(&mut self, event: InputEvent) {
        match event {
            InputEvent::QuitRequested => self.quit = true,
            InputEvent::FireRequested => self.fire = true,
            InputEvent::MoveLeftHeld => self.move_left = true,
            InputEvent::MoveRightHeld => self.move_right = true,
            InputEvent::StartRequestedAt(pos) => self.start_click = Some(pos),
        }
    }

    /// Clear one-shot fields after a processed tick; held movement persists
    /// until the driver says otherwise.
    pub fn clear_one_shot(&mut self) {
        self.fire = false;
        self.start_click = None;
    }
}

/// Advance the session by one step.
///
/// `play_button` is the caller-supplied clickable region for start requests;
/// a click inside it starts a new game whenever the session is not already
/// Active. While Idle or GameOver nothing else ticks.
pub fn tick(state: &mut GameState, input: &TickInput, play_button: &Rect) {
    state.events.clear();

    if let Some(point) = input.start_click {
        if !state.phase.is_active() && play_button.contains(point) {
            state.start_game();
        }
    }

    if !state.phase.is_active() {
        return;
    }
    state.time_ticks += 1;

    // 1. Player input. Frozen for a beat after a hit; the simulation and the
    // frame stream keep running underneath.
    if state.input_freeze_ticks > 0 {
        state.input_freeze_ticks -= 1;
    } else {
        let ship_speed = state.settings.ship_speed;
        if input.move_left {
            state.ship.move_left(ship_speed);
        }
        if input.move_right {
            state.ship.move_right(ship_speed, &state.geometry);
        }
        if input.fire {
            state.fire_bullet();
        }
    }

    // 2. Bullets travel up; cull the ones fully above the playfield
    let bullet_speed = state.settings.bullet_speed;
    for bullet in &mut state.bullets {
        bullet.advance(bullet_speed);
    }
    state.bullets.retain(|b| !b.off_top());

    // 3. Fleet motion (uniform shift + edge drop policy)
    state
        .fleet
        .advance(state.settings.fleet_speed, state.settings.fleet_drop, &state.geometry);

    // 4. Bullet-alien resolution, scoring, fleet-cleared. An empty fleet only
    // counts as cleared when this tick's kills emptied it; a degenerate
    // never-populated fleet stays inert.
    let volley =
        collision::resolve_bullet_hits(&mut state.bullets, &mut state.fleet, state.settings.alien_points);
    state.record_kills(volley.kills, volley.points);
    if volley.kills > 0 && state.fleet.is_empty() {
        state.advance_level();
    }

    // 5. Ship-alien contact
    if collision::ship_struck(&state.ship, &state.fleet) {
        state.hit_response();
    }

    // 6. Fleet bottom-reach, same response as a ship hit. Runs against the
    // (possibly rebuilt) fleet unless the session just ended.
    if state.phase.is_active() && state.fleet.reached_bottom(&state.geometry) {
        state.hit_response();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HIT_PAUSE_TICKS;
    use crate::settings::Settings;
    use crate::sim::state::{GameEvent, GamePhase, Geometry};

    fn geometry() -> Geometry {
        Geometry::new(
            Vec2::new(400.0, 300.0),
            Vec2::new(20.0, 16.0),
            Vec2::new(20.0, 20.0),
            Vec2::new(3.0, 10.0),
        )
        .unwrap()
    }

    fn button() -> Rect {
        Rect::centered_at(Vec2::new(200.0, 150.0), Vec2::new(100.0, 40.0))
    }

    fn active_state() -> GameState {
        let mut state = GameState::new(geometry(), Settings::default());
        state.start_game();
        state
    }

    #[test]
    fn test_start_click_inside_button() {
        let mut state = GameState::new(geometry(), Settings::default());
        let input = TickInput {
            start_click: Some(Vec2::new(200.0, 150.0)),
            ..Default::default()
        };
        tick(&mut state, &input, &button());
        assert_eq!(state.phase, GamePhase::Active);
        assert!(state.events.contains(&GameEvent::GameStarted));
    }

    #[test]
    fn test_start_click_outside_button_ignored() {
        let mut state = GameState::new(geometry(), Settings::default());
        let input = TickInput {
            start_click: Some(Vec2::new(10.0, 10.0)),
            ..Default::default()
        };
        tick(&mut state, &input, &button());
        assert_eq!(state.phase, GamePhase::Idle);
    }

    #[test]
    fn test_start_click_while_active_ignored() {
        let mut state = active_state();
        state.score = 120;
        let input = TickInput {
            start_click: Some(Vec2::new(200.0, 150.0)),
            ..Default::default()
        };
        tick(&mut state, &input, &button());
        // No reset happened
        assert_eq!(state.score, 120);
    }

    #[test]
    fn test_idle_does_not_tick_gameplay() {
        let mut state = GameState::new(geometry(), Settings::default());
        let xs: Vec<f32> = state.fleet.aliens.iter().map(|a| a.rect.pos.x).collect();
        let input = TickInput {
            fire: true,
            move_left: true,
            ..Default::default()
        };
        tick(&mut state, &input, &button());
        assert_eq!(state.time_ticks, 0);
        assert!(state.bullets.is_empty());
        let xs_after: Vec<f32> = state.fleet.aliens.iter().map(|a| a.rect.pos.x).collect();
        assert_eq!(xs, xs_after);
    }

    #[test]
    fn test_held_movement_moves_ship() {
        let mut state = active_state();
        let x0 = state.ship.rect.pos.x;
        let input = TickInput {
            move_right: true,
            ..Default::default()
        };
        tick(&mut state, &input, &button());
        assert_eq!(state.ship.rect.pos.x, x0 + state.settings.ship_speed);

        // Both held cancels out
        let input = TickInput {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        let x1 = state.ship.rect.pos.x;
        tick(&mut state, &input, &button());
        assert_eq!(state.ship.rect.pos.x, x1);
    }

    #[test]
    fn test_bullet_cap_across_ticks() {
        let mut state = active_state();
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        for _ in 0..20 {
            tick(&mut state, &input, &button());
            assert!(state.bullets.len() <= state.settings.bullets_allowed);
        }
    }

    #[test]
    fn test_bullet_culled_off_top() {
        let mut state = active_state();
        // Park the fleet out of the bullet's path so nothing gets shot down
        for alien in &mut state.fleet.aliens {
            alien.rect.pos.y = 250.0;
            alien.rect.pos.x = 350.0;
        }
        state.ship.rect.pos.x = 0.0;
        state.fire_bullet();
        let idle = TickInput::default();
        for _ in 0..2000 {
            tick(&mut state, &idle, &button());
            if state.bullets.is_empty() {
                return;
            }
        }
        panic!("bullet never left the playfield");
    }

    #[test]
    fn test_kill_awards_points_and_removes_pair() {
        let mut state = active_state();
        let fleet_before = state.fleet.len();
        let target = state.fleet.aliens[0].rect;
        // Drop a bullet dead on the first alien
        state.fire_bullet();
        state.bullets[0].rect.pos = target.center();

        tick(&mut state, &TickInput::default(), &button());

        assert_eq!(state.fleet.len(), fleet_before - 1);
        assert!(state.bullets.is_empty());
        assert_eq!(state.score, state.settings.alien_points);
        assert_eq!(state.high_score, state.score);
        assert!(matches!(
            state.events[0],
            GameEvent::AlienDestroyed { points: 50 }
        ));
    }

    #[test]
    fn test_fleet_cleared_levels_up() {
        let mut state = active_state();
        // Leave a single alien and cover it with a bullet
        state.fleet.aliens.truncate(1);
        let target = state.fleet.aliens[0].rect;
        state.fire_bullet();
        state.bullets[0].rect.pos = target.center();
        let lives_before = state.lives;
        let points_before_scale = state.settings.alien_points;

        tick(&mut state, &TickInput::default(), &button());

        assert_eq!(state.level, 2);
        assert_eq!(state.lives, lives_before);
        assert!(!state.fleet.is_empty());
        assert!(state.bullets.is_empty());
        assert!(state.settings.alien_points > points_before_scale);
        assert!(state
            .events
            .contains(&GameEvent::FleetCleared { level: 2 }));
    }

    #[test]
    fn test_ship_hit_decrements_and_resets_field() {
        let mut state = active_state();
        // Move an alien onto the ship
        state.fleet.aliens[0].rect.pos = state.ship.rect.pos;

        tick(&mut state, &TickInput::default(), &button());

        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.input_freeze_ticks, HIT_PAUSE_TICKS);
        // Fresh fleet is back at the top, clear of the ship
        assert!(!collision::ship_struck(&state.ship, &state.fleet));
    }

    #[test]
    fn test_ship_hit_at_last_life_is_game_over() {
        let mut state = active_state();
        state.lives = 1;
        state.fleet.aliens[0].rect.pos = state.ship.rect.pos;
        let fleet_before = state.fleet.len();

        tick(&mut state, &TickInput::default(), &button());

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        // No rebuild: the last layout stays frozen (minus the usual motion)
        assert_eq!(state.fleet.len(), fleet_before);
        assert!(state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. })));
    }

    #[test]
    fn test_bottom_reach_is_a_ship_hit() {
        let mut state = active_state();
        // An alien in a corner away from the ship, touching the bottom
        state.fleet.aliens[0].rect.pos = Vec2::new(0.0, 290.0);

        tick(&mut state, &TickInput::default(), &button());

        assert_eq!(state.lives, 2);
        assert!(state
            .events
            .contains(&GameEvent::ShipHit { lives_left: 2 }));
    }

    #[test]
    fn test_input_frozen_after_hit_but_sim_runs() {
        let mut state = active_state();
        state.fleet.aliens[0].rect.pos = Vec2::new(0.0, 290.0);
        tick(&mut state, &TickInput::default(), &button());
        assert_eq!(state.input_freeze_ticks, HIT_PAUSE_TICKS);

        // Fire is ignored for the whole freeze window, ticks keep flowing
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        let ticks_before = state.time_ticks;
        for _ in 0..HIT_PAUSE_TICKS {
            tick(&mut state, &fire, &button());
            assert!(state.bullets.is_empty());
        }
        assert_eq!(state.time_ticks, ticks_before + HIT_PAUSE_TICKS as u64);
        assert_eq!(state.input_freeze_ticks, 0);

        // First post-freeze tick accepts input again
        tick(&mut state, &fire, &button());
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn test_restart_after_game_over_keeps_high_score() {
        let mut state = active_state();
        state.record_kills(3, 150);
        state.lives = 1;
        state.fleet.aliens[0].rect.pos = state.ship.rect.pos;
        tick(&mut state, &TickInput::default(), &button());
        assert_eq!(state.phase, GamePhase::GameOver);

        let input = TickInput {
            start_click: Some(Vec2::new(200.0, 150.0)),
            ..Default::default()
        };
        tick(&mut state, &input, &button());
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 150);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_absorb_events_into_tick_input() {
        let mut input = TickInput::default();
        input.absorb(InputEvent::MoveLeftHeld);
        input.absorb(InputEvent::FireRequested);
        input.absorb(InputEvent::StartRequestedAt(Vec2::new(1.0, 2.0)));
        input.absorb(InputEvent::QuitRequested);
        assert!(input.move_left && input.fire && input.quit);
        assert_eq!(input.start_click, Some(Vec2::new(1.0, 2.0)));

        input.clear_one_shot();
        assert!(!input.fire);
        assert!(input.start_click.is_none());
        assert!(input.move_left); // held keys persist
    }
}

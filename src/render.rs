//! Renderer boundary
//!
//! The core never draws. Once per loop iteration the driver pulls a borrowed
//! [`Frame`] snapshot and hands it to whatever [`Renderer`] it owns; the
//! snapshot borrows the state immutably, so nothing can mutate mid-draw.

use serde::{Deserialize, Serialize};

use crate::sim::state::{Alien, Bullet, GamePhase, GameState, Ship};

/// Scoreboard values for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u64,
    pub high_score: u64,
    pub level: u32,
    pub lives: u32,
    /// True while Idle or GameOver: the UI should show the play button
    pub show_play_prompt: bool,
}

/// One frame's worth of renderable state
#[derive(Debug)]
pub struct Frame<'a> {
    pub ship: &'a Ship,
    pub bullets: &'a [Bullet],
    pub aliens: &'a [Alien],
    pub hud: Hud,
}

/// Anything that can draw a frame (terminal, GPU surface, test probe)
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>);
}

impl GameState {
    /// Snapshot the current renderable state
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            ship: &self.ship,
            bullets: &self.bullets,
            aliens: &self.fleet.aliens,
            hud: Hud {
                score: self.score,
                high_score: self.high_score,
                level: self.level,
                lives: self.lives,
                show_play_prompt: !matches!(self.phase, GamePhase::Active),
            },
        }
    }
}

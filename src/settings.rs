//! Gameplay settings
//!
//! Two tiers: static tunables fixed for the whole session, and dynamic values
//! that reset to base on every new game and scale up multiplicatively on each
//! fleet-cleared level-up.

use serde::{Deserialize, Serialize};

/// Gameplay tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Static ===
    /// Starting lives
    pub ship_limit: u32,
    /// Maximum simultaneous live bullets
    pub bullets_allowed: usize,
    /// Vertical drop (px) when the fleet reaches a screen edge
    pub fleet_drop: f32,
    /// Per-level multiplier applied to speeds
    pub speedup_scale: f32,
    /// Per-level multiplier applied to alien points
    pub score_scale: f32,

    // === Base values for the dynamic tier ===
    pub base_ship_speed: f32,
    pub base_bullet_speed: f32,
    pub base_fleet_speed: f32,
    pub base_alien_points: u64,

    // === Dynamic (reset each game, scaled each level) ===
    /// Ship horizontal speed (px per tick)
    pub ship_speed: f32,
    /// Bullet upward speed (px per tick)
    pub bullet_speed: f32,
    /// Fleet horizontal speed (px per tick)
    pub fleet_speed: f32,
    /// Points awarded per destroyed alien (carries the level scale)
    pub alien_points: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ship_limit: 3,
            bullets_allowed: 3,
            fleet_drop: 10.0,
            speedup_scale: 1.1,
            score_scale: 1.5,

            base_ship_speed: 1.5,
            base_bullet_speed: 3.0,
            base_fleet_speed: 1.0,
            base_alien_points: 50,

            ship_speed: 1.5,
            bullet_speed: 3.0,
            fleet_speed: 1.0,
            alien_points: 50,
        }
    }
}

impl Settings {
    /// Restore the dynamic tier to base values (new game)
    pub fn reset_dynamic(&mut self) {
        self.ship_speed = self.base_ship_speed;
        self.bullet_speed = self.base_bullet_speed;
        self.fleet_speed = self.base_fleet_speed;
        self.alien_points = self.base_alien_points;
    }

    /// Scale the dynamic tier up for the next level.
    ///
    /// Speeds multiply by `speedup_scale`; alien points multiply by
    /// `score_scale` with integer truncation.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.fleet_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f64 * self.score_scale as f64) as u64;
    }
}

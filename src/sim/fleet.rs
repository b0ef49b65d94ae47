//! Fleet layout and motion
//!
//! The fleet is the full set of live aliens plus their shared motion state.
//! Invariant: every alien moves with the same horizontal velocity
//! `fleet_speed * direction` at any instant; edge reaction (drop + reverse)
//! applies to the whole fleet at most once per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Alien, Geometry, IdAllocator};

/// The hostile formation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fleet {
    /// Live aliens, in spawn order (left-to-right, top-to-bottom)
    pub aliens: Vec<Alien>,
    /// Shared horizontal direction: +1.0 (rightward) or -1.0 (leftward)
    pub direction: f32,
}

impl Fleet {
    /// Lay out a fresh grid of aliens.
    ///
    /// One alien-width margin on each side; the vertical band keeps three
    /// alien-heights plus the ship clear above the craft. Rows and columns
    /// are spaced two alien-sizes apart. Degenerate playfields (nothing
    /// fits) produce an empty fleet rather than an error.
    pub fn build(geometry: &Geometry, ids: &mut IdAllocator) -> Self {
        let aw = geometry.alien_size.x;
        let ah = geometry.alien_size.y;

        let available_x = geometry.screen.x - 2.0 * aw;
        let cols = (available_x / (2.0 * aw)).floor().max(0.0) as u32;

        let available_y = geometry.screen.y - 3.0 * ah - geometry.ship_size.y;
        let rows = (available_y / (2.0 * ah)).floor().max(0.0) as u32;

        let mut aliens = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                let pos = Vec2::new(
                    aw + 2.0 * aw * col as f32,
                    ah + 2.0 * ah * row as f32,
                );
                aliens.push(Alien::new(ids.alloc(), pos, geometry));
            }
        }
        log::debug!("fleet built: {rows} rows x {cols} cols");

        Self {
            aliens,
            direction: 1.0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    /// Advance one tick: uniform horizontal motion, then the edge policy.
    ///
    /// If any alien's leading edge has crossed the corresponding screen
    /// boundary, the entire fleet drops by `fleet_drop` and the direction
    /// flips - once, regardless of how many aliens breached.
    pub fn advance(&mut self, fleet_speed: f32, fleet_drop: f32, geometry: &Geometry) {
        let dx = fleet_speed * self.direction;
        for alien in &mut self.aliens {
            alien.rect.pos.x += dx;
        }

        if self.edge_breached(geometry) {
            self.drop_and_reverse(fleet_drop);
        }
    }

    /// Leading-edge test: right edge while moving right, left edge while
    /// moving left.
    fn edge_breached(&self, geometry: &Geometry) -> bool {
        if self.direction > 0.0 {
            self.aliens.iter().any(|a| a.rect.right() >= geometry.screen.x)
        } else {
            self.aliens.iter().any(|a| a.rect.left() <= 0.0)
        }
    }

    fn drop_and_reverse(&mut self, fleet_drop: f32) {
        for alien in &mut self.aliens {
            alien.rect.pos.y += fleet_drop;
        }
        self.direction = -self.direction;
        log::trace!("fleet edge: dropped {fleet_drop}, direction now {}", self.direction);
    }

    /// True if any alien's bottom edge reached the playfield bottom.
    /// Short-circuits on the first match; the caller reacts at most once per
    /// tick (same response as a ship hit).
    pub fn reached_bottom(&self, geometry: &Geometry) -> bool {
        self.aliens
            .iter()
            .any(|a| a.rect.bottom() >= geometry.screen.y)
    }
}

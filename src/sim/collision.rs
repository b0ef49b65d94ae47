//! Collision detection and resolution
//!
//! Exact rectangle intersection everywhere. Bullet-alien pairs remove both
//! sides in the same tick; a bullet destroys at most one alien (the first
//! intersecting one in formation order). The ship-alien and bottom-reach
//! checks just detect - the state machine owns the response.

use super::fleet::Fleet;
use super::state::{Bullet, Ship};

/// Result of one bullet-alien resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Volley {
    /// Aliens destroyed this tick
    pub kills: u32,
    /// Points awarded for them
    pub points: u64,
}

/// Resolve every live bullet against every live alien.
///
/// Each colliding bullet and its first intersecting alien are removed from
/// their collections; remaining entities keep their relative order. Returns
/// the kill tally with `alien_points` credited per kill.
pub fn resolve_bullet_hits(
    bullets: &mut Vec<Bullet>,
    fleet: &mut Fleet,
    alien_points: u64,
) -> Volley {
    let mut kills = 0u32;
    let mut b = 0;
    while b < bullets.len() {
        let hit = fleet
            .aliens
            .iter()
            .position(|alien| bullets[b].rect.intersects(&alien.rect));
        match hit {
            Some(a) => {
                fleet.aliens.remove(a);
                bullets.remove(b);
                kills += 1;
            }
            None => b += 1,
        }
    }

    Volley {
        kills,
        points: alien_points * kills as u64,
    }
}

/// Any-intersection test between the ship and the fleet, short-circuiting on
/// the first match.
pub fn ship_struck(ship: &Ship, fleet: &Fleet) -> bool {
    fleet
        .aliens
        .iter()
        .any(|alien| alien.rect.intersects(&ship.rect))
}

//! Player-fired missiles

use glam::Vec2;

use super::state::Player;
use crate::Rect;
use crate::tuning::Tuning;

/// A missile in flight (bottom-left corner at `pos`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
}

/// Live missiles, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileTrack {
    projectiles: Vec<Projectile>,
    size: Vec2,
    speed: f32,
}

impl ProjectileTrack {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            projectiles: Vec::new(),
            size: Vec2::new(tuning.missile_width, tuning.missile_height),
            speed: tuning.missile_speed,
        }
    }

    /// Launch a missile from the player's top-centre
    pub fn fire(&mut self, player: &Player, player_size: Vec2) -> Projectile {
        let projectile = Projectile {
            pos: Vec2::new(
                player.pos.x + player_size.x / 2.0 - self.size.x / 2.0,
                player.pos.y + player_size.y,
            ),
        };
        self.projectiles.push(projectile);
        projectile
    }

    /// Move every missile up and drop the ones past the top of the screen
    pub fn advance(&mut self, screen_height: f32) {
        let speed = self.speed;
        for p in &mut self.projectiles {
            p.pos.y += speed;
        }
        self.projectiles.retain(|p| p.pos.y <= screen_height);
    }

    /// Remove and return the missile at `index` (firing order)
    pub fn take(&mut self, index: usize) -> Option<Projectile> {
        (index < self.projectiles.len()).then(|| self.projectiles.remove(index))
    }

    pub fn rect(&self, projectile: &Projectile) -> Rect {
        Rect::new(projectile.pos.x, projectile.pos.y, self.size.x, self.size.y)
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn as_slice(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }
}

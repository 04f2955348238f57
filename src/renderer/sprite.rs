//! Sprite instance type handed to the drawing backend

use bytemuck::{Pod, Zeroable};

use crate::Rect;

/// What a sprite depicts; the backend picks a texture or flat fill from it
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Grass = 0,
    Road = 1,
    Border = 2,
    LaneMarker = 3,
    Crowd = 4,
    Player = 5,
    Projectile = 6,
    Hazard = 7,
}

/// One axis-aligned quad, laid out for a GPU instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// x, y (bottom-left), width, height in world units
    pub rect: [f32; 4],
    pub color: [f32; 4],
    /// [`SpriteKind`] as u32
    pub kind: u32,
    /// Vehicle index for the player, 0/1 for hazard variants, otherwise 0
    pub variant: u32,
}

impl SpriteInstance {
    pub fn new(kind: SpriteKind, rect: Rect, color: [f32; 4], variant: u32) -> Self {
        Self {
            rect: [rect.min.x, rect.min.y, rect.size.x, rect.size.y],
            color,
            kind: kind as u32,
            variant,
        }
    }

    pub fn bounds(&self) -> Rect {
        let [x, y, w, h] = self.rect;
        Rect::new(x, y, w, h)
    }
}

/// Colors for game elements
pub mod colors {
    pub const GRASS: [f32; 4] = [0.3, 0.6, 0.3, 1.0];
    pub const ROAD: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
    pub const BORDER_EVEN: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
    pub const BORDER_ODD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const LANE_MARKER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CROWD_EVEN: [f32; 4] = [0.9, 0.8, 0.2, 1.0];
    pub const CROWD_ODD: [f32; 4] = [0.2, 0.4, 0.9, 1.0];
    pub const PLAYER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PROJECTILE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const HAZARD_A: [f32; 4] = [1.0, 0.5, 0.1, 1.0];
    pub const HAZARD_B: [f32; 4] = [0.6, 0.2, 0.8, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 40);

        let sprite = SpriteInstance::new(
            SpriteKind::Hazard,
            Rect::new(1.0, 2.0, 3.0, 4.0),
            colors::HAZARD_B,
            1,
        );
        let bytes: &[u8] = bytemuck::bytes_of(&sprite);
        assert_eq!(bytes.len(), 40);
        assert_eq!(sprite.bounds(), Rect::new(1.0, 2.0, 3.0, 4.0));
    }
}

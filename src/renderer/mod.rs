//! Per-tick draw list
//!
//! Nothing here touches a graphics API. [`DrawList::capture`] turns the
//! simulation state into back-to-front sprite instances plus HUD values, and
//! the host uploads them however it draws (`bytemuck::cast_slice` gives a
//! ready instance buffer).

pub mod sprite;

pub use sprite::{SpriteInstance, SpriteKind, colors};

use crate::Rect;
use crate::sim::{GamePhase, GameState, HazardVariant, Parity, TrackSequence};

/// Numbers and banner shown over the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub score: u64,
    pub high_score: u64,
    pub phase: GamePhase,
    pub scroll_speed: f32,
    pub autopilot: bool,
}

impl Hud {
    /// Overlay text for the current phase, if any
    pub fn banner(&self) -> Option<&'static str> {
        match self.phase {
            GamePhase::Playing => None,
            GamePhase::Paused => Some("PAUSED"),
            GamePhase::GameOver => Some("GAME OVER - R to restart, Q to quit"),
            GamePhase::Terminated => Some("THANKS FOR PLAYING"),
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    /// Back to front
    pub sprites: Vec<SpriteInstance>,
    pub hud: Hud,
}

impl DrawList {
    pub fn capture(state: &GameState, autopilot: bool) -> Self {
        let t = &state.tuning;
        let (w, h) = (t.screen_width, t.screen_height);
        let mut sprites = Vec::new();

        // Static ground
        let push = |sprites: &mut Vec<SpriteInstance>, kind, rect, color| {
            sprites.push(SpriteInstance::new(kind, rect, color, 0));
        };
        push(
            &mut sprites,
            SpriteKind::Grass,
            Rect::new(0.0, 0.0, t.grass_width, h),
            colors::GRASS,
        );
        push(
            &mut sprites,
            SpriteKind::Grass,
            Rect::new(w - t.grass_width, 0.0, t.grass_width, h),
            colors::GRASS,
        );
        push(
            &mut sprites,
            SpriteKind::Road,
            Rect::new(t.grass_width, 0.0, w - 2.0 * t.grass_width, h),
            colors::ROAD,
        );

        // Scrolling scenery
        let lane_x = w / 2.0 - t.lane_marker_width / 2.0;
        for marker in state.scroller.lane_markers.iter() {
            push(
                &mut sprites,
                SpriteKind::LaneMarker,
                Rect::new(lane_x, marker.y, t.lane_marker_width, t.lane_marker_height),
                colors::LANE_MARKER,
            );
        }

        let border_xs = [t.grass_width, w - t.grass_width - t.border_width];
        emit_columns(
            &mut sprites,
            &state.scroller.borders,
            SpriteKind::Border,
            &border_xs,
            t.border_width,
            [colors::BORDER_EVEN, colors::BORDER_ODD],
        );

        if let Some(crowd) = &state.scroller.crowd {
            // Centred in each grass strip
            let left = t.grass_width / 2.0 - t.crowd_marker_width / 2.0;
            let crowd_xs = [left, w - t.grass_width + left];
            emit_columns(
                &mut sprites,
                crowd,
                SpriteKind::Crowd,
                &crowd_xs,
                t.crowd_marker_width,
                [colors::CROWD_EVEN, colors::CROWD_ODD],
            );
        }

        // Actors
        for hazard in state.hazards.hazards() {
            let (variant, color) = match hazard.variant {
                HazardVariant::A => (0, colors::HAZARD_A),
                HazardVariant::B => (1, colors::HAZARD_B),
            };
            sprites.push(SpriteInstance::new(
                SpriteKind::Hazard,
                state.hazards.rect(hazard),
                color,
                variant,
            ));
        }

        for projectile in state.projectiles.as_slice() {
            push(
                &mut sprites,
                SpriteKind::Projectile,
                state.projectiles.rect(projectile),
                colors::PROJECTILE,
            );
        }

        sprites.push(SpriteInstance::new(
            SpriteKind::Player,
            state.player_rect(),
            colors::PLAYER,
            u32::from(state.player.vehicle),
        ));

        Self {
            sprites,
            hud: Hud {
                score: state.score.score(),
                high_score: state.score.high_score(),
                phase: state.phase,
                scroll_speed: state.scroll_speed,
                autopilot,
            },
        }
    }

    pub fn count(&self, kind: SpriteKind) -> usize {
        self.sprites.iter().filter(|s| s.kind == kind as u32).count()
    }

    /// Raw bytes for an instance buffer upload
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.sprites)
    }
}

/// One sprite per element per column, colored by parity
fn emit_columns(
    sprites: &mut Vec<SpriteInstance>,
    seq: &TrackSequence,
    kind: SpriteKind,
    xs: &[f32],
    width: f32,
    [even, odd]: [[f32; 4]; 2],
) {
    for (parity, element) in seq.iter_with_parity() {
        let color = match parity {
            Parity::Even => even,
            Parity::Odd => odd,
        };
        for &x in xs {
            sprites.push(SpriteInstance::new(
                kind,
                Rect::new(x, element.y, width, seq.height()),
                color,
                0,
            ));
        }
    }
}

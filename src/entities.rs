//! All game entity types — plain data plus derived bounding geometry.
//!
//! World coordinates put the origin at the bottom-left corner of the play
//! area with the y axis pointing up, so `top` is always the larger y.

use glam::Vec2;

// ── Play area ─────────────────────────────────────────────────────────────────

/// The fixed rectangle `0..width` x `0..height` every entity lives in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

impl ScreenBounds {
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0);
        Self { width, height }
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn bottom(&self) -> f32 {
        self.min.y
    }

    pub fn top(&self) -> f32 {
        self.max.y
    }
}

// ── Moving bodies ─────────────────────────────────────────────────────────────

/// Position plus a flat per-frame displacement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Center of the sprite.
    pub position: Vec2,
    /// Added to `position` once per update, not scaled by elapsed time.
    pub velocity: Vec2,
    pub half_extents: Vec2,
}

impl Body {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, self.half_extents)
    }

    pub fn left(&self) -> f32 {
        self.aabb().left()
    }

    pub fn right(&self) -> f32 {
        self.aabb().right()
    }

    pub fn bottom(&self) -> f32 {
        self.aabb().bottom()
    }

    pub fn top(&self) -> f32 {
        self.aabb().top()
    }
}

/// Accumulates elapsed seconds until `period` is reached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireTimer {
    pub elapsed: f32,
    pub period: f32,
}

impl FireTimer {
    pub fn new(period: f32) -> Self {
        debug_assert!(period > 0.0);
        Self { elapsed: 0.0, period }
    }
}

// ── Enemy & projectile ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Body,
    pub timer: FireTimer,
    /// Degrees added to `angle` every update. Cosmetic only.
    pub spin_rate: f32,
    /// Current facing in degrees, kept in `0..360`.
    pub angle: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub body: Body,
    /// Facing in degrees; -90 points straight down.
    pub angle: f32,
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Placed directly by pointer input; never moved by physics.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub half_extents: Vec2,
}

impl Player {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.position, self.half_extents)
    }
}

/// The sword carried beside the player. Drawn, never collided.
#[derive(Clone, Debug, PartialEq)]
pub struct Sword {
    pub position: Vec2,
    pub half_extents: Vec2,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub bounds: ScreenBounds,
    pub player: Player,
    pub sword: Sword,
    pub enemies: Vec<Enemy>,
    /// Every live projectile. Enemies hand theirs over on firing.
    pub projectiles: Vec<Projectile>,
    /// Enemies caught by the player. Never decreases.
    pub score: u32,
    pub frame: u64,
}

//! Pure game-logic functions.
//!
//! Every public function takes immutable references to the current values
//! (and, where needed, an RNG handle) and returns brand-new values.  Side
//! effects are limited to the injected RNG and log output.

use glam::Vec2;
use log::{debug, info, trace};
use rand::Rng;

use crate::constants::{
    ENEMY_COUNT, ENEMY_FIRE_PERIOD, ENEMY_HEIGHT, ENEMY_MAX_SPEED, ENEMY_WIDTH, PLAYER_HEIGHT,
    PLAYER_START_X, PLAYER_START_Y, PLAYER_WIDTH, PROJECTILE_ANGLE, PROJECTILE_HEIGHT,
    PROJECTILE_SPEED_Y, PROJECTILE_WIDTH, SWORD_HEIGHT, SWORD_OFFSET_X, SWORD_OFFSET_Y,
    SWORD_WIDTH,
};
use crate::entities::{
    Aabb, Body, Enemy, FireTimer, GameState, Player, Projectile, ScreenBounds, Sword,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: the player in its start corner and
/// `ENEMY_COUNT` enemies scattered over the play area.
pub fn init_state(bounds: ScreenBounds, rng: &mut impl Rng) -> GameState {
    let enemies: Vec<Enemy> = (0..ENEMY_COUNT).map(|_| spawn_enemy(bounds, rng)).collect();
    for enemy in &enemies {
        info!(
            "enemy spawned at ({}, {}) moving ({}, {}) spin {}",
            enemy.body.position.x,
            enemy.body.position.y,
            enemy.body.velocity.x,
            enemy.body.velocity.y,
            enemy.spin_rate
        );
    }

    let player_pos = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
    GameState {
        bounds,
        player: Player {
            position: player_pos,
            half_extents: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT) / 2.0,
        },
        sword: Sword {
            position: sword_position(player_pos),
            half_extents: Vec2::new(SWORD_WIDTH, SWORD_HEIGHT) / 2.0,
        },
        enemies,
        projectiles: Vec::new(),
        score: 0,
        frame: 0,
    }
}

fn spawn_enemy(bounds: ScreenBounds, rng: &mut impl Rng) -> Enemy {
    let mut component = || rng.gen_range(-ENEMY_MAX_SPEED..=ENEMY_MAX_SPEED) as f32;
    let velocity = Vec2::new(component(), component());
    let spin_rate = component();

    // Whole-unit positions anywhere in the play area, edges may start outside.
    let x = rng.gen_range(0..(bounds.width as i32).max(1)) as f32;
    let y = rng.gen_range(0..(bounds.height as i32).max(1)) as f32;

    Enemy {
        body: Body {
            position: Vec2::new(x, y),
            velocity,
            half_extents: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT) / 2.0,
        },
        timer: FireTimer::new(ENEMY_FIRE_PERIOD),
        spin_rate,
        angle: 0.0,
    }
}

fn sword_position(player: Vec2) -> Vec2 {
    player + Vec2::new(SWORD_OFFSET_X, SWORD_OFFSET_Y)
}

// ── Movement & bounce ────────────────────────────────────────────────────────

/// Move a body by one frame's worth of velocity.
pub fn advance(body: &Body) -> Body {
    Body {
        position: body.position + body.velocity,
        ..*body
    }
}

/// Reverse each velocity component whose edge is outside `bounds`.
///
/// Axes are checked independently and the position is never clamped, so a
/// fast body may still be outside on the next frame.
pub fn apply_bounce(body: &Body, bounds: ScreenBounds) -> Body {
    let mut velocity = body.velocity;

    if body.left() < 0.0 || body.right() > bounds.width {
        velocity.x = -velocity.x;
    }
    if body.bottom() < 0.0 || body.top() > bounds.height {
        velocity.y = -velocity.y;
    }

    if velocity != body.velocity {
        trace!(
            "bounce at ({}, {}): velocity ({}, {}) -> ({}, {})",
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y,
            velocity.x,
            velocity.y
        );
    }

    Body { velocity, ..*body }
}

// ── Fire timer ───────────────────────────────────────────────────────────────

pub fn tick_timer(timer: &FireTimer, dt: f32) -> FireTimer {
    FireTimer {
        elapsed: timer.elapsed + dt,
        ..*timer
    }
}

pub fn should_fire(timer: &FireTimer) -> bool {
    timer.elapsed >= timer.period
}

/// Fire one projectile from `enemy`.
///
/// The timer restarts from exactly zero; any overshoot past the period is
/// dropped.  The projectile is centred under the enemy with its top touching
/// the enemy's bottom edge.
pub fn fire(enemy: &Enemy) -> (Enemy, Projectile) {
    let half_extents = Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT) / 2.0;
    let position = Vec2::new(
        enemy.body.position.x,
        enemy.body.bottom() - half_extents.y,
    );
    let projectile = Projectile {
        body: Body {
            position,
            velocity: Vec2::new(0.0, PROJECTILE_SPEED_Y),
            half_extents,
        },
        angle: PROJECTILE_ANGLE,
    };
    debug!("projectile fired at ({}, {})", position.x, position.y);

    let enemy = Enemy {
        timer: FireTimer {
            elapsed: 0.0,
            ..enemy.timer
        },
        ..enemy.clone()
    };
    (enemy, projectile)
}

/// One frame of enemy behaviour: move, bounce, spin, then maybe fire.
pub fn update_enemy(
    enemy: &Enemy,
    bounds: ScreenBounds,
    dt: f32,
) -> (Enemy, Option<Projectile>) {
    let body = apply_bounce(&advance(&enemy.body), bounds);
    let timer = tick_timer(&enemy.timer, dt);
    let moved = Enemy {
        body,
        timer,
        angle: (enemy.angle + enemy.spin_rate).rem_euclid(360.0),
        ..enemy.clone()
    };

    if should_fire(&moved.timer) {
        let (fired, projectile) = fire(&moved);
        (fired, Some(projectile))
    } else {
        (moved, None)
    }
}

// ── Collision ────────────────────────────────────────────────────────────────

/// True when the two boxes share interior area.  Boxes that only touch
/// along an edge do not overlap.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Put the player's center on the pointer and carry the sword along.
pub fn pointer_motion(state: &GameState, x: f32, y: f32) -> GameState {
    let position = Vec2::new(x, y);
    GameState {
        player: Player {
            position,
            ..state.player.clone()
        },
        sword: Sword {
            position: sword_position(position),
            ..state.sword.clone()
        },
        ..state.clone()
    }
}

// ── Per-frame update ─────────────────────────────────────────────────────────

/// Advance the simulation by one frame of `dt` seconds.
pub fn update(state: &GameState, dt: f32) -> GameState {
    let frame = state.frame + 1;

    // ── 1. Enemies move, bounce and fire ─────────────────────────────────────
    let mut projectiles = state.projectiles.clone();
    let mut enemies = Vec::with_capacity(state.enemies.len());
    for enemy in &state.enemies {
        let (enemy, shot) = update_enemy(enemy, state.bounds, dt);
        enemies.push(enemy);
        projectiles.extend(shot);
    }

    // ── 2. Projectiles fall; cull once the top edge drops below zero ─────────
    let projectiles: Vec<Projectile> = projectiles
        .iter()
        .filter_map(|p| {
            let body = advance(&p.body);
            if body.top() < 0.0 {
                debug!("projectile culled at ({}, {})", body.position.x, body.position.y);
                None
            } else {
                Some(Projectile { body, ..p.clone() })
            }
        })
        .collect();

    // ── 3. Collision: player ↔ enemies ───────────────────────────────────────
    let player_box = state.player.aabb();
    let hits: Vec<usize> = enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| overlaps(&player_box, &e.body.aabb()))
        .map(|(i, _)| i)
        .collect();

    // ── 4. Remove the hit enemies, one point each ────────────────────────────
    let score = state.score + hits.len() as u32;
    if !hits.is_empty() {
        info!("player caught {} enemy(s), score {}", hits.len(), score);
    }
    let enemies: Vec<Enemy> = enemies
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !hits.contains(i))
        .map(|(_, e)| e)
        .collect();

    GameState {
        enemies,
        projectiles,
        score,
        frame,
        ..state.clone()
    }
}

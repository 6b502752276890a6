// Play area (world units, y axis up)
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

// Sprite sizes, full width x height
pub const PLAYER_WIDTH: f32 = 32.0;
pub const PLAYER_HEIGHT: f32 = 48.0;
pub const SWORD_WIDTH: f32 = 12.0;
pub const SWORD_HEIGHT: f32 = 40.0;
pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 56.0;
pub const PROJECTILE_WIDTH: f32 = 9.0;
pub const PROJECTILE_HEIGHT: f32 = 54.0;

// Player
pub const PLAYER_START_X: f32 = 50.0;
pub const PLAYER_START_Y: f32 = 50.0;
/// Where the sword sits relative to the player's center.
pub const SWORD_OFFSET_X: f32 = 20.0;
pub const SWORD_OFFSET_Y: f32 = 70.0;

// Enemies
pub const ENEMY_COUNT: usize = 1;
/// Seconds between shots.
pub const ENEMY_FIRE_PERIOD: f32 = 2.0;
/// Velocity and spin components are drawn from `-ENEMY_MAX_SPEED..=ENEMY_MAX_SPEED`.
pub const ENEMY_MAX_SPEED: i32 = 3;

// Projectiles
/// Units per frame, negative is downward.
pub const PROJECTILE_SPEED_Y: f32 = -2.0;
pub const PROJECTILE_ANGLE: f32 = -90.0;

// HUD
pub const SCORE_TEXT_X: f32 = 10.0;
pub const SCORE_TEXT_Y: f32 = 20.0;

//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer, the viewport and an immutable
//! view of the game state.  No game logic is performed; this module only
//! translates state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use bounce_shooter::constants::{SCORE_TEXT_X, SCORE_TEXT_Y};
use bounce_shooter::entities::{Aabb, Enemy, GameState, Projectile};
use bounce_shooter::viewport::Viewport;
use glam::Vec2;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::Rgb { r: 59, g: 122, b: 87 }; // amazon green
const C_ENEMY: Color = Color::DarkRed;
const C_PROJECTILE: Color = Color::Cyan;
const C_PLAYER: Color = Color::White;
const C_SWORD: Color = Color::Grey;
const C_SCORE: Color = Color::White;

/// Enemy glyphs for each quarter turn of its spin.
const ENEMY_GLYPHS: [&str; 4] = ["◐", "◓", "◑", "◒"];

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: enemies, projectiles, the player list, then
/// the score text on top.
pub fn render<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_BACKGROUND))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for enemy in &state.enemies {
        draw_enemy(out, view, enemy)?;
    }
    for projectile in &state.projectiles {
        draw_projectile(out, view, projectile)?;
    }

    fill(out, view, &state.player.aabb(), C_PLAYER, "█")?;
    let sword = Aabb::from_center(state.sword.position, state.sword.half_extents);
    fill(out, view, &sword, C_SWORD, "┃")?;

    draw_score(out, view, state.score)?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_enemy<W: Write>(out: &mut W, view: &Viewport, enemy: &Enemy) -> std::io::Result<()> {
    let quarter = (enemy.angle / 90.0) as usize % ENEMY_GLYPHS.len();
    fill(out, view, &enemy.body.aabb(), C_ENEMY, ENEMY_GLYPHS[quarter])
}

fn draw_projectile<W: Write>(
    out: &mut W,
    view: &Viewport,
    projectile: &Projectile,
) -> std::io::Result<()> {
    fill(out, view, &projectile.body.aabb(), C_PROJECTILE, "│")
}

/// Paint every cell a box covers with `glyph`.
fn fill<W: Write>(
    out: &mut W,
    view: &Viewport,
    aabb: &Aabb,
    color: Color,
    glyph: &str,
) -> std::io::Result<()> {
    let Some(cells) = view.cells_for(aabb) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(color))?;
    let line = glyph.repeat((cells.col1 - cells.col0 + 1) as usize);
    for row in cells.row0..=cells.row1 {
        out.queue(cursor::MoveTo(cells.col0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_score<W: Write>(out: &mut W, view: &Viewport, score: u32) -> std::io::Result<()> {
    let (col, row) = view
        .to_cell(Vec2::new(SCORE_TEXT_X, SCORE_TEXT_Y))
        .unwrap_or((0, view.rows.saturating_sub(1)));
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(format!("Score: {}", score)))?;
    Ok(())
}

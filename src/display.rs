/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// world.  No game logic is performed; this module only translates state
/// into terminal commands.  One `render` call queues a complete frame and
/// the final flush presents it.

use std::io::Write;
use std::time::Duration;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use sky_dodge::assets::{Rgb, SpriteImage};
use sky_dodge::entities::{GameStatus, MobKind, Rect, World};
use sky_dodge::viewport::Viewport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::Rgb {
    r: 135,
    g: 206,
    b: 250,
};
const C_JET: Color = Color::Rgb { r: 70, g: 70, b: 80 };
const C_MISSILE: Color = Color::Rgb { r: 178, g: 34, b: 34 };
const C_CLOUD: Color = Color::Rgb {
    r: 255,
    g: 255,
    b: 255,
};
const C_HUD: Color = Color::Rgb { r: 20, g: 40, b: 90 };
const C_HINT: Color = Color::Rgb { r: 60, g: 90, b: 140 };

// ── Visual styles ─────────────────────────────────────────────────────────────

/// Image sprites, one per entity kind, already resampled to cell size.
pub struct SpriteSet {
    pub jet: SpriteImage,
    pub missile: SpriteImage,
    pub cloud: SpriteImage,
}

/// How entities are drawn: downsampled images, or the flat-color blocks the
/// game falls back to when no image directory is present.
pub enum Visuals {
    Images(SpriteSet),
    Plain,
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: sky, player, then every mob in spawn order so
/// later spawns stack on top.
pub fn render<W: Write>(
    out: &mut W,
    world: &World,
    vp: &Viewport,
    visuals: &Visuals,
    elapsed: Duration,
) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_SKY))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if let Some(player) = &world.player {
        draw_entity(out, &player.rect, vp, visuals, EntityStyle::Jet)?;
    }
    for mob in &world.mobs {
        let look = match mob.kind {
            MobKind::Missile => EntityStyle::Missile,
            MobKind::Cloud => EntityStyle::Cloud,
        };
        draw_entity(out, &mob.rect, vp, visuals, look)?;
    }

    draw_hud(out, world, vp, elapsed)?;

    if world.status == GameStatus::Downed {
        draw_game_over(out, world, vp)?;
    }

    // Park cursor in a harmless spot and flush — this is the present step
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows().saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
enum EntityStyle {
    Jet,
    Missile,
    Cloud,
}

fn draw_entity<W: Write>(
    out: &mut W,
    rect: &Rect,
    vp: &Viewport,
    visuals: &Visuals,
    look: EntityStyle,
) -> std::io::Result<()> {
    match visuals {
        Visuals::Images(set) => {
            let sprite = match look {
                EntityStyle::Jet => &set.jet,
                EntityStyle::Missile => &set.missile,
                EntityStyle::Cloud => &set.cloud,
            };
            let (c0, r0) = vp.origin_cell(rect);
            draw_sprite(out, sprite, c0, r0, vp.cols(), vp.rows())
        }
        Visuals::Plain => {
            let color = match look {
                EntityStyle::Jet => C_JET,
                EntityStyle::Missile => C_MISSILE,
                EntityStyle::Cloud => C_CLOUD,
            };
            draw_block(out, rect, vp, color)
        }
    }
}

/// Blit a cell sprite with its top-left at grid position `(c0, r0)`,
/// skipping transparent cells and anything outside the grid.
fn draw_sprite<W: Write>(
    out: &mut W,
    sprite: &SpriteImage,
    c0: i32,
    r0: i32,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    for row in 0..sprite.rows() {
        let r = r0 + row as i32;
        if r < 0 || r >= rows as i32 {
            continue;
        }
        for col in 0..sprite.cols() {
            let c = c0 + col as i32;
            if c < 0 || c >= cols as i32 {
                continue;
            }
            let Some(Rgb(cr, cg, cb)) = sprite.cell(col, row) else {
                continue;
            };
            out.queue(cursor::MoveTo(c as u16, r as u16))?;
            out.queue(style::SetForegroundColor(Color::Rgb {
                r: cr,
                g: cg,
                b: cb,
            }))?;
            out.queue(Print("█"))?;
        }
    }
    Ok(())
}

/// Flat-color fill of the entity's projected cells.
fn draw_block<W: Write>(
    out: &mut W,
    rect: &Rect,
    vp: &Viewport,
    color: Color,
) -> std::io::Result<()> {
    let Some(cr) = vp.project(rect) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(color))?;
    let line = "█".repeat(cr.w as usize);
    for row in cr.row..cr.row + cr.h {
        out.queue(cursor::MoveTo(cr.col, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    world: &World,
    vp: &Viewport,
    elapsed: Duration,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Dodged:{:>4}   Time:{:>4}s",
        world.dodged,
        elapsed.as_secs()
    )))?;

    let hint = "← ↑ ↓ → / WASD : Fly   Q : Quit";
    out.queue(cursor::MoveTo(1, vp.rows().saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, world: &World, vp: &Viewport) -> std::io::Result<()> {
    let lines: &[&str] = &[
        "╔══════════════════════╗",
        "║     SHOT  DOWN       ║",
        "╚══════════════════════╝",
    ];
    let stats = format!("Missiles dodged: {}", world.dodged);
    let hint = "R - Fly Again  Q - Quit";

    let cx = vp.cols() / 2;
    let total_rows = lines.len() as u16 + 2;
    let start_row = (vp.rows() / 2).saturating_sub(total_rows / 2);

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }

    let stats_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(stats.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, stats_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&stats))?;

    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, stats_row + 1))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}

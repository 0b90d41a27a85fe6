/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `World` (and, where needed, the `Config` or an RNG handle) and returns
/// a brand-new `World`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::config::Config;
use crate::entities::{GameStatus, Held, Mob, MobKind, Player, Rect, World};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial world: the player centered, the sky empty.
pub fn init_world(cfg: &Config) -> World {
    let (pw, ph) = cfg.player_size;
    World {
        player: Some(Player {
            rect: Rect::from_center(cfg.world_w / 2, cfg.world_h / 2, pw, ph),
        }),
        mobs: Vec::new(),
        dodged: 0,
        status: GameStatus::Flying,
    }
}

// ── Player movement ──────────────────────────────────────────────────────────

/// Pull a rect back inside `[0, w] × [0, h]`, one axis at a time.
/// A no-op for rects already in bounds; applying it twice changes nothing.
pub fn clamp_rect(rect: Rect, w: i32, h: i32) -> Rect {
    let mut r = rect;
    if r.left() < 0 {
        r.x = 0;
    }
    if r.right() > w {
        r.x = w - r.w;
    }
    if r.top() < 0 {
        r.y = 0;
    }
    if r.bottom() > h {
        r.y = h - r.h;
    }
    r
}

/// Move the player one fixed step per held direction, then clamp to the
/// world.  Opposite keys cancel; diagonals get the full step on each axis.
pub fn update_player(world: &World, held: &Held, cfg: &Config) -> World {
    let player = match &world.player {
        Some(p) => p,
        None => return world.clone(),
    };

    let mut rect = player.rect;
    if held.up {
        rect = rect.translated(0, -cfg.player_step);
    }
    if held.down {
        rect = rect.translated(0, cfg.player_step);
    }
    if held.left {
        rect = rect.translated(-cfg.player_step, 0);
    }
    if held.right {
        rect = rect.translated(cfg.player_step, 0);
    }
    rect = clamp_rect(rect, cfg.world_w, cfg.world_h);

    World {
        player: Some(Player { rect }),
        ..world.clone()
    }
}

// ── Mob movement ─────────────────────────────────────────────────────────────

/// Advance every missile and cloud leftward by its own speed, dropping any
/// whose right edge has crossed the left world boundary.  Missiles dropped
/// this way were successfully dodged and bump the counter.
pub fn update_mobs(world: &World) -> World {
    let mut dodged = world.dodged;
    let mobs: Vec<Mob> = world
        .mobs
        .iter()
        .filter_map(|m| {
            let rect = m.rect.translated(-m.speed, 0);
            if rect.right() < 0 {
                if m.kind == MobKind::Missile {
                    dodged += 1;
                }
                None
            } else {
                Some(Mob { rect, ..m.clone() })
            }
        })
        .collect();

    World {
        mobs,
        dodged,
        ..world.clone()
    }
}

// ── Spawning ─────────────────────────────────────────────────────────────────

fn spawn_center(cfg: &Config, rng: &mut impl Rng) -> (i32, i32) {
    let cx = cfg.world_w + rng.gen_range(cfg.spawn_margin.clone());
    let cy = rng.gen_range(0..=cfg.world_h);
    (cx, cy)
}

/// Add one missile just past the right edge, at a random height, with a
/// speed drawn once from the configured range.
pub fn spawn_missile(world: &World, cfg: &Config, rng: &mut impl Rng) -> World {
    let (cx, cy) = spawn_center(cfg, rng);
    let (w, h) = cfg.missile_size;
    let mut mobs = world.mobs.clone();
    mobs.push(Mob {
        kind: MobKind::Missile,
        rect: Rect::from_center(cx, cy, w, h),
        speed: rng.gen_range(cfg.missile_speed.clone()),
    });
    World {
        mobs,
        ..world.clone()
    }
}

/// Add one cloud just past the right edge.  Clouds share a fixed drift speed.
pub fn spawn_cloud(world: &World, cfg: &Config, rng: &mut impl Rng) -> World {
    let (cx, cy) = spawn_center(cfg, rng);
    let (w, h) = cfg.cloud_size;
    let mut mobs = world.mobs.clone();
    mobs.push(Mob {
        kind: MobKind::Cloud,
        rect: Rect::from_center(cx, cy, w, h),
        speed: cfg.cloud_speed,
    });
    World {
        mobs,
        ..world.clone()
    }
}

// ── Collision ────────────────────────────────────────────────────────────────

/// Test the player against every missile.  Any positive-area overlap shoots
/// the player down: it leaves the render list and the run is over.  Clouds
/// never take part.
pub fn apply_collision(world: &World) -> World {
    let hit = match &world.player {
        Some(p) => world.missiles().any(|m| m.rect.intersects(&p.rect)),
        None => false,
    };

    if hit {
        World {
            player: None,
            status: GameStatus::Downed,
            ..world.clone()
        }
    } else {
        world.clone()
    }
}

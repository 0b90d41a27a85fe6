/// All game entity types plus the rectangle primitive they share.
/// Data and intrinsic geometry only — update rules live in `compute`.

// ── Rectangles ────────────────────────────────────────────────────────────────

/// Axis-aligned integer rectangle, stored as top-left corner plus extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect { x, y, w, h }
    }

    /// Build a rect of the given extent centered on `(cx, cy)`.
    pub fn from_center(cx: i32, cy: i32, w: i32, h: i32) -> Rect {
        Rect {
            x: cx - w / 2,
            y: cy - h / 2,
            w,
            h,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// The same rect shifted by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Positive-area overlap test.  Rects that merely share an edge or a
    /// corner do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Everything that flies across the sky besides the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MobKind {
    /// Hostile — collides with the player.
    Missile,
    /// Backdrop only — never collides.
    Cloud,
}

#[derive(Clone, Debug)]
pub struct Mob {
    pub kind: MobKind,
    pub rect: Rect,
    /// Leftward units-per-update travel, fixed at spawn.
    pub speed: i32,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameStatus {
    Flying,
    Downed,
}

// ── Input snapshot ────────────────────────────────────────────────────────────

/// Which directional keys are down right now.  A snapshot, not an event:
/// reading it twice in one frame gives the same answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Held {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire world.  Cloneable so pure update functions can return a new
/// copy without mutating the original.
#[derive(Clone, Debug)]
pub struct World {
    /// `None` once the player has been shot down.
    pub player: Option<Player>,
    /// All missiles and clouds, in spawn order.  This is also the render
    /// list: later spawns draw on top.
    pub mobs: Vec<Mob>,
    /// Missiles that made it past the left edge without hitting the player.
    pub dodged: u32,
    pub status: GameStatus,
}

impl World {
    pub fn missiles(&self) -> impl Iterator<Item = &Mob> {
        self.mobs.iter().filter(|m| m.kind == MobKind::Missile)
    }

    pub fn clouds(&self) -> impl Iterator<Item = &Mob> {
        self.mobs.iter().filter(|m| m.kind == MobKind::Cloud)
    }
}

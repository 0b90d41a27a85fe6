/// World-to-terminal projection.
///
/// Gameplay runs in a fixed abstract unit space; the terminal is a coarse
/// grid laid over it.  The viewport owns that conversion so the logic side
/// never sees cells and the display side never sees units.

use crate::entities::Rect;

/// A rectangle on the terminal grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub w: u16,
    pub h: u16,
}

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    world_w: i32,
    world_h: i32,
    cols: u16,
    rows: u16,
}

impl Viewport {
    pub fn new(world_w: i32, world_h: i32, cols: u16, rows: u16) -> Viewport {
        Viewport {
            world_w: world_w.max(1),
            world_h: world_h.max(1),
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Grid position of a world rect's top-left corner, unclipped: the
    /// result may lie outside the grid for rects that are partly or fully
    /// off-world.  Used to blit sprites cell by cell.
    pub fn origin_cell(&self, rect: &Rect) -> (i32, i32) {
        let c = (rect.left() as i64 * self.cols as i64).div_euclid(self.world_w as i64) as i32;
        let r = (rect.top() as i64 * self.rows as i64).div_euclid(self.world_h as i64) as i32;
        (c, r)
    }

    /// Project a world rect onto the grid, clipped to the world bounds.
    /// Returns `None` when nothing of the rect is inside the world (mobs
    /// between spawn and entry are simulated but not drawn).  Any visible
    /// sliver maps to at least one cell.
    pub fn project(&self, rect: &Rect) -> Option<CellRect> {
        let left = rect.left().max(0);
        let right = rect.right().min(self.world_w);
        let top = rect.top().max(0);
        let bottom = rect.bottom().min(self.world_h);
        if left >= right || top >= bottom {
            return None;
        }

        let c0 = (left as i64 * self.cols as i64 / self.world_w as i64) as u16;
        let r0 = (top as i64 * self.rows as i64 / self.world_h as i64) as u16;
        let mut c1 = (right as i64 * self.cols as i64 / self.world_w as i64) as u16;
        let mut r1 = (bottom as i64 * self.rows as i64 / self.world_h as i64) as u16;
        if c1 <= c0 {
            c1 = c0 + 1;
        }
        if r1 <= r0 {
            r1 = r0 + 1;
        }

        Some(CellRect {
            col: c0,
            row: r0,
            w: (c1 - c0).min(self.cols - c0),
            h: (r1 - r0).min(self.rows - r0),
        })
    }

    /// Cell extent of a world-unit extent, at least 1×1.  Used to size
    /// sprites once at startup.
    pub fn scale_size(&self, w: i32, h: i32) -> (u16, u16) {
        let cw = (w as i64 * self.cols as i64 / self.world_w as i64).max(1) as u16;
        let ch = (h as i64 * self.rows as i64 / self.world_h as i64).max(1) as u16;
        (cw, ch)
    }
}

/// Sprite loading.
///
/// Images come off disk as PNGs and are folded down to a small grid of
/// terminal cells, one color per cell, with one color of the source marked
/// transparent so sprites composite over the sky.  A missing or undecodable
/// file is fatal: the caller propagates the error and the program ends.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load sprite {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("sprite {} has no visible pixels to sample", .path.display())]
    Empty { path: PathBuf },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A sprite resampled to terminal cells.  `None` cells are transparent.
#[derive(Clone, Debug)]
pub struct SpriteImage {
    cols: u16,
    rows: u16,
    cells: Vec<Option<Rgb>>,
}

impl SpriteImage {
    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Color of one cell, or `None` if that cell is transparent.
    /// Out-of-range cells are transparent.
    pub fn cell(&self, col: u16, row: u16) -> Option<Rgb> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row as usize * self.cols as usize + col as usize]
    }
}

/// Load a PNG and resample it to a `cols × rows` cell grid by picking the
/// source pixel at each cell's center.  Pixels matching `colorkey` (and
/// fully transparent pixels) become transparent cells.
pub fn load_sprite(
    path: &Path,
    colorkey: Rgb,
    cols: u16,
    rows: u16,
) -> Result<SpriteImage, AssetError> {
    let img = image::open(path)
        .map_err(|source| AssetError::Load {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (img_w, img_h) = img.dimensions();
    if img_w == 0 || img_h == 0 || cols == 0 || rows == 0 {
        return Err(AssetError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut cells = Vec::with_capacity(cols as usize * rows as usize);
    for row in 0..rows {
        for col in 0..cols {
            // Source pixel under the center of this cell
            let sx = ((2 * col as u32 + 1) * img_w / (2 * cols as u32)).min(img_w - 1);
            let sy = ((2 * row as u32 + 1) * img_h / (2 * rows as u32)).min(img_h - 1);
            let px = img.get_pixel(sx, sy);
            let color = Rgb(px.0[0], px.0[1], px.0[2]);
            if px.0[3] == 0 || color == colorkey {
                cells.push(None);
            } else {
                cells.push(Some(color));
            }
        }
    }

    Ok(SpriteImage { cols, rows, cells })
}

use std::path::Path;

use image::{Rgba, RgbaImage};
use tempfile::tempdir;

use sky_dodge::assets::{load_sprite, AssetError, Rgb};

const WHITE: Rgb = Rgb(255, 255, 255);

/// Write a `w × h` PNG where each pixel comes from `f(x, y)`.
fn write_png(path: &Path, w: u32, h: u32, f: impl Fn(u32, u32) -> Rgba<u8>) {
    let mut img = RgbaImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            img.put_pixel(x, y, f(x, y));
        }
    }
    img.save(path).unwrap();
}

// ── Color keying ──────────────────────────────────────────────────────────────

#[test]
fn colorkey_pixels_become_transparent_cells() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sprite.png");
    // left half red, right half the key color
    write_png(&path, 4, 2, |x, _| {
        if x < 2 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });

    let sprite = load_sprite(&path, WHITE, 4, 2).unwrap();
    assert_eq!(sprite.cell(0, 0), Some(Rgb(255, 0, 0)));
    assert_eq!(sprite.cell(1, 1), Some(Rgb(255, 0, 0)));
    assert_eq!(sprite.cell(2, 0), None);
    assert_eq!(sprite.cell(3, 1), None);
}

#[test]
fn zero_alpha_pixels_are_transparent_regardless_of_color() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sprite.png");
    write_png(&path, 2, 1, |x, _| {
        if x == 0 {
            Rgba([0, 0, 255, 255])
        } else {
            Rgba([0, 0, 255, 0]) // not the key, but invisible
        }
    });

    let sprite = load_sprite(&path, WHITE, 2, 1).unwrap();
    assert_eq!(sprite.cell(0, 0), Some(Rgb(0, 0, 255)));
    assert_eq!(sprite.cell(1, 0), None);
}

// ── Resampling ────────────────────────────────────────────────────────────────

#[test]
fn downsampling_picks_cell_centers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sprite.png");
    // 8×4 source folded to 2×1: cell centers land at x = 2 and x = 6
    write_png(&path, 8, 4, |x, _| {
        if x < 4 {
            Rgba([0, 128, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });

    let sprite = load_sprite(&path, WHITE, 2, 1).unwrap();
    assert_eq!(sprite.cols(), 2);
    assert_eq!(sprite.rows(), 1);
    assert_eq!(sprite.cell(0, 0), Some(Rgb(0, 128, 0)));
    assert_eq!(sprite.cell(1, 0), None);
}

#[test]
fn upsampling_a_tiny_image_repeats_pixels() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dot.png");
    write_png(&path, 1, 1, |_, _| Rgba([10, 20, 30, 255]));

    let sprite = load_sprite(&path, WHITE, 3, 2).unwrap();
    for row in 0..2 {
        for col in 0..3 {
            assert_eq!(sprite.cell(col, row), Some(Rgb(10, 20, 30)));
        }
    }
}

#[test]
fn out_of_range_cells_read_as_transparent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sprite.png");
    write_png(&path, 2, 2, |_, _| Rgba([1, 2, 3, 255]));

    let sprite = load_sprite(&path, WHITE, 2, 2).unwrap();
    assert_eq!(sprite.cell(2, 0), None);
    assert_eq!(sprite.cell(0, 2), None);
}

// ── Failures ──────────────────────────────────────────────────────────────────

#[test]
fn missing_file_is_a_load_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does_not_exist.png");
    let err = load_sprite(&path, WHITE, 4, 2).unwrap_err();
    assert!(matches!(err, AssetError::Load { .. }));
}

#[test]
fn garbage_bytes_are_a_load_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("not_a_png.png");
    std::fs::write(&path, b"definitely not an image").unwrap();
    let err = load_sprite(&path, WHITE, 4, 2).unwrap_err();
    assert!(matches!(err, AssetError::Load { .. }));
}

#[test]
fn zero_cell_grid_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sprite.png");
    write_png(&path, 2, 2, |_, _| Rgba([1, 2, 3, 255]));
    let err = load_sprite(&path, WHITE, 0, 2).unwrap_err();
    assert!(matches!(err, AssetError::Empty { .. }));
}

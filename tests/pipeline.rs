//! End-to-end: latitude ring → stroked raster → distance field.

#![allow(clippy::unwrap_used)]

use aurora_path::math::Matrix4;
use aurora_path::raster::{rasterize_path, StrokeStyle, INK};
use aurora_path::{DistanceField, EditOutcome, Spline, SplineParams};

const SIZE: usize = 200;

/// Looks straight down +Y; NDC x = x / extent, NDC y = -z / extent.
fn top_down(extent: f64) -> Matrix4 {
    let s = 1.0 / extent;
    Matrix4::new(
        s, 0.0, 0.0, 0.0, //
        0.0, 0.0, -s, 0.0, //
        0.0, s, 0.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

fn ring_60() -> Spline {
    Spline::latitude_ring(60_f64.to_radians(), 8, SplineParams::default()).unwrap()
}

fn field_of(spline: &Spline) -> Vec<u8> {
    let mut pixels = rasterize_path(
        spline.curve_points(),
        &top_down(0.6),
        SIZE,
        SIZE,
        &StrokeStyle::default(),
    )
    .unwrap();
    let mut field = DistanceField::new(SIZE, SIZE).unwrap();
    field.generate(&mut pixels).unwrap();
    pixels
}

fn at(pixels: &[u8], x: usize, y: usize) -> u8 {
    pixels[y * SIZE + x]
}

#[test]
fn ring_is_brightest_and_fades_towards_the_pole() {
    let pixels = field_of(&ring_60());

    // The 60 degree ring projects to a circle of radius 0.5 / 0.6 in NDC,
    // about 83 pixels from the centre.
    assert_eq!(at(&pixels, 183, 100), INK);
    assert_eq!(at(&pixels, 16, 100), INK);

    let centre = at(&pixels, 100, 100);
    let halfway = at(&pixels, 150, 100);
    assert!(centre < halfway, "centre={centre} halfway={halfway}");
    assert!(halfway < INK);
    assert!(centre > 0);
}

#[test]
fn field_is_symmetric_across_the_ring() {
    let pixels = field_of(&ring_60());
    let left = i32::from(at(&pixels, 40, 100));
    let right = i32::from(at(&pixels, 159, 100));
    assert!((left - right).abs() <= 2, "left={left} right={right}");
}

#[test]
fn editing_the_spline_changes_the_field() {
    let mut spline = ring_60();
    let before = field_of(&spline);

    assert_eq!(spline.delete_control_point(0), EditOutcome::Deleted(0));
    assert_eq!(spline.control_points().len(), 7);
    let after = field_of(&spline);

    assert_ne!(before, after);
    // The far side of the ring did not move.
    assert_eq!(at(&after, 16, 100), INK);
}

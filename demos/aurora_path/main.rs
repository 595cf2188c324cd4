//! Aurora path demo: draws the three default latitude rings around the north
//! pole, stroke-rasterizes them from above and writes the distance field as a
//! greyscale PNG.
//!
//! Usage:
//! ```text
//! cargo run --example aurora_path                       # writes aurora_path.png
//! cargo run --example aurora_path -- out.png            # custom output file
//! RUST_LOG=aurora_path=debug cargo run --example aurora_path
//! ```

use aurora_path::math::Matrix4;
use aurora_path::raster::{PathRaster, StrokeStyle};
use aurora_path::{DistanceField, Spline, SplineParams};
use tracing::info;

/// Earth radius and aurora altitude, in kilometres.
const EARTH_RADIUS: f64 = 6378.1;
const AURORA_ALTITUDE: f64 = 100.0;

const RING_LATITUDES_DEG: [f64; 3] = [60.0, 70.0, 80.0];
const RING_POINTS: usize = 8;
const IMAGE_SIZE: u32 = 800;

/// Orthographic view straight down the +Y axis, with +X to the right and
/// -Z up on screen, framing a disc of radius `extent`.
fn top_down_view(extent: f64) -> Matrix4 {
    let s = 1.0 / extent;
    Matrix4::new(
        s, 0.0, 0.0, 0.0, //
        0.0, 0.0, -s, 0.0, //
        0.0, s, 0.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("aurora_path=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "aurora_path.png".to_owned());

    let height = (EARTH_RADIUS + AURORA_ALTITUDE) / EARTH_RADIUS;
    let params = SplineParams::new(height, SplineParams::default().angle_epsilon())?;

    let splines = RING_LATITUDES_DEG
        .iter()
        .map(|lat| Spline::latitude_ring(lat.to_radians(), RING_POINTS, params))
        .collect::<Result<Vec<_>, _>>()?;
    for (lat, spline) in RING_LATITUDES_DEG.iter().zip(&splines) {
        info!(
            latitude = *lat,
            control_points = spline.control_points().len(),
            curve_points = spline.curve_points().len(),
            "built ring"
        );
    }

    // The 60 degree ring has radius cos(60) * height around the pole.
    let view = top_down_view(0.6 * height);
    let style = StrokeStyle::default();
    let size = IMAGE_SIZE as usize;
    let mut raster = PathRaster::new(size, size)?;
    for spline in &splines {
        raster.stroke_polyline(spline.curve_points(), &view, &style);
    }
    let inked = raster.pixels().iter().filter(|&&p| p > 0).count();
    info!(inked, "rasterized paths");

    let mut field = DistanceField::new(size, size)?;
    field.generate(raster.pixels_mut())?;

    let image = image::GrayImage::from_raw(IMAGE_SIZE, IMAGE_SIZE, raster.into_pixels())
        .ok_or("raster does not match image dimensions")?;
    image.save(&output)?;
    info!(path = %output, "wrote distance field");
    Ok(())
}

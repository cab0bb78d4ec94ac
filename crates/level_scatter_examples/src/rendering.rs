//! Shared helpers for the example binaries: tracing setup and PNG output.
use std::path::Path;

use glam::IVec2;
use image::{Rgb, RgbImage};
use level_scatter::prelude::*;

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// How a set of points is drawn.
#[derive(Clone, Copy, Debug)]
pub struct PointStyle {
    pub color: [u8; 3],
    /// Disc radius in pixels.
    pub radius: i32,
}

impl PointStyle {
    pub fn new(color: [u8; 3], radius: i32) -> Self {
        Self { color, radius }
    }
}

/// Output image configuration.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub map: MapDimensions,
    pub background: [u8; 3],
    /// Sections drawn as outlines before the points.
    pub sections: Vec<(MapSection, [u8; 3])>,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), map: MapDimensions) -> Self {
        Self {
            image_size,
            map,
            background: [230, 230, 220],
            sections: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_section(mut self, section: MapSection, color: [u8; 3]) -> Self {
        self.sections.push((section, color));
        self
    }
}

/// Renders point layers onto a PNG, map `y` pointing up.
pub fn render_points_to_png(
    layers: &[(&[IVec2], PointStyle)],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    anyhow::ensure!(w > 0 && h > 0, "image size must be > 0");
    config.map.validate()?;

    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    let sx = w as f32 / config.map.width as f32;
    let sy = h as f32 / config.map.height as f32;
    let to_px = |p: IVec2| -> (i32, i32) {
        let x = ((p.x as f32 + 0.5) * sx) as i32;
        let y = h as i32 - 1 - ((p.y as f32 + 0.5) * sy) as i32;
        (x, y)
    };

    for (section, color) in &config.sections {
        let min = section.offset();
        let max = min + section.dimensions.as_ivec2();
        let (x0, y1) = to_px(min);
        let (x1, y0) = to_px(max);
        for x in x0..=x1 {
            put(&mut img, x, y0, *color);
            put(&mut img, x, y1, *color);
        }
        for y in y0..=y1 {
            put(&mut img, x0, y, *color);
            put(&mut img, x1, y, *color);
        }
    }

    for (points, style) in layers {
        let r = style.radius.max(0);
        for &p in points.iter() {
            let (cx, cy) = to_px(p);
            for dy in -r..=r {
                for dx in -r..=r {
                    if dx * dx + dy * dy <= r * r {
                        put(&mut img, cx + dx, cy + dy, style.color);
                    }
                }
            }
        }
    }

    img.save(path.as_ref())?;
    tracing::info!("Wrote {}.", path.as_ref().display());
    Ok(())
}

fn put(img: &mut RgbImage, x: i32, y: i32, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

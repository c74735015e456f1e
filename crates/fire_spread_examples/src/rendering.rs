use std::collections::HashMap;
use std::path::Path;

use fire_spread::prelude::{Entity, Schedule};
use glam::Vec2;
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a `fmt` subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

/// Color ramp from early to late ignition.
#[derive(Debug, Clone, Copy)]
pub struct Ramp {
    pub early: [u8; 3],
    pub late: [u8; 3],
}

impl Default for Ramp {
    fn default() -> Self {
        Self {
            early: [255, 230, 90],
            late: [150, 20, 10],
        }
    }
}

impl Ramp {
    fn sample(&self, t: f32) -> [u8; 3] {
        let t = t.clamp(0.0, 1.0);
        let mut out = [0u8; 3];
        for (i, c) in out.iter_mut().enumerate() {
            let a = self.early[i] as f32;
            let b = self.late[i] as f32;
            *c = (a + (b - a) * t).round() as u8;
        }
        out
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output size in pixels.
    pub image_size: (u32, u32),
    /// World extent mapped onto the image, centered on the origin.
    pub domain_extent: Vec2,
    pub background: [u8; 3],
    /// Color for trees that are not (yet) burning.
    pub unburned: [u8; 3],
    pub ramp: Ramp,
    pub tree_radius_px: i32,
    /// Draw a line from each tree to the tree that ignited it.
    pub draw_links: bool,
    pub link_color: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), domain_extent: Vec2) -> Self {
        Self {
            image_size,
            domain_extent,
            background: [24, 28, 22],
            unburned: [60, 140, 60],
            ramp: Ramp::default(),
            tree_radius_px: 4,
            draw_links: false,
            link_color: [90, 60, 40],
        }
    }

    pub fn with_links(mut self, draw_links: bool) -> Self {
        self.draw_links = draw_links;
        self
    }

    pub fn with_tree_radius(mut self, radius_px: i32) -> Self {
        self.tree_radius_px = radius_px;
        self
    }

    fn to_pixel(&self, p: Vec2) -> (i32, i32) {
        let (w, h) = self.image_size;
        let u = p.x / self.domain_extent.x + 0.5;
        let v = p.y / self.domain_extent.y + 0.5;
        ((u * w as f32) as i32, (v * h as f32) as i32)
    }
}

/// Renders the whole schedule, coloring each ignited tree by its ignition time.
pub fn render_schedule_to_png(
    entities: &[Entity],
    schedule: &Schedule,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    render(entities, schedule, config, f32::INFINITY, path)
}

/// Renders the state at `time`: trees with a later ignition draw as unburned.
pub fn render_frame_to_png(
    entities: &[Entity],
    schedule: &Schedule,
    config: &RenderConfig,
    time: f32,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    render(entities, schedule, config, time, path)
}

fn render(
    entities: &[Entity],
    schedule: &Schedule,
    config: &RenderConfig,
    time: f32,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    let positions: HashMap<&str, Vec2> = entities
        .iter()
        .map(|e| (e.id.as_str(), e.position))
        .collect();
    let first = schedule.seed().map_or(0.0, |r| r.time);
    let last = schedule.last_ignition_time().unwrap_or(first);
    let span = (last - first).max(f32::EPSILON);

    if config.draw_links {
        for record in schedule.burning_at(time) {
            let Some(source) = record.source.as_deref() else {
                continue;
            };
            if let (Some(&a), Some(&b)) = (
                positions.get(source),
                positions.get(record.entity.as_str()),
            ) {
                draw_line(&mut img, config.to_pixel(a), config.to_pixel(b), config.link_color);
            }
        }
    }

    for entity in entities {
        let color = match schedule.time_of(&entity.id) {
            Some(t) if t <= time => config.ramp.sample((t - first) / span),
            _ => config.unburned,
        };
        draw_disk(
            &mut img,
            config.to_pixel(entity.position),
            config.tree_radius_px,
            color,
        );
    }

    let path = path.as_ref();
    img.save(path)?;
    info!("Wrote {}.", path.display());
    Ok(())
}

fn put(img: &mut RgbImage, x: i32, y: i32, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

fn draw_disk(img: &mut RgbImage, (cx, cy): (i32, i32), radius: i32, color: [u8; 3]) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}

fn draw_line(img: &mut RgbImage, (x0, y0): (i32, i32), (x1, y1): (i32, i32), color: [u8; 3]) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let (mut x, mut y, mut err) = (x0, y0, dx + dy);
    loop {
        put(img, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

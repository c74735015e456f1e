use fire_spread::prelude::*;
use fire_spread_examples::{init_tracing, random_forest, render_frame_to_png, RenderConfig};
use glam::Vec2;
use tracing::info;

const FRAMES: [f32; 6] = [1.0, 20.0, 40.0, 80.0, 160.0, 299.0];

fn main() -> anyhow::Result<()> {
    init_tracing();
    let terrain_size = 100.0;
    let trees = random_forest(300, terrain_size, 19);

    // Count ignitions as they are finalised.
    let mut ignitions = 0usize;
    let mut sink = FnSink::new(|event| {
        if let SpreadEvent::EntityIgnited { .. } = event {
            ignitions += 1;
        }
    });
    let schedule =
        schedule_spread_with_events(&trees, "Tree_1", &SpreadConfig::default(), &mut sink)?;
    info!("{} ignition events.", ignitions);

    let rc = RenderConfig::new((800, 800), Vec2::splat(terrain_size)).with_tree_radius(3);
    for frame in FRAMES {
        let burning = schedule.burning_at(frame).len();
        info!("Frame {}: {} trees burning.", frame, burning);
        let out = format!("spread-timelapse-{:03}.png", frame as u32);
        render_frame_to_png(&trees, &schedule, &rc, frame, out)?;
    }

    Ok(())
}

use fire_spread::prelude::*;
use fire_spread_examples::{init_tracing, random_forest, render_schedule_to_png, RenderConfig};
use glam::Vec2;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    // 300 trees on a 100x100 terrain, as in the baked scene.
    let terrain_size = 100.0;
    let trees = random_forest(300, terrain_size, 2025);

    let scheduler = SpreadScheduler::try_new(SpreadConfig::default())?;
    let schedule = scheduler.schedule(&trees, "Tree_1")?;

    let stats = schedule.stats();
    info!(
        "{} of {} trees ignite, last at t={:.1}.",
        stats.ignited,
        stats.entities_considered,
        schedule.last_ignition_time().unwrap_or_default()
    );

    let rc = RenderConfig::new((1000, 1000), Vec2::splat(terrain_size)).with_links(true);
    render_schedule_to_png(&trees, &schedule, &rc, "spread-basic.png")?;

    Ok(())
}

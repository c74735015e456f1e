use std::io::Write;

use fire_spread::prelude::*;
use fire_spread_examples::{
    init_tracing, load_forest_config, render_schedule_to_png, RenderConfig,
};
use glam::Vec2;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let path = std::env::args().nth(1).unwrap_or_else(|| {
        format!("{}/assets/forest.ron", env!("CARGO_MANIFEST_DIR"))
    });
    let config = load_forest_config(&path)?;
    info!("Loaded {}: {:?}.", path, config.spread);

    let trees = config.scatter_trees();

    let mut sink = VecSink::only([SpreadEventKind::Warning]);
    let schedule =
        schedule_spread_with_events(&trees, &config.seed_tree, &config.spread, &mut sink)?;
    for event in sink.as_slice() {
        if let SpreadEvent::Warning { context, message } = event {
            warn!("{}: {}", context, message);
        }
    }

    // Emitter keys as CSV: entity,time,rate
    let tracks = bake_emitter_tracks(&trees, &schedule, &config.keyframes)?;
    let out = "spread-from-config-keys.csv";
    let mut file = std::io::BufWriter::new(std::fs::File::create(out)?);
    writeln!(file, "entity,time,rate")?;
    for track in &tracks {
        for key in &track.keys {
            writeln!(file, "{},{},{}", track.entity, key.time, key.rate)?;
        }
    }
    file.flush()?;
    info!(
        "Wrote {} tracks ({} igniting) to {}.",
        tracks.len(),
        tracks.iter().filter(|t| t.ignites()).count(),
        out
    );

    let rc = RenderConfig::new((1000, 1000), Vec2::splat(config.terrain_size));
    render_schedule_to_png(&trees, &schedule, &rc, "spread-from-config.png")?;

    Ok(())
}

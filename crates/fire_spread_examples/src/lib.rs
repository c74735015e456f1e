#![forbid(unsafe_code)]

mod forest;
mod rendering;

pub use fire_spread::fixtures::random_forest;
pub use forest::{load_forest_config, ForestConfig};
pub use rendering::{
    init_tracing, render_frame_to_png, render_schedule_to_png, RenderConfig, Ramp,
};

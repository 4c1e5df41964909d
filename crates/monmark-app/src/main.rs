//! monmark entry point.
//!
//! Headless mode: discovers the connected displays, builds the interaction
//! model, sizes it for the configured preview canvas, and emits the resulting
//! render scene as JSON on stdout.  A graphical host embedding the picker
//! uses the same pieces but feeds real pointer and resize events into the
//! controller instead of a single synthetic resize.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use monmark_app::application::scene::build_scene;
use monmark_app::infrastructure::discovery::{DisplayDiscovery, XrandrDiscovery};
use monmark_app::infrastructure::storage::load_config;
use monmark_core::{InputEvent, InteractionController, LayoutModel};

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config().context("loading configuration")?;

    let placements = XrandrDiscovery::new()
        .discover()
        .context("discovering displays")?;
    for placement in &placements {
        info!(
            name = %placement.name,
            width = placement.width,
            height = placement.height,
            x_offset = placement.x_offset,
            y_offset = placement.y_offset,
            is_primary = placement.is_primary,
            "display"
        );
    }

    let model = LayoutModel::new(placements);
    let mut controller =
        InteractionController::new(model, config.canvas.padding, config.display.padding);

    let canvas = (config.preview.width, config.preview.height);
    controller
        .handle_event(InputEvent::CanvasResized {
            width: canvas.0,
            height: canvas.1,
        })
        .context("building the coordinate mapper")?;

    let scene = build_scene(&controller, &config, canvas).context("building the render scene")?;
    println!("{}", serde_json::to_string_pretty(&scene)?);

    Ok(())
}

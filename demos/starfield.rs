//! Starfield
//!
//! A gradient sky full of stars around a cube, a sphere and a cone. Drag to
//! orbit, scroll to zoom.
//!
//! ```sh
//! RUST_LOG=info cargo run --example starfield
//! ```

use scene_tween::app::App;
use scene_tween::demos::Starfield;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    App::new().with_title("Starfield").run::<Starfield>()?;
    Ok(())
}

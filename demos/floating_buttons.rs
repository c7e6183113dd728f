//! Floating buttons
//!
//! Three boxes pop in, float, and flash red when clicked.
//!
//! ```sh
//! RUST_LOG=info cargo run --example floating_buttons
//! ```

use scene_tween::app::App;
use scene_tween::demos::FloatingButtons;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    App::new()
        .with_title("Floating Buttons")
        .run::<FloatingButtons>()?;
    Ok(())
}

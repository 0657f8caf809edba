//! Scroll a checkerboard background in a window using winit + softbuffer.
//!
//! Arrows or hjkl scroll, Home or 0 resets, Escape or q quits.
//!
//! Run: cargo run --bin backdrop-scroll

use backdrop_core::ScenarioConfig;
use backdrop_demos::demo_tile;
use backdrop_winit::{WinitConfig, WinitDriver};

fn main() {
    let driver = WinitDriver::new(WinitConfig {
        title: "backdrop scrolling demo".into(),
        scenario: ScenarioConfig {
            tile_width: 64,
            tile_height: 64,
            ..Default::default()
        },
        scroll_step: 12,
        ..Default::default()
    });

    if let Err(e) = driver.run(demo_tile()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

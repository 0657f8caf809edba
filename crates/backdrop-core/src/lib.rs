//! **backdrop-core** — repeating scene backgrounds for 2D render loops.
//!
//! This crate computes where a single repeating tile image must be blitted
//! so that it covers a viewport at an arbitrary (possibly negative) scroll
//! offset. It owns no window, image decoder or frame loop: a rendering
//! driver supplies a [`SceneContext`] snapshot each frame and receives the
//! blits through a [`TileSink`].

pub mod config;
pub mod draw;
pub mod error;
pub mod geom;
pub mod scenario;
pub mod tiling;

pub use config::ScenarioConfig;
pub use draw::{TileSink, draw_scenario, render_background};
pub use error::ScenarioError;
pub use geom::{Point, Rect};
pub use scenario::{SceneContext, Scenario, ScenarioBuilder, ScenarioType};
pub use tiling::{Placement, Placements, ScrollOffset, TileFiller, TileSpec, ViewportSize, wrap_start};

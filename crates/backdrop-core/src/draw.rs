//! Issuing tile blits to a rendering target.

use crate::error::ScenarioError;
use crate::scenario::{SceneContext, ScenarioType};

/// A target that can blit a tile image at a viewport position.
///
/// `width`/`height` are always the tile's native size. Blits may lie partly
/// outside the target; implementations clip them.
pub trait TileSink<I: ?Sized> {
    fn draw_tile(&mut self, x: i32, y: i32, width: u32, height: u32, image: &I);
}

impl<I: ?Sized, F> TileSink<I> for F
where
    F: FnMut(i32, i32, u32, u32, &I),
{
    fn draw_tile(&mut self, x: i32, y: i32, width: u32, height: u32, image: &I) {
        self(x, y, width, height, image)
    }
}

/// Draw the background of `ctx` with the given strategy.
///
/// Everything is validated before the first blit, so on error `sink` has not
/// been touched. Returns the number of tiles drawn.
pub fn draw_scenario<C, S>(kind: ScenarioType, ctx: &C, sink: &mut S) -> Result<usize, ScenarioError>
where
    C: SceneContext + ?Sized,
    S: TileSink<C::Image> + ?Sized,
{
    let tile = ctx.tile_spec()?;
    let placements = kind.placements(ctx.viewport(), ctx.scroll(), &tile)?;
    // Validated positive by the strategy above.
    let (width, height) = (tile.width as u32, tile.height as u32);
    let n = placements.len();
    for p in placements {
        sink.draw_tile(p.x, p.y, width, height, tile.image);
    }
    Ok(n)
}

/// Frame-loop entry point: like [`draw_scenario`] but a failure only skips
/// this frame's background. The error is logged and 0 is returned.
pub fn render_background<C, S>(kind: ScenarioType, ctx: &C, sink: &mut S) -> usize
where
    C: SceneContext + ?Sized,
    S: TileSink<C::Image> + ?Sized,
{
    match draw_scenario(kind, ctx, sink) {
        Ok(n) => {
            log::trace!("{kind} background: {n} tiles at scroll {:?}", ctx.scroll());
            n
        }
        Err(e) => {
            log::warn!("skipping {kind} background: {e}");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;
    use crate::tiling::{ScrollOffset, ViewportSize};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(i32, i32, u32, u32, char)>,
    }

    impl TileSink<char> for Recorder {
        fn draw_tile(&mut self, x: i32, y: i32, width: u32, height: u32, image: &char) {
            self.calls.push((x, y, width, height, *image));
        }
    }

    /// A context whose tile size bypasses the builder's validation.
    struct Raw {
        tile: (i32, i32),
        image: Option<char>,
    }

    impl SceneContext for Raw {
        type Image = char;
        fn scroll(&self) -> ScrollOffset {
            ScrollOffset::new(3, 3)
        }
        fn viewport(&self) -> ViewportSize {
            ViewportSize::new(100, 100)
        }
        fn tile_size(&self) -> (i32, i32) {
            self.tile
        }
        fn tile_image(&self) -> Option<&char> {
            self.image.as_ref()
        }
    }

    #[test]
    fn blits_row_major_at_native_size() {
        let s = Scenario::builder()
            .image('#')
            .tile_size(50, 40)
            .scroll(10, 0)
            .viewport(100, 60)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let n = draw_scenario(ScenarioType::RepeatXY, &s, &mut rec).unwrap();
        assert_eq!(n, 6);
        assert_eq!(
            rec.calls,
            vec![
                (-40, 0, 50, 40, '#'),
                (10, 0, 50, 40, '#'),
                (60, 0, 50, 40, '#'),
                (-40, 40, 50, 40, '#'),
                (10, 40, 50, 40, '#'),
                (60, 40, 50, 40, '#'),
            ]
        );
    }

    #[test]
    fn closures_are_sinks() {
        let mut s = Scenario::builder().image(()).tile_size(50, 50).viewport(100, 100).build().unwrap();
        s.set_scroll(ScrollOffset::new(-10, 0));
        let mut xs = Vec::new();
        let n = draw_scenario(ScenarioType::RepeatXY, &s, &mut |x: i32, y: i32, _: u32, _: u32, _: &()| {
            if y == 0 {
                xs.push(x);
            }
        })
        .unwrap();
        assert_eq!(n, 6);
        assert_eq!(xs, vec![-10, 40, 90]);
    }

    #[test]
    fn empty_viewport_draws_nothing() {
        let mut s = Scenario::builder().image('#').tile_size(8, 8).build().unwrap();
        let mut rec = Recorder::default();
        assert_eq!(draw_scenario(ScenarioType::RepeatXY, &s, &mut rec), Ok(0));
        s.set_viewport(ViewportSize::new(64, 0));
        assert_eq!(render_background(ScenarioType::RepeatXY, &s, &mut rec), 0);
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn invalid_tile_draws_nothing() {
        let ctx = Raw {
            tile: (0, 50),
            image: Some('#'),
        };
        let mut rec = Recorder::default();
        let err = draw_scenario(ScenarioType::RepeatXY, &ctx, &mut rec).unwrap_err();
        assert_eq!(err, ScenarioError::InvalidTileSpec { width: 0, height: 50 });
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn render_background_skips_on_error() {
        let mut rec = Recorder::default();
        let no_image = Raw {
            tile: (8, 8),
            image: None,
        };
        assert_eq!(render_background(ScenarioType::RepeatXY, &no_image, &mut rec), 0);
        let bad_tile = Raw {
            tile: (8, -1),
            image: Some('#'),
        };
        assert_eq!(render_background(ScenarioType::RepeatXY, &bad_tile, &mut rec), 0);
        assert!(rec.calls.is_empty());

        let ok = Raw {
            tile: (50, 50),
            image: Some('#'),
        };
        // Offset 3 on a 50 px grid: starts at -47, three tiles per axis.
        assert_eq!(render_background(ScenarioType::RepeatXY, &ok, &mut rec), 9);
        assert_eq!(rec.calls[0], (-47, -47, 50, 50, '#'));
    }
}

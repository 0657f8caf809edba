//! Shared helpers for the backdrop demos.
//!
//! `backdrop-dump` lists the tile placements for a viewport, scroll offset
//! and tile size given on the command line; `backdrop-scroll` scrolls a
//! checkerboard in a window.

use std::error::Error;
use std::fmt;
use std::io::Write;

use backdrop_core::{SceneContext, ScenarioConfig, ScenarioType, ScrollOffset, ViewportSize};
use backdrop_winit::{TileImage, rgb};

pub const USAGE: &str = "usage: backdrop-dump WIDTH HEIGHT SCROLL_X SCROLL_Y TILE_W TILE_H [TYPE]";

/// Demo tile: a 64x64 checkerboard with a darker seam row and column so
/// tile boundaries are visible while scrolling.
pub fn demo_tile() -> TileImage {
    let light = rgb(70, 110, 90);
    let dark = rgb(40, 70, 60);
    let seam = rgb(20, 30, 30);
    let base = TileImage::checker(64, 64, 16, light, dark);
    let pixels = (0..64u32)
        .flat_map(|y| (0..64u32).map(move |x| (x, y)))
        .map(|(x, y)| {
            if x == 0 || y == 0 {
                seam
            } else {
                base.pixel(x, y).unwrap_or(seam)
            }
        })
        .collect();
    TileImage::from_pixels(64, 64, pixels).unwrap_or(base)
}

// ---------------------------------------------------------------------------
// Dump arguments
// ---------------------------------------------------------------------------

/// Errors reading `backdrop-dump` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// Wrong number of arguments.
    Count(usize),
    /// An argument was not a number of the expected kind.
    NotANumber { name: &'static str, value: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "expected 6 or 7 arguments, got {n}\n{USAGE}"),
            Self::NotANumber { name, value } => write!(f, "{name}: \u{201c}{value}\u{201d} is not a valid number"),
        }
    }
}

impl Error for ArgsError {}

/// Parsed `backdrop-dump` command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpArgs {
    pub viewport: ViewportSize,
    pub config: ScenarioConfig,
}

impl DumpArgs {
    /// Parse arguments (without the program name). The optional seventh
    /// argument names the scenario type.
    pub fn parse<I, S>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        if args.len() != 6 && args.len() != 7 {
            return Err(ArgsError::Count(args.len()).into());
        }
        let arg = |i: usize| args[i].as_ref();

        let kind = match args.get(6) {
            Some(name) => name.as_ref().parse::<ScenarioType>()?,
            None => ScenarioType::default(),
        };
        Ok(Self {
            viewport: ViewportSize::new(number("width", arg(0))?, number("height", arg(1))?),
            config: ScenarioConfig {
                kind,
                tile_width: number("tile width", arg(4))?,
                tile_height: number("tile height", arg(5))?,
                scroll: ScrollOffset::new(number("scroll x", arg(2))?, number("scroll y", arg(3))?),
            },
        })
    }
}

fn number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ArgsError> {
    value.trim().parse().map_err(|_| ArgsError::NotANumber {
        name,
        value: value.to_string(),
    })
}

/// Write a header line and one `(x, y)` line per placement. Returns the
/// number of placements written.
pub fn dump(args: &DumpArgs, out: &mut impl Write) -> Result<usize, Box<dyn Error>> {
    let scenario = args.config.scenario((), args.viewport)?;
    let tile = scenario.tile_spec()?;
    let placements = args.config.kind.placements(scenario.viewport(), scenario.scroll(), &tile)?;

    writeln!(
        out,
        "{} viewport {}x{} scroll ({}, {}) tile {}x{}: {} placements ({} columns x {} rows)",
        args.config.kind,
        args.viewport.width,
        args.viewport.height,
        args.config.scroll.x,
        args.config.scroll.y,
        tile.width,
        tile.height,
        placements.len(),
        placements.columns(),
        placements.rows(),
    )?;
    let mut n = 0;
    for p in placements {
        writeln!(out, "{p}")?;
        n += 1;
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String, Box<dyn Error>> {
        let parsed = DumpArgs::parse(args)?;
        let mut out = Vec::new();
        dump(&parsed, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_all_fields() {
        let a = DumpArgs::parse(["100", "80", "-10", "5", "50", "40", "repeatxy"]).unwrap();
        assert_eq!(a.viewport, ViewportSize::new(100, 80));
        assert_eq!(a.config.scroll, ScrollOffset::new(-10, 5));
        assert_eq!((a.config.tile_width, a.config.tile_height), (50, 40));
        assert_eq!(a.config.kind, ScenarioType::RepeatXY);
    }

    #[test]
    fn parse_errors() {
        let e = DumpArgs::parse(["1", "2"]).unwrap_err();
        assert!(e.to_string().starts_with("expected 6 or 7 arguments, got 2"));
        let e = DumpArgs::parse(["-1", "2", "0", "0", "1", "1"]).unwrap_err();
        assert!(e.to_string().starts_with("width:"));
        let e = DumpArgs::parse(["1", "2", "0", "0", "1", "1", "Parallax"]).unwrap_err();
        assert!(e.to_string().contains("unknown scenario type"));
    }

    #[test]
    fn dumps_placements() {
        let out = run(&["100", "100", "10", "0", "50", "50"]).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines[0],
            "RepeatXY viewport 100x100 scroll (10, 0) tile 50x50: 6 placements (3 columns x 2 rows)"
        );
        assert_eq!(&lines[1..], ["(-40, 0)", "(10, 0)", "(60, 0)", "(-40, 50)", "(10, 50)", "(60, 50)"]);
    }

    #[test]
    fn dump_empty_viewport() {
        let out = run(&["0", "100", "0", "0", "50", "50"]).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains(": 0 placements"));
    }

    #[test]
    fn dump_invalid_tile() {
        let e = run(&["100", "100", "0", "0", "0", "50"]).unwrap_err();
        assert_eq!(e.to_string(), "invalid tile size 0x50: both sides must be positive");
    }

    #[test]
    fn demo_tile_has_seams() {
        let t = demo_tile();
        assert_eq!((t.width(), t.height()), (64, 64));
        assert_eq!(t.pixel(0, 10), t.pixel(10, 0));
        assert_ne!(t.pixel(1, 1), t.pixel(0, 1));
    }
}

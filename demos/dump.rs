//! Print the tile placements covering a viewport.
//!
//! Run: cargo run --bin backdrop-dump -- 100 100 10 0 50 50

use backdrop_demos::{DumpArgs, dump};

fn main() {
    let result = DumpArgs::parse(std::env::args().skip(1))
        .and_then(|args| dump(&args, &mut std::io::stdout().lock()));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

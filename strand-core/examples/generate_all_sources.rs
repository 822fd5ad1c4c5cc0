#![deny(unsafe_code)]
#![allow(missing_docs)]
// Example files use println! for demonstration purposes
#![allow(clippy::print_stdout)]
// Example files use expect! for simplicity
#![allow(clippy::expect_used)]

// Example file for the generation facade
// Requests bytes from every entropy source and prints each derived form

use strand_core::logging::init_tracing;
use strand_core::{LineBreak, generate, parse_length, render_report};

fn main() {
    init_tracing().expect("Failed to init tracing");

    strand_core::init().expect("Power-up self-tests failed");

    // Byte count comes from the first CLI argument, defaulting to 32.
    let length = std::env::args()
        .nth(1)
        .map_or(Ok(32), |arg| parse_length(&arg))
        .expect("Length argument must be a plain byte count");

    for source in ["secure_prng", "raw_device", "library_prng"] {
        println!("=== {source} ===");
        match generate(length, source) {
            Ok(bundle) => {
                println!("raw:       {} bytes", bundle.raw.len());
                println!("hex:       {}", bundle.hex);
                println!("sha:       {}", bundle.sha);
                println!("shabytes:  {}", bundle.shabytes);
                println!("whirlpool: {}", bundle.whirlpool);
            }
            // A failing source is reported and the next one still runs.
            Err(e) => print!("{}", render_report(&e, LineBreak::LineFeed)),
        }
        println!();
    }
}

//! # Voxel Terrain Entry Point
//!
//! Native entry point: calls into the library's `run()`, which flies a
//! headless camera over streamed terrain.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- --ticks 1200 --workers 4
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    match voxel_terrain::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{}", error);
            ExitCode::FAILURE
        }
    }
}

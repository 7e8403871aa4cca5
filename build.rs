#[path = "shared/constants.rs"]
mod shared_constants;
use shared_constants::{
    COMPRESSED_EXECUTIVES_FILE_NAME, COMPRESSED_MANUAL_ALIASES_FILE_NAME,
    COMPRESSED_TRACKED_SECURITIES_FILE_NAME, EXECUTIVES_CSV_FILE_PATH,
    MANUAL_ALIASES_CSV_FILE_PATH, TRACKED_SECURITIES_CSV_FILE_PATH,
};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let embedded_files: [(&Path, &str); 3] = [
        (
            TRACKED_SECURITIES_CSV_FILE_PATH.as_path(),
            COMPRESSED_TRACKED_SECURITIES_FILE_NAME,
        ),
        (
            MANUAL_ALIASES_CSV_FILE_PATH.as_path(),
            COMPRESSED_MANUAL_ALIASES_FILE_NAME,
        ),
        (
            EXECUTIVES_CSV_FILE_PATH.as_path(),
            COMPRESSED_EXECUTIVES_FILE_NAME,
        ),
    ];

    // Ensure that Cargo re-runs the build script if any input file changes
    for (input_path, _) in &embedded_files {
        println!("cargo:rerun-if-changed={}", input_path.display());
    }

    // Nothing to embed unless the `embed-bytes` feature is enabled
    if env::var_os("CARGO_FEATURE_EMBED_BYTES").is_none() {
        return Ok(());
    }

    let output_dir = PathBuf::from(env::var("OUT_DIR")?);

    for (input_path, output_file_name) in &embedded_files {
        let mut input_file = File::open(input_path)?;
        let output_file = File::create(output_dir.join(output_file_name))?;

        let mut encoder = GzEncoder::new(output_file, Compression::default());
        io::copy(&mut input_file, &mut encoder)?;
        encoder.finish()?;
    }

    Ok(())
}

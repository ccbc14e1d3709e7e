//! Squirrel Packager - Windows installer builder for Electron applications.
//!
//! This binary creates a self-extracting Setup.exe from an unpacked Electron
//! application directory by driving the Squirrel.Windows toolchain with
//! proper error handling and fail-fast stage ordering.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match squirrel_packager::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}

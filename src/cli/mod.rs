//! Command line interface for the packager.
//!
//! Thin layer over [`create_installer`](crate::create_installer): parses
//! flags into packaging options and reports the result through the exit
//! code.

mod args;

pub use args::Args;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    crate::create_installer(args.into_options()).await?;
    Ok(0)
}

//! Build script for plbackup.
//!
//! Copies the `.env.example` configuration template into the local data
//! directory next to where the tool looks for its `.env`:
//!
//! - Linux: `~/.local/share/plbackup/.env.example`
//! - macOS: `~/Library/Application Support/plbackup/.env.example`
//! - Windows: `%LOCALAPPDATA%/plbackup/.env.example`
//!
//! A missing template only produces a cargo warning.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("plbackup");

    // sandboxed builds may not be allowed to write there
    if let Err(e) = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::copy(&env_example_path, out_dir.join(".env.example")).map(|_| ()))
    {
        println!(
            "cargo:warning=could not install .env.example into {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}

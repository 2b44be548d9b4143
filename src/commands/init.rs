//! Handler for the `init` subcommand

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};

use crate::config::DEFAULT_CONFIG_TOML;

pub fn init_config(force: bool) -> Result<()> {
    let path = Path::new("bandmap.toml");
    if path.exists() && !force {
        bail!("bandmap.toml already exists (use --force to overwrite)");
    }
    fs::write(path, DEFAULT_CONFIG_TOML)?;
    println!("Wrote {}", path.display());
    Ok(())
}

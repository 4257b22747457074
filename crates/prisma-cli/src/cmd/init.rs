use crate::output::print_json;
use anyhow::Context;
use prisma_core::{defaults, paths, FsStorage};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config_dir = paths::config_dir(root);
    let created = defaults::ensure_defaults(&FsStorage, &config_dir)
        .context("failed to write default configuration")?;

    if json {
        return print_json(&serde_json::json!({
            "dir": config_dir,
            "created": created,
        }));
    }

    if created {
        println!("Created default configuration in {}", config_dir.display());
    } else {
        println!(
            "Configuration directory already exists: {}",
            config_dir.display()
        );
    }
    Ok(())
}

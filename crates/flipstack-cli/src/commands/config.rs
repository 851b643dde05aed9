use std::path::Path;

use anyhow::{bail, Result};

use flipstack_core::AppConfig;

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }

    AppConfig::default().save_to(path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

pub fn path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

pub fn check(config: &AppConfig) -> Result<()> {
    let geometry = config.stack.to_geometry()?;

    println!("Stack configuration is valid:");
    println!("  stacked pages:       {}", geometry.stacked_count());
    println!("  current page scale:  {}", geometry.current_page_scale());
    println!("  top stacked scale:   {}", geometry.top_stacked_scale());
    println!("  scale step per slot: {:.4}", geometry.stacked_scale_factor());
    println!("  overlap factor:      {}", geometry.overlap_factor());
    println!("  gravity:             {:?}", geometry.gravity());
    println!("  orientation:         {:?}", geometry.axis());
    println!("  flip easing:         {:?}", geometry.easing());
    Ok(())
}

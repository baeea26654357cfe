//! `creatorrank config`

use anyhow::{Context, Result, bail};
use rank_core::Config;
use std::path::Path;

/// Print the effective configuration and where it came from
pub fn cmd_config_show(cwd: &Path, config: &Config) -> Result<()> {
  let project_config = Config::project_config_path(cwd);
  let user_config = Config::user_config_path();

  println!("Effective configuration for: {:?}", cwd);
  println!();

  if project_config.exists() {
    println!("Using project config: {:?}", project_config);
  } else if let Some(ref user_path) = user_config
    && user_path.exists()
  {
    println!("Using user config: {:?}", user_path);
  } else {
    println!("Using default configuration (no config file found)");
  }
  println!();

  let toml_str = toml::to_string_pretty(config)?;
  println!("{}", toml_str);

  Ok(())
}

/// Write a project config template
pub fn cmd_config_init(cwd: &Path) -> Result<()> {
  let config_path = Config::project_config_path(cwd);

  if config_path.exists() {
    bail!(
      "Config file already exists: {:?}. Delete it first if you want to regenerate",
      config_path
    );
  }

  std::fs::write(&config_path, Config::generate_template())
    .with_context(|| format!("Failed to write {}", config_path.display()))?;

  println!("Created project config: {:?}", config_path);
  println!("Edit the file to customize settings.");
  Ok(())
}

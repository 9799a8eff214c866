use crate::config::{self, Config};
use crate::error::Result;
use std::path::PathBuf;

/// Initialize sigcard.toml configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| PathBuf::from("sigcard.toml"));

    // Check if file already exists
    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    // Create default configuration
    let config = Config::default();

    // Save configuration
    config::save(&config, &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to adjust display settings",
        config_path.display()
    );
    println!("2. Run 'sigcard show \"f(a, b: int = 5)\"' to display a signature card");

    Ok(())
}

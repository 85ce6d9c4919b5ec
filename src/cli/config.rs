use std::path::Path;

use stocktake::Config;

use crate::cli::terminal::Colorize;

/// Prints the configuration in effect for this invocation.
pub fn show(config_path: &Path, config: &Config) {
    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", config_path.display())
    };

    println!("Configuration: {}", source.dim());
    println!("  file: {}", config.file().display());
    println!("  confirm_delete: {}", config.confirm_delete);
}

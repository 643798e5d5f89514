//! `stratum init`: write a default `.stratum.json` to the project root.

use std::path::Path;

use tracing::info;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IoContext},
    output::OutputManager,
};

/// Write every setting with its default value spelled out, so the file
/// doubles as documentation of what can be changed.
pub fn execute(args: InitArgs, root: &Path, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::project_path(root);

    if config_path.exists() && !args.force {
        return Err(CliError::ConfigExists { path: config_path });
    }

    let mut json = AppConfig::default().to_pretty_json()?;
    json.push('\n');

    std::fs::write(&config_path, json)
        .io_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    info!(path = %config_path.display(), "configuration written");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display()
    ))?;
    Ok(())
}

//! `stratum config`: inspect the effective configuration.

use std::path::Path;

use crate::{cli::ConfigCommands, config::AppConfig, error::CliResult, output::OutputManager};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    root: &Path,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key)?;
            output.data(&render_value(&value))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.data(&config.to_pretty_json()?)?;
        }

        ConfigCommands::Path => match &config.source {
            Some(path) => output.data(&path.display().to_string())?,
            None => {
                output.data(&AppConfig::project_path(root).display().to_string())?;
                output.info("No configuration file found; built-in defaults are in effect")?;
            }
        },
    }

    Ok(())
}

/// Scalars print bare; arrays and objects as compact JSON.
fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_print_without_quotes() {
        assert_eq!(render_value(&json!("UUID")), "UUID");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!(["a", "b"])), r#"["a","b"]"#);
    }
}

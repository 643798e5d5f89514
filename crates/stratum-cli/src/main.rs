//! `stratum` binary.
//!
//! `main` parses arguments, installs the subscriber and hands off to
//! [`run`], which finds the project root before loading configuration so a
//! `.stratum.json` at the root is honoured. Failures are rendered once, on
//! stderr, and mapped to an exit code:
//!
//! | Code | Cause                                   |
//! |------|-----------------------------------------|
//! |  0   | success, `--help`, `--version`          |
//! |  1   | I/O or internal failure                 |
//! |  2   | invalid arguments, names or flag combos |
//! |  3   | project, module or prerequisite missing |
//! |  4   | unreadable or invalid configuration     |

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use stratum_adapters::LocalFilesystem;
use stratum_core::application::DiscoveryService;

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() { 2 } else { 0 };
            return ExitCode::from(code);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("stratum: {e}");
        return ExitCode::from(1);
    }

    let (verbose, no_color) = (cli.global.verbose > 0, cli.global.no_color);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e, verbose, no_color),
    }
}

/// Locate the project, load configuration and dispatch to the command.
#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    let root = project_root(&cli.global.start_dir()?);
    let config = AppConfig::load(cli.global.config.as_deref(), &root)?;
    debug!(root = %root.display(), config = ?config.source, "project context ready");

    let output = OutputManager::new(&cli.global, &config);

    match cli.command {
        Commands::Scan(args) => commands::scan::execute(args, &root, output),
        Commands::Create(cmd) => commands::create::execute(cmd, &root, config, output),
        Commands::Init(args) => commands::init::execute(args, &root, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, &root, config, output),
    }
}

fn project_root(start: &Path) -> PathBuf {
    DiscoveryService::new(Box::new(LocalFilesystem::new())).locate_root(start)
}

/// Colour only when stderr is a terminal.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    let color = !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", err.render(verbose, color));

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}

//! Flags accepted by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{ArgAction, Args};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: -v info, -vv debug, -vvv trace (default shows warnings)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing but errors and machine-readable output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain output without ANSI colours (also set by NO_COLOR)
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE instead of <project>/.stratum.json
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start project discovery from DIR instead of the working directory
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,
}

impl GlobalArgs {
    /// Always absolute, so the upward search for a build descriptor can
    /// climb past the working directory.
    pub fn start_dir(&self) -> std::io::Result<PathBuf> {
        match &self.project_dir {
            Some(dir) => std::path::absolute(dir),
            None => std::env::current_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_project_dir(dir: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            project_dir: dir.map(PathBuf::from),
        }
    }

    #[test]
    fn relative_project_dir_is_made_absolute() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(with_project_dir(Some(".")).start_dir().unwrap(), cwd);
        assert_eq!(
            with_project_dir(Some("nested/dir")).start_dir().unwrap(),
            cwd.join("nested/dir")
        );
    }

    #[test]
    fn absolute_project_dir_is_kept() {
        let start = with_project_dir(Some("/srv/shop")).start_dir().unwrap();
        assert_eq!(start, PathBuf::from("/srv/shop"));
    }
}

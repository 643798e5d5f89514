//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use stratum_core::domain::{IdType, ResourceKind};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stratum",
    bin_name = "stratum",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Discover and extend layered Spring Boot projects",
    long_about = "Stratum scans a modular, layered Java project, reports its \
                  modules and resources, and generates new modules and \
                  resources that follow the same conventions.",
    after_help = "EXAMPLES:\n\
        \x20 stratum scan\n\
        \x20 stratum scan --json > structure.json\n\
        \x20 stratum create module billing\n\
        \x20 stratum create resource entity Invoice --module billing --full\n\
        \x20 stratum completions bash > /usr/share/bash-completion/completions/stratum",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan the project and print its structure.
    #[command(
        visible_alias = "s",
        about = "Print the discovered project structure",
        after_help = "EXAMPLES:\n\
            \x20 stratum scan\n\
            \x20 stratum -C ../shop scan --json"
    )]
    Scan(ScanArgs),

    /// Generate a module skeleton or a resource.
    #[command(
        visible_alias = "c",
        about = "Create modules and resources",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stratum create module billing\n\
            \x20 stratum create resource entity Invoice --module billing\n\
            \x20 stratum create resource service PaymentService --module billing --standalone"
    )]
    Create(CreateCommands),

    /// Write a default `.stratum.json` to the project root.
    #[command(
        about = "Initialise project configuration",
        after_help = "EXAMPLES:\n\
            \x20 stratum init\n\
            \x20 stratum init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stratum completions bash > ~/.local/share/bash-completion/completions/stratum\n\
            \x20 stratum completions zsh  > ~/.zfunc/_stratum\n\
            \x20 stratum completions fish > ~/.config/fish/completions/stratum.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stratum config get generator.idType\n\
            \x20 stratum config list\n\
            \x20 stratum config path"
    )]
    Config(ConfigCommands),
}

// ── scan ──────────────────────────────────────────────────────────────────────

/// Arguments for `stratum scan`.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Print the structure as JSON instead of a tree.
    #[arg(long = "json", help = "Emit JSON")]
    pub json: bool,
}

// ── create ────────────────────────────────────────────────────────────────────

/// Subcommands for `stratum create`.
#[derive(Debug, Subcommand)]
pub enum CreateCommands {
    /// Scaffold the layer and folder skeleton of a new module.
    Module(CreateModuleArgs),
    /// Generate one resource (or the full entity stack) inside a module.
    Resource(CreateResourceArgs),
}

#[derive(Debug, Args)]
pub struct CreateModuleArgs {
    /// Module name: lowercase letters and digits, starting with a letter.
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct CreateResourceArgs {
    /// What to generate.
    #[arg(value_enum, value_name = "KIND")]
    pub kind: KindArg,

    /// Resource name, e.g. `Invoice` or `PaymentService`.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Target module.
    #[arg(short = 'm', long = "module", value_name = "MODULE")]
    pub module: String,

    /// Generate entity, repository, service and controller in one go.
    #[arg(long = "full", conflicts_with = "standalone")]
    pub full: bool,

    /// Identifier type for generated code (defaults to the configured one).
    #[arg(long = "idtype", value_enum, value_name = "TYPE", ignore_case = true)]
    pub id_type: Option<IdTypeArg>,

    /// Generate a service or controller without a backing entity.
    #[arg(long = "standalone")]
    pub standalone: bool,
}

/// Resource kinds accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Entity,
    #[value(alias = "repo")]
    Repository,
    Service,
    Controller,
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Entity => ResourceKind::Entity,
            KindArg::Repository => ResourceKind::Repository,
            KindArg::Service => ResourceKind::Service,
            KindArg::Controller => ResourceKind::Controller,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdTypeArg {
    Uuid,
    Long,
}

impl From<IdTypeArg> for IdType {
    fn from(id: IdTypeArg) -> Self {
        match id {
            IdTypeArg::Uuid => IdType::Uuid,
            IdTypeArg::Long => IdType::Long,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stratum init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stratum completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stratum config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.idType`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path of the configuration file in effect.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

//! Terminal output.
//!
//! Human-facing lines go through [`OutputManager`] so `--quiet` and colour
//! settings are applied in one place. Machine-readable payloads use
//! [`OutputManager::data`], which ignores `--quiet`.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Warning,
    Info,
    Header,
    Muted,
    Plain,
}

impl Tone {
    fn glyph(self) -> Option<&'static str> {
        match self {
            Tone::Success => Some("\u{2713}"),
            Tone::Warning => Some("\u{26a0}"),
            Tone::Info => Some("\u{2139}"),
            Tone::Header | Tone::Muted | Tone::Plain => None,
        }
    }

    fn paint(self, text: &str) -> String {
        match self {
            Tone::Success => text.green().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Info => text.blue().to_string(),
            Tone::Header => text.cyan().bold().to_string(),
            Tone::Muted => text.dimmed().to_string(),
            Tone::Plain => text.to_owned(),
        }
    }
}

pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Colour is off when asked for by flag or config, and whenever stdout
    /// is not a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    /// Machine-readable payload; written even in quiet mode.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Plain, msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Info, msg)
    }

    /// Secondary line, e.g. a listed path.
    pub fn detail(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Muted, msg)
    }

    pub fn header(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Header, msg)
    }

    fn emit(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.format(tone, msg))
    }

    fn format(&self, tone: Tone, msg: &str) -> String {
        match (tone.glyph(), self.no_color) {
            (Some(glyph), true) => format!("{glyph} {msg}"),
            (Some(glyph), false) => format!("{} {}", tone.paint(glyph).bold(), tone.paint(msg)),
            (None, true) => msg.to_owned(),
            (None, false) => tone.paint(msg),
        }
    }
}

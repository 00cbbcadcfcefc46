//! What the user sees on stdout.
//!
//! Status lines carry a symbol (`✓ ✗ ⚠ ℹ`) and are coloured only for the
//! human format. Documents written with [`OutputManager::data`] are printed
//! verbatim in every mode so `modgen parse ... > options.json` works with
//! `--quiet` too.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Failure,
    Warning,
    Info,
}

impl Tone {
    fn symbol(self) -> &'static str {
        match self {
            Tone::Success => "\u{2713}",
            Tone::Failure => "\u{2717}",
            Tone::Warning => "\u{26a0}",
            Tone::Info => "\u{2139}",
        }
    }

    fn paint(self, symbol: &str, msg: &str) -> String {
        match self {
            Tone::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Tone::Failure => format!("{} {}", symbol.red().bold(), msg.red()),
            Tone::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
            Tone::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
        }
    }
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    colour: bool,
    term: Term,
}

impl OutputManager {
    /// The `--output-format` flag wins over `output.format` from the config;
    /// when both are `auto`, a terminal gets `human` and a pipe `plain`.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto => Self::configured_format(&config.output.format)
                .unwrap_or_else(|| Self::detect(io::stdout().is_terminal())),
            explicit => explicit,
        };

        Self {
            format,
            quiet: args.quiet,
            colour: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    fn configured_format(name: &str) -> Option<OutputFormat> {
        match name.to_ascii_lowercase().as_str() {
            "human" => Some(OutputFormat::Human),
            "plain" => Some(OutputFormat::Plain),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    fn detect(terminal: bool) -> OutputFormat {
        if terminal {
            OutputFormat::Human
        } else {
            OutputFormat::Plain
        }
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// A document for other programs. Never suppressed, never coloured.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Success, msg)
    }

    /// Shown in quiet mode too.
    pub fn failure(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Failure, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.colour {
            self.term.write_line(&text.cyan().bold().to_string())
        } else {
            self.term.write_line(text)
        }
    }

    fn status(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet && !matches!(tone, Tone::Failure) {
            return Ok(());
        }
        let line = if self.colour {
            tone.paint(tone.symbol(), msg)
        } else {
            format!("{} {msg}", tone.symbol())
        };
        self.term.write_line(&line)
    }

    pub fn supports_color(&self) -> bool {
        self.colour
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(quiet: bool, no_color: bool, output_format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format,
        }
    }

    fn manager(quiet: bool, no_color: bool, output_format: OutputFormat) -> OutputManager {
        OutputManager::new(&args(quiet, no_color, output_format), &AppConfig::default())
    }

    #[test]
    fn quiet_mode_still_writes_failures() {
        let out = manager(true, true, OutputFormat::Plain);
        assert!(out.is_quiet());
        assert!(out.print("hidden").is_ok());
        assert!(out.failure("2 check(s) failed").is_ok());
    }

    #[test]
    fn colour_only_for_human_output() {
        assert!(manager(false, false, OutputFormat::Human).supports_color());
        assert!(!manager(false, true, OutputFormat::Human).supports_color());
        assert!(!manager(false, false, OutputFormat::Plain).supports_color());
        assert!(!manager(false, false, OutputFormat::Json).supports_color());
    }

    #[test]
    fn config_no_color_disables_colour() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&args(false, false, OutputFormat::Human), &config);
        assert!(!out.supports_color());
    }

    #[test]
    fn auto_defers_to_configured_format() {
        let mut config = AppConfig::default();
        config.output.format = "JSON".into();
        let out = OutputManager::new(&args(false, false, OutputFormat::Auto), &config);
        assert!(out.is_json());
    }

    #[test]
    fn flag_wins_over_configured_format() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        let out = OutputManager::new(&args(false, false, OutputFormat::Plain), &config);
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn unknown_configured_format_falls_back_to_detection() {
        assert_eq!(OutputManager::configured_format("auto"), None);
        assert_eq!(OutputManager::configured_format("yaml"), None);
        assert_eq!(OutputManager::detect(true), OutputFormat::Human);
        assert_eq!(OutputManager::detect(false), OutputFormat::Plain);
    }
}

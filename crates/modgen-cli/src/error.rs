//! Errors as the user sees them: a message, hints on what to fix, and the
//! exit status.

use std::error::Error;
use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use modgen_core::error::{ErrorCategory as CoreCategory, ModgenError};

pub type CliResult<T> = Result<T, CliError>;

type BoxedSource = Box<dyn Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// A file named on the command line does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// `modgen check` found rule violations.
    #[error("{failed} check(s) failed")]
    ChecksFailed { failed: usize },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("{0}")]
    Core(#[from] ModgenError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },

    /// The user declined the confirmation prompt.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<io::Error> for CliError {
    fn from(source: io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

/// How an error is reported and which exit status it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

impl ErrorCategory {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
        }
    }
}

impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Validation => Self::UserError,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::Configuration => Self::Configuration,
            CoreCategory::Internal => Self::Internal,
        }
    }
}

impl CliError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::ChecksFailed { .. } | Self::Cancelled => {
                ErrorCategory::UserError
            }
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => core.category().into(),
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// What the user can do about it. Core errors bring their own hints.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec!["Run with --help to see the expected arguments".into()],
            Self::FileNotFound { path } => vec![
                format!("Check the path '{}'", path.display()),
                "Relative paths start at the current directory".into(),
            ],
            Self::ChecksFailed { .. } => vec![
                "Vendor prefix: 2-4 lowercase letters, e.g. 'ab'".into(),
                "Module name: UpperCamelCase letters and digits, e.g. 'MyModule'".into(),
                "Settings types: str, bool, num, arr, aarr, select".into(),
            ],
            Self::ConfigError { .. } => vec![
                "'modgen config path' shows which file is read".into(),
                "'modgen init' writes a default config".into(),
                "MODGEN__SECTION__KEY variables override the file".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check permissions on the shop and skeleton directories".into()],
            Self::Cancelled => vec!["Nothing was written".into()],
        }
    }

    /// The message printed on stderr. `colour` adds ANSI styling;
    /// `verbose` adds the cause chain and drops the `--verbose` hint.
    pub fn render(&self, verbose: bool, colour: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if colour { style(text) } else { text.to_owned() }
        };

        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} {}",
            paint("\u{2717} Error:", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string())
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let _ = writeln!(
                    out,
                    "  {}",
                    paint(&format!("caused by: {err}"), |t| t.dimmed().to_string())
                );
                cause = err.source();
            }
        }

        let hints = self.suggestions();
        if !hints.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", paint("Suggestions:", |t| t.yellow().bold().to_string()));
            for hint in hints {
                let _ = writeln!(out, "  {hint}");
            }
        }

        if !verbose {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "{}",
                paint("Use -v / --verbose for more details.", |t| t.dimmed().to_string())
            );
        }

        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => tracing::warn!(error = %self, "Command failed"),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(error = %self, "Command failed")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(cause = %source, "Error source");
        }
    }
}

/// Attach a message to an I/O failure at the call site.
pub trait IoContext<T> {
    fn io_context<S: Into<String>>(self, message: impl FnOnce() -> S) -> CliResult<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn io_context<S: Into<String>>(self, message: impl FnOnce() -> S) -> CliResult<T> {
        self.map_err(|source| CliError::IoError {
            message: message().into(),
            source,
        })
    }
}

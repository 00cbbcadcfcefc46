//! Command-line grammar. Handlers live in `crate::commands`.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Generate eShop module skeletons and read their metadata back.
#[derive(Debug, Parser)]
#[command(
    name = "modgen",
    version,
    author,
    long_about = "Generates an eShop module from a skeleton directory: the module \
                  files are copied and their [{$placeholders}] filled in, class \
                  files are rendered for every extended class and new component, \
                  and a metadata.json descriptor is written. `modgen parse` reads \
                  such a descriptor back into options that regenerate the module.",
    after_help = "EXAMPLES:\n  \
        modgen generate --vendor ab --name MyModule --form module.toml\n  \
        modgen parse modules/ab/MyModule/metadata.json --vendor ab --name MyModule > options.json\n  \
        modgen generate --vendor ab --name MyModule --options options.json --force",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the generation options stored in a module descriptor as JSON.
    #[command(visible_alias = "p")]
    Parse(ParseArgs),

    /// Create a module from a form or from parsed options.
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Check a vendor prefix, module name and settings type.
    Check(CheckArgs),

    /// Write a default configuration file.
    Init(InitArgs),

    /// Print a shell completion script.
    Completions(CompletionsArgs),

    /// Show the effective configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Identity of the module a command works on.
#[derive(Debug, Clone, Args)]
pub struct ModuleArgs {
    /// Vendor prefix, 2 to 4 lowercase letters (e.g. `ab`).
    #[arg(long, value_name = "PREFIX")]
    pub vendor: String,

    /// Module name in UpperCamelCase (e.g. `MyModule`).
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// The module's `metadata.json`.
    #[arg(value_name = "DESCRIPTOR")]
    pub descriptor: PathBuf,

    #[command(flatten)]
    pub module: ModuleArgs,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("input").required(true).args(["form", "options"])))]
pub struct GenerateArgs {
    #[command(flatten)]
    pub module: ModuleArgs,

    /// TOML form with class lists, blocks and settings as typed by a user;
    /// invalid rows are dropped.
    #[arg(long, value_name = "FILE")]
    pub form: Option<PathBuf>,

    /// JSON options as printed by `modgen parse`; entries a form would
    /// reject are dropped.
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Do not ask for confirmation.
    #[arg(short, long)]
    pub yes: bool,

    /// Generate even if the module directory exists; its files are overwritten.
    #[arg(long)]
    pub force: bool,

    /// List the files and print the descriptor without writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub module: ModuleArgs,

    /// Settings type to check as well (`str`, `bool`, `num`, `arr`, `aarr`, `select`).
    #[arg(long, value_name = "TYPE")]
    pub setting_type: Option<String>,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.modgen.toml` in the current directory instead of the user config.
    #[arg(long)]
    pub local: bool,

    /// Replace an existing file.
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value, e.g. `shop.base_path`.
    Get { key: String },
    /// Print the whole configuration.
    List,
    /// Print the path of the configuration file in use.
    Path,
}

//! Clap derive structures for the `apdash` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// apdash -- who is on my access point
#[derive(Debug, Parser)]
#[command(
    name = "apdash",
    version,
    about = "Show and manage the stations of a hostapd access point",
    long_about = "Lists every station associated to a hostapd access point, named from\n\
        the manual registry, DHCP leases, or the device's own management API,\n\
        and expands range extenders into the clients behind them.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "APDASH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "APDASH_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Device probe timeout in milliseconds (overrides config)
    #[arg(long, global = true)]
    pub probe_timeout_ms: Option<u64>,

    /// DHCP lease file (overrides config)
    #[arg(long, global = true)]
    pub leases: Option<PathBuf>,

    /// Manual registry file (overrides config)
    #[arg(long, global = true)]
    pub registry: Option<PathBuf>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List associated stations and extender clients
    #[command(alias = "st", alias = "ls")]
    Stations(StationsArgs),

    /// Disassociate a station from the access point
    Kick {
        /// Station MAC address
        mac: String,
    },

    /// Manage manual address and name overrides
    #[command(alias = "m")]
    Manual(ManualArgs),

    /// Inspect CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Stations ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StationsArgs {
    /// Redraw the list periodically until interrupted
    #[arg(long, short = 'w')]
    pub watch: bool,

    /// Seconds between redraws in watch mode (overrides config)
    #[arg(long, requires = "watch")]
    pub interval: Option<u64>,
}

// ── Manual ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ManualArgs {
    #[command(subcommand)]
    pub command: ManualCommand,
}

#[derive(Debug, Subcommand)]
pub enum ManualCommand {
    /// List manual entries
    #[command(alias = "ls")]
    List,

    /// Add or replace the entry for a MAC address
    Add {
        /// Station MAC address
        mac: String,

        /// Address to show and probe for this station
        ip: String,

        /// Display name (takes precedence over the device's own name)
        #[arg(long, short = 'n', default_value = "")]
        name: String,
    },

    /// Remove the entry for a MAC address
    #[command(alias = "rm")]
    Remove {
        /// Station MAC address
        mac: String,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

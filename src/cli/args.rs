//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::report::OutputFormat;

/// fieldprobe - find the mandatory fields of a JSON endpoint.
#[derive(Debug, Parser)]
#[command(name = "fieldprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides fieldprobe.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to look up config and payload in (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Show every probed field while running
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe the endpoint and report mandatory fields (default if no command specified)
    Probe(ProbeArgs),

    /// List the fields that would be probed, in order, without sending anything
    Fields(FieldsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    /// Target endpoint (overrides the config file)
    #[arg(short, long, env = "FIELDPROBE_URL")]
    pub url: Option<String>,

    /// Baseline JSON payload (overrides the config file)
    #[arg(short, long)]
    pub payload: Option<PathBuf>,

    /// Requests in flight at once
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Also list optional and unknown fields
    #[arg(long)]
    pub all: bool,
}

/// Arguments for the `fields` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FieldsArgs {
    /// Baseline JSON payload (overrides the config file)
    #[arg(short, long)]
    pub payload: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config, --dest) are inherited by all
//!   subcommands
//! - `exec` forwards everything after it to the orchestrator untouched, global flags and
//!   `--help` included; see [`Cli::try_parse_args`]

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// plugdeploy - deploy plugin sources and binaries into the host's plugin folder
#[derive(Parser, Debug)]
#[command(name = "plugdeploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./plugdeploy.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the destination plugin folder
    #[arg(long, global = true, value_name = "PATH")]
    pub dest: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy Python plugin files and folders (all of them when no names are given)
    Deploy {
        /// Unit names, without extension
        names: Vec<String>,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,

        /// Stop at the first failing unit
        #[arg(long)]
        fail_fast: bool,
    },

    /// Deploy compiled plugin binaries and their debug symbols
    DeployArtifacts {
        /// Plugin project folder names
        names: Vec<String>,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,

        /// Stop at the first failing plugin
        #[arg(long)]
        fail_fast: bool,
    },

    /// Compare sources with what is deployed
    Status {
        /// Unit names, without extension
        names: Vec<String>,
    },

    /// Build plugin projects through the orchestrator
    Build {
        /// Plugin project folder names (all of them when omitted)
        names: Vec<String>,
    },

    /// Run the orchestrator with the given arguments
    #[command(disable_help_flag = true)]
    Exec {
        /// Arguments forwarded verbatim
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Make the build path in the IDE config absolute
    PatchConfig {
        /// File to patch (default: .clangd)
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}

/// Global options whose value is the next token
const VALUE_FLAGS: &[&str] = &["--color", "--config", "--dest"];

impl Cli {
    /// Parse a full argv.
    ///
    /// Tokens after the `exec` subcommand never reach clap, so flags meant for
    /// the orchestrator (`-v`, `--help`, ...) are forwarded instead of being
    /// taken as our own.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let (head, forwarded) = split_exec(args);

        let mut cli = Cli::try_parse_from(head)?;
        if let (Some(rest), Commands::Exec { args }) = (forwarded, &mut cli.command) {
            *args = rest;
        }
        Ok(cli)
    }
}

/// Split argv after an `exec` subcommand token.
///
/// Global flags in front of the subcommand are skipped, with their values.
fn split_exec(mut args: Vec<OsString>) -> (Vec<OsString>, Option<Vec<String>>) {
    let mut i = 1;
    while i < args.len() {
        let token = args[i].to_string_lossy().into_owned();
        if token == "exec" {
            let rest = args
                .split_off(i + 1)
                .into_iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect();
            return (args, Some(rest));
        }
        if VALUE_FLAGS.contains(&token.as_str()) {
            i += 2;
        } else if token.starts_with('-') && token != "--" {
            i += 1;
        } else {
            break;
        }
    }
    (args, None)
}

impl Commands {
    /// Name used in JSON events and headers
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Deploy { .. } => "deploy",
            Commands::DeployArtifacts { .. } => "deploy-artifacts",
            Commands::Status { .. } => "status",
            Commands::Build { .. } => "build",
            Commands::Exec { .. } => "exec",
            Commands::PatchConfig { .. } => "patch-config",
        }
    }
}

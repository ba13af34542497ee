//! plugdeploy CLI
//!
//! Usage: plugdeploy <COMMAND>
//!
//! Commands:
//!   deploy            Deploy Python plugin files and folders
//!   deploy-artifacts  Deploy compiled plugin binaries
//!   status            Compare sources with what is deployed
//!   build             Build plugin projects through the orchestrator
//!   exec              Run the orchestrator with forwarded arguments
//!   patch-config      Make the build path in the IDE config absolute

mod commands;
mod ui;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use plugdeploy::config::Config;
use plugdeploy::presentation::{Cli, Commands};

use crate::commands::CommandContext;
use crate::ui::context::UiContext;

/// Overrides the `-v` derived log filter
const LOG_ENV: &str = "PLUGDEPLOY_LOG";

fn main() {
    let cli = Cli::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());
    init_tracing(cli.verbose);

    let code = match prepare(&cli) {
        Ok(ctx) => match dispatch(&ctx, cli.command) {
            Ok(code) => code,
            Err(err) => {
                ui::error::print_error(&err, &ctx.ui);
                1
            }
        },
        Err(err) => {
            // Config failed to load; flags and environment still apply.
            let ui = UiContext::new(cli.json, cli.verbose, cli.color, &Config::default());
            ui::error::print_error(&err, &ui);
            1
        }
    };
    std::process::exit(code);
}

fn log_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("plugdeploy={level}")
}

/// Logs go to stderr so stdout stays clean for `--json`
fn init_tracing(verbose: u8) {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(log_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .init();
}

fn prepare(cli: &Cli) -> Result<CommandContext> {
    let project_root =
        std::env::current_dir().context("cannot determine the current directory")?;

    let loaded = Config::discover(&project_root, cli.config.as_deref())?;
    let mut config = loaded.config;
    if let Some(dest) = &cli.dest {
        config.paths.destination = dest.clone();
    }
    match &loaded.path {
        Some(path) => tracing::debug!(config = %path.display(), "configuration loaded"),
        None => tracing::debug!("using built-in configuration"),
    }

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    ui::output::print_config_warnings(&loaded.warnings, &ui);

    Ok(CommandContext {
        config,
        project_root,
        ui,
    })
}

fn dispatch(ctx: &CommandContext, command: Commands) -> Result<i32> {
    tracing::debug!(command = command.name(), "dispatching");
    match command {
        Commands::Deploy {
            names,
            dry_run,
            fail_fast,
        } => commands::deploy::cmd_deploy(ctx, names, dry_run, fail_fast),
        Commands::DeployArtifacts {
            names,
            dry_run,
            fail_fast,
        } => commands::artifacts::cmd_deploy_artifacts(ctx, names, dry_run, fail_fast),
        Commands::Status { names } => commands::status::cmd_status(ctx, names),
        Commands::Build { names } => commands::build::cmd_build(ctx, names),
        Commands::Exec { args } => commands::exec::cmd_exec(ctx, args),
        Commands::PatchConfig { file } => commands::patch::cmd_patch_config(ctx, file),
    }
}

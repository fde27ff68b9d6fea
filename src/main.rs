mod desktop;
mod hooks;
mod icons;
mod install_env;
mod paths;
mod runner;
mod schemas;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::hooks::Hook;
use crate::install_env::InstallEnv;
use crate::runner::Runner;

#[derive(Parser)]
#[command(name = "post-install")]
#[command(about = "Meson post-install hooks for desktop integration", long_about = None)]
struct Cli {
    /// Print commands and renames without executing anything
    #[arg(long, global = true)]
    dry_run: bool,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbosity: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile GSettings schemas and rename the MIME-type icons
    Icons,

    /// Compile GSettings schemas and refresh the icon cache and desktop database
    Caches,

    /// Run every post-install step
    All,

    /// Check that the renamed MIME-type icons are present under the prefix
    Verify,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbosity);

    match cli.command {
        Commands::Icons => cmd_hook(Hook::Icons, cli.dry_run),
        Commands::Caches => cmd_hook(Hook::Caches, cli.dry_run),
        Commands::All => cmd_hook(Hook::All, cli.dry_run),
        Commands::Verify => cmd_verify(),
    }
}

/// Command: post-install {icons|caches|all} [--dry-run]
fn cmd_hook(hook: Hook, dry_run: bool) -> Result<()> {
    // Environment errors must surface before any subprocess is spawned
    let env = InstallEnv::from_env()?;

    log::info!("Install prefix: {}", env.prefix().display());
    if dry_run {
        println!("DRY RUN MODE: nothing will be executed or renamed");
    }

    let mut runner = Runner::new(dry_run);
    hooks::run(hook, &env, &mut runner)?;

    log::debug!("Ran {} external tool(s)", runner.invocations().len());
    Ok(())
}

/// Command: post-install verify
fn cmd_verify() -> Result<()> {
    let env = InstallEnv::from_env()?;
    icons::verify(env.prefix())
}

/// Console logging with verbosity from -v flags (respects RUST_LOG if set)
fn init_logger(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_millis()
        .init();
}

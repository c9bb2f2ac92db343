//! Calories CLI - log meals and snacks, track macros against daily goals
//!
//! Command-line front end over `nutrition-core`: each subcommand loads the
//! configured meal store, runs one ledger operation and renders the result.

mod app;
mod cli;
mod commands;
mod config;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use app::AppContext;
use cli::{Cli, Commands, GoalCommands};
use errors::CliError;

/// Env var holding the tracing filter, e.g. `CALORIES_LOG=debug`.
const LOG_ENV: &str = "CALORIES_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);
    match &cli.command {
        Some(Commands::Init(args)) => commands::handle_init(&ctx, args),
        Some(Commands::Add(args)) => commands::handle_add(&ctx, args),
        Some(Commands::Edit(args)) => commands::handle_edit(&ctx, args),
        Some(Commands::Delete(args)) => commands::handle_delete(&ctx, args),
        Some(Commands::Clear(args)) => commands::handle_clear(&ctx, args),
        Some(Commands::Show(args)) => commands::handle_show(&ctx, args),
        Some(Commands::List(args)) => commands::handle_list(&ctx, args),
        Some(Commands::Today(args)) => commands::handle_today(&ctx, args),
        Some(Commands::Stats(args)) => commands::handle_stats(&ctx, args),
        Some(Commands::Check(args)) => commands::handle_check(&ctx, args),
        Some(Commands::Goal { command }) => match command {
            GoalCommands::Show(args) => commands::handle_goal_show(&ctx, args),
            GoalCommands::Set(args) => commands::handle_goal_set(&ctx, args),
        },
        Some(Commands::Export(args)) => commands::handle_export(&ctx, args),
        Some(Commands::Completions { shell }) => commands::handle_completions(*shell),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        CliError::from_anyhow(err).exit();
    }
}

//! poke-binder CLI
//!
//! Browse a Pokémon card catalogue with filters, see value summaries, and
//! track which cards a user owns.

mod cli_types;
mod commands;
mod error;
mod logging;
mod spinner;

use clap::Parser;

use binder_lib::Settings;

use cli_types::{Cli, Commands, ConfigAction, OwnAction, PlanAction};
use commands::App;
pub(crate) use error::CliError;

/// Empty line through the logger so `--quiet` and `--logfile` apply.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(2);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        if let Some(hint) = e.hint() {
            log::info!("{hint}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Commands::Config {
        action: ConfigAction::Path,
    } = &cli.command
    {
        commands::config::run_config_path();
        return Ok(());
    }

    let settings = Settings::load(cli.overrides())?;

    if let Commands::Config {
        action: ConfigAction::Show,
    } = &cli.command
    {
        commands::config::run_config_show(&settings);
        return Ok(());
    }

    let mut app = App::open(settings, cli.quiet)?;

    match &cli.command {
        Commands::Browse { filters, images } => {
            commands::browse::run_browse(&mut app, filters, *images)?;
        }
        Commands::Stats { filters } => commands::stats::run_stats(&mut app, filters)?,
        Commands::Options { filters } => commands::options::run_options(&mut app, filters)?,
        Commands::Own { action } => match action {
            OwnAction::List => commands::own::run_own_list(&app),
            OwnAction::Add { card } => commands::own::run_own_add(&mut app, card)?,
            OwnAction::Remove { card } => commands::own::run_own_remove(&mut app, card)?,
            OwnAction::Toggle { card } => commands::own::run_own_toggle(&mut app, card)?,
        },
        Commands::Plan { action } => match action {
            PlanAction::Show => commands::plan::run_plan_show(&app),
            PlanAction::Set { plan } => commands::plan::run_plan_set(&mut app, *plan)?,
        },
        Commands::Config { .. } => {}
    }

    Ok(())
}

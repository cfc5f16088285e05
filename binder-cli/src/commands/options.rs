use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::FilterArgs;

use super::App;

/// Print the candidate values for every filter stage, each computed from
/// the cards that survive the stages before it.
pub(crate) fn run_options(app: &mut App, filters: &FilterArgs) -> Result<(), CliError> {
    app.apply_filters(filters)?;
    let options = app.session.render(&app.catalogue).options;

    log::info!(
        "{}",
        "Filter Options".if_supports_color(Stdout, |t| t.bold()),
    );
    log_list("Pokémon", &options.names);
    log_list("Generations", &options.generations);
    log_list("Sets", &options.sets);
    log_list("Rarities", &options.rarities);
    log::info!("  {:<12} {} €", "Price:", options.price_bounds);
    log::info!("  {:<12} {}", "Pokédex #:", options.id_bounds);
    Ok(())
}

fn log_list(label: &str, values: &[String]) {
    let shown = if values.is_empty() {
        "(none)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
    } else {
        values.join(", ")
    };
    log::info!("  {:<12} {shown}", format!("{label}:"));
}

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use binder_lib::Render;

use crate::CliError;
use crate::cli_types::FilterArgs;

use super::{App, format_progress, log_context};

pub(crate) fn run_stats(app: &mut App, filters: &FilterArgs) -> Result<(), CliError> {
    app.apply_filters(filters)?;
    let render = app.session.render(&app.catalogue);

    log_context(app);
    crate::log_blank();
    log_summary(&render);
    Ok(())
}

/// Summary and progress block shared with `browse`.
pub(crate) fn log_summary(render: &Render<'_>) {
    let summary = &render.summary;
    let progress = &render.progress;

    log::info!(
        "{}",
        "Collection Summary".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Cards:          {:>6}", summary.card_count);
    log::info!("  Pokémon:        {:>6}", summary.distinct_pokemon_count);
    log::info!("  {}", summary.total_line());
    log::info!("  {}", summary.range_line());
    log::info!("  {}", summary.update_line());
    crate::log_blank();
    log::info!(
        "  Cards owned:    {}",
        format_progress(
            progress.cards_owned_in_view,
            progress.cards_in_view,
            progress.card_ratio()
        )
        .if_supports_color(Stdout, |t| t.green()),
    );
    log::info!(
        "  Pokémon owned:  {}",
        format_progress(
            progress.pokemon_owned_in_view,
            progress.pokemon_in_view,
            progress.pokemon_ratio()
        )
        .if_supports_color(Stdout, |t| t.green()),
    );
}

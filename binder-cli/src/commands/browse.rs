use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use binder_catalog::{Card, CardImage, resolve_image};

use crate::CliError;
use crate::cli_types::FilterArgs;

use super::stats::log_summary;
use super::{App, log_context};

pub(crate) fn run_browse(app: &mut App, filters: &FilterArgs, images: bool) -> Result<(), CliError> {
    app.apply_filters(filters)?;
    let render = app.session.render(&app.catalogue);
    let editable = app.session.entitlements().can_edit_collection();
    let image_base = app.image_base();

    log_context(app);
    if !editable {
        log::info!(
            "{}",
            "Read-only: ownership can be changed on the pro plan."
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    if render.view.is_empty() {
        log::info!("No cards match the current filters.");
        crate::log_blank();
    }

    for group in render.view.groups() {
        let pokemon_id = group.cards.first().map(|c| c.pokemon_id).unwrap_or_default();
        log::info!(
            "{} {}",
            group.name.if_supports_color(Stdout, |t| t.bold()),
            format!("#{pokemon_id:03}").if_supports_color(Stdout, |t| t.dimmed()),
        );

        for card in &group.cards {
            let owned = app.session.owned().contains(&card.id);
            log::info!("  {}", card_line(card, owned, editable));
            if images {
                log_image(resolve_image(&image_base, &card.image_ref));
            }
        }
        crate::log_blank();
    }

    log_summary(&render);
    Ok(())
}

fn card_line(card: &Card, owned: bool, editable: bool) -> String {
    let mark = match (owned, editable) {
        (true, true) => "[x]",
        (false, true) => "[ ]",
        (true, false) => "(x)",
        (false, false) => "( )",
    };
    let mark = if owned {
        mark.if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        mark.if_supports_color(Stdout, |t| t.dimmed()).to_string()
    };

    format!(
        "{mark} {:<24} {:>9}  {:>8} €  {:<12} {}",
        card.set_name,
        card.display_number(),
        card.display_price(),
        card.display_rarity(),
        card.id.if_supports_color(Stdout, |t| t.dimmed()),
    )
}

fn log_image(image: CardImage) {
    match image {
        CardImage::File {
            path,
            width,
            height,
        } => log::info!(
            "      image: {} ({width}x{height})",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
        ),
        CardImage::Placeholder => log::info!(
            "      image: {}",
            "placeholder".if_supports_color(Stdout, |t| t.yellow()),
        ),
    }
}

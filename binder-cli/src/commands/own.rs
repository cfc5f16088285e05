use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use binder_catalog::CardId;

use crate::CliError;

use super::App;

pub(crate) fn run_own_list(app: &App) {
    let owned = app.session.owned();
    log::info!(
        "{} owns {} cards",
        owned.user().if_supports_color(Stdout, |t| t.bold()),
        owned.len(),
    );
    for id in owned.cards() {
        match app.catalogue.get(id) {
            Some(card) => log::info!(
                "  {:<28} {} {}",
                id.if_supports_color(Stdout, |t| t.cyan()),
                card.pokemon_name,
                card.display_number(),
            ),
            None => log::info!(
                "  {:<28} {}",
                id.if_supports_color(Stdout, |t| t.cyan()),
                "(not in catalogue)".if_supports_color(Stdout, |t| t.dimmed()),
            ),
        }
    }
}

pub(crate) fn run_own_add(app: &mut App, card: &CardId) -> Result<(), CliError> {
    let App {
        catalogue,
        store,
        session,
        spinner,
        ..
    } = app;
    spinner.run("Saving...", || {
        session.add_card(&**store, catalogue, card)
    })?;
    log::info!(
        "{} {card}",
        "Added".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}

pub(crate) fn run_own_remove(app: &mut App, card: &CardId) -> Result<(), CliError> {
    let App {
        store,
        session,
        spinner,
        ..
    } = app;
    spinner.run("Saving...", || session.remove_card(&**store, card))?;
    log::info!(
        "{} {card}",
        "Removed".if_supports_color(Stdout, |t| t.yellow()),
    );
    Ok(())
}

pub(crate) fn run_own_toggle(app: &mut App, card: &CardId) -> Result<(), CliError> {
    let App {
        catalogue,
        store,
        session,
        spinner,
        ..
    } = app;
    let now_owned = spinner.run("Saving...", || {
        session.toggle_card(&**store, catalogue, card)
    })?;
    if now_owned {
        log::info!(
            "{} {card}",
            "Added".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "{} {card}",
            "Removed".if_supports_color(Stdout, |t| t.yellow()),
        );
    }
    Ok(())
}

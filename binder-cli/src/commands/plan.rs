use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use binder_catalog::Plan;

use crate::CliError;

use super::App;

pub(crate) fn run_plan_show(app: &App) {
    let entitlements = app.session.entitlements();
    log::info!(
        "{} is on the {} plan",
        app.session.user().if_supports_color(Stdout, |t| t.bold()),
        entitlements.plan().if_supports_color(Stdout, |t| t.cyan()),
    );
    if entitlements.can_edit_collection() {
        log::info!("  Collection editing: enabled");
    } else {
        log::info!(
            "  Collection editing: {}",
            "locked (requires pro)".if_supports_color(Stdout, |t| t.yellow()),
        );
    }
}

pub(crate) fn run_plan_set(app: &mut App, plan: Plan) -> Result<(), CliError> {
    let App {
        store,
        session,
        spinner,
        ..
    } = app;
    if session.plan() == plan {
        log::info!("{} is already on the {plan} plan", session.user());
        return Ok(());
    }
    spinner.run("Saving plan...", || session.set_plan(&**store, plan))?;
    log::info!(
        "{} is now on the {} plan",
        session.user(),
        plan.if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}

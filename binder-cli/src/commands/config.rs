use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use binder_lib::{Settings, config_path};

/// Show every setting, its value, and where it came from.
pub(crate) fn run_config_show(settings: &Settings) {
    log::info!(
        "{}",
        "poke-binder Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    let path = config_path();
    let status = if path.exists() { "(exists)" } else { "(not found)" };
    log::info!(
        "  Config file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status.if_supports_color(Stdout, |t| t.dimmed()),
    );
    crate::log_blank();

    for (name, value, source) in settings.display_rows() {
        match source {
            Some(source) => log::info!(
                "  {:<20} {} {}",
                name,
                value.if_supports_color(Stdout, |t| t.green()),
                format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => log::info!(
                "  {:<20} {}",
                name,
                "(not set)".if_supports_color(Stdout, |t| t.dimmed()),
            ),
        }
    }
}

pub(crate) fn run_config_path() {
    log::info!("{}", config_path().display());
}

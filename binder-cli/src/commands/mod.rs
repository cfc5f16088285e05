pub(crate) mod browse;
pub(crate) mod config;
pub(crate) mod options;
pub(crate) mod own;
pub(crate) mod plan;
pub(crate) mod stats;

use std::path::{Path, PathBuf};

use binder_catalog::{Catalogue, CatalogueSource, load_or_placeholder};
use binder_lib::{Backend, BinderStore, Session, Settings, open_store};

use crate::CliError;
use crate::cli_types::FilterArgs;
use crate::spinner::Spinner;

/// Everything a catalogue or collection command works on.
pub(crate) struct App {
    pub settings: Settings,
    pub catalogue: Catalogue,
    pub store: Box<dyn BinderStore>,
    pub session: Session,
    pub spinner: Spinner,
}

impl App {
    /// Load the catalogue, open the configured store, and start a session
    /// for the configured user.
    pub(crate) fn open(settings: Settings, quiet: bool) -> Result<Self, CliError> {
        let loaded = load_or_placeholder(&settings.catalogue.value);
        let report = &loaded.report;
        if !report.rejected.is_empty() {
            log::warn!(
                "Skipped {} catalogue rows (run with --verbose for details)",
                report.rejected.len()
            );
        }
        if report.unpriced > 0 {
            log::debug!("{} cards have no price", report.unpriced);
        }
        let catalogue = loaded.catalogue;

        let spinner = Spinner::new(quiet || settings.backend.value != Backend::Remote);
        let store = spinner.run("Connecting to store...", || open_store(&settings))?;
        let mut session = spinner.run("Loading collection...", || {
            Session::start(&*store, &catalogue, &settings.user.value)
        });
        for warning in session.take_warnings() {
            log::warn!("{warning}");
        }

        Ok(Self {
            settings,
            catalogue,
            store,
            session,
            spinner,
        })
    }

    /// Apply command-line filters on top of the session's current state.
    pub(crate) fn apply_filters(&mut self, filters: &FilterArgs) -> Result<(), CliError> {
        filters.validate()?;
        filters.apply_to(self.session.filters_mut());
        Ok(())
    }

    /// Directory that relative image paths are resolved against.
    pub(crate) fn image_base(&self) -> PathBuf {
        match self.catalogue.source() {
            CatalogueSource::File(path) => path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
            CatalogueSource::Reader | CatalogueSource::Placeholder => PathBuf::from("."),
        }
    }
}

/// Header line naming the user, plan, and catalogue.
pub(crate) fn log_context(app: &App) {
    let source = match app.catalogue.source() {
        CatalogueSource::File(path) => path.display().to_string(),
        CatalogueSource::Reader => "stdin".to_string(),
        CatalogueSource::Placeholder => "built-in placeholder".to_string(),
    };
    log::info!(
        "User: {}  Plan: {}  Store: {}  Catalogue: {} ({} cards)",
        app.session.user(),
        app.session.plan(),
        app.settings.backend.value,
        source,
        app.catalogue.len(),
    );
    let active = app.session.active_filter_count();
    if active > 0 {
        log::info!("Active filters: {active}");
    }
}

/// `"owned/total (pct%)"`.
pub(crate) fn format_progress(owned: usize, total: usize, ratio: f64) -> String {
    format!("{owned}/{total} ({:.0}%)", ratio * 100.0)
}

use std::collections::BTreeSet;

use binder_catalog::{CardId, Catalogue};

use crate::aggregate::{self, Progress, Summary};
use crate::filter::{self, FilterOptions, FilterState, View};

/// Everything one interaction needs to draw: the gallery, the option lists
/// for the filter controls, and the headline numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Render<'a> {
    pub view: View<'a>,
    pub options: FilterOptions,
    pub summary: Summary,
    pub progress: Progress,
}

/// Filter, then aggregate. Pure; call once per interaction.
pub fn render<'a>(
    catalogue: &'a Catalogue,
    filters: &FilterState,
    owned: &BTreeSet<CardId>,
) -> Render<'a> {
    let outcome = filter::apply(catalogue, filters, owned);
    let summary = aggregate::summarize(&outcome.view);
    let progress = aggregate::progress(&outcome.view, owned);
    Render {
        view: outcome.view,
        options: outcome.options,
        summary,
        progress,
    }
}

//! Summary statistics and collection progress over a filtered view.

use std::collections::BTreeSet;

use binder_catalog::CardId;
use chrono::NaiveDate;

use crate::filter::View;

/// Date format of the catalogue's `update` column (`31.12.2024`).
pub const UPDATE_DATE_FORMAT: &str = "%d.%m.%Y";

/// Value statistics for the cards in a view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub card_count: usize,
    pub distinct_pokemon_count: usize,
    /// Sum of all known prices.
    pub total_value: f64,
    /// Cheapest card of every Pokémon, summed.
    pub per_pokemon_min_sum: f64,
    /// Most expensive card of every Pokémon, summed.
    pub per_pokemon_max_sum: f64,
    pub latest_update: Option<NaiveDate>,
}

impl Summary {
    pub fn total_line(&self) -> String {
        format!("Total value of all cards: {:.0}€", self.total_value)
    }

    pub fn range_line(&self) -> String {
        format!(
            "Range (1 card per Pokémon): {:.0}€ - {:.0}€",
            self.per_pokemon_min_sum, self.per_pokemon_max_sum
        )
    }

    pub fn update_line(&self) -> String {
        match self.latest_update {
            Some(date) => format!("Last price update: {}", date.format(UPDATE_DATE_FORMAT)),
            None => "Last price update: unknown".to_string(),
        }
    }
}

pub fn summarize(view: &View<'_>) -> Summary {
    let mut summary = Summary {
        card_count: view.card_count(),
        distinct_pokemon_count: view.groups().len(),
        ..Default::default()
    };

    for group in view.groups() {
        let mut prices = group.prices().peekable();
        if prices.peek().is_none() {
            continue;
        }
        let (min, max, sum) = prices.fold((f64::INFINITY, f64::NEG_INFINITY, 0.0), |acc, p| {
            (acc.0.min(p), acc.1.max(p), acc.2 + p)
        });
        summary.per_pokemon_min_sum += min;
        summary.per_pokemon_max_sum += max;
        summary.total_value += sum;
    }

    summary.latest_update = view
        .cards()
        .filter_map(|c| c.last_update.as_deref())
        .filter_map(parse_update_date)
        .max();

    summary
}

/// Parse a `day.month.year` date, `None` when it does not match.
pub fn parse_update_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), UPDATE_DATE_FORMAT).ok()
}

/// How much of a view the user owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub cards_owned_in_view: usize,
    pub cards_in_view: usize,
    pub pokemon_owned_in_view: usize,
    pub pokemon_in_view: usize,
}

impl Progress {
    pub fn card_ratio(&self) -> f64 {
        ratio(self.cards_owned_in_view, self.cards_in_view)
    }

    pub fn pokemon_ratio(&self) -> f64 {
        ratio(self.pokemon_owned_in_view, self.pokemon_in_view)
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// A Pokémon counts as owned when any of its cards in the view is owned.
pub fn progress(view: &View<'_>, owned: &BTreeSet<CardId>) -> Progress {
    let mut progress = Progress {
        cards_in_view: view.card_count(),
        pokemon_in_view: view.groups().len(),
        ..Default::default()
    };

    for group in view.groups() {
        let owned_here = group.cards.iter().filter(|c| owned.contains(&c.id)).count();
        progress.cards_owned_in_view += owned_here;
        if owned_here > 0 {
            progress.pokemon_owned_in_view += 1;
        }
    }

    progress
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;

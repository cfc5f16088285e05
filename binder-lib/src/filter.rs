//! Filter engine: narrows the catalogue through a fixed chain of predicates.
//!
//! Stages run in order (ownership, search, generation, set, rarity, price,
//! id). Before each stage the candidate values for that stage are collected
//! from the working set, so every option list reflects the filters above it.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use binder_catalog::{Card, CardId, Catalogue};

// ── Filter state ────────────────────────────────────────────────────────────

/// Which cards pass the ownership stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnershipMode {
    #[default]
    All,
    Owned,
    Unowned,
}

impl OwnershipMode {
    pub fn admits(self, owned: bool) -> bool {
        match self {
            Self::All => true,
            Self::Owned => owned,
            Self::Unowned => !owned,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Owned => "owned",
            Self::Unowned => "unowned",
        }
    }
}

impl fmt::Display for OwnershipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnershipMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "owned" => Ok(Self::Owned),
            "unowned" => Ok(Self::Unowned),
            other => Err(format!(
                "unknown ownership mode '{other}' (expected all, owned or unowned)"
            )),
        }
    }
}

/// Inclusive `[min, max]` range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

impl<T: fmt::Display> fmt::Display for Bounds<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// User-chosen predicate parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Exact Pokémon name; empty means no search.
    pub search: String,
    pub generations: BTreeSet<String>,
    pub sets: BTreeSet<String>,
    pub rarities: BTreeSet<String>,
    pub price: Bounds<f64>,
    pub ids: Bounds<u32>,
    pub ownership: OwnershipMode,
}

impl FilterState {
    /// Unrestricted state whose ranges span the whole catalogue.
    pub fn for_catalogue(catalogue: &Catalogue) -> Self {
        let cards: Vec<&Card> = catalogue.cards().iter().collect();
        Self {
            search: String::new(),
            generations: BTreeSet::new(),
            sets: BTreeSet::new(),
            rarities: BTreeSet::new(),
            price: price_bounds(&cards),
            ids: id_bounds(&cards),
            ownership: OwnershipMode::All,
        }
    }

    /// Clear every selection and widen both ranges to the catalogue's bounds.
    pub fn reset(&mut self, catalogue: &Catalogue) {
        *self = Self::for_catalogue(catalogue);
    }

    /// Number of stages that currently restrict anything beyond `defaults`.
    pub fn active_count(&self, defaults: &FilterState) -> usize {
        [
            !self.search.trim().is_empty(),
            !self.generations.is_empty(),
            !self.sets.is_empty(),
            !self.rarities.is_empty(),
            self.price != defaults.price,
            self.ids != defaults.ids,
            self.ownership != OwnershipMode::All,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

// ── Options ─────────────────────────────────────────────────────────────────

/// Candidate values for each stage, derived from the working set that
/// reaches it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterOptions {
    pub names: Vec<String>,
    pub generations: Vec<String>,
    pub sets: Vec<String>,
    pub rarities: Vec<String>,
    pub price_bounds: Bounds<f64>,
    pub id_bounds: Bounds<u32>,
}

// ── View ────────────────────────────────────────────────────────────────────

/// All surviving cards of one Pokémon, ordered by card number.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonGroup<'a> {
    pub name: &'a str,
    pub cards: Vec<&'a Card>,
}

impl PokemonGroup<'_> {
    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.cards.iter().filter_map(|c| c.price)
    }
}

/// Filtered cards grouped by Pokémon name, groups in ascending name order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct View<'a> {
    groups: Vec<PokemonGroup<'a>>,
}

impl<'a> View<'a> {
    pub fn from_cards(cards: Vec<&'a Card>) -> Self {
        let mut by_name: BTreeMap<&'a str, Vec<&'a Card>> = BTreeMap::new();
        for card in cards {
            by_name.entry(card.pokemon_name.as_str()).or_default().push(card);
        }

        let groups = by_name
            .into_iter()
            .map(|(name, mut cards)| {
                cards.sort_by(|a, b| a.card_number.cmp(&b.card_number));
                PokemonGroup { name, cards }
            })
            .collect();

        Self { groups }
    }

    pub fn groups(&self) -> &[PokemonGroup<'a>] {
        &self.groups
    }

    pub fn cards(&self) -> impl Iterator<Item = &'a Card> + '_ {
        self.groups.iter().flat_map(|g| g.cards.iter().copied())
    }

    pub fn card_count(&self) -> usize {
        self.groups.iter().map(|g| g.cards.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    pub view: View<'a>,
    pub options: FilterOptions,
}

// ── Engine ──────────────────────────────────────────────────────────────────

/// Run every stage over the catalogue.
pub fn apply<'a>(
    catalogue: &'a Catalogue,
    state: &FilterState,
    owned: &BTreeSet<CardId>,
) -> FilterOutcome<'a> {
    let mut options = FilterOptions::default();
    let mut working: Vec<&Card> = catalogue.cards().iter().collect();

    working.retain(|c| state.ownership.admits(owned.contains(&c.id)));

    options.names = distinct(&working, |c| Some(c.pokemon_name.as_str()));
    let search = state.search.trim();
    if !search.is_empty() {
        working.retain(|c| c.pokemon_name == search);
    }

    options.generations = distinct(&working, |c| c.generation.as_deref());
    retain_selected(&mut working, &state.generations, |c| c.generation.as_deref());

    options.sets = distinct(&working, |c| Some(c.set_name.as_str()));
    retain_selected(&mut working, &state.sets, |c| Some(c.set_name.as_str()));

    options.rarities = distinct(&working, |c| c.rarity.as_deref());
    retain_selected(&mut working, &state.rarities, |c| c.rarity.as_deref());

    options.price_bounds = price_bounds(&working);
    working.retain(|c| c.price.is_some_and(|p| state.price.contains(p)));

    options.id_bounds = id_bounds(&working);
    working.retain(|c| state.ids.contains(c.pokemon_id));

    log::debug!(
        "Filter kept {} of {} cards",
        working.len(),
        catalogue.len()
    );

    FilterOutcome {
        view: View::from_cards(working),
        options,
    }
}

/// Sorted, de-duplicated non-empty values of one column.
fn distinct<'a>(cards: &[&'a Card], column: impl Fn(&'a Card) -> Option<&'a str>) -> Vec<String> {
    cards
        .iter()
        .copied()
        .filter_map(column)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Membership stage. An empty selection keeps everything; otherwise cards
/// without a value never match.
fn retain_selected<'a>(
    working: &mut Vec<&'a Card>,
    selected: &BTreeSet<String>,
    column: impl Fn(&'a Card) -> Option<&'a str>,
) {
    if selected.is_empty() {
        return;
    }
    working.retain(|c| column(*c).is_some_and(|v| selected.contains(v)));
}

/// Whole-number price bounds over the priced cards, `[0, 0]` when none are.
fn price_bounds(cards: &[&Card]) -> Bounds<f64> {
    let mut prices = cards.iter().filter_map(|c| c.price);
    let Some(first) = prices.next() else {
        return Bounds::new(0.0, 0.0);
    };
    let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
    Bounds::new(min.floor(), max.ceil())
}

fn id_bounds(cards: &[&Card]) -> Bounds<u32> {
    let min = cards.iter().map(|c| c.pokemon_id).min();
    let max = cards.iter().map(|c| c.pokemon_id).max();
    match (min, max) {
        (Some(min), Some(max)) => Bounds::new(min, max),
        _ => Bounds::new(0, 0),
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;

//! CSV loading for the card catalogue.
//!
//! Required columns: `pokemon_id, pokemon_name, set_name, card_number,
//! set_size, price, rarity, img`. Optional: `generation, update`.
//! Rows that fail numeric coercion are skipped and reported, never fatal.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::placeholder::placeholder_catalogue;
use crate::types::{Card, CardId, CardNumber, parse_whole_number};

pub const REQUIRED_COLUMNS: &[&str] = &[
    "pokemon_id",
    "pokemon_name",
    "set_name",
    "card_number",
    "set_size",
    "price",
    "rarity",
    "img",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Catalogue unavailable at {path}: {source}")]
    DataUnavailable {
        path: String,
        source: std::io::Error,
    },
    #[error("Catalogue is missing required column '{0}'")]
    MissingColumn(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Where a catalogue's rows came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueSource {
    File(PathBuf),
    Reader,
    Placeholder,
}

/// In-memory card table with unique card IDs, in source order.
#[derive(Debug, Clone)]
pub struct Catalogue {
    cards: Vec<Card>,
    index: HashMap<CardId, usize>,
    source: CatalogueSource,
}

impl Catalogue {
    fn empty(source: CatalogueSource) -> Self {
        Self {
            cards: Vec::new(),
            index: HashMap::new(),
            source,
        }
    }

    /// Build a catalogue from cards, dropping any card whose ID was already seen.
    pub fn new(cards: Vec<Card>, source: CatalogueSource) -> Self {
        let mut catalogue = Self::empty(source);
        for card in cards {
            if let Err(dup) = catalogue.insert(card) {
                log::warn!("Dropping duplicate card id '{}'", dup.id);
            }
        }
        catalogue
    }

    /// Append a card, handing it back if its ID is already present.
    fn insert(&mut self, card: Card) -> Result<(), Card> {
        if self.index.contains_key(&card.id) {
            return Err(card);
        }
        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn source(&self) -> &CatalogueSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }
}

/// A row skipped during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line number in the source (header is line 1).
    pub line: u64,
    pub reason: String,
}

/// Outcome of a load: how many rows made it in and which were skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub accepted: usize,
    pub rejected: Vec<RejectedRow>,
    /// Cards kept with no price (excluded later by the price filter).
    pub unpriced: usize,
}

#[derive(Debug)]
pub struct Loaded {
    pub catalogue: Catalogue,
    pub report: LoadReport,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    pokemon_id: String,
    pokemon_name: String,
    set_name: String,
    card_number: String,
    set_size: String,
    price: Option<String>,
    rarity: Option<String>,
    img: String,
    #[serde(default)]
    generation: Option<String>,
    #[serde(default, rename = "update")]
    last_update: Option<String>,
}

/// Load the catalogue from a CSV file.
pub fn load_catalogue(path: &Path) -> Result<Loaded, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::DataUnavailable {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut loaded = load_catalogue_from_reader(file)?;
    loaded.catalogue.source = CatalogueSource::File(path.to_path_buf());
    Ok(loaded)
}

/// Load the catalogue, falling back to the built-in placeholder cards when
/// the file cannot be read or parsed.
pub fn load_or_placeholder(path: &Path) -> Loaded {
    match load_catalogue(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::warn!("{e}");
            log::warn!("Using the built-in placeholder catalogue.");
            let catalogue = placeholder_catalogue();
            Loaded {
                report: LoadReport {
                    accepted: catalogue.len(),
                    ..Default::default()
                },
                catalogue,
            }
        }
    }
}

/// Load the catalogue from any CSV reader.
pub fn load_catalogue_from_reader<R: Read>(reader: R) -> Result<Loaded, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *column) {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
    }

    let mut report = LoadReport::default();
    let mut catalogue = Catalogue::empty(CatalogueSource::Reader);
    let mut unpriced = 0;

    for (index, result) in reader.deserialize::<RawRow>().enumerate() {
        let line = index as u64 + 2;
        let mut reject = |reason: String| {
            log::warn!("Skipping catalogue line {line}: {reason}");
            report.rejected.push(RejectedRow { line, reason });
        };

        let raw = match result {
            Ok(r) => r,
            Err(e) => {
                reject(format!("malformed row: {e}"));
                continue;
            }
        };

        let card = match card_from_row(raw) {
            Ok(c) => c,
            Err(reason) => {
                reject(reason);
                continue;
            }
        };

        let priced = card.price.is_some();
        if let Err(dup) = catalogue.insert(card) {
            reject(format!("duplicate card id '{}'", dup.id));
            continue;
        }
        if !priced {
            unpriced += 1;
        }
    }

    report.accepted = catalogue.len();
    report.unpriced = unpriced;
    log::debug!(
        "Loaded {} cards ({} rejected, {} without price)",
        report.accepted,
        report.rejected.len(),
        report.unpriced,
    );

    Ok(Loaded { catalogue, report })
}

fn card_from_row(raw: RawRow) -> Result<Card, String> {
    let pokemon_id = parse_whole_number(raw.pokemon_id.trim())
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| format!("pokemon_id '{}' is not a whole number", raw.pokemon_id))?;

    let price = match non_empty(raw.price) {
        None => None,
        Some(p) => Some(
            p.replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| format!("price '{p}' is not numeric"))?,
        ),
    };

    if raw.set_name.is_empty() || raw.card_number.is_empty() {
        return Err("set_name and card_number are required".to_string());
    }

    let card_number = CardNumber::parse(&raw.card_number);
    Ok(Card {
        id: CardId::new(&raw.set_name, &card_number),
        pokemon_id,
        pokemon_name: raw.pokemon_name,
        set_name: raw.set_name,
        card_number,
        set_size: raw.set_size,
        price,
        rarity: non_empty(raw.rarity),
        generation: non_empty(raw.generation),
        last_update: non_empty(raw.last_update),
        image_ref: raw.img,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

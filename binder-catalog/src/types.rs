//! Data model types for the card catalogue.
//!
//! These types represent one row of the card table, its derived identifier,
//! and the subscription plan attached to a user.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Card ID ─────────────────────────────────────────────────────────────────

/// Composite card key: `set_name + "_" + card_number`.
///
/// Unique within a catalogue and used as the ownership key in every store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(set_name: &str, card_number: &CardNumber) -> Self {
        Self(format!("{set_name}_{card_number}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ── Card Number ─────────────────────────────────────────────────────────────

/// A card's number within its set.
///
/// Purely numeric numbers compare by value; anything else (promo suffixes
/// like `"1G"`, prefixed codes like `"SV01"`) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardNumber {
    Numeric(u64),
    Raw(String),
}

impl CardNumber {
    /// Parse a card number as written in the catalogue.
    ///
    /// Spreadsheet exports sometimes write whole numbers as `"7.0"`; those
    /// are treated as the number `7`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        match parse_whole_number(s) {
            Some(n) => Self::Numeric(n),
            None => Self::Raw(s.to_string()),
        }
    }

    /// Value of the leading run of ASCII digits, if there is one.
    pub fn leading_value(&self) -> Option<u64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Raw(s) => {
                let end = s
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(s.len());
                s[..end].parse().ok()
            }
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Numeric(_) => 0,
            Self::Raw(_) => 1,
        }
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Raw(s) => f.write_str(s),
        }
    }
}

impl Ord for CardNumber {
    /// Leading number first, numbers without one last. On an equal leading
    /// value a plain number precedes a suffixed one, then the full text
    /// decides.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.leading_value(), other.leading_value()) {
            (Some(a), Some(b)) => a
                .cmp(&b)
                .then_with(|| self.rank().cmp(&other.rank()))
                .then_with(|| self.to_string().cmp(&other.to_string())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl PartialOrd for CardNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parse `"12"` or `"12.0"` as `12`. Anything with a fraction or non-digit
/// characters is rejected.
pub fn parse_whole_number(s: &str) -> Option<u64> {
    let digits = s.strip_suffix(".0").unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

// ── Card ────────────────────────────────────────────────────────────────────

/// One catalogue entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub pokemon_id: u32,
    pub pokemon_name: String,
    pub set_name: String,
    pub card_number: CardNumber,
    /// Set size as written in the source (`"102"`, `"64+"`, ...).
    pub set_size: String,
    pub price: Option<f64>,
    pub rarity: Option<String>,
    pub generation: Option<String>,
    /// Raw `update` column, expected as `day.month.year`.
    pub last_update: Option<String>,
    pub image_ref: String,
}

impl Card {
    /// Create a card with its identifier derived from set and number.
    pub fn new(
        pokemon_id: u32,
        pokemon_name: impl Into<String>,
        set_name: impl Into<String>,
        card_number: &str,
    ) -> Self {
        let set_name = set_name.into();
        let card_number = CardNumber::parse(card_number);
        Self {
            id: CardId::new(&set_name, &card_number),
            pokemon_id,
            pokemon_name: pokemon_name.into(),
            set_name,
            card_number,
            set_size: String::new(),
            price: None,
            rarity: None,
            generation: None,
            last_update: None,
            image_ref: String::new(),
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    pub fn with_generation(mut self, generation: impl Into<String>) -> Self {
        self.generation = Some(generation.into());
        self
    }

    pub fn with_set_size(mut self, set_size: impl Into<String>) -> Self {
        self.set_size = set_size.into();
        self
    }

    pub fn with_last_update(mut self, date: impl Into<String>) -> Self {
        self.last_update = Some(date.into());
        self
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// `"7/102"` style number, or just the number when the set size is unknown.
    pub fn display_number(&self) -> String {
        if self.set_size.is_empty() {
            self.card_number.to_string()
        } else {
            format!("{}/{}", self.card_number, self.set_size)
        }
    }

    /// Price with one decimal, or `N/A`.
    pub fn display_price(&self) -> String {
        match self.price {
            Some(p) => format!("{p:.1}"),
            None => "N/A".to_string(),
        }
    }

    pub fn display_rarity(&self) -> &str {
        self.rarity.as_deref().unwrap_or("Unknown")
    }
}

// ── Plan ────────────────────────────────────────────────────────────────────

/// Subscription tier attached to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Basic,
    Pro,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pro => "pro",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "pro" => Ok(Self::Pro),
            other => Err(format!("unknown plan '{other}' (expected basic or pro)")),
        }
    }
}

//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use binder_catalog::{CardId, Plan};
use binder_lib::{Backend, Bounds, FilterState, Overrides, OwnershipMode};
use clap::{Args, Parser, Subcommand};

use crate::CliError;

#[derive(Parser)]
#[command(name = "poke-binder")]
#[command(about = "Browse a Pokémon card catalogue and track your collection", long_about = None)]
pub(crate) struct Cli {
    /// Catalogue CSV file
    #[arg(short, long, global = true)]
    pub catalogue: Option<PathBuf>,

    /// User whose collection is shown
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Where ownership and plans are stored
    #[arg(long, global = true)]
    pub backend: Option<Backend>,

    /// SQLite database file (sqlite backend)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub(crate) fn overrides(&self) -> Overrides {
        Overrides {
            catalogue: self.catalogue.clone(),
            user: self.user.clone(),
            backend: self.backend,
            db_path: self.db.clone(),
        }
    }
}

/// Filter arguments shared by the browsing commands.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Exact Pokémon name
    #[arg(short, long)]
    pub search: Option<String>,

    /// Generations to include (e.g., 1,2)
    #[arg(short, long, value_delimiter = ',')]
    pub generation: Vec<String>,

    /// Sets to include (e.g., "Base Set,Jungle")
    #[arg(long, value_delimiter = ',')]
    pub set: Vec<String>,

    /// Rarities to include (e.g., "Rare,Rare Holo")
    #[arg(short, long, value_delimiter = ',')]
    pub rarity: Vec<String>,

    /// Lowest price in euros (inclusive)
    #[arg(long)]
    pub price_min: Option<f64>,

    /// Highest price in euros (inclusive)
    #[arg(long)]
    pub price_max: Option<f64>,

    /// Lowest Pokédex number (inclusive)
    #[arg(long)]
    pub id_min: Option<u32>,

    /// Highest Pokédex number (inclusive)
    #[arg(long)]
    pub id_max: Option<u32>,

    /// Only cards you own
    #[arg(long, conflicts_with = "unowned")]
    pub owned: bool,

    /// Only cards you do not own
    #[arg(long)]
    pub unowned: bool,
}

impl FilterArgs {
    /// Reject ranges whose ends are given in the wrong order.
    pub(crate) fn validate(&self) -> Result<(), CliError> {
        if let (Some(min), Some(max)) = (self.price_min, self.price_max) {
            if min > max {
                return Err(CliError::invalid_argument(format!(
                    "--price-min {min} is above --price-max {max}"
                )));
            }
        }
        if let (Some(min), Some(max)) = (self.id_min, self.id_max) {
            if min > max {
                return Err(CliError::invalid_argument(format!(
                    "--id-min {min} is above --id-max {max}"
                )));
            }
        }
        Ok(())
    }

    /// Overlay the given flags on a filter state. Unset range ends keep
    /// their current value.
    pub(crate) fn apply_to(&self, state: &mut FilterState) {
        if let Some(search) = &self.search {
            state.search = search.clone();
        }
        state.generations.extend(trimmed(&self.generation));
        state.sets.extend(trimmed(&self.set));
        state.rarities.extend(trimmed(&self.rarity));

        state.price = Bounds::new(
            self.price_min.unwrap_or(state.price.min),
            self.price_max.unwrap_or(state.price.max),
        );
        state.ids = Bounds::new(
            self.id_min.unwrap_or(state.ids.min),
            self.id_max.unwrap_or(state.ids.max),
        );

        if self.owned {
            state.ownership = OwnershipMode::Owned;
        } else if self.unowned {
            state.ownership = OwnershipMode::Unowned;
        }
    }
}

fn trimmed(values: &[String]) -> impl Iterator<Item = String> + '_ {
    values
        .iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the filtered gallery with summary and progress
    Browse {
        #[command(flatten)]
        filters: FilterArgs,

        /// Check each card's image file
        #[arg(long)]
        images: bool,
    },

    /// Show summary and collection progress only
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the values each filter can take
    Options {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Manage owned cards
    Own {
        #[command(subcommand)]
        action: OwnAction,
    },

    /// Show or change the subscription plan
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum OwnAction {
    /// List owned card IDs
    List,

    /// Mark a card as owned (e.g., "Base Set_7")
    Add { card: CardId },

    /// Unmark an owned card
    Remove { card: CardId },

    /// Flip ownership of a card
    Toggle { card: CardId },
}

#[derive(Subcommand)]
pub(crate) enum PlanAction {
    /// Show the current plan and what it allows
    Show,

    /// Change the plan
    Set { plan: Plan },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show every setting and where it came from
    Show,

    /// Print the config file path
    Path,
}

#[cfg(test)]
#[path = "tests/cli_types_tests.rs"]
mod tests;

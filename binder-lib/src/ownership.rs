//! Local mirror of one user's owned cards.
//!
//! Every mutation goes to the store first; the local set only changes once
//! the store call returned successfully.

use std::collections::BTreeSet;

use binder_catalog::{CardId, CollectionStore};

use crate::error::BinderError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedCards {
    user: String,
    cards: BTreeSet<CardId>,
}

impl OwnedCards {
    pub fn empty(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            cards: BTreeSet::new(),
        }
    }

    pub fn load<S: CollectionStore + ?Sized>(store: &S, user: &str) -> Result<Self, BinderError> {
        let cards = store.load(user)?;
        log::debug!("Loaded {} owned cards for '{user}'", cards.len());
        Ok(Self {
            user: user.to_string(),
            cards,
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn cards(&self) -> &BTreeSet<CardId> {
        &self.cards
    }

    pub fn contains(&self, card: &CardId) -> bool {
        self.cards.contains(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn add<S: CollectionStore + ?Sized>(
        &mut self,
        store: &S,
        card: &CardId,
    ) -> Result<(), BinderError> {
        store
            .add(&self.user, card)
            .inspect_err(|e| log::warn!("Could not add {card} for '{}': {e}", self.user))?;
        self.cards.insert(card.clone());
        Ok(())
    }

    pub fn remove<S: CollectionStore + ?Sized>(
        &mut self,
        store: &S,
        card: &CardId,
    ) -> Result<(), BinderError> {
        store
            .remove(&self.user, card)
            .inspect_err(|e| log::warn!("Could not remove {card} for '{}': {e}", self.user))?;
        self.cards.remove(card);
        Ok(())
    }

    /// Flip ownership of `card`. Returns whether it is owned afterwards.
    pub fn toggle<S: CollectionStore + ?Sized>(
        &mut self,
        store: &S,
        card: &CardId,
    ) -> Result<bool, BinderError> {
        if self.contains(card) {
            self.remove(store, card)?;
            Ok(false)
        } else {
            self.add(store, card)?;
            Ok(true)
        }
    }

    /// Replace the local set with the store's. Keeps the old set on failure.
    pub fn refresh<S: CollectionStore + ?Sized>(&mut self, store: &S) -> Result<(), BinderError> {
        let cards = store
            .load(&self.user)
            .inspect_err(|e| log::warn!("Could not reload collection for '{}': {e}", self.user))?;
        self.cards = cards;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/ownership_tests.rs"]
mod tests;

//! Per-session context: active user, filter state, owned cards, and plan.
//!
//! Mutating methods change the session; [`Session::render`] only reads it,
//! so a change becomes visible on the next render.

use binder_catalog::{CardId, Catalogue, CollectionStore, Plan, PlanStore};

use crate::entitlement::Entitlements;
use crate::error::BinderError;
use crate::filter::FilterState;
use crate::ownership::OwnedCards;
use crate::pipeline::{self, Render};

#[derive(Debug, Clone)]
pub struct Session {
    user: String,
    defaults: FilterState,
    filters: FilterState,
    owned: OwnedCards,
    entitlements: Entitlements,
    warnings: Vec<String>,
}

impl Session {
    /// Open a session for `user`.
    ///
    /// Store failures are not fatal: the session starts with no owned cards
    /// or a basic plan and the failure is queued in [`Session::take_warnings`].
    pub fn start<S>(store: &S, catalogue: &Catalogue, user: &str) -> Self
    where
        S: CollectionStore + PlanStore + ?Sized,
    {
        let filters = FilterState::for_catalogue(catalogue);
        let mut session = Self {
            user: user.to_string(),
            defaults: filters.clone(),
            filters,
            owned: OwnedCards::empty(user),
            entitlements: Entitlements::default(),
            warnings: Vec::new(),
        };
        session.load_user(store);
        session
    }

    /// Change the active user. Filters go back to their defaults and the
    /// new user's cards and plan are loaded.
    pub fn switch_user<S>(&mut self, store: &S, catalogue: &Catalogue, user: &str)
    where
        S: CollectionStore + PlanStore + ?Sized,
    {
        log::debug!("Switching user '{}' -> '{user}'", self.user);
        self.user = user.to_string();
        self.owned = OwnedCards::empty(user);
        self.entitlements = Entitlements::default();
        self.reset_filters(catalogue);
        self.load_user(store);
    }

    fn load_user<S>(&mut self, store: &S)
    where
        S: CollectionStore + PlanStore + ?Sized,
    {
        match OwnedCards::load(store, &self.user) {
            Ok(owned) => self.owned = owned,
            Err(e) => self.warn(format!("Could not load collection for '{}': {e}", self.user)),
        }
        match store.plan(&self.user) {
            Ok(plan) => self.entitlements = Entitlements::from_plan(plan),
            Err(e) => self.warn(format!(
                "Could not load plan for '{}', assuming basic: {e}",
                self.user
            )),
        }
    }

    fn warn(&mut self, message: String) {
        log::debug!("{message}");
        self.warnings.push(message);
    }

    pub fn reset_filters(&mut self, catalogue: &Catalogue) {
        self.filters.reset(catalogue);
        self.defaults = self.filters.clone();
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Number of filter stages narrowing the view beyond the defaults.
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count(&self.defaults)
    }

    pub fn owned(&self) -> &OwnedCards {
        &self.owned
    }

    pub fn entitlements(&self) -> Entitlements {
        self.entitlements
    }

    pub fn plan(&self) -> Plan {
        self.entitlements.plan()
    }

    /// Drain the non-fatal store failures collected so far.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    pub fn add_card<S>(
        &mut self,
        store: &S,
        catalogue: &Catalogue,
        card: &CardId,
    ) -> Result<(), BinderError>
    where
        S: CollectionStore + ?Sized,
    {
        self.entitlements.require_edit()?;
        if !catalogue.contains(card) {
            return Err(BinderError::unknown_card(card.as_str()));
        }
        self.owned.add(store, card)
    }

    /// Removing does not require the card to still be in the catalogue.
    pub fn remove_card<S>(&mut self, store: &S, card: &CardId) -> Result<(), BinderError>
    where
        S: CollectionStore + ?Sized,
    {
        self.entitlements.require_edit()?;
        self.owned.remove(store, card)
    }

    /// Returns whether the card is owned afterwards.
    pub fn toggle_card<S>(
        &mut self,
        store: &S,
        catalogue: &Catalogue,
        card: &CardId,
    ) -> Result<bool, BinderError>
    where
        S: CollectionStore + ?Sized,
    {
        self.entitlements.require_edit()?;
        if !self.owned.contains(card) && !catalogue.contains(card) {
            return Err(BinderError::unknown_card(card.as_str()));
        }
        self.owned.toggle(store, card)
    }

    pub fn refresh_ownership<S>(&mut self, store: &S) -> Result<(), BinderError>
    where
        S: CollectionStore + ?Sized,
    {
        self.owned.refresh(store)
    }

    /// Store a new plan for the active user and apply it once persisted.
    pub fn set_plan<S>(&mut self, store: &S, plan: Plan) -> Result<(), BinderError>
    where
        S: PlanStore + ?Sized,
    {
        store.set_plan(&self.user, plan)?;
        self.entitlements = Entitlements::from_plan(plan);
        Ok(())
    }

    pub fn render<'a>(&self, catalogue: &'a Catalogue) -> Render<'a> {
        pipeline::render(catalogue, &self.filters, self.owned.cards())
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;

use std::cell::Cell;
use std::collections::BTreeSet;

use binder_catalog::{StoreError, placeholder_catalogue};
use binder_db::SqliteStore;

use super::*;
use crate::filter::{Bounds, OwnershipMode};

/// SQLite store that counts calls and can be switched offline.
struct FlakyStore {
    inner: SqliteStore,
    offline: Cell<bool>,
    calls: Cell<usize>,
}

impl FlakyStore {
    fn new() -> Self {
        Self {
            inner: SqliteStore::open_memory().unwrap(),
            offline: Cell::new(false),
            calls: Cell::new(0),
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        self.calls.set(self.calls.get() + 1);
        if self.offline.get() {
            Err(StoreError::unavailable("offline"))
        } else {
            Ok(())
        }
    }
}

impl CollectionStore for FlakyStore {
    fn load(&self, user: &str) -> Result<BTreeSet<CardId>, StoreError> {
        self.check()?;
        self.inner.load(user)
    }

    fn add(&self, user: &str, card: &CardId) -> Result<(), StoreError> {
        self.check()?;
        self.inner.add(user, card)
    }

    fn remove(&self, user: &str, card: &CardId) -> Result<(), StoreError> {
        self.check()?;
        self.inner.remove(user, card)
    }
}

impl PlanStore for FlakyStore {
    fn plan(&self, user: &str) -> Result<Plan, StoreError> {
        self.check()?;
        self.inner.plan(user)
    }

    fn set_plan(&self, user: &str, plan: Plan) -> Result<(), StoreError> {
        self.check()?;
        self.inner.set_plan(user, plan)
    }
}

fn pro_store(user: &str) -> FlakyStore {
    let store = FlakyStore::new();
    store.inner.set_plan(user, Plan::Pro).unwrap();
    store
}

#[test]
fn test_start_loads_owned_and_plan() {
    let catalogue = placeholder_catalogue();
    let store = pro_store("ash");
    store.inner.add("ash", &CardId::from("Base Set_7")).unwrap();

    let mut session = Session::start(&store, &catalogue, "ash");
    assert_eq!(session.user(), "ash");
    assert_eq!(session.plan(), Plan::Pro);
    assert!(session.owned().contains(&CardId::from("Base Set_7")));
    assert!(session.take_warnings().is_empty());
}

#[test]
fn test_new_user_gets_basic_plan() {
    let catalogue = placeholder_catalogue();
    let store = FlakyStore::new();

    let session = Session::start(&store, &catalogue, "brock");
    assert_eq!(session.plan(), Plan::Basic);
    assert!(!session.entitlements().can_edit_collection());
    assert_eq!(store.inner.plan("brock").unwrap(), Plan::Basic);
}

#[test]
fn test_basic_plan_blocks_edits_without_store_call() {
    let catalogue = placeholder_catalogue();
    let store = FlakyStore::new();
    let mut session = Session::start(&store, &catalogue, "brock");
    let calls = store.calls.get();

    let card = CardId::from("Base Set_1");
    let err = session.add_card(&store, &catalogue, &card).unwrap_err();
    assert!(matches!(err, BinderError::FeatureLocked { plan: Plan::Basic }));
    assert!(session.remove_card(&store, &card).is_err());
    assert!(session.toggle_card(&store, &catalogue, &card).is_err());

    assert_eq!(store.calls.get(), calls);
    assert!(session.owned().is_empty());
}

#[test]
fn test_pro_plan_edits_collection() {
    let catalogue = placeholder_catalogue();
    let store = pro_store("ash");
    let mut session = Session::start(&store, &catalogue, "ash");

    let card = CardId::from("Jungle_2");
    session.add_card(&store, &catalogue, &card).unwrap();
    assert!(session.owned().contains(&card));
    assert!(!session.toggle_card(&store, &catalogue, &card).unwrap());
    assert!(store.inner.load("ash").unwrap().is_empty());
}

#[test]
fn test_unknown_card_rejected() {
    let catalogue = placeholder_catalogue();
    let store = pro_store("ash");
    let mut session = Session::start(&store, &catalogue, "ash");

    let err = session
        .add_card(&store, &catalogue, &CardId::from("Neo Genesis_9"))
        .unwrap_err();
    assert!(matches!(err, BinderError::UnknownCard(_)));
    assert!(!session.owned().contains(&CardId::from("Neo Genesis_9")));
}

#[test]
fn test_offline_store_keeps_state_and_warns() {
    let catalogue = placeholder_catalogue();
    let store = pro_store("ash");
    let mut session = Session::start(&store, &catalogue, "ash");
    session
        .add_card(&store, &catalogue, &CardId::from("Base Set_1"))
        .unwrap();

    store.offline.set(true);
    let before = session.owned().clone();
    assert!(
        session
            .add_card(&store, &catalogue, &CardId::from("Fossil_3"))
            .is_err()
    );
    assert!(session.refresh_ownership(&store).is_err());
    assert_eq!(session.owned(), &before);

    session.switch_user(&store, &catalogue, "misty");
    assert_eq!(session.user(), "misty");
    assert!(session.owned().is_empty());
    assert_eq!(session.plan(), Plan::Basic);
    assert_eq!(session.take_warnings().len(), 2);
    assert!(session.take_warnings().is_empty());
}

#[test]
fn test_switch_user_resets_filters_and_reloads() {
    let catalogue = placeholder_catalogue();
    let store = pro_store("ash");
    store.inner.add("misty", &CardId::from("Jungle_6")).unwrap();
    let mut session = Session::start(&store, &catalogue, "ash");

    session.filters_mut().search = "Glurak".to_string();
    session.filters_mut().ownership = OwnershipMode::Owned;
    session.switch_user(&store, &catalogue, "misty");

    assert_eq!(session.filters(), &FilterState::for_catalogue(&catalogue));
    assert_eq!(session.owned().user(), "misty");
    assert!(session.owned().contains(&CardId::from("Jungle_6")));
    assert_eq!(session.plan(), Plan::Basic);
}

#[test]
fn test_reset_filters_uses_catalogue_bounds() {
    let catalogue = placeholder_catalogue();
    let store = FlakyStore::new();
    let mut session = Session::start(&store, &catalogue, "ash");

    session.filters_mut().price = Bounds::new(30.0, 40.0);
    session.filters_mut().sets.insert("Fossil".to_string());
    assert_eq!(session.active_filter_count(), 2);
    session.reset_filters(&catalogue);
    assert_eq!(session.active_filter_count(), 0);

    assert_eq!(session.filters().price, Bounds::new(20.0, 150.0));
    assert_eq!(session.filters().ids, Bounds::new(1, 3));
    assert!(session.filters().sets.is_empty());
}

#[test]
fn test_render_reflects_state_changes() {
    let catalogue = placeholder_catalogue();
    let store = pro_store("ash");
    let mut session = Session::start(&store, &catalogue, "ash");

    assert_eq!(session.render(&catalogue).view.card_count(), 7);

    session.filters_mut().ownership = OwnershipMode::Owned;
    assert!(session.render(&catalogue).view.is_empty());

    session
        .add_card(&store, &catalogue, &CardId::from("Base Set_7"))
        .unwrap();
    let render = session.render(&catalogue);
    assert_eq!(render.view.card_count(), 1);
    assert_eq!(render.progress.cards_owned_in_view, 1);
    assert_eq!(render.summary.total_value, 150.0);
}

#[test]
fn test_set_plan_applies_after_store_succeeds() {
    let catalogue = placeholder_catalogue();
    let store = FlakyStore::new();
    let mut session = Session::start(&store, &catalogue, "ash");

    store.offline.set(true);
    assert!(session.set_plan(&store, Plan::Pro).is_err());
    assert_eq!(session.plan(), Plan::Basic);

    store.offline.set(false);
    session.set_plan(&store, Plan::Pro).unwrap();
    assert!(session.entitlements().can_edit_collection());
    assert_eq!(store.inner.plan("ash").unwrap(), Plan::Pro);
}

use binder_catalog::{Card, Catalogue, CatalogueSource, placeholder_catalogue};

use super::*;
use crate::filter::{FilterState, apply};

fn small_catalogue() -> Catalogue {
    Catalogue::new(
        vec![
            Card::new(1, "Bisasam", "Base Set", "1").with_price(40.9),
            Card::new(1, "Bisasam", "Jungle", "2").with_price(35.5),
            Card::new(3, "Glurak", "Base Set", "7").with_price(150.0),
        ],
        CatalogueSource::Reader,
    )
}

#[test]
fn test_progress_counts_cards_and_pokemon() {
    let catalogue = small_catalogue();
    let owned: BTreeSet<CardId> = [CardId::from("Base Set_1")].into();
    let state = FilterState::for_catalogue(&catalogue);
    let view = apply(&catalogue, &state, &owned).view;

    let p = progress(&view, &owned);
    assert_eq!(p.cards_owned_in_view, 1);
    assert_eq!(p.cards_in_view, 3);
    assert_eq!(p.pokemon_owned_in_view, 1);
    assert_eq!(p.pokemon_in_view, 2);
    assert!((p.card_ratio() - 1.0 / 3.0).abs() < 1e-9);
    assert!((p.pokemon_ratio() - 0.5).abs() < 1e-9);
}

#[test]
fn test_empty_view_is_all_zero() {
    let view = View::default();
    let summary = summarize(&view);
    assert_eq!(summary, Summary::default());

    let p = progress(&view, &BTreeSet::new());
    assert_eq!(p.card_ratio(), 0.0);
    assert_eq!(p.pokemon_ratio(), 0.0);
}

#[test]
fn test_summary_of_placeholder() {
    let catalogue = placeholder_catalogue();
    let state = FilterState::for_catalogue(&catalogue);
    let view = apply(&catalogue, &state, &BTreeSet::new()).view;

    let summary = summarize(&view);
    assert_eq!(summary.card_count, 7);
    assert_eq!(summary.distinct_pokemon_count, 3);
    assert!((summary.total_value - 357.4).abs() < 1e-9);
    // Bisaknosp 28 + Bisasam 20 + Glurak 150
    assert!((summary.per_pokemon_min_sum - 198.0).abs() < 1e-9);
    // Bisaknosp 33 + Bisasam 50 + Glurak 150
    assert!((summary.per_pokemon_max_sum - 233.0).abs() < 1e-9);
    assert_eq!(summary.total_line(), "Total value of all cards: 357€");
    assert_eq!(summary.range_line(), "Range (1 card per Pokémon): 198€ - 233€");
    assert_eq!(summary.latest_update, None);
}

#[test]
fn test_unpriced_cards_contribute_nothing() {
    let glumanda = Card::new(4, "Glumanda", "Promo", "8");
    let bisasam = Card::new(1, "Bisasam", "Base Set", "1").with_price(10.0);
    let view = View::from_cards(vec![&glumanda, &bisasam]);

    let summary = summarize(&view);
    assert_eq!(summary.card_count, 2);
    assert_eq!(summary.distinct_pokemon_count, 2);
    assert_eq!(summary.total_value, 10.0);
    assert_eq!(summary.per_pokemon_min_sum, 10.0);
    assert_eq!(summary.per_pokemon_max_sum, 10.0);
}

#[test]
fn test_latest_update_skips_bad_dates() {
    let a = Card::new(1, "Bisasam", "Base Set", "1").with_last_update("03.02.2024");
    let b = Card::new(1, "Bisasam", "Jungle", "2").with_last_update("2024-12-31");
    let c = Card::new(3, "Glurak", "Base Set", "7").with_last_update("15.01.2024");
    let view = View::from_cards(vec![&a, &b, &c]);

    let summary = summarize(&view);
    assert_eq!(summary.latest_update, NaiveDate::from_ymd_opt(2024, 2, 3));
    assert_eq!(summary.update_line(), "Last price update: 03.02.2024");
}

#[test]
fn test_parse_update_date() {
    assert_eq!(
        parse_update_date(" 31.12.2023 "),
        NaiveDate::from_ymd_opt(2023, 12, 31)
    );
    assert_eq!(parse_update_date("31/12/2023"), None);
    assert_eq!(parse_update_date("32.01.2023"), None);
    assert_eq!(parse_update_date(""), None);
}

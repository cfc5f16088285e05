use binder_catalog::*;
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "pokemon_id,pokemon_name,set_name,card_number,set_size,price,rarity,img,generation,update";

fn load_str(csv: &str) -> Loaded {
    load_catalogue_from_reader(csv.as_bytes()).unwrap()
}

#[test]
fn loads_rows_and_derives_card_ids() {
    let csv = format!(
        "{HEADER}\n\
         1,Bisasam,Base Set,1,102,40.9,Rare,./images/b1.png,1,01.02.2024\n\
         3,Glurak,Base Set,7,102,150.0,Rare Holo,./images/g1.png,1,\n"
    );
    let loaded = load_str(&csv);
    let cards = loaded.catalogue.cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].id.as_str(), "Base Set_1");
    assert_eq!(cards[1].id.as_str(), "Base Set_7");
    assert_eq!(cards[0].price, Some(40.9));
    assert_eq!(cards[0].last_update.as_deref(), Some("01.02.2024"));
    assert_eq!(cards[1].last_update, None);
    assert_eq!(cards[0].generation.as_deref(), Some("1"));
    assert_eq!(loaded.report.accepted, 2);
    assert!(loaded.report.rejected.is_empty());
}

#[test]
fn optional_columns_may_be_absent() {
    let csv = "pokemon_id,pokemon_name,set_name,card_number,set_size,price,rarity,img\n\
               25,Pikachu,Jungle,60,64,3.5,Common,p.png\n";
    let loaded = load_str(csv);
    let card = &loaded.catalogue.cards()[0];
    assert_eq!(card.generation, None);
    assert_eq!(card.last_update, None);
    assert_eq!(card.pokemon_id, 25);
}

#[test]
fn missing_required_column_is_an_error() {
    let csv = "pokemon_id,pokemon_name,set_name,card_number,set_size,price,img\n";
    let err = load_catalogue_from_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn(ref c) if c == "rarity"));
}

#[test]
fn rows_failing_numeric_coercion_are_rejected() {
    let csv = format!(
        "{HEADER}\n\
         abc,Bisasam,Base Set,1,102,40.9,Rare,a.png,,\n\
         1,Bisasam,Jungle,2,64,cheap,Uncommon,b.png,,\n\
         3,Glurak,Base Set,7,102,150.0,Rare Holo,c.png,,\n"
    );
    let loaded = load_str(&csv);
    assert_eq!(loaded.catalogue.len(), 1);
    assert_eq!(loaded.report.rejected.len(), 2);
    assert_eq!(loaded.report.rejected[0].line, 2);
    assert_eq!(loaded.report.rejected[1].line, 3);
}

#[test]
fn empty_price_is_kept_but_flagged() {
    let csv = format!("{HEADER}\n1,Bisasam,Base Set,1,102,,Rare,a.png,,\n");
    let loaded = load_str(&csv);
    assert_eq!(loaded.catalogue.len(), 1);
    assert_eq!(loaded.catalogue.cards()[0].price, None);
    assert_eq!(loaded.report.unpriced, 1);
}

#[test]
fn spreadsheet_whole_numbers_are_accepted() {
    let csv = format!("{HEADER}\n3.0,Glurak,Base Set,7.0,102,150,Rare Holo,c.png,,\n");
    let loaded = load_str(&csv);
    let card = &loaded.catalogue.cards()[0];
    assert_eq!(card.pokemon_id, 3);
    assert_eq!(card.card_number, CardNumber::Numeric(7));
    assert_eq!(card.id.as_str(), "Base Set_7");
}

#[test]
fn duplicate_card_ids_keep_first_row() {
    let csv = format!(
        "{HEADER}\n\
         1,Bisasam,Base Set,1,102,40.9,Rare,a.png,,\n\
         2,Bisaknosp,Base Set,1,102,10.0,Rare,b.png,,\n"
    );
    let loaded = load_str(&csv);
    assert_eq!(loaded.catalogue.len(), 1);
    assert_eq!(loaded.catalogue.cards()[0].pokemon_name, "Bisasam");
    assert_eq!(loaded.report.rejected.len(), 1);
}

#[test]
fn zero_padded_numbers_share_an_id() {
    let csv = format!(
        "{HEADER}\n\
         1,Bisasam,Base Set,007,102,40.9,Rare,a.png,,\n\
         1,Bisasam,Base Set,7,102,42.0,Rare,b.png,,\n"
    );
    let loaded = load_str(&csv);
    assert_eq!(loaded.catalogue.len(), 1);
    assert_eq!(loaded.catalogue.cards()[0].id.as_str(), "Base Set_7");
    assert_eq!(loaded.report.rejected.len(), 1);
    assert!(loaded.report.rejected[0].reason.contains("duplicate"));
}

#[test]
fn lookup_by_id_after_load() {
    let csv = format!(
        "{HEADER}\n\
         1,Bisasam,Base Set,1,102,40.9,Rare,a.png,,\n\
         2,Bisaknosp,Jungle,1G,64,10.0,Rare,b.png,,\n\
         2,Bisaknosp,Jungle,1G,64,11.0,Rare,c.png,,\n\
         3,Glurak,Fossil,4,62,,Rare Holo,d.png,,\n"
    );
    let loaded = load_str(&csv);
    let catalogue = &loaded.catalogue;
    assert_eq!(catalogue.len(), 3);
    assert_eq!(loaded.report.unpriced, 1);
    assert_eq!(
        catalogue.get(&CardId::from("Jungle_1G")).map(|c| c.price),
        Some(Some(10.0))
    );
    assert_eq!(
        catalogue.get(&CardId::from("Fossil_4")).map(|c| c.pokemon_name.as_str()),
        Some("Glurak")
    );
    assert!(catalogue.contains(&CardId::from("Base Set_1")));
    assert!(!catalogue.contains(&CardId::from("Jungle_2")));
}

#[test]
fn direct_construction_drops_duplicates() {
    let catalogue = Catalogue::new(
        vec![
            Card::new(1, "Bisasam", "Base Set", "1").with_price(40.9),
            Card::new(2, "Bisaknosp", "Base Set", "1").with_price(10.0),
            Card::new(3, "Glurak", "Base Set", "4"),
        ],
        CatalogueSource::Reader,
    );
    assert_eq!(catalogue.len(), 2);
    let first = catalogue.get(&CardId::from("Base Set_1")).unwrap();
    assert_eq!(first.pokemon_name, "Bisasam");
    assert_eq!(catalogue.cards()[1].id.as_str(), "Base Set_4");
    assert_eq!(catalogue.get(&CardId::from("Base Set_4")).unwrap().pokemon_name, "Glurak");
}

#[test]
fn card_ids_are_stable_across_reloads() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("overview_cards.csv");
    fs::write(
        &path,
        format!(
            "{HEADER}\n\
             1,Bisasam,Base Set,1,102,40.9,Rare,a.png,,\n\
             1,Bisasam,Promo,1G,,12.0,Promo,b.png,,\n"
        ),
    )
    .unwrap();

    let first = load_catalogue(&path).unwrap();
    let second = load_catalogue(&path).unwrap();
    let ids = |l: &Loaded| l.catalogue.cards().iter().map(|c| c.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(ids(&first)[1].as_str(), "Promo_1G");
    assert_eq!(first.catalogue.source(), &CatalogueSource::File(path.clone()));
}

#[test]
fn unreadable_source_is_data_unavailable() {
    let tmp = TempDir::new().unwrap();
    let err = load_catalogue(&tmp.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, LoadError::DataUnavailable { .. }));
}

#[test]
fn fallback_uses_placeholder_catalogue() {
    let tmp = TempDir::new().unwrap();
    let loaded = load_or_placeholder(&tmp.path().join("missing.csv"));
    assert_eq!(loaded.catalogue.source(), &CatalogueSource::Placeholder);
    assert!(loaded.catalogue.len() >= 3);
    assert!(loaded.catalogue.contains(&CardId::from("Base Set_7")));
}

//! Built-in stand-in catalogue used when the real one cannot be read.

use crate::loader::{Catalogue, CatalogueSource};
use crate::types::Card;

/// Seven first-generation cards across three sets, enough to exercise every
/// filter and aggregate.
pub fn placeholder_catalogue() -> Catalogue {
    let rows: [(u32, &str, &str, &str, &str, f64, &str, &str); 7] = [
        (1, "Bisasam", "Base Set", "1", "102", 40.9, "Rare", "./images/bisasam_1.png"),
        (1, "Bisasam", "Jungle", "2", "64", 35.5, "Uncommon", "./images/bisasam_2.png"),
        (1, "Bisasam", "Fossil", "3", "62", 20.0, "Common", "./images/bisasam_3.png"),
        (1, "Bisasam", "Base Set", "4", "102", 50.0, "Rare Holo", "./images/bisasam_4.png"),
        (2, "Bisaknosp", "Base Set", "5", "102", 33.0, "Rare", "./images/bisaknosp_1.png"),
        (2, "Bisaknosp", "Jungle", "6", "64", 28.0, "Uncommon", "./images/bisaknosp_2.png"),
        (3, "Glurak", "Base Set", "7", "102", 150.0, "Rare Holo", "./images/glurak_1.png"),
    ];

    let cards = rows
        .into_iter()
        .map(|(id, name, set, number, size, price, rarity, img)| {
            Card::new(id, name, set, number)
                .with_set_size(size)
                .with_price(price)
                .with_rarity(rarity)
                .with_generation("1")
                .with_image(img)
        })
        .collect();

    Catalogue::new(cards, CatalogueSource::Placeholder)
}

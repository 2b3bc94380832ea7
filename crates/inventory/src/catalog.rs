//! Starting inventories.

use gildedrose_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::rules::{AGED_BRIE, BACKSTAGE_PASSES, SULFURAS};

/// The inn's standard opening stock.
pub fn standard_catalog() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        // Not a category of its own yet; degrades like any ordinary item.
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Parse a JSON array of items (`[{"name": .., "sellIn": .., "quality": ..}]`).
///
/// Only the shape is checked; out-of-range values are accepted as-is.
pub fn catalog_from_json(json: &str) -> DomainResult<Vec<Item>> {
    serde_json::from_str(json)
        .map_err(|e| DomainError::validation(format!("invalid item catalog: {e}")))
}

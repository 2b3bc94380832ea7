//! Category resolution and the per-category daily rules.

use serde::{Deserialize, Serialize};

use crate::item::Item;

pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Quality ceiling for every non-legendary item.
pub const MAX_QUALITY: i32 = 50;
/// Quality floor for every non-legendary item.
pub const MIN_QUALITY: i32 = 0;

/// Raise `value` by `amount`, never past [`MAX_QUALITY`].
///
/// A value already above the ceiling is pulled back down to it.
pub fn clamped_increase(value: i32, amount: i32) -> i32 {
    value.saturating_add(amount).min(MAX_QUALITY)
}

/// Lower `value` by `amount`, never below [`MIN_QUALITY`].
pub fn clamped_decrease(value: i32, amount: i32) -> i32 {
    value.saturating_sub(amount).max(MIN_QUALITY)
}

/// Rule set an item follows, selected by exact name match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Ordinary goods: lose quality daily, twice as fast once past due.
    Default,
    /// Aged Brie: gains quality with age.
    Appreciating,
    /// Backstage passes: gain quality as the event nears, worthless after.
    EventTicket,
    /// Sulfuras: never sold, never changes.
    Legendary,
}

impl Category {
    /// Resolve the rule set for an item name. Unknown names get [`Category::Default`].
    pub fn of(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::Appreciating,
            BACKSTAGE_PASSES => Category::EventTicket,
            SULFURAS => Category::Legendary,
            _ => Category::Default,
        }
    }

    /// Whether items of this category are bound by the quality range and decay.
    pub fn is_exempt(self) -> bool {
        self == Category::Legendary
    }

    /// Apply one day of this category's rules to `item`.
    pub fn apply(self, item: &mut Item) {
        if self.is_exempt() {
            return;
        }

        let past_due = item.sell_in < 0;
        item.sell_in = item.sell_in.saturating_sub(1);

        match self {
            Category::Default => {
                item.quality = clamped_decrease(item.quality, 1);
                if past_due {
                    item.quality = clamped_decrease(item.quality, 1);
                }
            }
            Category::Appreciating => {
                item.quality = clamped_increase(item.quality, 1);
                if past_due {
                    item.quality = clamped_increase(item.quality, 1);
                }
            }
            Category::EventTicket => {
                // Thresholds compare against the already-decremented value, so
                // a concert 10 days out is "within 10 days" and a concert on
                // day 0 has passed.
                item.quality = clamped_increase(item.quality, 1);
                if item.sell_in < 10 {
                    item.quality = clamped_increase(item.quality, 1);
                }
                if item.sell_in < 5 {
                    item.quality = clamped_increase(item.quality, 1);
                }
                if item.sell_in < 0 {
                    item.quality = MIN_QUALITY;
                }
            }
            Category::Legendary => {}
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Category::Default => "default",
            Category::Appreciating => "appreciating",
            Category::EventTicket => "event_ticket",
            Category::Legendary => "legendary",
        };
        f.write_str(s)
    }
}

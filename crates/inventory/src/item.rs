use serde::{Deserialize, Serialize};

/// A stocked item.
///
/// Fields are public: callers may inspect or adjust them between daily
/// updates. Renaming an item changes which rule set applies to it next.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    /// Days left to sell the item; negative once past due.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_fixture_line_format() {
        let item = Item::new("Aged Brie", -3, 12);
        assert_eq!(item.to_string(), "Aged Brie, -3, 12");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let item = Item::new("foo", 4, 7);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "foo", "sellIn": 4, "quality": 7 })
        );
    }

    #[test]
    fn construction_accepts_out_of_range_values() {
        let item = Item::new("foo", -10, 99);
        assert_eq!(item.sell_in, -10);
        assert_eq!(item.quality, 99);
    }
}

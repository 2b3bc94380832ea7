//! The daily update over a borrowed item list.

use crate::item::Item;
use crate::rules::Category;

/// Advances a caller-owned list of items one simulated day at a time.
///
/// The updater borrows the items rather than copying them; the caller reads
/// results through [`DailyUpdater::items`] or after the updater is dropped.
#[derive(Debug)]
pub struct DailyUpdater<'a> {
    items: &'a mut [Item],
}

impl<'a> DailyUpdater<'a> {
    pub fn new(items: &'a mut [Item]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        self.items
    }

    /// Apply one day of change to every item, in order.
    ///
    /// The rule set is resolved from the item's current name on every call.
    pub fn advance_one_day(&mut self) {
        for item in self.items.iter_mut() {
            Category::of(&item.name).apply(item);
        }
    }
}

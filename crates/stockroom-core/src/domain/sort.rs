//! Sort Order
//!
//! How the item list is ordered on screen.

use std::cmp::Ordering;

use super::item::Item;

/// List ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// By name, A to Z, ignoring case; lowercase first on a tie
    #[default]
    Alphabetical,
    /// Largest quantity first
    Quantity,
}

impl SortMode {
    pub fn toggled(self) -> Self {
        match self {
            SortMode::Alphabetical => SortMode::Quantity,
            SortMode::Quantity => SortMode::Alphabetical,
        }
    }

    /// Caption of the toolbar toggle
    pub fn button_label(self) -> &'static str {
        match self {
            SortMode::Alphabetical => "Sort A-Z",
            SortMode::Quantity => "Sort Quantity",
        }
    }

    fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortMode::Alphabetical => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| b.name.cmp(&a.name)),
            SortMode::Quantity => b.quantity.cmp(&a.quantity),
        }
    }
}

/// Sort in place. Stable, so equal quantities keep their incoming order.
pub fn sort_items(items: &mut [Item], mode: SortMode) {
    items.sort_by(|a, b| mode.compare(a, b));
}

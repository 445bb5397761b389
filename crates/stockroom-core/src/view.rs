//! View State
//!
//! Everything the inventory page keeps in memory: the sorted list, the
//! three dialogs, the search result and the highlight marker. Rendering
//! reads it; event handlers mutate it.

use std::time::Duration;

use crate::domain::{parse_quantity, sort_items, Item, SortMode};

/// How long a search hit stays highlighted
pub const HIGHLIGHT_DURATION: Duration = Duration::from_secs(3);

/// Add-item dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddDialog {
    pub open: bool,
    pub name: String,
    pub quantity: u32,
}

impl Default for AddDialog {
    fn default() -> Self {
        Self {
            open: false,
            name: String::new(),
            quantity: 1,
        }
    }
}

/// Request produced by submitting the add dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStock {
    pub name: String,
    pub quantity: u32,
}

impl AddDialog {
    /// Open with the quantity reset to 1; a typed name is kept
    pub fn open(&mut self) {
        self.open = true;
        self.quantity = 1;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Store raw quantity input, coerced to a positive count
    pub fn set_quantity_input(&mut self, raw: &str) {
        self.quantity = parse_quantity(raw);
    }

    pub fn can_submit(&self) -> bool {
        !self.name.is_empty()
    }

    /// Take the form contents, reset the form and close the dialog
    pub fn submit(&mut self) -> Option<NewStock> {
        if !self.can_submit() {
            return None;
        }
        let request = NewStock {
            name: std::mem::take(&mut self.name),
            quantity: self.quantity,
        };
        self.quantity = 1;
        self.open = false;
        Some(request)
    }
}

/// Search dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDialog {
    pub open: bool,
    pub term: String,
    pub result: Option<Item>,
}

impl SearchDialog {
    pub fn open(&mut self) {
        self.open = true;
        self.reset();
    }

    pub fn close(&mut self) {
        self.open = false;
        self.reset();
    }

    fn reset(&mut self) {
        self.term.clear();
        self.result = None;
    }
}

/// Identifies the search that set the current highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightTicket(u64);

/// Transient marker on the last item found by search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    name: Option<String>,
    generation: u64,
}

impl Highlight {
    pub fn mark(&mut self, name: impl Into<String>) -> HighlightTicket {
        self.generation += 1;
        self.name = Some(name.into());
        HighlightTicket(self.generation)
    }

    /// Clear the marker if no newer search has replaced it
    pub fn expire(&mut self, ticket: HighlightTicket) -> bool {
        if ticket.0 != self.generation || self.name.is_none() {
            return false;
        }
        self.name = None;
        true
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

/// Result of running a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Item found and highlighted; expire the ticket after [`HIGHLIGHT_DURATION`]
    Found { item: Item, ticket: HighlightTicket },
    /// Nothing matched; the not-found notice is open
    NotFound,
}

/// Complete in-memory state of the inventory page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryView {
    items: Vec<Item>,
    sort_mode: SortMode,
    pub add_dialog: AddDialog,
    pub search_dialog: SearchDialog,
    pub not_found_open: bool,
    pub highlight: Highlight,
}

impl InventoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// Replace the whole list with a fresh fetch, sorted by the current mode
    pub fn replace_items(&mut self, mut items: Vec<Item>) {
        sort_items(&mut items, self.sort_mode);
        self.items = items;
    }

    /// Flip the sort mode and re-sort what is shown
    pub fn toggle_sort(&mut self) -> SortMode {
        self.sort_mode = self.sort_mode.toggled();
        sort_items(&mut self.items, self.sort_mode);
        self.sort_mode
    }

    /// Case-insensitive exact lookup of the search term in the shown list
    pub fn search(&mut self) -> SearchOutcome {
        let term = self.search_dialog.term.clone();
        match self.items.iter().find(|item| item.matches(&term)).cloned() {
            Some(item) => {
                self.search_dialog.result = Some(item.clone());
                self.search_dialog.open = false;
                let ticket = self.highlight.mark(item.name.clone());
                SearchOutcome::Found { item, ticket }
            }
            None => {
                self.not_found_open = true;
                SearchOutcome::NotFound
            }
        }
    }

    pub fn close_not_found(&mut self) {
        self.not_found_open = false;
    }

    pub fn expire_highlight(&mut self, ticket: HighlightTicket) -> bool {
        self.highlight.expire(ticket)
    }

    pub fn is_highlighted(&self, name: &str) -> bool {
        self.highlight.is(name)
    }

    /// Close whichever dialog is on top (Escape key)
    ///
    /// Returns false when no dialog was open.
    pub fn dismiss_top_dialog(&mut self) -> bool {
        if self.not_found_open {
            self.close_not_found();
        } else if self.search_dialog.open {
            self.search_dialog.close();
        } else if self.add_dialog.open {
            self.add_dialog.close();
        } else {
            return false;
        }
        true
    }
}

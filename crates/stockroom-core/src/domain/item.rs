//! Item Entity
//!
//! A named stock line with a positive quantity.

/// An inventory item
///
/// The name is the storage key, kept exactly as entered, so "Apple" and
/// "apple" are two different items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Name as entered (also the document key)
    pub name: String,
    /// Units in stock, never zero while the record exists
    pub quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }

    /// Name as shown in the list (first character upper-cased)
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }

    /// One-line description of the row, e.g. `Widget — Quantity: 3`
    pub fn row_label(&self) -> String {
        format!("{} — Quantity: {}", self.display_name(), self.quantity)
    }

    /// Case-insensitive name comparison used by search
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase() == term.to_lowercase()
    }
}

/// Upper-case the first character and keep the rest untouched.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Coerce raw quantity input into a positive count.
///
/// Reads like `parseInt`: leading whitespace and a `+` sign are skipped and
/// the leading run of digits is used. Anything that does not yield a
/// positive number (empty, `0`, negative, non-numeric, overflow) becomes 1.
pub fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..digits_end].parse::<u32>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_label() {
        let item = Item::new("Widget", 3);
        assert_eq!(item.row_label(), "Widget — Quantity: 3");
    }

    #[test]
    fn test_display_name_capitalizes_first_char_only() {
        assert_eq!(display_name("apple pie"), "Apple pie");
        assert_eq!(display_name("iPhone"), "IPhone");
        assert_eq!(display_name("élan"), "Élan");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_matches_ignores_case() {
        let item = Item::new("apple", 5);
        assert!(item.matches("Apple"));
        assert!(item.matches("APPLE"));
        assert!(!item.matches("apples"));
        assert!(!item.matches(" apple"));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("7"), 7);
        assert_eq!(parse_quantity("  12"), 12);
        assert_eq!(parse_quantity("+4"), 4);
        assert_eq!(parse_quantity("3abc"), 3);
        assert_eq!(parse_quantity("1e3"), 1);
    }

    #[test]
    fn test_parse_quantity_falls_back_to_one() {
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-3"), 1);
        assert_eq!(parse_quantity("99999999999"), 1);
    }
}

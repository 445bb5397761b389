//! Inventory Service
//!
//! Item operations against a document store. Every mutation is followed
//! by a full refetch of the collection, which is what the caller renders.

use crate::domain::Item;
use crate::repository::{Document, DocumentStore, FieldValue, Fields, StoreError, StoreResult};

/// Collection holding one document per item
pub const INVENTORY_COLLECTION: &str = "inventory";

const QUANTITY_FIELD: &str = "quantity";

/// Inventory operations over a document store
///
/// There is no per-item locking: each operation reads, then writes.
/// Two overlapping `remove_one_unit` calls on the same item may both read
/// the same quantity and a decrement can be lost.
#[derive(Debug, Clone)]
pub struct Inventory<S> {
    store: S,
}

impl<S: DocumentStore> Inventory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch the whole collection, in store order
    ///
    /// Records without a usable quantity are skipped.
    pub async fn refresh(&self) -> StoreResult<Vec<Item>> {
        let documents = self.store.list_all(INVENTORY_COLLECTION).await?;
        Ok(documents
            .into_iter()
            .filter_map(|doc| match item_from_document(&doc) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("Skipping record: {}", e);
                    None
                }
            })
            .collect())
    }

    /// Add `quantity` units, creating the item if it does not exist
    ///
    /// A quantity of 0 counts as 1, so a stored record is never 0.
    pub async fn add_item(&self, name: &str, quantity: u32) -> StoreResult<Vec<Item>> {
        let quantity = quantity.max(1);
        let existing = self.current_quantity(name).await?;
        let total = existing.map_or(quantity, |q| q.saturating_add(quantity));
        self.store
            .put(INVENTORY_COLLECTION, name, &quantity_fields(total))
            .await?;
        log::debug!("Stored '{}' with quantity {}", name, total);

        self.refresh().await
    }

    /// Take one unit away, deleting the item when its last unit goes
    ///
    /// A missing item is left alone.
    pub async fn remove_one_unit(&self, name: &str) -> StoreResult<Vec<Item>> {
        match self.current_quantity(name).await? {
            Some(quantity) if quantity <= 1 => {
                self.store.delete(INVENTORY_COLLECTION, name).await?;
            }
            Some(quantity) => {
                self.store
                    .put(INVENTORY_COLLECTION, name, &quantity_fields(quantity - 1))
                    .await?;
            }
            None => log::debug!("'{}' is not in the inventory, nothing to remove", name),
        }

        self.refresh().await
    }

    /// Delete the item whatever its quantity
    ///
    /// Store failures are logged and swallowed. The list is only refetched
    /// after a successful delete, so `None` means "keep what is shown".
    pub async fn remove_entire_item(&self, name: &str) -> Option<Vec<Item>> {
        if let Err(e) = self.store.delete(INVENTORY_COLLECTION, name).await {
            log::error!("Error removing entire item: {}", e);
            return None;
        }
        log::info!("Entire item '{}' has been removed from the inventory.", name);

        match self.refresh().await {
            Ok(items) => Some(items),
            Err(e) => {
                log::error!("Error removing entire item: {}", e);
                None
            }
        }
    }

    async fn current_quantity(&self, name: &str) -> StoreResult<Option<u32>> {
        match self.store.get(INVENTORY_COLLECTION, name).await? {
            Some(fields) => quantity_from_fields(name, &fields).map(Some),
            None => Ok(None),
        }
    }
}

fn quantity_fields(quantity: u32) -> Fields {
    let mut fields = Fields::new();
    fields.insert(QUANTITY_FIELD.to_string(), FieldValue::Integer(i64::from(quantity)));
    fields
}

fn quantity_from_fields(key: &str, fields: &Fields) -> StoreResult<u32> {
    let malformed = |reason: &str| StoreError::Malformed {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let raw = fields
        .get(QUANTITY_FIELD)
        .ok_or_else(|| malformed("missing quantity"))?
        .as_integer()
        .ok_or_else(|| malformed("quantity is not an integer"))?;

    match u32::try_from(raw) {
        Ok(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(malformed("quantity must be a positive 32-bit integer")),
    }
}

fn item_from_document(doc: &Document) -> StoreResult<Item> {
    let quantity = quantity_from_fields(&doc.key, &doc.fields)?;
    Ok(Item::new(doc.key.clone(), quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_fields_shape() {
        let fields = quantity_fields(3);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[QUANTITY_FIELD], FieldValue::Integer(3));
    }

    #[test]
    fn test_quantity_from_fields_rejects_bad_values() {
        let mut fields = Fields::new();
        assert!(quantity_from_fields("x", &fields).is_err());

        fields.insert(QUANTITY_FIELD.to_string(), FieldValue::String("3".to_string()));
        assert!(quantity_from_fields("x", &fields).is_err());

        fields.insert(QUANTITY_FIELD.to_string(), FieldValue::Integer(0));
        assert!(quantity_from_fields("x", &fields).is_err());

        fields.insert(QUANTITY_FIELD.to_string(), FieldValue::Integer(-2));
        let err = quantity_from_fields("x", &fields).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { ref key, .. } if key == "x"));
    }
}

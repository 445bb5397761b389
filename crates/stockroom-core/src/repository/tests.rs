//! Inventory Integration Tests
//!
//! Service scenarios against the in-memory document store.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::domain::Item;
    use crate::inventory::{Inventory, INVENTORY_COLLECTION};
    use crate::repository::{Document, DocumentStore, FieldValue, Fields, MemoryStore, StoreResult};
    use crate::view::{InventoryView, SearchOutcome};

    fn setup_inventory() -> (Inventory<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        (Inventory::new(store.clone()), store)
    }

    fn quantity(fields: Fields) -> i64 {
        fields["quantity"].as_integer().expect("integer quantity")
    }

    #[tokio::test]
    async fn test_adds_accumulate_per_name() {
        let (inventory, store) = setup_inventory();

        for q in [2, 5, 1, 10] {
            inventory.add_item("bolts", q).await.unwrap();
        }

        let fields = store.get(INVENTORY_COLLECTION, "bolts").await.unwrap().unwrap();
        assert_eq!(quantity(fields), 18);
    }

    #[tokio::test]
    async fn test_names_are_case_sensitive_keys() {
        let (inventory, _) = setup_inventory();

        inventory.add_item("Apple", 1).await.unwrap();
        let items = inventory.add_item("apple", 2).await.unwrap();

        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_add_zero_stores_one_unit() {
        let (inventory, store) = setup_inventory();

        let items = inventory.add_item("washer", 0).await.unwrap();
        assert_eq!(items, vec![Item::new("washer", 1)]);

        let items = inventory.add_item("washer", 2).await.unwrap();
        assert_eq!(items, vec![Item::new("washer", 3)]);
        let fields = store.get(INVENTORY_COLLECTION, "washer").await.unwrap().unwrap();
        assert_eq!(quantity(fields), 3);
    }

    #[tokio::test]
    async fn test_remove_last_unit_deletes_record() {
        let (inventory, store) = setup_inventory();
        inventory.add_item("lamp", 1).await.unwrap();

        let items = inventory.remove_one_unit("lamp").await.unwrap();

        assert!(items.is_empty());
        assert!(store.list_all(INVENTORY_COLLECTION).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_one_unit_decrements() {
        let (inventory, store) = setup_inventory();
        inventory.add_item("lamp", 4).await.unwrap();

        let items = inventory.remove_one_unit("lamp").await.unwrap();

        assert_eq!(items, vec![Item::new("lamp", 3)]);
        let fields = store.get(INVENTORY_COLLECTION, "lamp").await.unwrap().unwrap();
        assert_eq!(quantity(fields), 3);
    }

    #[tokio::test]
    async fn test_remove_missing_item_is_silent() {
        let (inventory, _) = setup_inventory();
        inventory.add_item("lamp", 2).await.unwrap();

        let items = inventory.remove_one_unit("chair").await.unwrap();

        assert_eq!(items, vec![Item::new("lamp", 2)]);
    }

    #[tokio::test]
    async fn test_widget_round_trip() {
        let (inventory, _) = setup_inventory();

        let items = inventory.add_item("Widget", 3).await.unwrap();

        let mut view = InventoryView::new();
        view.replace_items(items);
        let rows: Vec<String> = view.items().iter().map(Item::row_label).collect();
        assert_eq!(rows, vec!["Widget — Quantity: 3"]);
    }

    #[tokio::test]
    async fn test_apple_scenario() {
        let (inventory, _) = setup_inventory();
        assert!(inventory.refresh().await.unwrap().is_empty());

        inventory.add_item("apple", 2).await.unwrap();
        let items = inventory.add_item("apple", 3).await.unwrap();
        assert_eq!(items, vec![Item::new("apple", 5)]);

        let items = inventory.remove_one_unit("apple").await.unwrap();
        assert_eq!(items, vec![Item::new("apple", 4)]);

        let items = inventory.remove_entire_item("apple").await;
        assert_eq!(items, Some(vec![]));
    }

    #[tokio::test]
    async fn test_search_scenarios_against_refreshed_list() {
        let (inventory, _) = setup_inventory();
        let mut view = InventoryView::new();
        view.replace_items(inventory.add_item("apple", 5).await.unwrap());

        view.search_dialog.open();
        view.search_dialog.term = "Apple".to_string();
        match view.search() {
            SearchOutcome::Found { item, ticket } => {
                assert_eq!(item, Item::new("apple", 5));
                assert!(view.is_highlighted("apple"));
                assert!(view.expire_highlight(ticket));
                assert!(!view.is_highlighted("apple"));
            }
            SearchOutcome::NotFound => panic!("apple should be found"),
        }

        view.search_dialog.open();
        view.search_dialog.term = "banana".to_string();
        assert_eq!(view.search(), SearchOutcome::NotFound);
        assert!(view.not_found_open);
        assert_eq!(view.items(), [Item::new("apple", 5)].as_slice());
    }

    #[tokio::test]
    async fn test_failed_delete_is_swallowed() {
        let (inventory, store) = setup_inventory();
        inventory.add_item("apple", 5).await.unwrap();

        store.set_offline(true);
        assert_eq!(inventory.remove_entire_item("apple").await, None);

        store.set_offline(false);
        assert_eq!(inventory.refresh().await.unwrap(), vec![Item::new("apple", 5)]);
    }

    #[tokio::test]
    async fn test_other_operations_propagate_store_errors() {
        let (inventory, store) = setup_inventory();
        store.set_offline(true);

        assert!(inventory.refresh().await.is_err());
        assert!(inventory.add_item("apple", 1).await.is_err());
        assert!(inventory.remove_one_unit("apple").await.is_err());
    }

    #[tokio::test]
    async fn test_refresh_skips_malformed_records() {
        let (inventory, store) = setup_inventory();
        inventory.add_item("good", 2).await.unwrap();

        let mut bad = Fields::new();
        bad.insert("quantity".to_string(), FieldValue::String("lots".to_string()));
        store.seed(INVENTORY_COLLECTION, "bad", bad);

        assert_eq!(inventory.refresh().await.unwrap(), vec![Item::new("good", 2)]);
        assert!(inventory.add_item("bad", 1).await.is_err());
    }

    /// Store whose every call yields once before touching the data,
    /// like a network round trip would.
    #[derive(Clone, Default)]
    struct YieldingStore(MemoryStore);

    #[async_trait(?Send)]
    impl DocumentStore for YieldingStore {
        async fn list_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
            tokio::task::yield_now().await;
            self.0.list_all(collection).await
        }

        async fn get(&self, collection: &str, key: &str) -> StoreResult<Option<Fields>> {
            tokio::task::yield_now().await;
            self.0.get(collection, key).await
        }

        async fn put(&self, collection: &str, key: &str, fields: &Fields) -> StoreResult<()> {
            tokio::task::yield_now().await;
            self.0.put(collection, key, fields).await
        }

        async fn delete(&self, collection: &str, key: &str) -> StoreResult<()> {
            tokio::task::yield_now().await;
            self.0.delete(collection, key).await
        }
    }

    #[tokio::test]
    async fn test_overlapping_removals_can_lose_a_decrement() {
        let store = YieldingStore::default();
        let inventory = Inventory::new(store.clone());
        inventory.add_item("apple", 5).await.unwrap();

        // Both calls read 5 before either write lands
        let (first, second) = tokio::join!(
            inventory.remove_one_unit("apple"),
            inventory.remove_one_unit("apple"),
        );
        first.unwrap();
        second.unwrap();

        let fields = store.0.get(INVENTORY_COLLECTION, "apple").await.unwrap().unwrap();
        assert_eq!(quantity(fields), 4);
    }
}

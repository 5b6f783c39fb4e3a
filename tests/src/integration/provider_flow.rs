//! # Sort Order Provider Flow
//!
//! Tests that a provider, the in-memory store and the sorter work together:
//!
//! 1. **Refresh**: entries are loaded, sorted and their indices persisted
//! 2. **Re-refresh**: changed rules produce a new persisted order
//! 3. **Concurrent refresh**: serialised, every caller sees the same order
//! 4. **Isolation**: sort orders never see each other's entries

#[cfg(test)]
mod tests {
    use lo_sorter::{
        InMemorySortOrderStore, ProviderError, Rule, SortError, SortIndex, SortOrderId,
        SortOrderProvider, SortableEntry, Sorter, SorterConfig,
    };
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const REDMOD: SortOrderId = SortOrderId(1);
    const COLLECTION: SortOrderId = SortOrderId(2);

    fn module(name: &str, rules: Vec<Rule<String>>) -> SortableEntry<String> {
        SortableEntry::new(name.to_string()).with_rules(rules)
    }

    fn after(name: &str) -> Rule<String> {
        Rule::After(name.to_string())
    }

    fn before(name: &str) -> Rule<String> {
        Rule::Before(name.to_string())
    }

    async fn seeded_store() -> Arc<InMemorySortOrderStore<String>> {
        let store = Arc::new(InMemorySortOrderStore::new());
        store
            .insert_entries(
                REDMOD,
                vec![
                    module("weather_overhaul", vec![after("core_patch")]),
                    module("core_patch", vec![Rule::First]),
                    module("hud_tweaks", vec![before("weather_overhaul")]),
                    module("archive_xl", vec![after("core_patch")]),
                ],
            )
            .await;
        store
            .insert_entries(COLLECTION, vec![module("solo", vec![])])
            .await;
        store
    }

    // =============================================================================
    // INTEGRATION TESTS: PROVIDER → SORTER → STORE
    // =============================================================================

    #[tokio::test]
    async fn test_refresh_persists_rule_order() {
        lo_telemetry::init_test_logging();
        let provider = SortOrderProvider::new(seeded_store().await);

        let indices = provider.refresh_sort_order::<String>(REDMOD).await.unwrap();
        let positions: Vec<usize> = indices.iter().map(|(_, i)| i.value()).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);

        let order = provider.current_sorting::<String>(REDMOD).await.unwrap();
        assert_eq!(
            order,
            vec!["core_patch", "archive_xl", "hud_tweaks", "weather_overhaul"]
        );
    }

    #[tokio::test]
    async fn test_rule_change_reorders_on_refresh() {
        let store = seeded_store().await;
        let provider = SortOrderProvider::new(store.clone());
        provider.refresh_sort_order::<String>(REDMOD).await.unwrap();

        store
            .insert_entries(
                REDMOD,
                vec![
                    module("weather_overhaul", vec![after("core_patch")]),
                    module("core_patch", vec![Rule::First]),
                    module("hud_tweaks", vec![before("weather_overhaul")]),
                    module("archive_xl", vec![after("weather_overhaul")]),
                ],
            )
            .await;
        provider.refresh_sort_order::<String>(REDMOD).await.unwrap();

        let order = provider.current_sorting::<String>(REDMOD).await.unwrap();
        assert_eq!(
            order,
            vec!["core_patch", "hud_tweaks", "weather_overhaul", "archive_xl"]
        );
    }

    #[tokio::test]
    async fn test_concurrent_refreshes_agree() {
        let provider = Arc::new(SortOrderProvider::new(seeded_store().await));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider = provider.clone();
                tokio::spawn(async move { provider.refresh_sort_order::<String>(REDMOD).await })
            })
            .collect();

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap().unwrap());
        }

        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[tokio::test]
    async fn test_sort_orders_are_isolated() {
        let provider = SortOrderProvider::new(seeded_store().await);
        provider.refresh_sort_order::<String>(REDMOD).await.unwrap();

        let indices = provider.refresh_sort_order::<String>(COLLECTION).await.unwrap();
        assert_eq!(indices, vec![("solo".to_string(), SortIndex(0))]);
        assert_eq!(
            provider.current_sorting::<String>(REDMOD).await.unwrap().len(),
            4
        );
    }

    #[tokio::test]
    async fn test_strict_provider_rejects_dangling_rule() {
        let store = seeded_store().await;
        store
            .insert_entries(COLLECTION, vec![module("orphan", vec![after("gone")])])
            .await;

        let sorter = Sorter::with_config(SorterConfig {
            validate_references: true,
            ..Default::default()
        });
        let provider = SortOrderProvider::with_sorter(store, sorter);

        let result = provider.refresh_sort_order::<String>(COLLECTION).await;
        assert!(matches!(
            result,
            Err(ProviderError::Sort(SortError::UnknownDependency { .. }))
        ));
    }
}

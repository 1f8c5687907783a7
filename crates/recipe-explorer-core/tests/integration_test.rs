use recipe_explorer_core::{
    load_favorite_recipes, source_from_config, CatalogSource, ExploreConfig, FavoritesBadge,
    FavoritesConfig, FavoritesStore, Presentation, QueryStateController, RecipeDetailController,
    RecipeSource, SearchFilters, SourceConfig, UrlParams,
};
use recipe_explorer_store::SqliteStorage;
use std::sync::Arc;
use tempfile::TempDir;

fn local_source() -> Arc<dyn RecipeSource> {
    Arc::new(CatalogSource::sample())
}

fn open_store(dir: &TempDir, config: &FavoritesConfig) -> FavoritesStore {
    let storage = SqliteStorage::open(dir.path().join("storage.db")).unwrap();
    FavoritesStore::load(Box::new(storage), config)
}

#[tokio::test]
async fn test_search_through_configured_local_source() {
    let config = SourceConfig {
        search_latency_ms: 0,
        detail_latency_ms: 0,
        ..SourceConfig::default()
    };
    let source = source_from_config(&config).unwrap();

    let filters = SearchFilters::none()
        .with_tags(["vegetarian", "italian"])
        .with_min_rating(4.0);
    let result = source.search_recipes("", &filters, 1, 12).await.unwrap();

    assert!(result.total > 0);
    assert!(result.items.iter().all(|r| r.rating >= 4.0
        && r.tags.iter().any(|t| t == "vegetarian")
        && r.tags.iter().any(|t| t == "italian")));
}

#[tokio::test(start_paused = true)]
async fn test_explore_session_from_deep_link_to_next_page() {
    let mut explore = QueryStateController::new(local_source(), &ExploreConfig::default());

    explore.on_url_change(&UrlParams::parse("?ref=newsletter")).await;
    assert_eq!(explore.presentation(), Presentation::Results);
    assert_eq!(explore.recipes().len(), 12);
    assert!(!explore.has_interacted());

    let pager = explore.pagination();
    let next = pager.next().unwrap();
    explore.change_page(next);
    assert_eq!(explore.url().to_string(), "?page=2&ref=newsletter");
    assert!(explore.run_pending().await);

    assert_eq!(explore.recipes().len(), 6);
    assert!(!explore.pagination().has_next());

    explore.submit_search("zzz-no-such-dish");
    explore.run_pending().await;
    assert_eq!(explore.presentation(), Presentation::NoResults);
    assert!(explore.show_empty_state());
    assert!(explore.data_dump().starts_with(recipe_explorer_core::dump::EMPTY_DUMP_NOTICE));
}

#[test]
fn test_favorites_survive_restart_in_sqlite() {
    let dir = TempDir::new().unwrap();
    let config = FavoritesConfig::default();

    {
        let mut store = open_store(&dir, &config);
        assert!(store.toggle_favorite("5"));
        assert!(store.toggle_favorite("11"));
        assert!(!store.toggle_favorite("5"));
    }

    let mut store = open_store(&dir, &config);
    assert_eq!(store.favorites(), vec!["11".to_string()]);

    let badge = FavoritesBadge::attach(&mut store);
    assert_eq!(badge.count(), 1);
}

#[test]
fn test_seed_applies_only_to_fresh_database() {
    let dir = TempDir::new().unwrap();
    let config = FavoritesConfig {
        seed: vec!["1".to_string(), "2".to_string()],
        ..FavoritesConfig::default()
    };

    let mut store = open_store(&dir, &config);
    assert_eq!(store.count(), 2);
    store.toggle_favorite("1");
    store.toggle_favorite("2");
    drop(store);

    // An empty persisted list is still a persisted list
    let store = open_store(&dir, &config);
    assert_eq!(store.count(), 0);
}

#[tokio::test]
async fn test_detail_favorite_shows_up_on_favorites_page() {
    let dir = TempDir::new().unwrap();
    let mut favorites = open_store(&dir, &FavoritesConfig::default());
    let source = local_source();

    let mut detail = RecipeDetailController::new(Arc::clone(&source));
    detail.load("6").await;
    assert_eq!(detail.toggle_favorite(&mut favorites), Some(true));

    detail.load("does-not-exist").await;
    assert_eq!(detail.toggle_favorite(&mut favorites), None);

    let listed = load_favorite_recipes(source.as_ref(), &favorites).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "6");
}

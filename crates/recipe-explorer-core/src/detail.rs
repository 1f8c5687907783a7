// Recipe detail page and the favorites listing
use crate::favorites::FavoritesStore;
use crate::models::{RecipeDetail, RecipeSummary};
use crate::search::RecipeSource;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

pub const NOT_FOUND_MESSAGE: &str = "Recipe not found.";
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load recipe. Please try again.";

/// Loads one recipe by id and tracks what the detail page should show
pub struct RecipeDetailController {
    source: Arc<dyn RecipeSource>,
    id: Option<String>,
    recipe: Option<RecipeDetail>,
    loading: bool,
    error: Option<String>,
}

impl RecipeDetailController {
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        Self {
            source,
            id: None,
            recipe: None,
            loading: false,
            error: None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn recipe(&self) -> Option<&RecipeDetail> {
        self.recipe.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch `id`; a missing recipe and a failed request both end in an
    /// error message with no recipe shown
    pub async fn load(&mut self, id: &str) {
        self.id = Some(id.to_string());
        self.recipe = None;
        self.error = None;
        self.loading = true;

        let source = Arc::clone(&self.source);
        match source.get_recipe(id).await {
            Ok(Some(recipe)) => {
                debug!("Loaded recipe {}", id);
                self.recipe = Some(recipe);
            }
            Ok(None) => {
                debug!("Recipe {} not found", id);
                self.error = Some(NOT_FOUND_MESSAGE.to_string());
            }
            Err(e) => {
                warn!("Failed to load recipe {}: {}", id, e);
                self.error = Some(DETAIL_ERROR_MESSAGE.to_string());
            }
        }

        self.loading = false;
    }

    /// Retry the last id; false if nothing was ever requested
    pub async fn reload(&mut self) -> bool {
        match self.id.clone() {
            Some(id) => {
                self.load(&id).await;
                true
            }
            None => false,
        }
    }

    pub fn is_favorite(&self, favorites: &FavoritesStore) -> bool {
        self.id
            .as_deref()
            .is_some_and(|id| favorites.is_favorite(id))
    }

    /// Toggle the shown recipe; `None` when no recipe is loaded
    pub fn toggle_favorite(&self, favorites: &mut FavoritesStore) -> Option<bool> {
        let recipe = self.recipe.as_ref()?;
        Some(favorites.toggle_favorite(recipe.id()))
    }
}

/// Resolve every favorite id through `source`, concurrently
///
/// Ids the source no longer knows, or fails to load, are left out. The
/// result follows the store's id order.
pub async fn load_favorite_recipes(
    source: &dyn RecipeSource,
    favorites: &FavoritesStore,
) -> Vec<RecipeSummary> {
    let ids = favorites.favorites();
    let lookups = ids.iter().map(|id| source.get_recipe(id));
    let outcomes = join_all(lookups).await;

    ids.iter()
        .zip(outcomes)
        .filter_map(|(id, outcome)| match outcome {
            Ok(Some(recipe)) => Some(recipe.into_summary()),
            Ok(None) => {
                debug!("Favorite {} no longer exists", id);
                None
            }
            Err(e) => {
                warn!("Could not load favorite {}: {}", id, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{CatalogSource, MockRecipeSource};
    use crate::Error;
    use recipe_explorer_store::MemoryStorage;

    fn favorites_with(ids: &[&str]) -> FavoritesStore {
        let mut store = FavoritesStore::with_storage(Box::new(MemoryStorage::new()));
        for id in ids {
            store.toggle_favorite(id);
        }
        store
    }

    #[tokio::test]
    async fn test_load_existing_recipe() {
        let mut ctrl = RecipeDetailController::new(Arc::new(CatalogSource::sample()));
        ctrl.load("4").await;

        let recipe = ctrl.recipe().unwrap();
        assert_eq!(recipe.summary.title, "Spicy Chicken Tacos");
        assert!(!recipe.ingredients.is_empty());
        assert_eq!(ctrl.error(), None);
        assert!(!ctrl.is_loading());
    }

    #[tokio::test]
    async fn test_missing_recipe_reads_not_found() {
        let mut ctrl = RecipeDetailController::new(Arc::new(CatalogSource::sample()));
        ctrl.load("999").await;

        assert!(ctrl.recipe().is_none());
        assert_eq!(ctrl.error(), Some(NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn test_transport_error_then_reload_recovers() {
        let mut mock = MockRecipeSource::new();
        let mut calls = 0;
        mock.expect_get_recipe()
            .withf(|id| id == "2")
            .times(2)
            .returning(move |id| {
                calls += 1;
                if calls == 1 {
                    Err(Error::TransportError("timeout".into()))
                } else {
                    let catalog = crate::catalog::RecipeCatalog::sample();
                    Ok(catalog.get_by_id(id))
                }
            });
        let mut ctrl = RecipeDetailController::new(Arc::new(mock));

        ctrl.load("2").await;
        assert_eq!(ctrl.error(), Some(DETAIL_ERROR_MESSAGE));
        assert!(ctrl.recipe().is_none());

        assert!(ctrl.reload().await);
        assert_eq!(ctrl.error(), None);
        assert_eq!(ctrl.recipe().map(|r| r.id()), Some("2"));
    }

    #[tokio::test]
    async fn test_reload_without_id_is_noop() {
        let mut ctrl = RecipeDetailController::new(Arc::new(MockRecipeSource::new()));
        assert!(!ctrl.reload().await);
    }

    #[tokio::test]
    async fn test_favorite_toggle_from_detail() {
        let mut favorites = favorites_with(&[]);
        let mut ctrl = RecipeDetailController::new(Arc::new(CatalogSource::sample()));
        assert_eq!(ctrl.toggle_favorite(&mut favorites), None);

        ctrl.load("7").await;
        assert!(!ctrl.is_favorite(&favorites));
        assert_eq!(ctrl.toggle_favorite(&mut favorites), Some(true));
        assert!(ctrl.is_favorite(&favorites));
        assert_eq!(ctrl.toggle_favorite(&mut favorites), Some(false));
        assert_eq!(favorites.count(), 0);
    }

    #[tokio::test]
    async fn test_favorites_page_drops_unknown_ids() {
        let favorites = favorites_with(&["9", "404", "12", "1"]);
        let source = CatalogSource::sample();

        let recipes = load_favorite_recipes(&source, &favorites).await;
        let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "12", "9"]);
    }

    #[tokio::test]
    async fn test_favorites_page_skips_failed_lookups() {
        let mut mock = MockRecipeSource::new();
        mock.expect_get_recipe().returning(|id| {
            if id == "3" {
                Err(Error::TransportError("boom".into()))
            } else {
                Ok(crate::catalog::RecipeCatalog::sample().get_by_id(id))
            }
        });
        let favorites = favorites_with(&["3", "5"]);

        let recipes = load_favorite_recipes(&mock, &favorites).await;
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "5");
    }
}

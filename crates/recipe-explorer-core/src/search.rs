use crate::{
    catalog::RecipeCatalog,
    config::{Backend, SourceConfig},
    models::{RecipeDetail, SearchFilters, SearchResult},
    providers::RemoteSource,
    Result,
};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Where recipes come from - the in-memory catalog or a remote API
///
/// Controllers only ever talk to this trait, so swapping the backing is a
/// startup decision and nothing else.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search_recipes(
        &self,
        query: &str,
        filters: &SearchFilters,
        page: u32,
        page_size: usize,
    ) -> Result<SearchResult>;

    /// `Ok(None)` when no recipe has this id
    async fn get_recipe(&self, id: &str) -> Result<Option<RecipeDetail>>;
}

/// RecipeSource over the in-memory catalog
///
/// Can pretend to be a network with a fixed delay per call, which keeps
/// loading states visible during demos.
pub struct CatalogSource {
    catalog: Arc<RecipeCatalog>,
    search_latency: Duration,
    detail_latency: Duration,
}

impl CatalogSource {
    pub fn new(catalog: Arc<RecipeCatalog>) -> Self {
        Self {
            catalog,
            search_latency: Duration::ZERO,
            detail_latency: Duration::ZERO,
        }
    }

    pub fn sample() -> Self {
        Self::new(Arc::new(RecipeCatalog::sample()))
    }

    pub fn with_latency(mut self, search: Duration, detail: Duration) -> Self {
        self.search_latency = search;
        self.detail_latency = detail;
        self
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[async_trait]
impl RecipeSource for CatalogSource {
    async fn search_recipes(
        &self,
        query: &str,
        filters: &SearchFilters,
        page: u32,
        page_size: usize,
    ) -> Result<SearchResult> {
        let result = self.catalog.search(query, filters, page, page_size);
        simulate_latency(self.search_latency).await;
        debug!(
            "Catalog search {:?} page {} -> {} of {}",
            query,
            page,
            result.items.len(),
            result.total
        );
        Ok(result)
    }

    async fn get_recipe(&self, id: &str) -> Result<Option<RecipeDetail>> {
        let found = self.catalog.get_by_id(id);
        simulate_latency(self.detail_latency).await;
        Ok(found)
    }
}

/// Turns every backend failure into a graceful-empty answer
///
/// Callers behind this wrapper never see an error: a failed search is an
/// empty page, a failed lookup is "not found". The failure is logged.
pub struct GracefulSource<S> {
    inner: S,
}

impl<S: RecipeSource> GracefulSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S: RecipeSource> RecipeSource for GracefulSource<S> {
    async fn search_recipes(
        &self,
        query: &str,
        filters: &SearchFilters,
        page: u32,
        page_size: usize,
    ) -> Result<SearchResult> {
        match self
            .inner
            .search_recipes(query, filters, page, page_size)
            .await
        {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!("Search for {:?} failed, returning empty page: {}", query, e);
                Ok(SearchResult::empty(page, page_size))
            }
        }
    }

    async fn get_recipe(&self, id: &str) -> Result<Option<RecipeDetail>> {
        match self.inner.get_recipe(id).await {
            Ok(found) => Ok(found),
            Err(e) => {
                warn!("Lookup of recipe {} failed, treating as missing: {}", id, e);
                Ok(None)
            }
        }
    }
}

/// Pick the backing once, at startup
pub fn source_from_config(config: &SourceConfig) -> Result<Arc<dyn RecipeSource>> {
    match config.backend {
        Backend::Local => {
            let source = CatalogSource::sample().with_latency(
                Duration::from_millis(config.search_latency_ms),
                Duration::from_millis(config.detail_latency_ms),
            );
            Ok(Arc::new(source))
        }
        Backend::Remote => {
            let remote = RemoteSource::new(
                &config.api_url,
                Duration::from_secs(config.timeout_secs),
            )?;
            Ok(Arc::new(GracefulSource::new(remote)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[tokio::test]
    async fn test_catalog_source_wraps_catalog() {
        let source = CatalogSource::sample();
        let result = source
            .search_recipes("vegan", &SearchFilters::none(), 1, 12)
            .await
            .unwrap();
        assert_eq!(result.total, 4);

        assert!(source.get_recipe("2").await.unwrap().is_some());
        assert!(source.get_recipe("nope").await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_catalog_source_simulated_latency() {
        let source = CatalogSource::sample()
            .with_latency(Duration::from_millis(300), Duration::from_millis(220));

        let started = tokio::time::Instant::now();
        source
            .search_recipes("", &SearchFilters::none(), 1, 12)
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test]
    async fn test_graceful_source_absorbs_search_failure() {
        let mut mock = MockRecipeSource::new();
        mock.expect_search_recipes()
            .returning(|_, _, _, _| Err(Error::TransportError("connection reset".into())));

        let source = GracefulSource::new(mock);
        let result = source
            .search_recipes("pasta", &SearchFilters::none(), 2, 12)
            .await
            .unwrap();

        assert_eq!(result, SearchResult::empty(2, 12));
    }

    #[tokio::test]
    async fn test_graceful_source_absorbs_lookup_failure() {
        let mut mock = MockRecipeSource::new();
        mock.expect_get_recipe()
            .returning(|_| Err(Error::TransportError("timeout".into())));

        let source = GracefulSource::new(mock);
        assert!(source.get_recipe("1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_graceful_source_passes_success_through() {
        let mut mock = MockRecipeSource::new();
        mock.expect_search_recipes()
            .withf(|q, _, page, size| q == "soup" && *page == 1 && *size == 12)
            .times(1)
            .returning(|_, _, _, _| {
                Ok(SearchResult {
                    items: Vec::new(),
                    total: 7,
                    page: 1,
                    page_size: 12,
                })
            });

        let source = GracefulSource::new(mock);
        let result = source
            .search_recipes("soup", &SearchFilters::none(), 1, 12)
            .await
            .unwrap();
        assert_eq!(result.total, 7);
    }

    #[tokio::test]
    async fn test_local_backend_from_config() {
        let config = SourceConfig {
            search_latency_ms: 0,
            detail_latency_ms: 0,
            ..SourceConfig::default()
        };
        let source = source_from_config(&config).unwrap();
        let result = source
            .search_recipes("", &SearchFilters::none(), 1, 12)
            .await
            .unwrap();
        assert_eq!(result.total, 18);
    }
}

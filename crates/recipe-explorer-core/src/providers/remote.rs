// Remote provider - bridges the HTTP API client with the RecipeSource trait
use async_trait::async_trait;
use recipe_explorer_api::{ApiRecipe, ApiSearchPage, ApiSearchParams, RecipeApiClient};
use std::time::Duration;

use crate::{
    models::{RecipeDetail, RecipeSummary, SearchFilters, SearchResult},
    search::RecipeSource,
    Result,
};

/// Wrapper around RecipeApiClient that implements RecipeSource
///
/// Errors propagate as transport errors; wrap in `GracefulSource` to get
/// graceful-empty results instead.
pub struct RemoteSource {
    client: RecipeApiClient,
}

impl RemoteSource {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: RecipeApiClient::with_timeout(api_url, timeout)?,
        })
    }

    pub fn from_client(client: RecipeApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecipeSource for RemoteSource {
    async fn search_recipes(
        &self,
        query: &str,
        filters: &SearchFilters,
        page: u32,
        page_size: usize,
    ) -> Result<SearchResult> {
        let params = ApiSearchParams {
            query: query.to_string(),
            tags: filters.tags.clone().unwrap_or_default(),
            min_rating: filters.min_rating,
            page,
            page_size,
        };

        let response = self.client.search_recipes(&params).await?;
        Ok(page_to_result(response, page, page_size))
    }

    async fn get_recipe(&self, id: &str) -> Result<Option<RecipeDetail>> {
        let recipe = self.client.get_recipe(id).await?;
        Ok(recipe.map(api_to_detail))
    }
}

/// Convert an API page to our SearchResult, dropping detail-only fields
///
/// The page echoes what was asked for, and never holds more than
/// `page_size` items whatever the server sent.
fn page_to_result(response: ApiSearchPage, page: u32, page_size: usize) -> SearchResult {
    let mut items: Vec<RecipeSummary> = response.items.into_iter().map(api_to_summary).collect();
    items.truncate(page_size);

    SearchResult {
        items,
        total: response.total,
        page,
        page_size,
    }
}

fn api_to_summary(api: ApiRecipe) -> RecipeSummary {
    RecipeSummary {
        id: api.id,
        title: api.title,
        image_url: api.image_url,
        tags: api.tags,
        rating: api.rating.clamp(0.0, 5.0),
    }
}

/// Convert an API recipe to our internal RecipeDetail model
fn api_to_detail(api: ApiRecipe) -> RecipeDetail {
    let ApiRecipe {
        id,
        title,
        image_url,
        tags,
        rating,
        description,
        ingredients,
        steps,
        prep_time_minutes,
        cook_time_minutes,
        servings,
        author,
    } = api;

    RecipeDetail {
        summary: RecipeSummary {
            id,
            title,
            image_url,
            tags,
            rating: rating.clamp(0.0, 5.0),
        },
        description: description.unwrap_or_default(),
        ingredients,
        steps,
        prep_time_minutes,
        cook_time_minutes,
        servings: servings.filter(|s| *s > 0),
        author,
    }
}

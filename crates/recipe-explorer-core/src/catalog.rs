//! In-memory recipe catalog with text/tag/rating filtering and pagination
//!
//! The catalog is read-only after construction. Every search is a pure
//! function of its arguments and the catalog contents.

use crate::models::{RecipeDetail, RecipeSummary, SearchFilters, SearchResult};
use crate::sample_data::sample_recipes;
use std::collections::HashMap;

/// A compiled query: the three predicates a recipe must pass
///
/// The predicates are independent of each other, so the order they run in
/// never changes which recipes survive.
pub struct RecipeSearch<'a> {
    needle: String,
    filters: &'a SearchFilters,
}

impl<'a> RecipeSearch<'a> {
    pub fn new(query: &str, filters: &'a SearchFilters) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
            filters,
        }
    }

    /// Substring match on title, description, or any tag
    pub fn matches_text(&self, recipe: &RecipeDetail) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        recipe.summary.title.to_lowercase().contains(&self.needle)
            || recipe.description.to_lowercase().contains(&self.needle)
            || recipe
                .summary
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(&self.needle))
    }

    /// Every requested tag must be present
    pub fn has_all_tags(&self, recipe: &RecipeDetail) -> bool {
        match &self.filters.tags {
            Some(wanted) if !wanted.is_empty() => wanted
                .iter()
                .all(|tag| recipe.summary.tags.iter().any(|t| t == tag)),
            _ => true,
        }
    }

    pub fn meets_rating(&self, recipe: &RecipeDetail) -> bool {
        match self.filters.min_rating {
            Some(min) => recipe.summary.rating >= min,
            None => true,
        }
    }

    pub fn matches(&self, recipe: &RecipeDetail) -> bool {
        self.matches_text(recipe) && self.has_all_tags(recipe) && self.meets_rating(recipe)
    }
}

pub struct RecipeCatalog {
    recipes: Vec<RecipeDetail>,
    by_id: HashMap<String, usize>,
}

impl RecipeCatalog {
    /// Build a catalog; later duplicates of an id are ignored
    pub fn new(recipes: Vec<RecipeDetail>) -> Self {
        let mut by_id = HashMap::with_capacity(recipes.len());
        let mut unique = Vec::with_capacity(recipes.len());

        for recipe in recipes {
            if by_id.contains_key(recipe.id()) {
                continue;
            }
            by_id.insert(recipe.id().to_string(), unique.len());
            unique.push(recipe);
        }

        Self {
            recipes: unique,
            by_id,
        }
    }

    /// The 18-recipe sample catalog
    pub fn sample() -> Self {
        Self::new(sample_recipes())
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Filter, count, then slice one page
    ///
    /// Page numbers are 1-based; page 0 is read as page 1. A start index
    /// past the end yields no items but still reports the full `total`.
    pub fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
        page: u32,
        page_size: usize,
    ) -> SearchResult {
        let search = RecipeSearch::new(query, filters);
        let matches: Vec<&RecipeDetail> =
            self.recipes.iter().filter(|r| search.matches(r)).collect();

        let total = matches.len();
        let page = page.max(1);
        let start = (page as usize - 1).saturating_mul(page_size);

        let items = matches
            .into_iter()
            .skip(start)
            .take(page_size)
            .map(|r| r.summary().clone())
            .collect();

        SearchResult {
            items,
            total,
            page,
            page_size,
        }
    }

    /// Point lookup; `None` just means "no such recipe"
    pub fn get_by_id(&self, id: &str) -> Option<RecipeDetail> {
        self.by_id.get(id).map(|&idx| self.recipes[idx].clone())
    }

    pub fn summaries(&self) -> Vec<RecipeSummary> {
        self.recipes.iter().map(|r| r.summary().clone()).collect()
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(result: &SearchResult) -> Vec<&str> {
        result.items.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_pages_through_everything() {
        let catalog = RecipeCatalog::sample();
        assert_eq!(catalog.len(), 18);

        let page1 = catalog.search("", &SearchFilters::none(), 1, 12);
        assert_eq!(page1.items.len(), 12);
        assert_eq!(page1.total, 18);

        let page2 = catalog.search("", &SearchFilters::none(), 2, 12);
        assert_eq!(page2.items.len(), 6);
        assert_eq!(page2.total, 18);
        assert_eq!(page2.items[0].id, "13");
    }

    #[test]
    fn test_vegan_query_matches_title_description_or_tags() {
        let catalog = RecipeCatalog::sample();
        let result = catalog.search("vegan", &SearchFilters::none(), 1, 12);
        assert_eq!(ids(&result), vec!["3", "9", "12", "17"]);
        assert_eq!(result.total, 4);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let catalog = RecipeCatalog::sample();
        let loud = catalog.search("  VeGaN ", &SearchFilters::none(), 1, 12);
        let quiet = catalog.search("vegan", &SearchFilters::none(), 1, 12);
        assert_eq!(loud.items, quiet.items);
    }

    #[test]
    fn test_query_matches_description_only() {
        let catalog = RecipeCatalog::sample();
        // "tortillas" only appears in the tacos description
        let result = catalog.search("tortillas", &SearchFilters::none(), 1, 12);
        assert_eq!(ids(&result), vec!["4"]);
    }

    #[test]
    fn test_tags_use_and_semantics() {
        let catalog = RecipeCatalog::sample();
        let filters = SearchFilters::none().with_tags(["vegetarian", "italian"]);
        let result = catalog.search("", &filters, 1, 12);
        assert_eq!(ids(&result), vec!["2", "5", "14"]);

        let impossible = SearchFilters::none().with_tags(["vegan", "bbq"]);
        assert_eq!(catalog.search("", &impossible, 1, 12).total, 0);
    }

    #[test]
    fn test_min_rating_is_inclusive() {
        let catalog = RecipeCatalog::sample();
        let filters = SearchFilters::none().with_min_rating(4.5);
        let result = catalog.search("", &filters, 1, 18);
        let found = ids(&result);

        assert!(found.contains(&"1")); // 4.6
        assert!(found.contains(&"4")); // exactly 4.5
        assert!(!found.contains(&"3")); // 4.2
        assert!(result.items.iter().all(|r| r.rating >= 4.5));
    }

    #[test]
    fn test_predicate_order_does_not_matter() {
        let orders = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        let cases = [
            ("", SearchFilters::none()),
            ("a", SearchFilters::none().with_min_rating(4.2)),
            ("salad", SearchFilters::none().with_tags(["fresh"])),
            (
                "chicken",
                SearchFilters::none().with_tags(["curry"]).with_min_rating(4.5),
            ),
        ];

        let recipes = sample_recipes();
        for (query, filters) in &cases {
            let search = RecipeSearch::new(query, filters);
            let check = |idx: usize, recipe: &RecipeDetail| match idx {
                0 => search.matches_text(recipe),
                1 => search.has_all_tags(recipe),
                _ => search.meets_rating(recipe),
            };

            let mut outcomes = Vec::new();
            for order in &orders {
                let mut survivors: Vec<&RecipeDetail> = recipes.iter().collect();
                for &idx in order {
                    survivors.retain(|r| check(idx, r));
                }
                let ids: Vec<&str> = survivors.iter().map(|r| r.id()).collect();
                outcomes.push(ids);
            }
            assert!(outcomes.windows(2).all(|w| w[0] == w[1]), "query {query:?}");

            let combined: Vec<&str> = recipes
                .iter()
                .filter(|r| search.matches(r))
                .map(|r| r.id())
                .collect();
            assert_eq!(outcomes[0], combined);
        }
    }

    #[test]
    fn test_out_of_range_page_is_empty_not_an_error() {
        let catalog = RecipeCatalog::sample();
        let result = catalog.search("", &SearchFilters::none(), 3, 12);
        assert!(result.items.is_empty());
        assert_eq!(result.total, 18);
        assert_eq!(result.page, 3);
    }

    #[test]
    fn test_page_length_formula() {
        let catalog = RecipeCatalog::sample();
        for page_size in 1..=20usize {
            for page in 1..=20u32 {
                let result = catalog.search("", &SearchFilters::none(), page, page_size);
                let skipped = (page as usize - 1) * page_size;
                let expected = page_size.min(result.total.saturating_sub(skipped));
                assert_eq!(result.items.len(), expected, "page {page} size {page_size}");
            }
        }
    }

    #[test]
    fn test_page_zero_reads_as_first_page() {
        let catalog = RecipeCatalog::sample();
        let zero = catalog.search("", &SearchFilters::none(), 0, 5);
        let one = catalog.search("", &SearchFilters::none(), 1, 5);
        assert_eq!(zero, one);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = RecipeCatalog::sample();
        let pasta = catalog.get_by_id("2").unwrap();
        assert_eq!(pasta.summary.title, "Creamy Mushroom Pasta");
        assert_eq!(pasta.ingredients.len(), 6);
        assert!(catalog.get_by_id("999").is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut recipes = sample_recipes();
        let mut dup = recipes[0].clone();
        dup.summary.title = "Impostor".to_string();
        recipes.push(dup);

        let catalog = RecipeCatalog::new(recipes);
        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.get_by_id("1").unwrap().summary.title, "Lemon Herb Grilled Salmon");
    }
}

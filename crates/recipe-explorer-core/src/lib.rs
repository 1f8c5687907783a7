// Recipe explorer core: catalog, sources, favorites, and page state
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod detail;
pub mod dump;
pub mod error;
pub mod explore;
pub mod favorites;
pub mod models;
pub mod pagination;
pub mod providers;
pub mod query;
pub mod sample_data;
pub mod search;
pub mod session;

pub use catalog::RecipeCatalog;
pub use config::{Backend, Config, ExploreConfig, FavoritesConfig, SourceConfig};
pub use detail::{load_favorite_recipes, RecipeDetailController};
pub use error::Error;
pub use explore::{ExploreEvent, Presentation, QueryStateController};
pub use favorites::{FavoriteSet, FavoritesBadge, FavoritesStore, SubscriptionId};
pub use models::{RecipeDetail, RecipeSummary, SearchFilters, SearchResult};
pub use pagination::Pagination;
pub use query::{QueryKey, QueryState, UrlParams};
pub use search::{source_from_config, CatalogSource, GracefulSource, RecipeSource};
pub use session::SessionFlag;

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;

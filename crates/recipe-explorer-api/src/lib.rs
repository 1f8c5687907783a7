// HTTP client for a remote recipe API
pub mod client;
pub mod retry;

// Re-export common types
pub use client::{ApiError, ApiRecipe, ApiSearchPage, ApiSearchParams, RecipeApiClient};
pub use retry::RetryConfig;

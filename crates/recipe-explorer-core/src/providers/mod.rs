// Remote backings for RecipeSource
pub mod remote;

pub use remote::RemoteSource;

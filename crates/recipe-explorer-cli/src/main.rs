use anyhow::Context;
use clap::Parser;
use recipe_explorer_core::{
    load_favorite_recipes, source_from_config, Config, ExploreEvent, FavoritesBadge,
    FavoritesStore, Pagination, QueryStateController, RecipeDetailController, RecipeSource,
    SearchFilters, SessionFlag, UrlParams,
};
use recipe_explorer_store::{MemoryStorage, SqliteStorage};
use std::io::BufRead;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod output;

#[derive(Parser)]
#[command(name = "recipe-explorer")]
#[command(version, about = "Browse, search, and favorite recipes", long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true, env = "RECIPE_EXPLORER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Search recipes by text, tags, and rating
    Search {
        /// Matched against title, description, and tags
        #[arg(default_value = "")]
        query: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Required tag, repeat for more (all must match)
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        min_rating: Option<f64>,
    },
    /// Show one recipe
    Show {
        id: String,
    },
    /// Add or remove a recipe from favorites
    Favorite {
        id: String,
    },
    /// List favorite recipes
    Favorites,
    /// Explore page: state from a URL query string, or events from stdin
    Explore {
        /// e.g. "q=pasta&page=2"
        #[arg(long, default_value = "")]
        url: String,
        /// Print the raw data dump under the results
        #[arg(long)]
        show_data: bool,
        /// Read events from stdin: text searches, ":page N", ":refresh"
        #[arg(long)]
        script: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_explorer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };
    let source = source_from_config(&config.source)?;

    match cli.command {
        Some(Commands::Search {
            query,
            page,
            tags,
            min_rating,
        }) => {
            tracing::info!("Searching for: {:?}", query);
            let mut filters = SearchFilters::none();
            if !tags.is_empty() {
                filters = filters.with_tags(tags);
            }
            if let Some(min_rating) = min_rating {
                filters = filters.with_min_rating(min_rating);
            }

            let result = source
                .search_recipes(&query, &filters, page, config.explore.page_size)
                .await?;
            let favorites = open_favorites(&config)?;
            output::print_results(&result.items, &favorites);
            output::print_pager(&Pagination::new(
                page,
                config.explore.page_size,
                result.total,
            ));
        }
        Some(Commands::Show { id }) => {
            let favorites = open_favorites(&config)?;
            let mut detail = RecipeDetailController::new(source);
            detail.load(&id).await;

            match (detail.recipe(), detail.error()) {
                (Some(recipe), _) => output::print_detail(recipe, detail.is_favorite(&favorites)),
                (None, Some(message)) => println!("{}", message),
                (None, None) => {}
            }
        }
        Some(Commands::Favorite { id }) => {
            let mut favorites = open_favorites(&config)?;
            let badge = FavoritesBadge::attach(&mut favorites);
            let title = source
                .get_recipe(&id)
                .await?
                .map(|r| r.summary.title)
                .unwrap_or_else(|| format!("Recipe {}", id));

            if favorites.toggle_favorite(&id) {
                println!("♥ Added {} to favorites", title);
            } else {
                println!("♡ Removed {} from favorites", title);
            }
            println!("Favorites: {}", badge.count());
        }
        Some(Commands::Favorites) => {
            let favorites = open_favorites(&config)?;
            let recipes = load_favorite_recipes(source.as_ref(), &favorites).await;

            if recipes.is_empty() {
                println!("No favorites yet. Use `recipe-explorer favorite <ID>` to add one.");
            } else {
                println!("Favorites ({})", favorites.count());
                output::print_results(&recipes, &favorites);
            }
        }
        Some(Commands::Explore {
            url,
            show_data,
            script,
        }) => {
            let favorites = open_favorites(&config)?;
            let mut show_dump = SessionFlag::show_data(Box::new(MemoryStorage::new()));
            if show_data {
                show_dump.set(true);
            }

            let mut explore = QueryStateController::new(source, &config.explore);
            explore.on_url_change(&UrlParams::parse(&url)).await;

            if script {
                let (tx, mut rx) = mpsc::unbounded_channel();
                // stdin is blocking; feed the event loop from its own thread
                let reader = tokio::task::spawn_blocking(move || read_events(tx));
                explore.drive(&mut rx).await;
                reader.await??;
            }

            output::print_explore(&explore, &favorites, show_dump.is_on());
        }
        None => {
            println!("No command specified. Try --help");
        }
    }

    Ok(())
}

fn open_favorites(config: &Config) -> anyhow::Result<FavoritesStore> {
    let path = config.favorites.database_path()?;
    let storage = SqliteStorage::open(&path)
        .with_context(|| format!("Failed to open favorites database at {}", path.display()))?;
    Ok(FavoritesStore::load(Box::new(storage), &config.favorites))
}

fn read_events(tx: mpsc::UnboundedSender<ExploreEvent>) -> anyhow::Result<()> {
    for line in std::io::stdin().lock().lines() {
        let Some(event) = parse_event(&line?) else {
            continue;
        };
        if tx.send(event).is_err() {
            break;
        }
    }
    Ok(())
}

fn parse_event(line: &str) -> Option<ExploreEvent> {
    let line = line.trim_end();
    if let Some(page) = line.strip_prefix(":page ") {
        return match page.trim().parse() {
            Ok(page) => Some(ExploreEvent::PageChange(page)),
            Err(_) => {
                eprintln!("Not a page number: {}", page.trim());
                None
            }
        };
    }

    if let Some(query_string) = line.strip_prefix(":url ") {
        return Some(ExploreEvent::UrlChanged(UrlParams::parse(query_string)));
    }

    if line == ":refresh" {
        Some(ExploreEvent::Refresh)
    } else {
        Some(ExploreEvent::Search(line.to_string()))
    }
}

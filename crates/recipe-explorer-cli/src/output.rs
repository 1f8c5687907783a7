// Plain-text rendering for the terminal
use recipe_explorer_core::{
    FavoritesStore, Pagination, Presentation, QueryStateController, RecipeDetail, RecipeSummary,
};

pub fn print_results(recipes: &[RecipeSummary], favorites: &FavoritesStore) {
    for recipe in recipes {
        println!("{}", card_line(recipe, favorites.is_favorite(&recipe.id)));
    }
}

pub fn print_pager(pager: &Pagination) {
    if let Some(line) = pager_line(pager) {
        println!();
        println!("{}", line);
    }
}

pub fn print_detail(recipe: &RecipeDetail, favorite: bool) {
    let heart = if favorite { "♥" } else { "♡" };
    println!("{} {}  ★ {:.1}", heart, recipe.summary.title, recipe.summary.rating);
    if !recipe.summary.tags.is_empty() {
        println!("{}", recipe.summary.tags.join(" · "));
    }
    println!();
    println!("{}", recipe.description);

    let mut facts = Vec::new();
    if let Some(prep) = recipe.prep_time_minutes {
        facts.push(format!("prep {}m", prep));
    }
    if let Some(cook) = recipe.cook_time_minutes {
        facts.push(format!("cook {}m", cook));
    }
    if let Some(servings) = recipe.servings {
        facts.push(format!("serves {}", servings));
    }
    if let Some(author) = &recipe.author {
        facts.push(format!("by {}", author));
    }
    if !facts.is_empty() {
        println!("{}", facts.join(", "));
    }

    println!();
    println!("Ingredients");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }

    println!();
    println!("Steps");
    for (n, step) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", n + 1, step);
    }
}

pub fn print_explore(explore: &QueryStateController, favorites: &FavoritesStore, show_data: bool) {
    println!("Explore{}  ({} favorites)", explore.url(), favorites.count());
    println!();

    match explore.presentation() {
        Presentation::Loading => println!("Loading..."),
        Presentation::Error(message) => println!("{}", message),
        Presentation::Results => {
            print_results(explore.recipes(), favorites);
            print_pager(&explore.pagination());
        }
        Presentation::NoResults => println!("No recipes found. Try a different search."),
        Presentation::Initial => println!("Search for a recipe to get started."),
    }

    if show_data {
        println!();
        println!("{}", explore.data_dump());
    }
}

fn card_line(recipe: &RecipeSummary, favorite: bool) -> String {
    let heart = if favorite { "♥" } else { " " };
    let mut line = format!("{} {:>3}  {}  ★ {:.1}", heart, recipe.id, recipe.title, recipe.rating);
    if !recipe.tags.is_empty() {
        line.push_str(&format!("  [{}]", recipe.tags.join(", ")));
    }
    line
}

fn pager_line(pager: &Pagination) -> Option<String> {
    if !pager.is_visible() {
        return None;
    }

    let pages: Vec<String> = pager
        .pages()
        .into_iter()
        .map(|p| if p == pager.page { format!("[{}]", p) } else { p.to_string() })
        .collect();
    let prev = if pager.has_prev() { "‹ prev" } else { "" };
    let next = if pager.has_next() { "next ›" } else { "" };

    Some(format!("{} {} {}", prev, pages.join(" "), next).trim().to_string())
}

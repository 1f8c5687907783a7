// Pretty-printed data view behind the "show data" toggle
use crate::models::RecipeSummary;
use serde_json::json;

pub const EMPTY_DUMP_NOTICE: &str = "No results to display. Showing sample structure.";

/// JSON of the current items, or a notice plus the item shape when empty
pub fn data_dump(recipes: &[RecipeSummary]) -> String {
    if recipes.is_empty() {
        return sample_structure();
    }

    serde_json::to_string_pretty(recipes).unwrap_or_else(|_| sample_structure())
}

fn sample_structure() -> String {
    let sample = json!([{
        "id": "string",
        "title": "string",
        "imageUrl": "string (URL)",
        "tags": ["string", "string"],
        "rating": "number (0-5)"
    }]);

    let body = serde_json::to_string_pretty(&sample).unwrap_or_default();
    format!("{}\n{}", EMPTY_DUMP_NOTICE, body)
}

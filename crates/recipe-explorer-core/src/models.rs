use serde::{Deserialize, Serialize};

/// Card-sized view of a recipe - what search results carry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub tags: Vec<String>,
    /// 0.0 ..= 5.0
    pub rating: f64,
}

/// Full recipe for the detail page
///
/// The summary is embedded rather than copied, so a detail can never
/// disagree with its own summary projection. On the wire the summary
/// fields sit at the top level next to the detail fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub summary: RecipeSummary,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl RecipeDetail {
    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn summary(&self) -> &RecipeSummary {
        &self.summary
    }

    pub fn into_summary(self) -> RecipeSummary {
        self.summary
    }

    /// Prep plus cook time, when both are known
    pub fn total_time_minutes(&self) -> Option<u32> {
        Some(self.prep_time_minutes? + self.cook_time_minutes?)
    }
}

impl AsRef<RecipeSummary> for RecipeSummary {
    fn as_ref(&self) -> &RecipeSummary {
        self
    }
}

impl AsRef<RecipeSummary> for RecipeDetail {
    fn as_ref(&self) -> &RecipeSummary {
        &self.summary
    }
}

/// Optional narrowing on top of the text query
///
/// The default value (both fields `None`) means "no filters".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// A recipe must carry every one of these tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Inclusive lower bound on rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
}

impl SearchFilters {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    /// True when applying these filters cannot drop anything
    pub fn is_empty(&self) -> bool {
        self.tags.as_ref().map_or(true, |t| t.is_empty()) && self.min_rating.is_none()
    }
}

/// One page of a filtered recipe list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub items: Vec<RecipeSummary>,
    /// Matches before slicing
    pub total: usize,
    pub page: u32,
    pub page_size: usize,
}

impl SearchResult {
    /// The graceful-empty result: valid, just nothing in it
    pub fn empty(page: u32, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> RecipeDetail {
        RecipeDetail {
            summary: RecipeSummary {
                id: "2".to_string(),
                title: "Creamy Mushroom Pasta".to_string(),
                image_url: "img".to_string(),
                tags: vec!["pasta".to_string()],
                rating: 4.8,
            },
            description: "Rich".to_string(),
            ingredients: vec!["pasta".to_string()],
            steps: vec!["cook".to_string()],
            prep_time_minutes: Some(10),
            cook_time_minutes: Some(20),
            servings: Some(2),
            author: None,
        }
    }

    #[test]
    fn test_detail_wire_format_is_flat_camel_case() {
        let json = serde_json::to_value(detail()).unwrap();
        assert_eq!(json["id"], "2");
        assert_eq!(json["imageUrl"], "img");
        assert_eq!(json["prepTimeMinutes"], 10);
        assert!(json.get("summary").is_none());
        assert!(json.get("author").is_none());

        let back: RecipeDetail = serde_json::from_value(json).unwrap();
        assert_eq!(back, detail());
    }

    #[test]
    fn test_total_time() {
        let mut d = detail();
        assert_eq!(d.total_time_minutes(), Some(30));
        d.cook_time_minutes = None;
        assert_eq!(d.total_time_minutes(), None);
    }

    #[test]
    fn test_filters_emptiness() {
        assert!(SearchFilters::none().is_empty());
        assert!(SearchFilters::none().with_tags(Vec::<String>::new()).is_empty());
        assert!(!SearchFilters::none().with_tags(["vegan"]).is_empty());
        assert!(!SearchFilters::none().with_min_rating(4.0).is_empty());
    }
}

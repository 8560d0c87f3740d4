use crate::macros::setter;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;
use tower_api_client::{Request, RequestData};

// Common

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecipeType {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RecipeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeType::Veg => "veg",
            RecipeType::NonVeg => "non-veg",
            RecipeType::Unknown => "unknown",
        }
    }
}

impl Display for RecipeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(rename = "type", default)]
    pub recipe_type: RecipeType,
    #[serde(default)]
    pub matched_ingredients: Vec<String>,
    #[serde(default)]
    pub missing_ingredients: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    pub nutrition: Option<Nutrition>,
    pub healthy_alternative: Option<String>,
    pub image: Option<String>,
}

impl Recipe {
    pub fn calories(&self) -> Option<f64> {
        self.nutrition.as_ref().and_then(|n| n.calories)
    }

    /// The healthy alternative, if the backend sent a non-blank one.
    pub fn healthy_alternative(&self) -> Option<&str> {
        self.healthy_alternative
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn has_matches(&self) -> bool {
        !self.matched_ingredients.is_empty()
    }
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct SuggestMeal {
    ingredients: String,
}

impl SuggestMeal {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(ingredients: String);
}

impl Request for SuggestMeal {
    type Data = Self;
    type Response = SuggestionsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/suggest_meal".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

// Responses

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    #[serde(default)]
    pub suggestions: Vec<Recipe>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_meal_query() {
        let req = SuggestMeal::new().ingredients("egg, tomato & basil");
        assert_eq!(req.endpoint(), "/suggest_meal");
        match req.data() {
            RequestData::Query(query) => {
                assert_eq!(query.ingredients, "egg, tomato & basil");
            }
            _ => panic!("suggest_meal must send its input as a query"),
        }
    }

    #[test]
    fn test_recipe_decodes_full_payload() {
        let json = r#"{
            "suggestions": [{
                "name": "Tomato Omelette",
                "type": "veg",
                "ingredients": ["eggs", "tomato", "salt"],
                "matched_ingredients": ["eggs", "tomato"],
                "missing_ingredients": ["salt"],
                "steps": ["Whisk eggs", "Cook with tomato"],
                "nutrition": {"calories": 320},
                "healthy_alternative": "Use egg whites",
                "image": "https://example.com/placeholder.png"
            }]
        }"#;

        let response: SuggestionsResponse = serde_json::from_str(json).unwrap();
        let recipe = &response.suggestions[0];
        assert_eq!(recipe.recipe_type, RecipeType::Veg);
        assert_eq!(recipe.calories(), Some(320.0));
        assert_eq!(recipe.healthy_alternative(), Some("Use egg whites"));
        assert!(recipe.has_matches());
    }

    #[test]
    fn test_recipe_decodes_sparse_payload() {
        let json = r#"{"name": "Mystery Stew", "type": "unknown", "nutrition": {}, "healthy_alternative": ""}"#;

        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.recipe_type, RecipeType::Unknown);
        assert_eq!(recipe.calories(), None);
        assert_eq!(recipe.healthy_alternative(), None);
        assert!(recipe.steps.is_empty());
        assert!(!recipe.has_matches());
    }

    #[test]
    fn test_recipe_type_non_veg_and_other() {
        let non_veg: RecipeType = serde_json::from_str(r#""non-veg""#).unwrap();
        let vegan: RecipeType = serde_json::from_str(r#""vegan""#).unwrap();
        assert_eq!(non_veg, RecipeType::NonVeg);
        assert_eq!(vegan, RecipeType::Unknown);
        assert_eq!(non_veg.to_string(), "non-veg");
    }
}

use crate::endpoints::{
    images::GenerateImage,
    meals::SuggestMeal,
    pantry::{AddToPantry, GetPantry},
};

pub struct MealRepository;

impl MealRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn suggest(&self, ingredients: impl Into<String>) -> SuggestMeal {
        SuggestMeal::new().ingredients(ingredients.into())
    }
}

pub struct ImageRepository;

impl ImageRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn generate(&self, recipe_name: impl Into<String>) -> GenerateImage {
        GenerateImage::new().recipe_name(recipe_name.into())
    }
}

pub struct PantryRepository;

impl PantryRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn add(&self, ingredient: impl Into<String>) -> AddToPantry {
        AddToPantry::new(ingredient)
    }

    pub fn list(&self) -> GetPantry {
        GetPantry::new()
    }
}

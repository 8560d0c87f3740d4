use crate::events::DataEvent;
use mealmind_api::{Client, MealMindApiError, Request, Url};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs backend requests and reports results as [`DataEvent`]s
#[derive(Clone)]
pub struct DataLoader {
    pub api_client: Arc<Client>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(api_client: Arc<Client>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self {
            api_client,
            data_tx,
        }
    }

    /// Fetch recipe suggestions for the (already trimmed) ingredient text
    pub async fn suggest_meals(&self, request_id: u64, ingredients: String) {
        tracing::info!("Fetching suggestions for '{}'", ingredients);

        let req = Request::meals().suggest(ingredients.clone());
        match self.api_client.send(req).await {
            Ok(response) => {
                tracing::debug!(
                    "Loaded {} suggestions from API",
                    response.suggestions.len()
                );
                let _ = self.data_tx.send(DataEvent::SuggestionsLoaded {
                    request_id,
                    ingredients,
                    suggestions: response.suggestions,
                });
            }
            Err(e) => {
                tracing::error!("Error fetching recipes: {}", e);
                let _ = self.data_tx.send(DataEvent::SuggestionsFailed {
                    request_id,
                    error: e.to_string(),
                });
            }
        }
    }

    /// Generate the image for the recipe shown in the modal
    pub async fn generate_image(&self, generation: u64, recipe_name: String) {
        tracing::debug!("Generating image for '{}'", recipe_name);

        let req = Request::images().generate(recipe_name.clone());
        match self.api_client.send(req).await {
            Ok(response) => {
                if let Some(error) = response.error.as_deref() {
                    tracing::warn!("Image service reported an error for '{}': {}", recipe_name, error);
                }

                match response.image() {
                    Some(image) => {
                        let _ = self.data_tx.send(DataEvent::ImageGenerated {
                            generation,
                            image: image.to_string(),
                        });
                    }
                    None => {
                        let _ = self.data_tx.send(DataEvent::ImageFailed {
                            generation,
                            error: "no image returned".to_string(),
                        });
                    }
                }
            }
            Err(e) => {
                tracing::error!("Image generation failed for '{}': {}", recipe_name, e);
                let _ = self.data_tx.send(DataEvent::ImageFailed {
                    generation,
                    error: e.to_string(),
                });
            }
        }
    }

    pub async fn load_pantry(&self) {
        tracing::info!("Loading pantry");

        let req = Request::pantry().list();
        match self.api_client.send(req).await {
            Ok(response) => {
                tracing::debug!("Loaded {} pantry items", response.ingredients.len());
                let _ = self.data_tx.send(DataEvent::PantryLoaded {
                    ingredients: response.ingredients,
                });
            }
            Err(e) => {
                tracing::error!("Error loading pantry: {}", e);
                let _ = self.data_tx.send(DataEvent::PantryLoadFailed {
                    error: e.to_string(),
                });
            }
        }
    }

    /// Post each ingredient to the pantry in order.
    ///
    /// Failures are logged and the remaining ingredients are still sent; no
    /// event is reported back.
    pub async fn save_to_pantry(&self, ingredients: Vec<String>) {
        for ingredient in ingredients {
            let req = Request::pantry().add(ingredient.clone());
            match self.api_client.send(req).await {
                Ok(_) => tracing::debug!("Saved '{}' to pantry", ingredient),
                Err(e) => tracing::error!("Error saving '{}' to pantry: {}", ingredient, e),
            }
        }
    }

    pub fn pantry_download_url(&self) -> Result<Url, MealMindApiError> {
        self.api_client.download_pantry_url()
    }
}

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Method, Request, RequestData};

pub const DOWNLOAD_PANTRY_PATH: &str = "download_pantry";

// Requests

#[derive(Debug, Clone, Serialize)]
pub struct AddToPantry {
    ingredient: String,
}

impl AddToPantry {
    pub fn new(ingredient: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
        }
    }
}

impl Request for AddToPantry {
    type Data = Self;
    type Response = PantryResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/add_to_pantry".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Json(self)
    }
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct GetPantry;

impl GetPantry {
    pub fn new() -> Self {
        Self
    }
}

impl Request for GetPantry {
    type Data = Self;
    type Response = PantryResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/get_pantry".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Empty
    }
}

// Responses

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryResponse {
    #[serde(default)]
    pub ingredients: Vec<String>,
}

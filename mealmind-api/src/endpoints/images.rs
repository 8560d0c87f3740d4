use crate::macros::setter;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Request, RequestData};

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct GenerateImage {
    recipe_name: String,
}

impl GenerateImage {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(recipe_name: String);
}

impl Request for GenerateImage {
    type Data = Self;
    type Response = ImageResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/generate_image".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

// Responses

/// `image` is a displayable URL or a data URI. The backend falls back to its
/// own placeholder and sets `error` when generation fails.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    pub image: Option<String>,
    pub error: Option<String>,
}

impl ImageResponse {
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.trim().is_empty())
    }
}

pub mod endpoints;
mod error;
mod macros;
pub mod repositories;

pub use crate::error::{ErrorDetail, MealMindApiError};
use repositories::*;
pub use reqwest::Url;
use tower_api_client::{Client as ApiClient, Request as ApiRequest};

pub const DEFAULT_BASE_URL: &str = "https://meal-mind-5n51.onrender.com";

pub struct Client {
    inner: ApiClient,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            inner: ApiClient::new(base_url),
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, MealMindApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }

    /// Absolute URL of the pantry export.
    ///
    /// The backend streams the file as an attachment, so this is handed to a
    /// browser rather than sent through [`Client::send`].
    pub fn download_pantry_url(&self) -> Result<Url, MealMindApiError> {
        let base = Url::parse(&format!("{}/", self.base_url))
            .map_err(|e| MealMindApiError::InvalidUrl(e.to_string()))?;
        base.join(endpoints::pantry::DOWNLOAD_PANTRY_PATH)
            .map_err(|e| MealMindApiError::InvalidUrl(e.to_string()))
    }
}

pub struct Request;

impl Request {
    pub fn new() -> Self {
        Self {}
    }

    pub fn meals() -> MealRepository {
        MealRepository::new()
    }

    pub fn images() -> ImageRepository {
        ImageRepository::new()
    }

    pub fn pantry() -> PantryRepository {
        PantryRepository::new()
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_pantry_url_joins_base() {
        let client = Client::new("https://meal-mind.example.com");
        let url = client.download_pantry_url().unwrap();
        assert_eq!(url.as_str(), "https://meal-mind.example.com/download_pantry");
    }

    #[test]
    fn test_download_pantry_url_keeps_base_path() {
        let client = Client::new("http://localhost:10000/api/");
        assert_eq!(client.base_url(), "http://localhost:10000/api");

        let url = client.download_pantry_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:10000/api/download_pantry");
    }

    #[test]
    fn test_download_pantry_url_rejects_garbage() {
        let client = Client::new("not a url");
        assert!(matches!(
            client.download_pantry_url(),
            Err(MealMindApiError::InvalidUrl(_))
        ));
    }
}

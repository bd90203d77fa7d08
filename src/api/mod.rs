//! REST API Client
//!
//! Frontend bindings to the marketplace backend, organized by domain.

mod category;
mod item;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{Category, Item, SearchResponse};

pub use item::search_items;

/// Read access to the backend catalog.
///
/// Futures are not `Send`: in the browser everything runs on one event loop.
#[async_trait(?Send)]
pub trait ItemSource {
    /// Full item collection, newest first
    async fn list_items(&self) -> Result<Vec<Item>, ApiError>;

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Server-side category search
    async fn search_category(&self, category: &str) -> Result<SearchResponse, ApiError>;
}

/// HTTP implementation of [`ItemSource`]
#[derive(Clone, Debug)]
pub struct HttpItemSource {
    client: reqwest::Client,
    base: String,
}

impl HttpItemSource {
    /// `base` is prepended to every `/api/...` path
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base taken from `window.location.origin`; reqwest needs absolute URLs
    pub fn same_origin() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::new(origin)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("[API] GET {}", url);

        let request = self.client.get(&url);
        // Send the session cookie along, as the backend requires login
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl ItemSource for HttpItemSource {
    async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        self.fetch_items().await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.fetch_categories().await
    }

    async fn search_category(&self, category: &str) -> Result<SearchResponse, ApiError> {
        self.fetch_category_search(category).await
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory [`ItemSource`] for tests

    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Default)]
    pub struct FakeSource {
        pub list_responses: RefCell<VecDeque<Result<Vec<Item>, ApiError>>>,
        pub categories: Vec<Category>,
        pub search: SearchResponse,
        pub list_calls: RefCell<usize>,
    }

    impl FakeSource {
        pub fn with_lists(responses: Vec<Result<Vec<Item>, ApiError>>) -> Self {
            Self {
                list_responses: RefCell::new(responses.into()),
                ..Default::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl ItemSource for FakeSource {
        async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
            *self.list_calls.borrow_mut() += 1;
            self.list_responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
            Ok(self.categories.clone())
        }

        async fn search_category(&self, _category: &str) -> Result<SearchResponse, ApiError> {
            Ok(self.search.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base() {
        assert_eq!(HttpItemSource::new("").url("/api/items/list_items"), "/api/items/list_items");
        assert_eq!(
            HttpItemSource::new("https://shop.test/").url("/api/items/list_items"),
            "https://shop.test/api/items/list_items"
        );
    }
}

//! Item Endpoints

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{HttpItemSource, ItemSource};
use crate::error::ApiError;
use crate::models::{Item, SearchResponse};
use crate::search::filter_by_title;

impl HttpItemSource {
    pub async fn fetch_items(&self) -> Result<Vec<Item>, ApiError> {
        self.get_json("/api/items/list_items").await
    }

    pub async fn fetch_category_search(&self, category: &str) -> Result<SearchResponse, ApiError> {
        let encoded = utf8_percent_encode(category, NON_ALPHANUMERIC);
        self.get_json(&format!("/api/items/search?category={}", encoded)).await
    }
}

/// Search by category, falling back to a title match over all items
/// when the category search finds nothing. An empty term finds nothing.
pub async fn search_items(source: &dyn ItemSource, term: &str) -> Result<Vec<Item>, ApiError> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(Vec::new());
    }

    let response = source.search_category(term).await?;
    if response.item_count > 0 {
        return Ok(response.items);
    }

    log::debug!("[SEARCH] no category hits for {:?}, filtering titles", term);
    let all = source.list_items().await?;
    Ok(filter_by_title(&all, term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeSource;
    use crate::models::make_item;

    #[tokio::test]
    async fn test_search_uses_category_hits() {
        let hit = make_item(3, "Guitar", "100", "2024-01-01T00:00:00");
        let source = FakeSource {
            search: SearchResponse { item_count: 1, items: vec![hit.clone()] },
            ..Default::default()
        };

        let found = search_items(&source, "Music").await.expect("search");
        assert_eq!(found, vec![hit]);
        assert_eq!(*source.list_calls.borrow(), 0);
    }

    #[tokio::test]
    async fn test_search_falls_back_to_titles() {
        let source = FakeSource::with_lists(vec![Ok(vec![
            make_item(1, "Red Bicycle", "50", "2024-01-01T00:00:00"),
            make_item(2, "Lamp", "10", "2024-01-02T00:00:00"),
            make_item(3, "bicycle helmet", "20", "2024-01-03T00:00:00"),
        ])]);

        let found = search_items(&source, "  BICYCLE ").await.expect("search");
        let ids: Vec<u32> = found.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_search_propagates_errors() {
        let source = FakeSource::with_lists(vec![Err(ApiError::Status(500))]);
        let err = search_items(&source, "lamp").await.unwrap_err();
        assert_eq!(err, ApiError::Status(500));
    }

    #[tokio::test]
    async fn test_empty_term() {
        let source = FakeSource::default();
        assert!(search_items(&source, "   ").await.expect("search").is_empty());
    }
}

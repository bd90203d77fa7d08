//! Category Endpoints

use super::HttpItemSource;
use crate::error::ApiError;
use crate::models::{Category, CategoryList};

impl HttpItemSource {
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let list: CategoryList = self.get_json("/api/items/categories").await?;
        Ok(list.categories)
    }
}

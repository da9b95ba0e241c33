//! Category catalog endpoint.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::CategoryDto;
use async_trait::async_trait;
use std::sync::Arc;

/// Category operations the application core depends on.
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// `GET /categories`
    async fn list(&self) -> Result<Vec<CategoryDto>, ApiError>;
}

/// Wire-backed category API.
#[derive(Debug, Clone)]
pub struct CategoryApi {
    client: Arc<ApiClient>,
}

impl CategoryApi {
    /// Wrap a shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryService for CategoryApi {
    async fn list(&self) -> Result<Vec<CategoryDto>, ApiError> {
        self.client.get_json("/categories", &[], None).await
    }
}

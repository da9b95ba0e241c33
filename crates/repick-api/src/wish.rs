//! Wishlist ("pick") endpoints.
//!
//! `add_like`/`remove_like` are idempotent set operations server-side;
//! the toggle workflow relies on any failure (non-2xx or transport) to
//! trigger its rollback.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::ProductListResponseDto;
use async_trait::async_trait;
use repick_core::ProductId;
use std::sync::Arc;

/// Wishlist operations the application core depends on.
#[async_trait]
pub trait WishService: Send + Sync {
    /// Mark a product liked for the current user.
    async fn add_like(&self, token: &str, product: ProductId) -> Result<(), ApiError>;

    /// Unmark a product for the current user.
    async fn remove_like(&self, token: &str, product: ProductId) -> Result<(), ApiError>;

    /// Cursor-paginated list of the current user's liked products.
    async fn my_likes(
        &self,
        token: &str,
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<ProductListResponseDto, ApiError>;

    /// Authoritative liked flag for one product.
    async fn like_status(&self, token: &str, product: ProductId) -> Result<bool, ApiError>;
}

/// Wire-backed wishlist API.
#[derive(Debug, Clone)]
pub struct WishApi {
    client: Arc<ApiClient>,
}

impl WishApi {
    /// Wrap a shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WishService for WishApi {
    async fn add_like(&self, token: &str, product: ProductId) -> Result<(), ApiError> {
        self.client
            .post_unit(&format!("/products/{product}/like"), Some(token))
            .await
    }

    async fn remove_like(&self, token: &str, product: ProductId) -> Result<(), ApiError> {
        self.client
            .delete_unit(&format!("/products/{product}/like"), Some(token))
            .await
    }

    async fn my_likes(
        &self,
        token: &str,
        cursor: Option<&str>,
        limit: u32,
    ) -> Result<ProductListResponseDto, ApiError> {
        let mut query = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        query.push(("limit", limit.to_string()));
        self.client.get_json("/me/likes", &query, Some(token)).await
    }

    async fn like_status(&self, token: &str, product: ProductId) -> Result<bool, ApiError> {
        self.client
            .get_json(&format!("/products/{product}/like-status"), &[], Some(token))
            .await
    }
}

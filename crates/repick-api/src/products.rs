//! Product catalog endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{
    AiGenerateRequest, AiGenerateResponse, ProductCreateRequest, ProductCreateResponse,
    ProductDetailDto, ProductListResponseDto, UploadFileMeta, UploadImagesResponse,
};
use async_trait::async_trait;
use repick_core::{ProductFilter, ProductId, SortBy, TradeType};
use serde::Serialize;
use std::sync::Arc;

/// Build the query for `GET /products`, omitting backend defaults.
fn list_query(cursor: Option<&str>, limit: u32, filter: &ProductFilter) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(cursor) = cursor {
        query.push(("cursor", cursor.to_string()));
    }
    if let Some(status) = filter.status {
        query.push(("status", status.code().to_string()));
    }
    if let Some(code) = &filter.category_code {
        query.push(("categoryCode", code.clone()));
    }
    if let Some(min) = filter.min_price {
        query.push(("minPrice", min.to_string()));
    }
    if let Some(max) = filter.max_price {
        query.push(("maxPrice", max.to_string()));
    }
    match filter.trade_type {
        TradeType::All => {}
        TradeType::Direct => query.push(("tradeType", "DIRECT".to_string())),
        TradeType::Delivery => query.push(("tradeType", "DELIVERY".to_string())),
    }
    if filter.sort_by != SortBy::Latest {
        query.push(("sortBy", filter.sort_by.code().to_string()));
    }
    query.push(("limit", limit.to_string()));
    query
}

/// Read-side product operations the application core depends on.
///
/// The trait is the mock seam: page controllers are tested against stub
/// implementations, the real one goes over the wire.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Cursor-paginated listing with filters.
    async fn list(
        &self,
        cursor: Option<&str>,
        limit: u32,
        token: Option<&str>,
        filter: &ProductFilter,
    ) -> Result<ProductListResponseDto, ApiError>;

    /// Full detail for one listing (bumps its view count server-side).
    async fn detail(
        &self,
        product: ProductId,
        token: Option<&str>,
    ) -> Result<ProductDetailDto, ApiError>;

    /// View-count Top-N listing.
    async fn trending(&self, token: Option<&str>) -> Result<ProductListResponseDto, ApiError>;
}

/// Wire-backed product API.
#[derive(Debug, Clone)]
pub struct ProductApi {
    client: Arc<ApiClient>,
}

impl ProductApi {
    /// Wrap a shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Explicit view-count bump.
    ///
    /// `GET /products/{id}` already bumps the count server-side, so this
    /// is only for surfaces that show a product without fetching it.
    pub async fn increase_view_count(&self, product: ProductId) -> Result<(), ApiError> {
        self.client
            .post_unit(&format!("/products/{product}/views"), None)
            .await
    }

    /// Reserve presigned upload slots for listing images.
    pub async fn prepare_upload(
        &self,
        token: &str,
        files: &[UploadFileMeta],
    ) -> Result<UploadImagesResponse, ApiError> {
        #[derive(Serialize)]
        struct Body<'a> {
            files: &'a [UploadFileMeta],
        }
        self.client
            .post_json("/api/upload/images", Some(token), &Body { files })
            .await
    }

    /// Create a listing.
    pub async fn create(
        &self,
        token: &str,
        request: &ProductCreateRequest,
    ) -> Result<ProductCreateResponse, ApiError> {
        self.client.post_json("/products", Some(token), request).await
    }

    /// Generate a listing description from keywords.
    pub async fn generate_description(
        &self,
        token: &str,
        request: &AiGenerateRequest,
    ) -> Result<AiGenerateResponse, ApiError> {
        self.client
            .post_json("/api/ai/generate-description", Some(token), request)
            .await
    }
}

#[async_trait]
impl ProductService for ProductApi {
    async fn list(
        &self,
        cursor: Option<&str>,
        limit: u32,
        token: Option<&str>,
        filter: &ProductFilter,
    ) -> Result<ProductListResponseDto, ApiError> {
        let query = list_query(cursor, limit, filter);
        self.client.get_json("/products", &query, token).await
    }

    async fn detail(
        &self,
        product: ProductId,
        token: Option<&str>,
    ) -> Result<ProductDetailDto, ApiError> {
        self.client
            .get_json(&format!("/products/{product}"), &[], token)
            .await
    }

    async fn trending(&self, token: Option<&str>) -> Result<ProductListResponseDto, ApiError> {
        self.client.get_json("/products/trending", &[], token).await
    }
}

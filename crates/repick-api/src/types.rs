//! Wire DTOs for the backend's JSON surface.
//!
//! Field names follow the backend's camelCase contract; enums reuse the
//! core wire encodings where they match. `TradeTypeDto` is the one wire
//! enum with no core twin: the backend says `BOTH` where the display
//! model says `All`.

use repick_core::{CategoryId, ProductId, ProductStatus, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Trade channel as the backend encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeTypeDto {
    /// In-person handover
    Direct,
    /// Parcel delivery
    Delivery,
    /// Either channel
    Both,
}

/// Category as returned by `/categories` and embedded in products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    /// Category identifier
    pub id: CategoryId,
    /// Stable filter code, e.g. `PHOTOCARD`
    pub code: String,
    /// Human-readable name
    pub display_name: String,
}

/// Seller reference embedded in product payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerRefDto {
    /// Seller's user id
    pub id: UserId,
    /// Seller's nickname
    pub nickname: String,
}

/// One product in a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummaryDto {
    /// Listing identifier
    pub id: ProductId,
    /// Listing title
    pub title: String,
    /// Price in KRW
    pub price: u64,
    /// Sale status
    pub status: ProductStatus,
    /// Trade channel
    pub trade_type: TradeTypeDto,
    /// Thumbnail URL
    pub thumbnail_url: String,
    /// Category, when assigned
    pub category: Option<CategoryDto>,
    /// Seller, when exposed by the endpoint
    #[serde(default)]
    pub seller: Option<SellerRefDto>,
    /// ISO-8601 creation timestamp
    pub created_at: String,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the requesting user has liked this product
    pub is_liked: bool,
    /// Server-side like count
    pub like_count: u32,
}

/// Cursor-paginated product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponseDto {
    /// Page of products
    pub items: Vec<ProductSummaryDto>,
    /// Cursor for the next page; `None` means exhausted
    pub next_cursor: Option<String>,
}

/// Full product payload from `/products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailDto {
    /// Listing identifier
    pub id: ProductId,
    /// Listing title
    pub title: String,
    /// Price in KRW
    pub price: u64,
    /// Sale status
    pub status: ProductStatus,
    /// Trade channel
    pub trade_type: TradeTypeDto,
    /// Full image set
    pub image_urls: Vec<String>,
    /// Category, when assigned
    pub category: Option<CategoryDto>,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Long-form description
    pub description: String,
    /// Seller reference
    pub seller: SellerRefDto,
    /// ISO-8601 creation timestamp
    pub created_at: String,
    /// Whether the requesting user has liked this product
    pub is_liked: bool,
    /// Server-side like count
    pub like_count: u32,
}

// ============================================================================
// Auth
// ============================================================================

/// `POST /auth/signup` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    /// Account email
    pub email: String,
    /// Account password (min 8 chars)
    pub password: String,
    /// Display nickname (max 30 chars)
    pub nickname: String,
}

/// `POST /auth/login` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Token pair issued on login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Bearer token for authenticated requests
    pub access_token: String,
    /// Refresh token, when the backend issues one
    pub refresh_token: Option<String>,
    /// Token scheme, normally `Bearer`
    pub token_type: String,
}

/// User profile from `/me` and signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User identifier
    pub id: UserId,
    /// Account email
    pub email: String,
    /// Display nickname
    pub nickname: String,
    /// Avatar URL, when set
    pub profile_image_url: Option<String>,
}

// ============================================================================
// Listing creation
// ============================================================================

/// Metadata for one file in an upload-preparation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFileMeta {
    /// Original file name
    pub file_name: String,
    /// MIME type
    pub content_type: String,
    /// Size in bytes
    pub size: u64,
}

/// One presigned upload slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSlotDto {
    /// Key to reference the image in a create request
    pub image_key: String,
    /// Presigned PUT URL
    pub upload_url: String,
    /// Headers the upload must carry
    #[serde(default)]
    pub required_headers: HashMap<String, String>,
}

/// Response to `POST /api/upload/images`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadImagesResponse {
    /// One slot per requested file, in order
    pub items: Vec<UploadSlotDto>,
}

/// `POST /products` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreateRequest {
    /// Listing title
    pub title: String,
    /// Price in KRW
    pub price: u64,
    /// Long-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category to file under
    pub category_id: CategoryId,
    /// Trade channel
    pub trade_type: TradeTypeDto,
    /// Keys of previously uploaded images
    pub image_keys: Vec<String>,
    /// Search tags
    pub tags: Vec<String>,
}

/// Response to `POST /products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreateResponse {
    /// Identifier of the created listing
    pub product_id: ProductId,
}

/// `POST /api/ai/generate-description` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiGenerateRequest {
    /// Seller-provided keywords
    pub keywords: String,
    /// Category display name for tone
    pub category: String,
}

/// Response to `POST /api/ai/generate-description`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiGenerateResponse {
    /// Generated listing description
    pub generated_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_round_trips_backend_shape() {
        let json = r#"{
            "id": 42,
            "title": "장원영 포카",
            "price": 15000,
            "status": "SELLING",
            "tradeType": "BOTH",
            "thumbnailUrl": "https://img.example.com/42.jpg",
            "category": {"id": 3, "code": "PHOTOCARD", "displayName": "포토카드"},
            "seller": {"id": 7, "nickname": "체리"},
            "createdAt": "2025-06-15T21:00:00",
            "tags": ["아이브"],
            "isLiked": false,
            "likeCount": 10
        }"#;

        let dto: ProductSummaryDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, ProductId(42));
        assert_eq!(dto.trade_type, TradeTypeDto::Both);
        assert_eq!(dto.like_count, 10);
        assert_eq!(dto.category.as_ref().unwrap().code, "PHOTOCARD");
    }

    #[test]
    fn test_summary_tolerates_missing_optionals() {
        let json = r#"{
            "id": 1,
            "title": "t",
            "price": 1000,
            "status": "SOLD",
            "tradeType": "DIRECT",
            "thumbnailUrl": "u",
            "category": null,
            "createdAt": "2025-01-01T00:00:00Z",
            "isLiked": true,
            "likeCount": 0
        }"#;

        let dto: ProductSummaryDto = serde_json::from_str(json).unwrap();
        assert!(dto.seller.is_none());
        assert!(dto.tags.is_empty());
        assert!(dto.is_liked);
    }

    #[test]
    fn test_list_response_cursor() {
        let json = r#"{"items": [], "nextCursor": null}"#;
        let dto: ProductListResponseDto = serde_json::from_str(json).unwrap();
        assert!(dto.next_cursor.is_none());
    }

    #[test]
    fn test_create_request_skips_empty_description() {
        let request = ProductCreateRequest {
            title: "t".into(),
            price: 1,
            description: None,
            category_id: CategoryId(1),
            trade_type: TradeTypeDto::Delivery,
            image_keys: vec![],
            tags: vec![],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("description"));
        assert!(json.contains("\"tradeType\":\"DELIVERY\""));
    }
}

//! # Product Domain Model
//!
//! The catalog types every surface renders: listing status, trade channel,
//! sort orders, the list filter, and the [`Product`] display model that
//! backend summaries and details are mapped into.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Sale status of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// Listed and available
    #[default]
    Selling,
    /// Reserved for a buyer
    Reserved,
    /// Sold and closed
    Sold,
}

impl ProductStatus {
    /// Display label for status badges.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Selling => "판매중",
            Self::Reserved => "예약중",
            Self::Sold => "판매완료",
        }
    }

    /// Whether the listing can still be bought.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Selling | Self::Reserved)
    }

    /// Wire code sent as the `status` query parameter.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Selling => "SELLING",
            Self::Reserved => "RESERVED",
            Self::Sold => "SOLD",
        }
    }
}

/// How the seller is willing to hand the item over.
///
/// `All` means both in-person and parcel; the backend encodes that as
/// `BOTH` on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    /// In-person handover
    Direct,
    /// Parcel delivery
    Delivery,
    /// Either channel
    #[default]
    All,
}

impl TradeType {
    /// Display label for filter chips.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Direct => "직거래",
            Self::Delivery => "택배거래",
            Self::All => "전체",
        }
    }
}

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    /// Newest first (backend default)
    #[default]
    Latest,
    /// Cheapest first
    LowPrice,
    /// Most expensive first
    HighPrice,
}

impl SortBy {
    /// Wire code sent as the `sortBy` query parameter.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Latest => "LATEST",
            Self::LowPrice => "LOW_PRICE",
            Self::HighPrice => "HIGH_PRICE",
        }
    }
}

/// Listing filter for the product feed.
///
/// `None` fields (and `SortBy::Latest`, `TradeType::All`) are the backend
/// defaults and are omitted from the request query entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Restrict to a sale status
    pub status: Option<ProductStatus>,
    /// Restrict to a category code
    pub category_code: Option<String>,
    /// Minimum price in KRW
    pub min_price: Option<u64>,
    /// Maximum price in KRW
    pub max_price: Option<u64>,
    /// Restrict to a trade channel (`All` means no restriction)
    pub trade_type: TradeType,
    /// Sort order
    pub sort_by: SortBy,
}

impl ProductFilter {
    /// Whether every field is at its backend default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Seller summary shown on cards and the detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Display nickname
    pub name: String,
    /// Avatar image URL
    pub avatar: String,
    /// Manner temperature (reputation score, 36.5 baseline)
    pub temperature: f32,
}

/// A product as rendered by list rows, grid cards, and the detail page.
///
/// `likes` and `is_liked` are the server-known values at fetch time; after
/// the first toggle, surfaces render the wish store's derived values
/// instead of these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Listing identifier
    pub id: ProductId,
    /// Listing title
    pub title: String,
    /// Price in KRW
    pub price: u64,
    /// Thumbnail URL
    pub image: String,
    /// Full image set for the detail slider
    pub images: Vec<String>,
    /// Category display name
    pub category: String,
    /// Sale status
    pub status: ProductStatus,
    /// Trade channel
    pub trade_type: TradeType,
    /// Like count known to the server at fetch time
    pub likes: u32,
    /// Whether the current user had liked this at fetch time
    pub is_liked: bool,
    /// Relative upload-time label, e.g. "3시간 전"
    pub uploaded_time: String,
    /// Seller summary
    pub seller: Seller,
    /// Search tags
    pub tags: Vec<String>,
    /// Long-form description (empty on summaries)
    pub description: String,
    /// Artist/group, when the seller tagged one
    pub artist: Option<String>,
}

//! Backend DTO → display-model mapping.
//!
//! Summaries and details both flatten into [`Product`]; the differences
//! (thumbnail vs. image set, empty vs. full description) are absorbed
//! here so render code never branches on payload origin.

use chrono::{DateTime, Utc};
use repick_api::types::{ProductDetailDto, ProductSummaryDto, TradeTypeDto};
use repick_core::time::relative_time_label;
use repick_core::{Product, Seller, TradeType};

/// Category shown when the seller never filed the listing.
const UNCATEGORIZED_LABEL: &str = "미분류";
/// Nickname shown when the endpoint omits the seller.
const UNKNOWN_SELLER_NAME: &str = "판매자";
/// Avatar used until profile images ship.
const DEFAULT_SELLER_AVATAR: &str = "/assets/profile_default.svg";
/// Manner-temperature baseline for new accounts.
const DEFAULT_TEMPERATURE: f32 = 36.5;

fn trade_type_from_wire(wire: TradeTypeDto) -> TradeType {
    match wire {
        TradeTypeDto::Direct => TradeType::Direct,
        TradeTypeDto::Delivery => TradeType::Delivery,
        TradeTypeDto::Both => TradeType::All,
    }
}

fn seller_placeholder(nickname: Option<&str>) -> Seller {
    Seller {
        name: nickname.unwrap_or(UNKNOWN_SELLER_NAME).to_string(),
        avatar: DEFAULT_SELLER_AVATAR.to_string(),
        temperature: DEFAULT_TEMPERATURE,
    }
}

/// Map one listing summary. `now` is caller-supplied so relative-time
/// labels are deterministic under test.
#[must_use]
pub fn product_from_summary(dto: &ProductSummaryDto, now: DateTime<Utc>) -> Product {
    Product {
        id: dto.id,
        title: dto.title.clone(),
        price: dto.price,
        image: dto.thumbnail_url.clone(),
        images: vec![dto.thumbnail_url.clone()],
        category: dto
            .category
            .as_ref()
            .map(|c| c.display_name.clone())
            .unwrap_or_else(|| UNCATEGORIZED_LABEL.to_string()),
        status: dto.status,
        trade_type: trade_type_from_wire(dto.trade_type),
        likes: dto.like_count,
        is_liked: dto.is_liked,
        uploaded_time: relative_time_label(&dto.created_at, now),
        seller: seller_placeholder(dto.seller.as_ref().map(|s| s.nickname.as_str())),
        tags: dto.tags.clone(),
        description: String::new(),
        artist: None,
    }
}

/// Map a full detail payload.
#[must_use]
pub fn product_from_detail(dto: &ProductDetailDto, now: DateTime<Utc>) -> Product {
    Product {
        id: dto.id,
        title: dto.title.clone(),
        price: dto.price,
        image: dto.image_urls.first().cloned().unwrap_or_default(),
        images: dto.image_urls.clone(),
        category: dto
            .category
            .as_ref()
            .map(|c| c.display_name.clone())
            .unwrap_or_else(|| UNCATEGORIZED_LABEL.to_string()),
        status: dto.status,
        trade_type: trade_type_from_wire(dto.trade_type),
        likes: dto.like_count,
        is_liked: dto.is_liked,
        uploaded_time: relative_time_label(&dto.created_at, now),
        seller: seller_placeholder(Some(dto.seller.nickname.as_str())),
        tags: dto.tags.clone(),
        description: dto.description.clone(),
        artist: None,
    }
}

/// Map a page of summaries.
#[must_use]
pub fn products_from_summaries(items: &[ProductSummaryDto], now: DateTime<Utc>) -> Vec<Product> {
    items
        .iter()
        .map(|dto| product_from_summary(dto, now))
        .collect()
}

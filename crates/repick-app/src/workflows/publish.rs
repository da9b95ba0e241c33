//! Listing Publication Workflow
//!
//! Create a listing from a validated draft. Uploads themselves happen in
//! the frontend against the presigned slots; this workflow only files
//! the listing once the image keys exist.

use crate::error::AppError;
use crate::views::SessionStore;
use repick_api::types::{ProductCreateRequest, TradeTypeDto};
use repick_api::ProductApi;
use repick_core::{CategoryId, ProductId, TradeType};
use std::sync::Arc;

/// Images allowed per listing.
pub const MAX_LISTING_IMAGES: usize = 10;

/// A draft listing as the write form assembles it.
///
/// `price` of 0 means free sharing, which is a valid listing.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    /// Listing title
    pub title: String,
    /// Price in KRW (0 = free sharing)
    pub price: u64,
    /// Long-form description
    pub description: Option<String>,
    /// Category to file under
    pub category_id: CategoryId,
    /// Trade channel
    pub trade_type: TradeType,
    /// Keys of already-uploaded images
    pub image_keys: Vec<String>,
    /// Search tags
    pub tags: Vec<String>,
}

fn trade_type_to_wire(display: TradeType) -> TradeTypeDto {
    match display {
        TradeType::Direct => TradeTypeDto::Direct,
        TradeType::Delivery => TradeTypeDto::Delivery,
        TradeType::All => TradeTypeDto::Both,
    }
}

fn check_draft(draft: &ListingDraft) -> Result<(), AppError> {
    if draft.title.trim().is_empty() {
        return Err(AppError::invalid("제목을 입력해주세요."));
    }
    if draft.image_keys.len() > MAX_LISTING_IMAGES {
        return Err(AppError::invalid("사진은 최대 10장까지 올릴 수 있어요."));
    }
    Ok(())
}

/// Publish a draft, returning the new listing's id.
pub async fn publish_listing(
    products: &Arc<ProductApi>,
    session: &SessionStore,
    draft: &ListingDraft,
) -> Result<ProductId, AppError> {
    let Some(token) = session.token() else {
        return Err(AppError::LoginRequired);
    };
    check_draft(draft)?;

    let request = ProductCreateRequest {
        title: draft.title.trim().to_string(),
        price: draft.price,
        description: draft.description.clone(),
        category_id: draft.category_id,
        trade_type: trade_type_to_wire(draft.trade_type),
        image_keys: draft.image_keys.clone(),
        tags: draft.tags.clone(),
    };

    let response = products.create(&token, &request).await?;
    tracing::debug!(product = %response.product_id, "listing published");
    Ok(response.product_id)
}

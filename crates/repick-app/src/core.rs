//! # Application Core
//!
//! [`AppCore`] wires config, stores, and the wire-backed services
//! together and hands out controllers. It is the narrow surface a
//! frontend embeds; nothing else in the crate needs to be constructed by
//! hand.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::views::{SessionStore, UserProfile, WishStore};
use crate::workflows::publish::{self, ListingDraft};
use crate::workflows::{
    auth, CatalogController, DetailController, FeedController, MyLikesController, PickController,
    TrendingController,
};
use repick_api::{ApiClient, AuthApi, AuthService, CategoryApi, ProductApi, WishApi};
use repick_core::{ProductFilter, ProductId};
use std::sync::Arc;

/// The assembled application core.
///
/// Cheap to clone conceptually but handed out by reference: controllers
/// hold their own clones of the shared stores, so they stay valid for as
/// long as they live regardless of the core.
pub struct AppCore {
    config: AppConfig,
    session: SessionStore,
    wishes: WishStore,
    products: Arc<ProductApi>,
    wish_api: Arc<WishApi>,
    auth_api: Arc<dyn AuthService>,
    categories: Arc<CategoryApi>,
}

impl AppCore {
    /// Assemble a core from configuration.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let client = Arc::new(ApiClient::new(config.api_base_url.clone()));
        Self {
            session: SessionStore::new(),
            wishes: WishStore::new(),
            products: Arc::new(ProductApi::new(Arc::clone(&client))),
            wish_api: Arc::new(WishApi::new(Arc::clone(&client))),
            auth_api: Arc::new(AuthApi::new(Arc::clone(&client))),
            categories: Arc::new(CategoryApi::new(client)),
            config,
        }
    }

    /// The configuration this core was assembled from.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The shared session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The shared wish store.
    #[must_use]
    pub fn wishes(&self) -> &WishStore {
        &self.wishes
    }

    /// Direct access to the product API for write paths (listing
    /// creation, upload preparation, description generation).
    #[must_use]
    pub fn product_api(&self) -> &Arc<ProductApi> {
        &self.products
    }

    /// Pick controller for one product affordance.
    #[must_use]
    pub fn pick(
        &self,
        product_id: ProductId,
        initial_is_liked: bool,
        initial_like_count: Option<u32>,
    ) -> PickController {
        PickController::new(
            product_id,
            initial_is_liked,
            initial_like_count,
            self.wishes.clone(),
            self.session.clone(),
            self.wish_api.clone(),
        )
    }

    /// Feed controller for the product listing.
    #[must_use]
    pub fn feed(&self, filter: ProductFilter) -> FeedController {
        FeedController::new(
            self.products.clone(),
            self.session.clone(),
            self.wishes.clone(),
            filter,
            self.config.page_size,
        )
    }

    /// My-picks page controller.
    #[must_use]
    pub fn my_likes(&self) -> MyLikesController {
        MyLikesController::new(
            self.wish_api.clone(),
            self.session.clone(),
            self.wishes.clone(),
            self.config.page_size,
        )
    }

    /// Detail page controller.
    #[must_use]
    pub fn detail(&self) -> DetailController {
        DetailController::new(
            self.products.clone(),
            self.session.clone(),
            self.wishes.clone(),
        )
    }

    /// Trending rail controller.
    #[must_use]
    pub fn trending(&self) -> TrendingController {
        TrendingController::new(
            self.products.clone(),
            self.session.clone(),
            self.wishes.clone(),
            self.config.trending_limit,
        )
    }

    /// Category catalog controller.
    #[must_use]
    pub fn catalog(&self) -> CatalogController {
        CatalogController::new(self.categories.clone())
    }

    /// Create an account.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        nickname: &str,
    ) -> Result<UserProfile, AppError> {
        auth::sign_up(&self.auth_api, email, password, nickname).await
    }

    /// Sign in and populate the session store.
    pub async fn log_in(&self, email: &str, password: &str) -> Result<(), AppError> {
        auth::log_in(&self.auth_api, &self.session, email, password).await
    }

    /// Clear the session.
    pub fn log_out(&self) {
        auth::log_out(&self.session);
    }

    /// Publish a draft listing.
    pub async fn publish_listing(&self, draft: &ListingDraft) -> Result<ProductId, AppError> {
        publish::publish_listing(&self.products, &self.session, draft).await
    }
}

impl std::fmt::Debug for AppCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCore")
            .field("config", &self.config)
            .field("logged_in", &self.session.is_logged_in())
            .finish()
    }
}

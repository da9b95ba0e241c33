//! Product Detail Workflow

use crate::mapper::product_from_detail;
use crate::views::{DetailState, SessionStore, WishStore};
use chrono::{DateTime, Utc};
use repick_api::ProductService;
use repick_core::{ProductId, Watchable, Watcher};
use std::sync::Arc;

/// Message shown when the detail cannot be loaded.
const LOAD_FAILED_MESSAGE: &str = "상품 정보를 불러오는데 실패했습니다.";

/// The detail page for one product at a time.
pub struct DetailController {
    service: Arc<dyn ProductService>,
    session: SessionStore,
    wishes: WishStore,
    state: Watchable<DetailState>,
}

impl DetailController {
    /// Create the page over the given service and stores.
    pub fn new(service: Arc<dyn ProductService>, session: SessionStore, wishes: WishStore) -> Self {
        Self {
            service,
            session,
            wishes,
            state: Watchable::default(),
        }
    }

    /// Snapshot of the detail state.
    #[must_use]
    pub fn state(&self) -> DetailState {
        self.state.get()
    }

    /// Subscribe to detail-state changes.
    #[must_use]
    pub fn watch(&self) -> Watcher<DetailState> {
        self.state.watch()
    }

    /// Load a product and hydrate the wish store with its like values.
    pub async fn load(&self, product_id: ProductId, now: DateTime<Utc>) {
        self.state.update(|state| {
            state.loading = true;
            state.error = None;
        });

        let token = self.session.token();
        match self.service.detail(product_id, token.as_deref()).await {
            Ok(dto) => {
                let product = product_from_detail(&dto, now);
                self.wishes
                    .hydrate(product.id, product.is_liked, Some(product.likes));
                self.state.update(|state| {
                    state.product = Some(product);
                    state.loading = false;
                });
            }
            Err(error) => {
                tracing::warn!(product = %product_id, %error, "failed to load product detail");
                self.state.update(|state| {
                    state.error = Some(LOAD_FAILED_MESSAGE.to_string());
                    state.loading = false;
                });
            }
        }
    }
}

impl std::fmt::Debug for DetailController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailController")
            .field("state", &self.state.get())
            .finish()
    }
}

//! Trending Rail Workflow

use crate::mapper::products_from_summaries;
use crate::views::{PageState, SessionStore, WishStore};
use chrono::{DateTime, Utc};
use repick_api::ProductService;
use repick_core::{Watchable, Watcher};
use std::sync::Arc;

/// Message shown when the rail cannot be loaded.
const LOAD_FAILED_MESSAGE: &str = "인기 상품을 불러오지 못했습니다.";

/// The view-count Top-N rail on the home screen.
pub struct TrendingController {
    service: Arc<dyn ProductService>,
    session: SessionStore,
    wishes: WishStore,
    state: Watchable<PageState>,
    limit: usize,
}

impl TrendingController {
    /// Create the rail over the given service and stores.
    pub fn new(
        service: Arc<dyn ProductService>,
        session: SessionStore,
        wishes: WishStore,
        limit: usize,
    ) -> Self {
        Self {
            service,
            session,
            wishes,
            state: Watchable::default(),
            limit,
        }
    }

    /// Snapshot of the rail state.
    #[must_use]
    pub fn state(&self) -> PageState {
        self.state.get()
    }

    /// Subscribe to rail-state changes.
    #[must_use]
    pub fn watch(&self) -> Watcher<PageState> {
        self.state.watch()
    }

    /// Load the rail, keeping at most `limit` items.
    pub async fn load(&self, now: DateTime<Utc>) {
        self.state.update(PageState::begin_initial);

        let token = self.session.token();
        match self.service.trending(token.as_deref()).await {
            Ok(page) => {
                let mut items = products_from_summaries(&page.items, now);
                items.truncate(self.limit);
                for product in &items {
                    self.wishes
                        .hydrate(product.id, product.is_liked, Some(product.likes));
                }
                self.state.update(|state| state.finish_initial(items, None));
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load trending products");
                self.state
                    .update(|state| state.fail_initial(LOAD_FAILED_MESSAGE));
            }
        }
    }
}

impl std::fmt::Debug for TrendingController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrendingController")
            .field("limit", &self.limit)
            .field("state", &self.state.get())
            .finish()
    }
}

//! My Picks Workflow
//!
//! The signed-in user's liked products, cursor-paginated. The first page
//! doubles as the wish store's bulk seed (`initialize`); products on
//! later pages arrive through hydration, which the known-guard keeps
//! from disturbing anything the user toggled meanwhile.

use crate::mapper::products_from_summaries;
use crate::views::{PageState, SessionStore, WishStore};
use chrono::{DateTime, Utc};
use repick_api::WishService;
use repick_core::{Watchable, Watcher};
use std::sync::Arc;

/// Message shown when the list cannot be loaded.
const LOAD_FAILED_MESSAGE: &str = "찜 목록을 불러오지 못했습니다.";

/// The my-picks page.
pub struct MyLikesController {
    service: Arc<dyn WishService>,
    session: SessionStore,
    wishes: WishStore,
    state: Watchable<PageState>,
    page_size: u32,
}

impl MyLikesController {
    /// Create the page over the given service and stores.
    pub fn new(
        service: Arc<dyn WishService>,
        session: SessionStore,
        wishes: WishStore,
        page_size: u32,
    ) -> Self {
        Self {
            service,
            session,
            wishes,
            state: Watchable::default(),
            page_size,
        }
    }

    /// Snapshot of the page state.
    #[must_use]
    pub fn state(&self) -> PageState {
        self.state.get()
    }

    /// Subscribe to page-state changes.
    #[must_use]
    pub fn watch(&self) -> Watcher<PageState> {
        self.state.watch()
    }

    /// Load the first page and bulk-seed the wish store from it.
    ///
    /// Signed out, the page is simply empty. On failure the error is
    /// recorded for a retry affordance and both the prior items and the
    /// wish store are left untouched.
    pub async fn load_initial(&self, now: DateTime<Utc>) {
        let Some(token) = self.session.token() else {
            self.state.set(PageState::default());
            return;
        };

        self.state.update(PageState::begin_initial);

        match self.service.my_likes(&token, None, self.page_size).await {
            Ok(page) => {
                let items = products_from_summaries(&page.items, now);
                // Count baselines first: initialize marks ids known, which
                // would turn the hydration into a no-op.
                for product in &items {
                    self.wishes.hydrate(product.id, true, Some(product.likes));
                }
                self.wishes.initialize(items.iter().map(|product| product.id));
                self.state
                    .update(|state| state.finish_initial(items, page.next_cursor));
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load my picks");
                self.state
                    .update(|state| state.fail_initial(LOAD_FAILED_MESSAGE));
            }
        }
    }

    /// Load the next page, if any. Failures are silent to preserve the
    /// list already on screen.
    pub async fn load_more(&self, now: DateTime<Utc>) {
        let Some(token) = self.session.token() else {
            return;
        };
        let cursor = self.state.update(|state| {
            if state.loading_more || state.loading {
                return None;
            }
            let cursor = state.next_cursor.clone()?;
            state.loading_more = true;
            Some(cursor)
        });
        let Some(cursor) = cursor else {
            return;
        };

        match self
            .service
            .my_likes(&token, Some(&cursor), self.page_size)
            .await
        {
            Ok(page) => {
                let items = products_from_summaries(&page.items, now);
                for product in &items {
                    self.wishes.hydrate(product.id, true, Some(product.likes));
                }
                self.state
                    .update(|state| state.append_page(items, page.next_cursor));
            }
            Err(error) => {
                tracing::debug!(%error, "failed to load more picks");
                self.state.update(|state| state.loading_more = false);
            }
        }
    }

    /// Retry after a failed initial load.
    pub async fn reload(&self, now: DateTime<Utc>) {
        self.load_initial(now).await;
    }
}

impl std::fmt::Debug for MyLikesController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MyLikesController")
            .field("page_size", &self.page_size)
            .field("state", &self.state.get())
            .finish()
    }
}

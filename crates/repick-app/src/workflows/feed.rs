//! Product Feed Workflow
//!
//! Infinite-scroll listing with filters. Beyond paging, the feed is the
//! wish store's bulk seeder: the first page of a session (or of a new
//! session token) replaces the liked set wholesale, later responses only
//! hydrate per product, which the store's known-guard makes safe against
//! clobbering in-flight toggles.

use crate::mapper::products_from_summaries;
use crate::views::{PageState, SessionStore, WishStore};
use chrono::{DateTime, Utc};
use repick_api::ProductService;
use repick_core::{Product, ProductFilter, Watchable, Watcher};
use std::sync::{Arc, Mutex};

/// Message shown when the initial page cannot be loaded.
const LOAD_FAILED_MESSAGE: &str = "상품 목록을 불러오는데 실패했습니다.";

#[derive(Debug, Default)]
struct SeedState {
    seeded: bool,
    token: Option<String>,
}

/// Paginated, filterable product feed.
pub struct FeedController {
    service: Arc<dyn ProductService>,
    session: SessionStore,
    wishes: WishStore,
    state: Watchable<PageState>,
    filter: Watchable<ProductFilter>,
    page_size: u32,
    seed: Mutex<SeedState>,
}

impl FeedController {
    /// Create a feed over the given service and stores.
    pub fn new(
        service: Arc<dyn ProductService>,
        session: SessionStore,
        wishes: WishStore,
        filter: ProductFilter,
        page_size: u32,
    ) -> Self {
        Self {
            service,
            session,
            wishes,
            state: Watchable::default(),
            filter: Watchable::new(filter),
            page_size,
            seed: Mutex::new(SeedState::default()),
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

    /// Current filter.
    #[must_use]
    pub fn filter(&self) -> ProductFilter {
        self.filter.get()
    }

    /// Replace the filter, reset the page, and reload.
    pub async fn set_filter(&self, filter: ProductFilter, now: DateTime<Utc>) {
        self.filter.set(filter);
        self.state.update(PageState::reset);
        self.load_initial(now).await;
    }

    /// Load the first page, replacing current items.
    ///
    /// `now` is caller-supplied and only feeds relative-time labels.
    pub async fn load_initial(&self, now: DateTime<Utc>) {
        self.state.update(PageState::begin_initial);

        let token = self.session.token();
        let filter = self.filter.get();
        let page = self
            .service
            .list(None, self.page_size, token.as_deref(), &filter)
            .await;

        match page {
            Ok(page) => {
                let items = products_from_summaries(&page.items, now);
                // Count baselines first: the bulk seed marks ids known,
                // which would turn the hydration into a no-op.
                for product in &items {
                    self.wishes
                        .hydrate(product.id, product.is_liked, Some(product.likes));
                }
                self.seed_wish_store(token, &items);
                self.state
                    .update(|state| state.finish_initial(items, page.next_cursor));
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load product feed");
                self.state
                    .update(|state| state.fail_initial(LOAD_FAILED_MESSAGE));
            }
        }
    }

    /// Load the next page, if any. Failures are silent: a broken
    /// scroll-append should not disturb what the user already sees.
    pub async fn load_more(&self, now: DateTime<Utc>) {
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

        let token = self.session.token();
        let filter = self.filter.get();
        let page = self
            .service
            .list(Some(&cursor), self.page_size, token.as_deref(), &filter)
            .await;

        match page {
            Ok(page) => {
                let items = products_from_summaries(&page.items, now);
                for product in &items {
                    self.wishes
                        .hydrate(product.id, product.is_liked, Some(product.likes));
                }
                self.state
                    .update(|state| state.append_page(items, page.next_cursor));
            }
            Err(error) => {
                tracing::debug!(%error, "failed to load more products");
                self.state.update(|state| state.loading_more = false);
            }
        }
    }

    /// Reload the first page.
    pub async fn refresh(&self, now: DateTime<Utc>) {
        self.load_initial(now).await;
    }

    /// Bulk-replace the liked set from the first page of this session
    /// token. Later pages must not re-seed: they would wipe toggles made
    /// since.
    fn seed_wish_store(&self, token: Option<String>, items: &[Product]) {
        #[allow(clippy::expect_used)] // poisoning is unrecoverable here
        let mut seed = self.seed.lock().expect("seed lock poisoned");
        if seed.token != token {
            seed.seeded = false;
            seed.token = token;
        }
        if seed.seeded {
            return;
        }
        let liked = items
            .iter()
            .filter(|product| product.is_liked)
            .map(|product| product.id);
        self.wishes.initialize(liked);
        seed.seeded = true;
    }
}

impl std::fmt::Debug for FeedController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedController")
            .field("page_size", &self.page_size)
            .field("state", &self.state.get())
            .finish()
    }
}

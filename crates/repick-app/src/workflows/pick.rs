//! Pick Toggle Workflow
//!
//! One [`PickController`] per rendered product affordance. The toggle is
//! optimistic: the wish store mutates before the request is issued, so
//! the surface repaints within the same frame, and the exact inverse
//! mutation restores it if the backend says no.

use crate::views::{SessionStore, WishStore};
use repick_api::WishService;
use repick_core::{ProductId, Watchable};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Navigation target a frontend should route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The login entry point
    Login,
}

/// Optimistic like/unlike controller for a single product.
///
/// At most one toggle request is in flight per controller; calls made
/// while one is pending are ignored rather than queued, so a double-tap
/// issues exactly one request. Requests are never cancelled: a
/// resolution arriving after the owning surface unmounted still applies
/// to the shared store, which outlives any one view.
pub struct PickController {
    product_id: ProductId,
    wishes: WishStore,
    session: SessionStore,
    service: Arc<dyn WishService>,
    in_flight: Arc<AtomicBool>,
    login_alert: Watchable<bool>,
}

impl PickController {
    /// Create a controller and seed the store from the server-provided
    /// initial values (a no-op if the product is already known).
    pub fn new(
        product_id: ProductId,
        initial_is_liked: bool,
        initial_like_count: Option<u32>,
        wishes: WishStore,
        session: SessionStore,
        service: Arc<dyn WishService>,
    ) -> Self {
        wishes.hydrate(product_id, initial_is_liked, initial_like_count);
        Self {
            product_id,
            wishes,
            session,
            service,
            in_flight: Arc::new(AtomicBool::new(false)),
            login_alert: Watchable::new(false),
        }
    }

    /// The product this controller toggles.
    #[must_use]
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Live liked state from the shared store.
    #[must_use]
    pub fn is_liked(&self) -> bool {
        self.wishes.is_liked(self.product_id)
    }

    /// Live display count from the shared store, once seeded.
    #[must_use]
    pub fn display_count(&self) -> Option<u32> {
        self.wishes.like_count(self.product_id)
    }

    /// Whether a toggle request is in flight.
    #[must_use]
    pub fn is_toggling(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Whether the login prompt is open.
    #[must_use]
    pub fn login_alert_open(&self) -> bool {
        self.login_alert.get()
    }

    /// Close the login prompt without navigating.
    pub fn close_login_alert(&self) {
        self.login_alert.set(false);
    }

    /// Close the login prompt and tell the frontend where to go.
    #[must_use]
    pub fn confirm_login(&self) -> Screen {
        self.login_alert.set(false);
        Screen::Login
    }

    /// Toggle the pick state.
    ///
    /// Failures are swallowed: the visual snap-back of the reverted
    /// store is the whole error report.
    pub async fn toggle_pick(&self) {
        if self.in_flight.load(Ordering::Acquire) {
            return;
        }

        let Some(token) = self.session.token() else {
            self.login_alert.set(true);
            return;
        };

        // Claim the single in-flight slot; a concurrent caller lost.
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        let id = self.product_id;
        let next_liked = !self.wishes.is_liked(id);

        // Optimistic mutation, visible before the request resolves.
        if next_liked {
            self.wishes.add_like(id);
            self.wishes.adjust_count(id, 1);
        } else {
            self.wishes.remove_like(id);
            self.wishes.adjust_count(id, -1);
        }

        let result = if next_liked {
            self.service.add_like(&token, id).await
        } else {
            self.service.remove_like(&token, id).await
        };

        if let Err(error) = result {
            tracing::debug!(product = %id, %error, "pick toggle rejected; reverting");
            // Exact inverse of the optimistic mutation.
            if next_liked {
                self.wishes.remove_like(id);
                self.wishes.adjust_count(id, -1);
            } else {
                self.wishes.add_like(id);
                self.wishes.adjust_count(id, 1);
            }
        }

        self.in_flight.store(false, Ordering::Release);
    }
}

impl std::fmt::Debug for PickController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickController")
            .field("product_id", &self.product_id)
            .field("is_liked", &self.is_liked())
            .field("in_flight", &self.is_toggling())
            .finish()
    }
}

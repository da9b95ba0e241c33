//! # List and Detail View States
//!
//! Page-shaped states for the product feed, the my-picks list, trending,
//! the category catalog, and the detail page. The workflows drive the
//! transitions; these types only hold what a frontend needs to render.

use repick_api::types::CategoryDto;
use repick_core::Product;

/// A cursor-paginated product list as a page renders it.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    /// Loaded products, in server order
    pub items: Vec<Product>,
    /// Cursor for the next page; `None` once exhausted
    pub next_cursor: Option<String>,
    /// Initial load in flight
    pub loading: bool,
    /// Follow-up page in flight
    pub loading_more: bool,
    /// Page-level error, rendered with a retry affordance
    pub error: Option<String>,
}

impl PageState {
    /// Whether another page can be requested.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Enter the initial-load state, clearing a prior error.
    pub fn begin_initial(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Land the first page.
    pub fn finish_initial(&mut self, items: Vec<Product>, next_cursor: Option<String>) {
        self.items = items;
        self.next_cursor = next_cursor;
        self.loading = false;
    }

    /// Record an initial-load failure; prior items stay untouched.
    pub fn fail_initial(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Append a follow-up page.
    pub fn append_page(&mut self, items: Vec<Product>, next_cursor: Option<String>) {
        self.items.extend(items);
        self.next_cursor = next_cursor;
        self.loading_more = false;
    }

    /// Reset to empty (used when the filter changes).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Detail-page state for one product.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// The loaded product
    pub product: Option<Product>,
    /// Load in flight
    pub loading: bool,
    /// Page-level error
    pub error: Option<String>,
}

/// Category catalog state.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Categories in backend order
    pub categories: Vec<CategoryDto>,
    /// Load in flight
    pub loading: bool,
    /// Page-level error
    pub error: Option<String>,
}

//! Category Catalog Workflow

use crate::views::CatalogState;
use repick_api::CategoryService;
use repick_core::{Watchable, Watcher};
use std::sync::Arc;

/// Message shown when categories cannot be loaded.
const LOAD_FAILED_MESSAGE: &str = "카테고리를 불러오지 못했습니다.";

/// The category list backing filter chips and the write form.
pub struct CatalogController {
    service: Arc<dyn CategoryService>,
    state: Watchable<CatalogState>,
}

impl CatalogController {
    /// Create the catalog over the given service.
    pub fn new(service: Arc<dyn CategoryService>) -> Self {
        Self {
            service,
            state: Watchable::default(),
        }
    }

    /// Snapshot of the catalog state.
    #[must_use]
    pub fn state(&self) -> CatalogState {
        self.state.get()
    }

    /// Subscribe to catalog changes.
    #[must_use]
    pub fn watch(&self) -> Watcher<CatalogState> {
        self.state.watch()
    }

    /// Load (or reload) the category list.
    pub async fn load(&self) {
        self.state.update(|state| {
            state.loading = true;
            state.error = None;
        });

        match self.service.list().await {
            Ok(categories) => {
                self.state.update(|state| {
                    state.categories = categories;
                    state.loading = false;
                });
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load categories");
                self.state.update(|state| {
                    state.error = Some(LOAD_FAILED_MESSAGE.to_string());
                    state.loading = false;
                });
            }
        }
    }
}

impl std::fmt::Debug for CatalogController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogController")
            .field("state", &self.state.get())
            .finish()
    }
}

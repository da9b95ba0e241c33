//! # View State Module
//!
//! State stores the workflows mutate and the frontends render from. Each
//! store wraps its state in `Watchable`, so any number of simultaneously
//! mounted surfaces (grid card, list row, detail page) observe the same
//! value and re-pull after every mutation.

pub mod auth;
pub mod feed;
pub mod wish;

pub use auth::{SessionState, SessionStore, UserProfile};
pub use feed::{CatalogState, DetailState, PageState};
pub use wish::{WishState, WishStore};

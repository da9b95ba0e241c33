//! # Workflows - Portable Business Logic
//!
//! Controllers mediating between the view stores and the remote API.
//! Each is UI-agnostic: frontends call the operations and render from
//! the stores.

pub mod auth;
pub mod catalog;
pub mod detail;
pub mod feed;
pub mod likes;
pub mod pick;
pub mod publish;
pub mod trending;

pub use catalog::CatalogController;
pub use detail::DetailController;
pub use feed::FeedController;
pub use likes::MyLikesController;
pub use pick::PickController;
pub use trending::TrendingController;

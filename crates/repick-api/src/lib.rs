//! # Repick API
//!
//! Thin typed wrappers over the marketplace backend's HTTP surface:
//! products, wishlist, auth, and categories. Each endpoint family is a
//! small module pairing a service trait (the seam the application core is
//! tested against) with its [`ApiClient`]-backed implementation.
//!
//! Authentication is a bearer token threaded in per call; this crate
//! never holds session state.

pub mod auth;
pub mod categories;
pub mod client;
pub mod error;
pub mod products;
pub mod types;
pub mod wish;

pub use auth::{AuthApi, AuthService};
pub use categories::{CategoryApi, CategoryService};
pub use client::ApiClient;
pub use error::ApiError;
pub use products::{ProductApi, ProductService};
pub use wish::{WishApi, WishService};

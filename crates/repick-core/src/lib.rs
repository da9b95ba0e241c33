//! # Repick Core
//!
//! Domain types and primitives shared by the Repick client crates:
//!
//! - Typed identifiers for backend entities ([`ids`])
//! - The product catalog domain model ([`product`])
//! - [`Watchable`]: a shared reactive value with poll-based subscriptions,
//!   the mechanism surfaces use to re-pull state after a store mutation
//! - Backend timestamp parsing and relative-time labels ([`time`])
//! - Input validation predicates matching the backend's constraints
//!   ([`validation`])
//!
//! This crate is runtime-agnostic: it uses only std synchronization
//! primitives so stores built on it work under any async runtime or in
//! sync-only code.

pub mod ids;
pub mod product;
pub mod reactive;
pub mod time;
pub mod validation;

pub use ids::{CategoryId, ProductId, UserId};
pub use product::{Product, ProductFilter, ProductStatus, Seller, SortBy, TradeType};
pub use reactive::{Watchable, Watcher};

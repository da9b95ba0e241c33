//! # Repick App
//!
//! Portable headless application core for the Repick marketplace client.
//! Frontends (TUI, mobile, web) embed this crate and render from it; it
//! owns no pixels and no router.
//!
//! The crate is organized in three layers:
//!
//! - [`views`]: state stores published through `Watchable` — the wish
//!   store, the session store, and per-page list states
//! - [`workflows`]: controllers that mediate between stores and the
//!   remote API — the optimistic pick toggle, feed/detail/my-likes
//!   paging, auth flows
//! - [`ui`]: presentational binding models that turn controller state
//!   into render-ready snapshots
//!
//! [`AppCore`] wires the layers together from an [`AppConfig`].

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod mapper;
pub mod ui;
pub mod views;
pub mod workflows;

pub use config::AppConfig;
pub use error::AppError;
pub use self::core::AppCore;

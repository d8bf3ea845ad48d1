//! # ceylon-fav
//!
//! Favorites client for the island travel and services marketplace.
//!
//! ## Architecture
//!
//! ```text
//! Session ─┐
//! Config ──┴─► FavoriteToggle ─► FavoritesApi ─► REST API
//!                   │
//!                   ├─► Navigator (login redirect)
//!                   └─► change callback ─► FavoriteCollection
//! ```
//!
//! One [`FavoriteToggle`](toggle::FavoriteToggle) serves every resource
//! family (destinations, locations, service profiles); the families only
//! differ in their [`ResourceFamily`](domain::ResourceFamily) path prefix
//! and request body key.
//!
//! ## Quick Start
//!
//! ```bash
//! # Is this destination a favorite?
//! CEYLON_FAV_TOKEN=... ceylon-fav check dest-1
//!
//! # Flip it
//! ceylon-fav toggle dest-1
//!
//! # Location favorites live under their own prefix
//! ceylon-fav --resource location toggle loc-7
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config,
/// session, API client and navigator.
pub mod app;

/// Configuration management.
///
/// Loads from `~/.config/ceylon-fav/config.toml`: API base URL, login
/// route, stored session and resource families.
pub mod config;

/// Command-line interface using clap.
///
/// - `check <id>...` - Show favorite status
/// - `toggle <id>` - Flip favorite status
/// - `resources` - List resource families
pub mod cli;

/// Core domain types.
///
/// - [`Session`](domain::Session): Injected user identity
/// - [`ResourceFamily`](domain::ResourceFamily): Endpoint layout per family
/// - [`FavoriteStatus`](domain::FavoriteStatus): Per-item favorite flag
pub mod domain;

/// Favorites REST port.
///
/// - [`FavoritesApi`](api::FavoritesApi): Async trait for the three endpoints
/// - [`HttpFavoritesApi`](api::HttpFavoritesApi): reqwest-based implementation
pub mod api;

/// Login redirects.
pub mod navigator;

/// Per-item favorite toggle with in-flight guard.
pub mod toggle;

/// List-level container pruned by toggle changes.
pub mod collection;

//! # newsdesk
//!
//! A reader for a news content API: headlines, sections, search and
//! podcast episodes.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Parser → ViewType Assigner → Result Cache → CLI
//! ```
//!
//! - [`fetcher`]: HTTP GET against the content API, failures become an empty body
//! - [`parser`]: Converts `response.results` JSON into domain records
//! - [`assigner`]: Picks one of twelve card layouts per article
//! - [`cache`]: Per-screen cache of the last delivered list
//! - [`loader`]: Runs fetch → parse → assign behind a cache, one loader per screen
//!
//! ## Quick Start
//!
//! ```bash
//! # Headlines from the configured sections
//! newsdesk headlines
//!
//! # One section
//! newsdesk section uk/technology
//!
//! # Search
//! newsdesk search "climate summit"
//!
//! # Podcasts
//! newsdesk podcasts
//! newsdesk episodes 1
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config,
/// fetcher and parser, and builds loaders.
pub mod app;

/// Card layout assignment.
pub mod assigner;

/// Per-screen result cache.
pub mod cache;

/// Command-line interface using clap.
///
/// - `headlines` - Configured sections as feeds
/// - `section <path>` - One section
/// - `search <term>` - Free-text search
/// - `podcasts` - The podcast catalog
/// - `episodes <podcast>` - Episodes of one podcast
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/newsdesk/config.toml`:
/// - API endpoint, key and page size
/// - Sections for the headlines screen
/// - Podcast catalog
pub mod config;

/// Core domain models.
///
/// - [`Article`](domain::Article): One news item
/// - [`Episode`](domain::Episode): One podcast episode
/// - [`Podcast`](domain::Podcast): Podcast catalog entry
/// - [`NewsFeed`](domain::NewsFeed): Labeled group of articles
/// - [`ViewType`](domain::ViewType): The twelve card layouts
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
/// - [`ContentQuery`](fetcher::ContentQuery): Request URL builder
pub mod fetcher;

/// Screen loaders combining fetch, parse, assign and cache.
pub mod loader;

/// Content API response parsing and date formatting.
pub mod parser;

//! # underscore-pages
//!
//! Renders the child pages beneath a parent page as an embeddable HTML
//! fragment, triggered by a `[pages]` shortcode tag.
//!
//! ## Architecture
//!
//! The render pipeline runs one tag invocation end to end:
//!
//! ```text
//! Attrs → Config Resolver → Query Builder → PageSource → Renderer → Fragment
//! ```
//!
//! - [`config`]: merges caller attributes over named defaults
//! - [`domain`]: the `Page` and `Query` models
//! - [`hooks`]: named extension points callers register transformations on
//! - [`platform`]: capability traits the pipeline consumes, plus the
//!   in-memory site implementation
//! - [`render`]: per-page field derivation, template substitution, and the
//!   fragment wrapper
//!
//! ## Quick Start
//!
//! ```bash
//! # Render the children of page 1 from a site file
//! upages render --site site.toml --id 1
//!
//! # Expand every [pages] tag in a document
//! upages expand --site site.toml page.html
//!
//! # List the site's pages
//! upages list --site site.toml
//! ```
//!
//! ## Modules
//!
//! - [`app`]: application context and error types
//! - [`cli`]: command-line interface definitions
//! - [`shortcode`]: tag parsing and document expansion

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the shipped
/// collaborators: site, hooks, defaults.
pub mod app;

/// Command-line interface using clap.
///
/// Defines the CLI structure and subcommands:
/// - `render --site <file> [--id N] [--size TOKEN] [--col N]`
/// - `expand --site <file> <document>`
/// - `list --site <file>`
pub mod cli;

/// Shortcode configuration.
///
/// The attribute resolver ([`resolve`](config::resolve), with `intval`
/// integer coercion) and the optional file-backed configuration at
/// `~/.config/underscore-pages/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Page`](domain::Page): a content entry in the parent/child tree
/// - [`Query`](domain::Query): a child-page fetch description
pub mod domain;

/// Extension hook points.
///
/// Six named chains (defaults, query, page, title, excerpt, template);
/// each applies registered transformations in registration order.
pub mod hooks;

/// Capability traits consumed by the renderer.
///
/// - [`PageSource`](platform::PageSource): fetch pages matching a query
/// - [`Platform`](platform::Platform): permalink, thumbnail, date, assets
/// - [`MemorySite`](platform::MemorySite): in-memory implementation backing
///   the CLI and tests
pub mod platform;

/// The render pipeline.
///
/// [`Renderer`](render::Renderer) plus template substitution, escaping
/// helpers, and the ambient current-page binding.
pub mod render;

/// The `[pages]` tag surface: attribute parsing and document expansion.
pub mod shortcode;

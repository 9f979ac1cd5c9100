//! The render pipeline.
//!
//! [`Renderer::shortcode`] runs the whole chain for one tag invocation:
//! resolve configuration, build the fetch query, run it past the `query`
//! hook, fetch, render each page, and wrap the accumulated fragment. Every
//! per-page derivation degrades to empty content on collaborator failure;
//! nothing in this module returns an error to the caller.

pub mod current;
pub mod escape;
pub mod template;

use std::sync::Arc;

use tracing::warn;

use crate::config::{self, Defaults, PagesConfig};
use crate::domain::{Page, PageKind, Query};
use crate::hooks::Hooks;
use crate::platform::{PageSource, Platform};
use crate::render::current::CurrentPage;
use crate::render::escape::{esc_attr, esc_html, esc_url};
use crate::render::template::{substitute, DEFAULT_TEMPLATE};
use crate::shortcode::Attrs;

/// Handle of the companion script asset requested after each render.
pub const SCRIPT_HANDLE: &str = "underscore-pages";

pub struct Renderer {
    source: Arc<dyn PageSource + Send + Sync>,
    platform: Arc<dyn Platform + Send + Sync>,
    hooks: Arc<Hooks>,
    defaults: Defaults,
}

impl Renderer {
    pub fn new(
        source: Arc<dyn PageSource + Send + Sync>,
        platform: Arc<dyn Platform + Send + Sync>,
        hooks: Arc<Hooks>,
        defaults: Defaults,
    ) -> Self {
        Self {
            source,
            platform,
            hooks,
            defaults,
        }
    }

    /// Render one shortcode invocation from its attributes.
    pub fn shortcode(&self, attrs: &Attrs) -> String {
        let resolved = self.resolve(attrs);
        let query = self
            .hooks
            .apply_query(Query::children_of(&resolved), &resolved);

        self.display(&query, resolved.col, &resolved.size)
    }

    /// Resolve attributes without rendering. The default parent id is the
    /// ambient current page when one is bound; the `defaults` hook chain
    /// runs before caller attributes are merged.
    pub fn resolve(&self, attrs: &Attrs) -> PagesConfig {
        let mut defaults = self.defaults.clone();
        if let Some(id) = current::current_page_id() {
            defaults.id = id;
        }
        let defaults = self.hooks.apply_defaults(defaults);
        config::resolve(attrs, &defaults)
    }

    /// Fetch matching pages and render them. A fetch failure logs a warning
    /// and renders the empty wrapper.
    pub fn display(&self, query: &Query, col: i64, size: &str) -> String {
        let pages = match self.source.pages(query) {
            Ok(pages) => pages,
            Err(e) => {
                warn!(error = %e, "page fetch failed, rendering empty list");
                Vec::new()
            }
        };
        self.render_all(pages, query, col, size)
    }

    /// Render an explicit page list into the wrapped fragment.
    pub fn render_all(&self, pages: Vec<Page>, query: &Query, col: i64, size: &str) -> String {
        let mut html = String::new();
        for page in pages {
            html.push_str(&self.render_page(page, query, size));
        }

        self.platform
            .enqueue_script(SCRIPT_HANDLE, env!("CARGO_PKG_VERSION"));

        format!(
            "<div class=\"underscore-pages col-{}\">{}</div>",
            esc_attr(&col.to_string()),
            html
        )
    }

    /// Render a single page through the hook points and the template.
    pub fn render_page(&self, page: Page, query: &Query, size: &str) -> String {
        let page = self.hooks.apply_page(page);
        let _scope = CurrentPage::enter(&page);

        let url = self.platform.permalink(&page).unwrap_or_else(|e| {
            warn!(page = page.id, error = %e, "permalink resolution failed");
            String::new()
        });
        let thumbnail = self
            .platform
            .thumbnail_html(&page, size)
            .unwrap_or_else(|e| {
                warn!(page = page.id, error = %e, "thumbnail rendering failed");
                String::new()
            });

        let title = self.hooks.apply_title(page.title.clone(), &page, query);
        let excerpt = self
            .hooks
            .apply_excerpt(self.excerpt_html(&page), &page, query);
        let template = self
            .hooks
            .apply_template(DEFAULT_TEMPLATE.to_string(), &page, query);

        substitute(
            &template,
            &[
                ("post_id", page.id.to_string()),
                ("post_title", esc_html(&title)),
                ("post_url", esc_url(&url)),
                ("post_thumbnail", thumbnail),
                ("thumbnail_size", esc_attr(size)),
                ("post_excerpt", excerpt),
            ],
        )
    }

    /// Excerpt block: the manual excerpt as an escaped line, plus a date
    /// line for posts, wrapped when any line exists.
    fn excerpt_html(&self, page: &Page) -> String {
        let mut lines = Vec::new();

        let excerpt = page.excerpt.trim();
        if !excerpt.is_empty() {
            lines.push(esc_html(excerpt));
        }

        if page.kind == PageKind::Post {
            lines.push(self.platform.date_line(page));
        }

        if lines.is_empty() {
            String::new()
        } else {
            format!(
                "<div class=\"post-excerpt\">{}</div>",
                lines.join("<br />")
            )
        }
    }
}

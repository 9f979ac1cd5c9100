pub mod memory;

use crate::app::Result;
use crate::config::DEFAULT_DATE_FORMAT;
use crate::domain::{Page, Query};

pub use memory::MemorySite;

/// Fetch capability consumed by the renderer.
///
/// Implementations return pages already ordered by the query's order field
/// and direction. A query with `paginate == false` returns every match.
pub trait PageSource {
    fn pages(&self, query: &Query) -> Result<Vec<Page>>;
}

/// Environment-dependent operations the renderer delegates per page.
///
/// Failures here never abort a render; the renderer logs and degrades to
/// empty content for the affected field.
pub trait Platform {
    /// Resolve the permanent link for a page.
    fn permalink(&self, page: &Page) -> Result<String>;

    /// Render thumbnail markup for a page at the given size token.
    ///
    /// The returned markup is substituted unescaped, so implementations must
    /// return already-safe HTML. Pages without a thumbnail yield `""`.
    fn thumbnail_html(&self, page: &Page, size: &str) -> Result<String>;

    /// Human-readable publication date text, empty when the page has none.
    fn date_line(&self, page: &Page) -> String {
        page.published_at
            .map(|d| d.format(DEFAULT_DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// Request the companion script asset be loaded. Fire and forget.
    fn enqueue_script(&self, handle: &str, version: &str);
}

//! In-memory site backing the CLI and tests.
//!
//! Holds a flat page list loaded from a TOML or JSON site file and serves
//! both capability traits over it. This is a stand-in collaborator for the
//! hosting platform, not a persistence layer.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::app::{PagesError, Result};
use crate::config::DEFAULT_DATE_FORMAT;
use crate::domain::{OrderBy, Page, Query, SortOrder};
use crate::platform::{PageSource, Platform};
use crate::render::escape::esc_attr;

pub struct MemorySite {
    base_url: Option<Url>,
    date_format: String,
    pages: Vec<Page>,
    enqueued: Mutex<Vec<(String, String)>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SiteFile {
    base_url: Option<String>,
    date_format: Option<String>,
    pages: Vec<Page>,
}

impl MemorySite {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            base_url: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            pages,
            enqueued: Mutex::new(Vec::new()),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = Some(parse_base_url(base_url)?);
        Ok(self)
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Load a site file. The format is picked by extension: `.toml` or `.json`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let file: SiteFile = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| PagesError::SiteParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            Some("json") => serde_json::from_str(&content).map_err(|e| PagesError::SiteParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            _ => return Err(PagesError::SiteFormat(path.to_path_buf())),
        };

        let mut site = Self::new(file.pages);
        if let Some(base_url) = file.base_url {
            site = site.with_base_url(&base_url)?;
        }
        if let Some(format) = file.date_format {
            site = site.with_date_format(format);
        }
        Ok(site)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn all_pages(&self) -> &[Page] {
        &self.pages
    }

    /// Script assets enqueued so far, in request order.
    pub fn enqueued(&self) -> Vec<(String, String)> {
        self.enqueued
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    // A trailing slash keeps Url::join appending instead of replacing the
    // last path segment.
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Ok(Url::parse(&base)?)
}

impl PageSource for MemorySite {
    fn pages(&self, query: &Query) -> Result<Vec<Page>> {
        let mut pages: Vec<Page> = self
            .pages
            .iter()
            .filter(|p| {
                p.parent == query.parent && p.status == query.status && p.kind == query.kind
            })
            .cloned()
            .collect();

        pages.sort_by(|a, b| {
            let ord = match query.order_by {
                OrderBy::MenuOrder => a.menu_order.cmp(&b.menu_order),
                OrderBy::Title => a.title.cmp(&b.title),
                OrderBy::Date => a.published_at.cmp(&b.published_at),
                OrderBy::Id => a.id.cmp(&b.id),
            };
            match query.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });

        debug!(parent = query.parent, count = pages.len(), "query executed");
        Ok(pages)
    }
}

impl Platform for MemorySite {
    fn permalink(&self, page: &Page) -> Result<String> {
        let base = self
            .base_url
            .as_ref()
            .ok_or_else(|| PagesError::Source("no base_url configured".into()))?;
        let url = base.join(&format!("{}/", page.slug))?;
        Ok(url.to_string())
    }

    fn thumbnail_html(&self, page: &Page, size: &str) -> Result<String> {
        let Some(src) = page.thumbnail.as_deref() else {
            return Ok(String::new());
        };
        Ok(format!(
            r#"<img class="attachment-{}" src="{}" alt="{}" />"#,
            esc_attr(size),
            esc_attr(src),
            esc_attr(&page.title),
        ))
    }

    fn date_line(&self, page: &Page) -> String {
        use std::fmt::Write as _;

        let Some(date) = page.published_at else {
            return String::new();
        };
        // chrono's Display panics on a bad format string; render empty
        // instead so a config typo cannot abort a render.
        let mut line = String::new();
        if write!(line, "{}", date.format(&self.date_format)).is_err() {
            line.clear();
        }
        line
    }

    fn enqueue_script(&self, handle: &str, version: &str) {
        debug!(handle, version, "script enqueued");
        if let Ok(mut queue) = self.enqueued.lock() {
            queue.push((handle.to_string(), version.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PageKind, Status};
    use chrono::{TimeZone, Utc};
    use std::io::Write as _;

    fn site() -> MemorySite {
        let mut child_a = Page::new(2, "Beta");
        child_a.parent = 1;
        child_a.menu_order = 2;

        let mut child_b = Page::new(3, "Alpha");
        child_b.parent = 1;
        child_b.menu_order = 1;

        let mut draft = Page::new(4, "Hidden");
        draft.parent = 1;
        draft.status = Status::Draft;

        let mut post = Page::new(5, "News");
        post.parent = 1;
        post.kind = PageKind::Post;

        let unrelated = Page::new(6, "Elsewhere");

        MemorySite::new(vec![child_a, child_b, draft, post, unrelated])
            .with_base_url("https://example.com")
            .unwrap()
    }

    fn children_query(parent: i64) -> Query {
        Query::children_of(&crate::config::PagesConfig {
            id: parent,
            size: "post-thumbnail".into(),
            col: 3,
        })
    }

    #[test]
    fn test_pages_filters_and_orders() {
        let pages = site().pages(&children_query(1)).unwrap();
        let ids: Vec<i64> = pages.iter().map(|p| p.id).collect();
        // Published pages under parent 1 only, menu order ascending.
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_pages_desc_order() {
        let mut query = children_query(1);
        query.order = SortOrder::Desc;
        let ids: Vec<i64> = site()
            .pages(&query)
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_pages_order_by_title() {
        let mut query = children_query(1);
        query.order_by = OrderBy::Title;
        let pages = site().pages(&query).unwrap();
        assert_eq!(pages[0].title, "Alpha");
        assert_eq!(pages[1].title, "Beta");
    }

    #[test]
    fn test_pages_no_parent_matches_is_empty() {
        assert!(site().pages(&children_query(99)).unwrap().is_empty());
    }

    #[test]
    fn test_permalink_joins_slug() {
        let site = site();
        let page = Page::new(9, "About Us");
        assert_eq!(
            site.permalink(&page).unwrap(),
            "https://example.com/about-us/"
        );
    }

    #[test]
    fn test_permalink_without_base_url_errors() {
        let site = MemorySite::new(vec![]);
        assert!(site.permalink(&Page::new(1, "x")).is_err());
    }

    #[test]
    fn test_thumbnail_html_escapes_attributes() {
        let site = site();
        let mut page = Page::new(1, r#"A "quoted" title"#);
        page.thumbnail = Some("/img/a.png".into());

        let html = site.thumbnail_html(&page, "large").unwrap();
        assert!(html.contains(r#"class="attachment-large""#));
        assert!(html.contains(r#"src="/img/a.png""#));
        assert!(!html.contains(r#"alt="A "quoted""#));
    }

    #[test]
    fn test_thumbnail_html_empty_without_thumbnail() {
        let site = site();
        assert_eq!(site.thumbnail_html(&Page::new(1, "x"), "large").unwrap(), "");
    }

    #[test]
    fn test_date_line_uses_configured_format() {
        let site = MemorySite::new(vec![]).with_date_format("%Y-%m-%d");
        let mut page = Page::new(1, "x");
        page.published_at = Some(Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap());
        assert_eq!(site.date_line(&page), "2024-03-09");
        assert_eq!(site.date_line(&Page::new(2, "y")), "");
    }

    #[test]
    fn test_enqueue_records_pairs() {
        let site = site();
        site.enqueue_script("underscore-pages", "0.1.0");
        site.enqueue_script("underscore-pages", "0.1.0");
        assert_eq!(site.enqueued().len(), 2);
        assert_eq!(site.enqueued()[0].0, "underscore-pages");
    }

    #[test]
    fn test_load_toml_site_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
base_url = "https://example.com"

[[pages]]
id = 1
title = "Home"
slug = "home"

[[pages]]
id = 2
parent = 1
title = "About"
slug = "about"
"#
        )
        .unwrap();

        let site = MemorySite::load(file.path()).unwrap();
        assert_eq!(site.page_count(), 2);
        assert_eq!(
            site.permalink(&site.all_pages()[1]).unwrap(),
            "https://example.com/about/"
        );
    }

    #[test]
    fn test_load_json_site_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"base_url": "https://example.com", "pages": [{{"id": 1, "title": "Home", "slug": "home"}}]}}"#
        )
        .unwrap();

        let site = MemorySite::load(file.path()).unwrap();
        assert_eq!(site.page_count(), 1);
    }

    #[test]
    fn test_load_unknown_extension_errors() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        assert!(matches!(
            MemorySite::load(file.path()),
            Err(PagesError::SiteFormat(_))
        ));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication status of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Published,
    Draft,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Published => "published",
            Status::Draft => "draft",
        }
    }
}

/// Content kind. Pages form a parent/child tree; posts are dated entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Page,
    Post,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Page => "page",
            PageKind::Post => "post",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub id: i64,
    pub parent: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub body: String,
    pub kind: PageKind,
    pub status: Status,
    pub menu_order: i64,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnail: Option<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            id: 0,
            parent: 0,
            title: String::new(),
            slug: String::new(),
            excerpt: String::new(),
            body: String::new(),
            kind: PageKind::Page,
            status: Status::Published,
            menu_order: 0,
            published_at: None,
            thumbnail: None,
        }
    }
}

impl Page {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = slugify(&title);
        Self {
            id,
            title,
            slug,
            ..Self::default()
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }
}

/// Lowercase ASCII slug from a title, non-alphanumeric runs collapsed to `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

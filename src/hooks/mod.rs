//! Extension hook points for the render pipeline.
//!
//! Each hook point is an ordered chain of transformation functions with a
//! fixed signature. Applying a point folds the chain in registration order,
//! starting from the value the pipeline computed; any registered function may
//! replace its input wholesale.

use crate::config::{Defaults, PagesConfig};
use crate::domain::{Page, Query};

type DefaultsHook = dyn Fn(Defaults) -> Defaults + Send + Sync;
type QueryHook = dyn Fn(Query, &PagesConfig) -> Query + Send + Sync;
type PageHook = dyn Fn(Page) -> Page + Send + Sync;
type TextHook = dyn Fn(String, &Page, &Query) -> String + Send + Sync;

#[derive(Default)]
pub struct Hooks {
    defaults: Vec<Box<DefaultsHook>>,
    query: Vec<Box<QueryHook>>,
    page: Vec<Box<PageHook>>,
    title: Vec<Box<TextHook>>,
    excerpt: Vec<Box<TextHook>>,
    template: Vec<Box<TextHook>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adjust the built-in default configuration before attribute merging.
    pub fn on_defaults<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(Defaults) -> Defaults + Send + Sync + 'static,
    {
        self.defaults.push(Box::new(f));
        self
    }

    /// Adjust or replace the fetch query before it reaches the page source.
    pub fn on_query<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(Query, &PagesConfig) -> Query + Send + Sync + 'static,
    {
        self.query.push(Box::new(f));
        self
    }

    /// Substitute the page before field derivation.
    pub fn on_page<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(Page) -> Page + Send + Sync + 'static,
    {
        self.page.push(Box::new(f));
        self
    }

    /// Adjust the displayed title.
    pub fn on_title<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(String, &Page, &Query) -> String + Send + Sync + 'static,
    {
        self.title.push(Box::new(f));
        self
    }

    /// Adjust the displayed excerpt block.
    pub fn on_excerpt<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(String, &Page, &Query) -> String + Send + Sync + 'static,
    {
        self.excerpt.push(Box::new(f));
        self
    }

    /// Replace the per-item template.
    pub fn on_template<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(String, &Page, &Query) -> String + Send + Sync + 'static,
    {
        self.template.push(Box::new(f));
        self
    }

    pub fn apply_defaults(&self, defaults: Defaults) -> Defaults {
        self.defaults.iter().fold(defaults, |acc, f| f(acc))
    }

    pub fn apply_query(&self, query: Query, config: &PagesConfig) -> Query {
        self.query.iter().fold(query, |acc, f| f(acc, config))
    }

    pub fn apply_page(&self, page: Page) -> Page {
        self.page.iter().fold(page, |acc, f| f(acc))
    }

    pub fn apply_title(&self, title: String, page: &Page, query: &Query) -> String {
        self.title.iter().fold(title, |acc, f| f(acc, page, query))
    }

    pub fn apply_excerpt(&self, excerpt: String, page: &Page, query: &Query) -> String {
        self.excerpt
            .iter()
            .fold(excerpt, |acc, f| f(acc, page, query))
    }

    pub fn apply_template(&self, template: String, page: &Page, query: &Query) -> String {
        self.template
            .iter()
            .fold(template, |acc, f| f(acc, page, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PageKind, SortOrder, Status};

    #[test]
    fn test_empty_chain_is_identity() {
        let hooks = Hooks::new();
        let defaults = hooks.apply_defaults(Defaults::default());
        assert_eq!(defaults, Defaults::default());
    }

    #[test]
    fn test_chain_folds_in_registration_order() {
        let mut hooks = Hooks::new();
        hooks.on_title(|t, _, _| format!("{}-a", t));
        hooks.on_title(|t, _, _| format!("{}-b", t));

        let page = Page::new(1, "x");
        let query = Query::children_of(&crate::config::PagesConfig {
            id: 0,
            size: "post-thumbnail".into(),
            col: 3,
        });
        assert_eq!(hooks.apply_title("t".into(), &page, &query), "t-a-b");
    }

    #[test]
    fn test_defaults_hook_replaces_value() {
        let mut hooks = Hooks::new();
        hooks.on_defaults(|mut d| {
            d.col = 6;
            d
        });
        assert_eq!(hooks.apply_defaults(Defaults::default()).col, 6);
    }

    #[test]
    fn test_query_hook_sees_config_and_replaces_wholesale() {
        let mut hooks = Hooks::new();
        hooks.on_query(|mut q, config| {
            q.parent = config.col;
            q.status = Status::Draft;
            q.order = SortOrder::Desc;
            q
        });

        let config = crate::config::PagesConfig {
            id: 1,
            size: "large".into(),
            col: 99,
        };
        let query = hooks.apply_query(Query::children_of(&config), &config);
        assert_eq!(query.parent, 99);
        assert_eq!(query.status, Status::Draft);
        assert_eq!(query.order, SortOrder::Desc);
    }

    #[test]
    fn test_page_hook_substitutes_item() {
        let mut hooks = Hooks::new();
        hooks.on_page(|mut p| {
            p.kind = PageKind::Post;
            p
        });
        let page = hooks.apply_page(Page::new(1, "a"));
        assert_eq!(page.kind, PageKind::Post);
    }
}

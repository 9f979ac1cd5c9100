use std::path::Path;
use std::sync::Arc;

use crate::app::error::Result;
use crate::config::{AppConfig, Defaults};
use crate::domain::Page;
use crate::hooks::Hooks;
use crate::platform::MemorySite;
use crate::render::Renderer;

/// Wires the shipped collaborators together. [`Renderer::new`] is the seam
/// for embedders bringing their own `PageSource`/`Platform`.
pub struct AppContext {
    pub site: Arc<MemorySite>,
    pub hooks: Arc<Hooks>,
    pub defaults: Defaults,
}

impl AppContext {
    pub fn from_site<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<Self> {
        let site = MemorySite::load(path)?.with_date_format(config.date_format.clone());
        Ok(Self {
            site: Arc::new(site),
            hooks: Arc::new(Hooks::new()),
            defaults: config.shortcode_defaults(),
        })
    }

    pub fn in_memory(pages: Vec<Page>) -> Self {
        Self {
            site: Arc::new(MemorySite::new(pages)),
            hooks: Arc::new(Hooks::new()),
            defaults: Defaults::default(),
        }
    }

    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = Arc::new(hooks);
        self
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(
            self.site.clone(),
            self.site.clone(),
            self.hooks.clone(),
            self.defaults.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcode::Attrs;

    #[test]
    fn test_in_memory_context_renders() {
        let mut page = Page::new(2, "Kid");
        page.parent = 1;

        let ctx = AppContext::in_memory(vec![page]);
        let mut attrs = Attrs::new();
        attrs.insert("id".into(), "1".into());

        let out = ctx.renderer().shortcode(&attrs);
        assert!(out.contains("Kid"));
    }

    #[test]
    fn test_with_hooks_wires_registrations() {
        let mut hooks = Hooks::new();
        hooks.on_title(|t, _, _| t.to_uppercase());

        let mut page = Page::new(2, "Kid");
        page.parent = 1;

        let ctx = AppContext::in_memory(vec![page]).with_hooks(hooks);
        let mut attrs = Attrs::new();
        attrs.insert("id".into(), "1".into());

        assert!(ctx.renderer().shortcode(&attrs).contains("KID"));
    }
}

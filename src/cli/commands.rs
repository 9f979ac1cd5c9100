use std::fs;
use std::path::Path;

use crate::app::{AppContext, Result};
use crate::config::AppConfig;
use crate::shortcode::{self, Attrs};

pub fn render(
    config: &AppConfig,
    site: &Path,
    id: Option<String>,
    size: Option<String>,
    col: Option<String>,
) -> Result<()> {
    let ctx = AppContext::from_site(site, config)?;

    let mut attrs = Attrs::new();
    if let Some(id) = id {
        attrs.insert("id".into(), id);
    }
    if let Some(size) = size {
        attrs.insert("size".into(), size);
    }
    if let Some(col) = col {
        attrs.insert("col".into(), col);
    }

    println!("{}", ctx.renderer().shortcode(&attrs));
    Ok(())
}

pub fn expand(config: &AppConfig, site: &Path, document: &Path) -> Result<()> {
    let ctx = AppContext::from_site(site, config)?;
    let content = fs::read_to_string(document)?;

    println!("{}", shortcode::expand(&content, &ctx.renderer()));
    Ok(())
}

pub fn list(config: &AppConfig, site: &Path) -> Result<()> {
    let ctx = AppContext::from_site(site, config)?;

    if ctx.site.page_count() == 0 {
        println!("No pages");
        return Ok(());
    }

    for page in ctx.site.all_pages() {
        println!(
            "{:>5}  {:>5}  {:<5} {}",
            page.id,
            page.parent,
            page.kind.as_str(),
            page.display_title()
        );
    }

    Ok(())
}

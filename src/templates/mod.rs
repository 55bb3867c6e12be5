//! Embedded site theme rendered with Tera
//!
//! All templates are embedded directly in the binary. Autoescaping is
//! disabled: entry bodies are trusted raw HTML and must pass through
//! verbatim.

use serde::Serialize;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{self, Page};
use crate::error::SiteError;

/// Embedded stylesheet, written to `css/style.css` on generate and served
/// at `/css/style.css` by the dev server.
pub const STYLESHEET: &str = include_str!("site/style.css");

/// Navigation item in the page header
#[derive(Debug, Serialize)]
struct NavItem {
    label: &'static str,
    path: &'static str,
}

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
    base: Context,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new(config: &SiteConfig) -> Result<Self, SiteError> {
        let mut tera = Tera::default();

        // Entry bodies are raw HTML; escaping would mangle them
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("partials/head.html", include_str!("site/partials/head.html")),
            (
                "partials/header.html",
                include_str!("site/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
        ])?;

        Ok(Self {
            tera,
            base: build_base_context(config),
        })
    }

    /// Render a full HTML document for one page.
    ///
    /// Pure with respect to the page: the same id always yields the same
    /// bytes for the lifetime of the renderer.
    pub fn render_page(&self, page: &Page) -> Result<String, SiteError> {
        let mut context = self.base.clone();
        context.insert("page", page);
        context.insert("entries", &page.entries);
        Ok(self.tera.render("layout.html", &context)?)
    }
}

/// Context shared by every page: config, navigation, footer year.
fn build_base_context(config: &SiteConfig) -> Context {
    let nav: Vec<NavItem> = content::all()
        .iter()
        .map(|p| NavItem {
            label: p.title,
            path: p.id.route(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("config", config);
    context.insert("nav", &nav);
    context.insert(
        "current_year",
        &chrono::Utc::now().format("%Y").to_string(),
    );
    context
}

//! Generator module - writes the rendered site to the public directory

use anyhow::Result;
use std::fs;

use crate::content::{self, Page};
use crate::templates::{TemplateRenderer, STYLESHEET};
use crate::Site;

/// Static site generator using the embedded theme
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new(&site.config)?;

        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        self.write_stylesheet()?;

        for page in content::all() {
            self.generate_page(page)?;
        }

        self.generate_manifest()?;

        Ok(())
    }

    /// Render one page to its pretty-URL location (`path/index.html`)
    fn generate_page(&self, page: &Page) -> Result<()> {
        let html = self.renderer.render_page(page)?;

        let output_path = self.site.public_dir.join(page.id.output_path());
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
        }
        fs::write(&output_path, &html)
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::debug!("Generated page: {:?}", output_path);

        Ok(())
    }

    /// Copy the embedded stylesheet into the public directory
    fn write_stylesheet(&self) -> Result<()> {
        let output_path = self.site.public_dir.join("css").join("style.css");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, STYLESHEET)?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(())
    }

    /// Generate the route manifest (JSON)
    fn generate_manifest(&self) -> Result<()> {
        let manifest: Vec<serde_json::Value> = content::all()
            .iter()
            .map(|p| {
                serde_json::json!({
                    "title": p.title,
                    "url": p.id.route(),
                    "entries": p.entries.len(),
                })
            })
            .collect();

        let output_path = self.site.public_dir.join("pages.json");
        let json = serde_json::to_string_pretty(&manifest)?;
        fs::write(&output_path, json)?;
        tracing::info!("Generated pages.json");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_site(dir: &std::path::Path) -> Site {
        Site::new(dir).unwrap()
    }

    #[test]
    fn test_generate_writes_all_pages() {
        let dir = tempfile::tempdir().unwrap();
        let site = test_site(dir.path());

        Generator::new(&site).unwrap().generate().unwrap();

        let public = dir.path().join("public");
        assert!(public.join("index.html").exists());
        assert!(public.join("download/index.html").exists());
        assert!(public.join("wspacegen/index.html").exists());
        assert!(public.join("css/style.css").exists());
        assert!(public.join("pages.json").exists());
    }

    #[test]
    fn test_generated_download_page_content() {
        let dir = tempfile::tempdir().unwrap();
        let site = test_site(dir.path());

        Generator::new(&site).unwrap().generate().unwrap();

        let html = fs::read_to_string(dir.path().join("public/download/index.html")).unwrap();
        assert!(html.contains("git clone https://github.com/wspace/ssiegl-wsdebug wsdebug"));
        assert!(html.contains("<title>wsdebug :: download</title>"));
    }

    #[test]
    fn test_regenerate_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let site = test_site(dir.path());
        let generator = Generator::new(&site).unwrap();

        generator.generate().unwrap();
        let first = fs::read_to_string(dir.path().join("public/index.html")).unwrap();

        generator.generate().unwrap();
        let second = fs::read_to_string(dir.path().join("public/index.html")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_manifest_lists_every_route() {
        let dir = tempfile::tempdir().unwrap();
        let site = test_site(dir.path());

        Generator::new(&site).unwrap().generate().unwrap();

        let json = fs::read_to_string(dir.path().join("public/pages.json")).unwrap();
        let manifest: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest[0]["url"], "/");
        assert_eq!(manifest[1]["url"], "/download/");
        assert_eq!(manifest[2]["entries"], 3);
    }
}

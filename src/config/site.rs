//! Site configuration (_config.yml)
//!
//! Only presentation settings live here. Page content itself is compiled
//! into the binary and is not configurable.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub tagline: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "wsdebug".to_string(),
            tagline: "a debugger for the whitespace programming language".to_string(),
            author: "Stefan Siegl".to_string(),

            url: "https://github.com/wspace/ssiegl-wsdebug".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

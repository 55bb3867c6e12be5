//! List site content

use anyhow::Result;

use crate::content;

/// List site content by type
pub fn run(content_type: &str) -> Result<()> {
    match content_type {
        "page" | "pages" => {
            let pages = content::all();
            println!("Pages ({}):", pages.len());
            for page in pages {
                println!("  {} ({} entries)", page.title, page.entries.len());
            }
        }
        "route" | "routes" => {
            let pages = content::all();
            println!("Routes ({}):", pages.len());
            for page in pages {
                println!("  {} -> {}", page.id.route(), page.id.output_path());
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: page, route", content_type);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_known_types() {
        assert!(run("page").is_ok());
        assert!(run("routes").is_ok());
    }

    #[test]
    fn test_list_unknown_type() {
        assert!(run("tag").is_err());
    }
}

//! Page and entry models

use serde::Serialize;

/// Raw, trusted HTML.
///
/// Bodies are author-controlled literals compiled into the binary and are
/// injected into templates without escaping. Nothing user-supplied ever
/// reaches them.
pub type RawHtml = &'static str;

/// A single heading/body block on a page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Entry {
    /// Block heading
    pub heading: &'static str,

    /// Block body, raw HTML
    pub body: RawHtml,
}

/// Identifier of a site page.
///
/// The set is closed: pages are defined at compile time and there is no
/// runtime creation, mutation, or deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Index,
    Download,
    Wspacegen,
}

impl PageId {
    /// All page ids, in navigation order.
    pub const ALL: [PageId; 3] = [PageId::Index, PageId::Download, PageId::Wspacegen];

    /// Resolve a request path or CLI name to a page id.
    ///
    /// Accepts the bare name, a route with slashes, and the historical
    /// file names (`/download/`, `download.php`, `index.html`, ...). An
    /// empty path means the index page.
    pub fn parse(ident: &str) -> Option<PageId> {
        let name = ident.trim_matches('/');
        let name = name
            .strip_suffix(".html")
            .or_else(|| name.strip_suffix(".php"))
            .unwrap_or(name);

        match name {
            "" | "index" => Some(PageId::Index),
            "download" => Some(PageId::Download),
            "wspacegen" => Some(PageId::Wspacegen),
            _ => None,
        }
    }

    /// Route for this page, with a trailing slash.
    pub fn route(self) -> &'static str {
        match self {
            PageId::Index => "/",
            PageId::Download => "/download/",
            PageId::Wspacegen => "/wspacegen/",
        }
    }

    /// Output file relative to the public directory.
    pub fn output_path(self) -> &'static str {
        match self {
            PageId::Index => "index.html",
            PageId::Download => "download/index.html",
            PageId::Wspacegen => "wspacegen/index.html",
        }
    }
}

/// A statically defined page: one title plus its entries in render order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Page {
    /// Page identifier
    pub id: PageId,

    /// Page title, shown in the header and the document title
    pub title: &'static str,

    /// Entries, rendered in declaration order
    pub entries: &'static [Entry],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_names() {
        assert_eq!(PageId::parse("index"), Some(PageId::Index));
        assert_eq!(PageId::parse("download"), Some(PageId::Download));
        assert_eq!(PageId::parse("wspacegen"), Some(PageId::Wspacegen));
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(PageId::parse("/"), Some(PageId::Index));
        assert_eq!(PageId::parse(""), Some(PageId::Index));
        assert_eq!(PageId::parse("/download/"), Some(PageId::Download));
        assert_eq!(PageId::parse("/wspacegen"), Some(PageId::Wspacegen));
    }

    #[test]
    fn test_parse_historical_file_names() {
        assert_eq!(PageId::parse("/index.php"), Some(PageId::Index));
        assert_eq!(PageId::parse("download.php"), Some(PageId::Download));
        assert_eq!(PageId::parse("/wspacegen.html"), Some(PageId::Wspacegen));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(PageId::parse("somecode"), None);
        assert_eq!(PageId::parse("/favicon.ico"), None);
        assert_eq!(PageId::parse("/download/extra"), None);
    }
}

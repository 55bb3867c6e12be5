//! The site's pages
//!
//! All content is defined here as literals. Bodies are trusted raw HTML
//! written by the site author; render order equals declaration order.

use crate::error::SiteError;

use super::{Entry, Page, PageId};

static INDEX_ENTRIES: [Entry; 4] = [
    Entry {
        heading: "what is it?",
        body: "wsdebug is a debugger for the more or less famous whitespace \
               programming language, coming along with a rather fast \
               interpreter (wsi).",
    },
    Entry {
        heading: "what the hell is whitespace?",
        body: r#"Most programming languages like C or Perl do not care for
               white space characters (like tab, space or newline/linefeed).
               The whitespace programming language works just the other way
               round, don't care for any character but those white space ones.
               <br>
               On the whole it's just another geeky language like Brainf'ck
               and others, however more adicting. For details see
               <a href="http://compsoc.dur.ac.uk/whitespace/">these pages</a>,
               put together by Edwin Brady, the inventor of this language."#,
    },
    Entry {
        heading: "why do I need a debugger then?",
        body: "That's kinda easy to answer. If you've written a whole lot of \
               instructions you'll probably reach the point, where you get \
               lost. Then just put your script into wsdebug and step through \
               your bunch of whitespace instructions and watch how each \
               command manipulates the stack (or heap). \
               <br> \
               You're using another interpreter, that just somewhere aborts? \
               Just run your prog through either wsi and wsdebug and watch \
               out what it tells, i.e. if a ws-program aborts somewhere, it \
               always writes out where it crashed along with a stack dump.",
    },
    Entry {
        heading: "what now?",
        body: r#"<ul>
                 <li><a href="/download/">download</a></li>
                 <li><a href="/wspacegen/">wspacegen</a></li>
               </ul>"#,
    },
];

static DOWNLOAD_ENTRIES: [Entry; 2] = [
    Entry {
        heading: "what is it?",
        body: r#"wsdebug is a debugger for the more or less famous whitespace
               programming language, coming along with a rather fast
               interpreter (wsi).
               [ <a href="/">more info</a> ]"#,
    },
    Entry {
        heading: "how to get wsdebug?",
        body: r#"There is no tarball release, development happens straight in
               the public repository (which is however working quite
               reliable). Do something like this on your command prompt: <pre>
               git clone https://github.com/wspace/ssiegl-wsdebug wsdebug
               </pre>"#,
    },
];

static WSPACEGEN_ENTRIES: [Entry; 3] = [
    Entry {
        heading: "wspacegen",
        body: "wspacegen is a nice little tool, allowing to easily put a \
               whitespace program together. It offers you a hierarchic menu \
               system, where you simply choose the commands you'd like to \
               append, one after another. \
               <br>It's using wsdebug's approach towards memory management, \
               actually wspacegen and wsdebug used to be one thing, but got \
               forked right after starting.",
    },
    Entry {
        heading: "wspacegen's hiccups?",
        body: "It's yet in pre-alpha state, not allowing to edit or delete \
               stuff. But on the whole I guess it's a good idea and a new \
               approach towards whitespace coding.",
    },
    Entry {
        heading: "where can I get it?",
        body: r#"If you'd like to have a closer look at wspacegen,
               <a href="http://sf.net/projects/wspacegen">come here</a>"#,
    },
];

static PAGES: [Page; 3] = [
    Page {
        id: PageId::Index,
        title: "information",
        entries: &INDEX_ENTRIES,
    },
    Page {
        id: PageId::Download,
        title: "download",
        entries: &DOWNLOAD_ENTRIES,
    },
    Page {
        id: PageId::Wspacegen,
        title: "wspacegen",
        entries: &WSPACEGEN_ENTRIES,
    },
];

/// All pages, in navigation order.
pub fn all() -> &'static [Page] {
    &PAGES
}

/// Look up a page by id.
pub fn get(id: PageId) -> &'static Page {
    match id {
        PageId::Index => &PAGES[0],
        PageId::Download => &PAGES[1],
        PageId::Wspacegen => &PAGES[2],
    }
}

/// Resolve a request path or name to its page.
pub fn find(ident: &str) -> Result<&'static Page, SiteError> {
    let id = PageId::parse(ident).ok_or_else(|| SiteError::PageNotFound(ident.to_string()))?;
    Ok(get(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_counts() {
        assert_eq!(get(PageId::Index).entries.len(), 4);
        assert_eq!(get(PageId::Download).entries.len(), 2);
        assert_eq!(get(PageId::Wspacegen).entries.len(), 3);
    }

    #[test]
    fn test_index_entry_order() {
        let headings: Vec<_> = get(PageId::Index)
            .entries
            .iter()
            .map(|e| e.heading)
            .collect();
        assert_eq!(
            headings,
            vec![
                "what is it?",
                "what the hell is whitespace?",
                "why do I need a debugger then?",
                "what now?",
            ]
        );
    }

    #[test]
    fn test_download_references_git() {
        let page = get(PageId::Download);
        assert!(page
            .entries
            .iter()
            .any(|e| e.body.contains("git clone https://github.com/wspace/ssiegl-wsdebug wsdebug")));
    }

    #[test]
    fn test_get_matches_id() {
        for id in PageId::ALL {
            assert_eq!(get(id).id, id);
        }
    }

    #[test]
    fn test_find_unknown_page() {
        let err = find("/somecode/").unwrap_err();
        assert!(matches!(err, SiteError::PageNotFound(_)));
        assert!(err.to_string().contains("somecode"));
    }

    #[test]
    fn test_find_known_routes() {
        assert_eq!(find("/").unwrap().id, PageId::Index);
        assert_eq!(find("/download/").unwrap().id, PageId::Download);
        assert_eq!(find("wspacegen").unwrap().id, PageId::Wspacegen);
    }
}

//! Error types

use thiserror::Error;

/// Errors produced while resolving or rendering site pages.
///
/// Page content is compiled into the binary, so the only failure mode a
/// caller can trigger is asking for an identifier outside the page set.
#[derive(Debug, Error)]
pub enum SiteError {
    /// The requested identifier does not name a site page.
    #[error("page not found: {0}")]
    PageNotFound(String),

    /// The embedded theme failed to render.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

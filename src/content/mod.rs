//! Content module - the statically defined site pages

mod page;
mod registry;

pub use page::{Entry, Page, PageId, RawHtml};
pub use registry::{all, find, get};

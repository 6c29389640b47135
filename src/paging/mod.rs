//! Cursor-based pagination of Plugins API listings.
//!
//! Listing endpoints return one page at a time together with absolute
//! `next_page_url` / `previous_page_url` links. The `PageToken` query parameter
//! of those links is the only cursor the API understands, so the links are
//! reduced to tokens ([`PaginationMeta`]) and the [`drain`] / [`paginate`]
//! helpers follow them until the last page.

mod cursor;
mod pager;

pub use cursor::{Page, Pagination, PaginationMeta, RawPageMeta, extract_page_token, list_url};
pub use pager::{drain, pages, paginate};

//! Pagination options, page metadata and the `PageToken` cursor.

use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

const PAGE_TOKEN: &str = "PageToken";

/// Options for a single page request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub page_token: Option<String>,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that continue a listing from `token`.
    pub fn after(token: impl Into<String>) -> Self {
        Self {
            page_token: Some(token.into()),
            ..Default::default()
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    /// Encodes the supplied options as `Page`, `PageSize`, `PageToken`, in
    /// that order. Unset options are omitted.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(page) = self.page {
            serializer.append_pair("Page", &page.to_string());
        }
        if let Some(page_size) = self.page_size {
            serializer.append_pair("PageSize", &page_size.to_string());
        }
        if let Some(ref token) = self.page_token {
            serializer.append_pair(PAGE_TOKEN, token);
        }
        serializer.finish()
    }
}

/// Appends the pagination query to `path`. The `?` is always present, even
/// when no option is set.
pub fn list_url(path: &str, pagination: Option<&Pagination>) -> String {
    let query = pagination.map(Pagination::to_query).unwrap_or_default();
    format!("{}?{}", path, query)
}

/// Extracts the `PageToken` query parameter from an absolute page URL.
pub fn extract_page_token(url: Option<&str>) -> Option<String> {
    let url = url.filter(|u| !u.is_empty())?;
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == PAGE_TOKEN)
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
}

/// Page metadata as it appears on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawPageMeta {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub next_page_url: Option<String>,
    #[serde(default)]
    pub previous_page_url: Option<String>,
}

/// Cursor tokens of a page. A missing token means there is no such page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_token: Option<String>,
}

impl From<RawPageMeta> for PaginationMeta {
    fn from(raw: RawPageMeta) -> Self {
        Self {
            next_token: extract_page_token(raw.next_page_url.as_deref()),
            previous_token: extract_page_token(raw.previous_page_url.as_deref()),
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, meta: PaginationMeta) -> Self {
        Self { items, meta }
    }

    /// A page with no following page.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            meta: PaginationMeta::default(),
        }
    }

    pub fn is_last(&self) -> bool {
        self.meta.next_token.is_none()
    }
}

//! Draining of cursor-paginated listings.

use std::future::Future;

use futures::stream::{self, Stream, StreamExt, TryStreamExt};

use super::cursor::Page;
use crate::{Error, Result};

enum Cursor {
    Start,
    Next(String),
    Done,
}

/// Streams the pages of a listing. `fetch` receives `None` for the first page
/// and the previous page's `next_token` afterwards. The stream ends after the
/// first page without a `next_token`, or after the first error.
pub fn pages<T, F, Fut>(fetch: F) -> impl Stream<Item = Result<Page<T>>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    stream::try_unfold(
        (fetch, Cursor::Start, 0usize),
        |(mut fetch, cursor, index)| async move {
            let token = match cursor {
                Cursor::Done => return Ok(None),
                Cursor::Start => None,
                Cursor::Next(token) => Some(token),
            };

            tracing::debug!(page = index, token = ?token, "Fetching page");
            let page = fetch(token).await?;

            let next = match page.meta.next_token {
                Some(ref token) => Cursor::Next(token.clone()),
                None => Cursor::Done,
            };
            Ok(Some((page, (fetch, next, index + 1))))
        },
    )
}

/// Streams the items of a listing in server order, one page request at a time.
pub fn paginate<T, F, Fut>(fetch: F) -> impl Stream<Item = Result<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    pages(fetch)
        .map_ok(|page| stream::iter(page.items.into_iter().map(Ok::<T, Error>)))
        .try_flatten()
}

/// Collects every item of a listing. Any page failure discards what was
/// collected so far and is returned as is.
pub async fn drain<T, F, Fut>(fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let items = paginate(fetch).try_collect::<Vec<T>>().await?;
    Ok(items)
}

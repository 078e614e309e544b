//! Cursor-paged results and the drainer that flattens them.

use serde::{Deserialize, Serialize};

/// Position in an ordered result stream.
///
/// `after` is the forward continuation token; `None` means the stream has
/// no further pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub limit: u32,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

/// One page of a paginated method's result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub cursor: Cursor,
}

/// A base request augmented with the cursor fields every paginated
/// Conduit method accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paginated<A> {
    #[serde(flatten)]
    pub request: A,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl<A> Paginated<A> {
    /// Wrap a base request with no cursor fields set.
    pub fn new(request: A) -> Self {
        Paginated {
            request,
            before: None,
            after: None,
            order: None,
            limit: None,
        }
    }

    /// Builtin result order, e.g. `"newest"`.
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Page size the server should honor.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resume forward from a previously returned cursor token.
    pub fn after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// Page backwards from a cursor token.
    pub fn before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }
}

/// Drive a paginated method until its cursor is exhausted, concatenating
/// every page's items in arrival order.
///
/// The method is invoked with `args` as given, then once per continuation
/// with `after` replaced by the previous page's token, so no token is
/// ever reused. Pages are fetched strictly sequentially, nothing is
/// deduplicated, and no page cap is enforced — a server that keeps
/// returning a token keeps getting asked. A page failure propagates
/// immediately and discards the items accumulated so far; resume from the
/// last known cursor with [`Paginated::after`] if that matters.
pub async fn request_all<A, T, M, Fut, E>(mut method: M, args: Paginated<A>) -> Result<Vec<T>, E>
where
    A: Clone,
    M: FnMut(Paginated<A>) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let mut request = args;
    let mut items = Vec::new();
    loop {
        let page = method(request.clone()).await?;
        items.extend(page.data);
        tracing::trace!(total = items.len(), "page drained");
        match page.cursor.after {
            Some(after) => request.after = Some(after),
            None => break,
        }
    }
    Ok(items)
}

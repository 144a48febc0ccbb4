//! Cursor paginator

use super::types::{Collection, Cursor, CursorSpec, PaginationState};
use crate::error::{Error, Result};
use crate::http::{Sleeper, Transport};
use crate::types::{scalar_to_query, JsonValue, QueryParams};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Walks a cursor-paginated listing until it returns an empty page
#[derive(Clone)]
pub struct Paginator {
    transport: Arc<dyn Transport>,
    sleeper: Arc<dyn Sleeper>,
    page_delay: Duration,
}

impl Paginator {
    /// Create a paginator pausing `page_delay` between pages
    pub fn new(transport: Arc<dyn Transport>, sleeper: Arc<dyn Sleeper>, page_delay: Duration) -> Self {
        Self {
            transport,
            sleeper,
            page_delay,
        }
    }

    /// Collect every item of the listing at `url`.
    ///
    /// A transport failure ends the run early and the items fetched before
    /// it are returned. Only contract violations of the listing itself fail:
    /// a page that is not an array, or a last item without a scalar cursor
    /// field.
    ///
    /// The run relies on the upstream cursor advancing. A listing that keeps
    /// returning the same last cursor never terminates.
    pub async fn collect(
        &self,
        url: &str,
        base_params: &QueryParams,
        cursor: &CursorSpec,
    ) -> Result<Vec<JsonValue>> {
        Ok(self.collect_detailed(url, base_params, cursor).await?.items)
    }

    /// Like [`collect`](Self::collect), but reports whether the run was cut
    /// short and by what
    pub async fn collect_detailed(
        &self,
        url: &str,
        base_params: &QueryParams,
        cursor: &CursorSpec,
    ) -> Result<Collection> {
        let mut state = PaginationState::new();
        let mut items = Vec::new();

        loop {
            let query = state.query(base_params);

            let body = match self.transport.get(url, query).await {
                Ok(body) => body,
                Err(e) if e.interrupts_pagination() => {
                    warn!(
                        url,
                        pages = state.pages,
                        items = items.len(),
                        "Request failed during pagination, returning partial result: {e}"
                    );
                    return Ok(Collection {
                        items,
                        pages: state.pages,
                        interrupted: Some(e),
                    });
                }
                Err(e) => return Err(e),
            };

            let page = into_page(body)?;
            if page.is_empty() {
                info!(url, pages = state.pages, items = items.len(), "Pagination complete");
                return Ok(Collection {
                    items,
                    pages: state.pages,
                    interrupted: None,
                });
            }

            let next = next_cursor(&page, cursor)?;
            debug!(url, page_items = page.len(), cursor = %next.value, "Fetched page");

            state.advance(next);
            items.extend(page);

            self.sleeper.sleep(self.page_delay).await;
        }
    }
}

impl std::fmt::Debug for Paginator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("page_delay", &self.page_delay)
            .finish_non_exhaustive()
    }
}

/// A page is a JSON array; `null` (empty body) counts as an empty page
pub(crate) fn into_page(body: JsonValue) -> Result<Vec<JsonValue>> {
    match body {
        JsonValue::Array(items) => Ok(items),
        JsonValue::Null => Ok(Vec::new()),
        other => Err(Error::unexpected(format!(
            "expected a JSON array page, got {}",
            kind(&other)
        ))),
    }
}

/// Cursor for the next round, read from the last item of `page`
fn next_cursor(page: &[JsonValue], spec: &CursorSpec) -> Result<Cursor> {
    page.last()
        .and_then(|item| item.get(&spec.field))
        .and_then(scalar_to_query)
        .map(|value| Cursor {
            key: spec.param.clone(),
            value,
        })
        .ok_or_else(|| Error::MissingCursorField {
            field: spec.field.clone(),
        })
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

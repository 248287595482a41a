//! Page title search and list summaries.

use crate::browser::preview::{derive_page_preview, PagePreview};
use crate::model::page::{Page, PageId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Pages whose title contains `query`, case-insensitively.
///
/// The query is trimmed; an empty query matches every page. Source order is
/// preserved.
pub fn filter_pages<'a>(pages: &'a [Page], query: &str) -> Vec<&'a Page> {
    let needle = query.trim().to_lowercase();
    pages
        .iter()
        .filter(|page| needle.is_empty() || page.title.to_lowercase().contains(&needle))
        .collect()
}

/// One row of the workspace page list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub id: PageId,
    pub title: String,
    pub updated_at: DateTime<Utc>,
    pub is_selected: bool,
    #[serde(flatten)]
    pub preview: PagePreview,
}

/// Summaries of the pages matching `query`.
pub fn list_page_summaries(
    pages: &[Page],
    query: &str,
    selected_page_id: Option<PageId>,
) -> Vec<PageSummary> {
    filter_pages(pages, query)
        .into_iter()
        .map(|page| PageSummary {
            id: page.id,
            title: page.title.clone(),
            updated_at: page.updated_at,
            is_selected: selected_page_id == Some(page.id),
            preview: derive_page_preview(&page.content),
        })
        .collect()
}

//! UI state of the advocates table.
//!
//! The state round-trips through the page URL, so every interaction (sorting,
//! filtering, paging, reset) is a link to the state it produces.

use serde::Serialize;

use crate::domain::query::{AdvocateQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::domain::types::{ExperienceBucket, SortField, SortOrder};

fn is_asc(order: &SortOrder) -> bool {
    *order == SortOrder::Asc
}

fn is_first_page(page: &usize) -> bool {
    *page == DEFAULT_PAGE
}

fn is_default_limit(limit: &usize) -> bool {
    *limit == DEFAULT_LIMIT
}

/// Filter, sort and paging selections of the table.
///
/// Serializes to the query string understood by both `/` and
/// `/api/advocates`, omitting values that equal their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub degree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceBucket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortField>,
    #[serde(skip_serializing_if = "is_asc")]
    pub sort_order: SortOrder,
    #[serde(skip_serializing_if = "is_first_page")]
    pub page: usize,
    #[serde(skip_serializing_if = "is_default_limit")]
    pub limit: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from(&AdvocateQuery::default())
    }
}

impl From<&AdvocateQuery> for ViewState {
    fn from(query: &AdvocateQuery) -> Self {
        Self {
            search: query.search.clone(),
            degree: query.degree.clone().unwrap_or_default(),
            experience: query.experience,
            sort_by: query.sort_by,
            sort_order: query.sort_order,
            page: query.page,
            limit: query.limit,
        }
    }
}

impl ViewState {
    /// Clicking the active column flips the order; any other column sorts
    /// ascending. Either way the table returns to the first page.
    #[must_use]
    pub fn toggle_sort(&self, field: SortField) -> Self {
        let sort_order = if self.sort_by == Some(field) {
            self.sort_order.toggled()
        } else {
            SortOrder::Asc
        };

        Self {
            sort_by: Some(field),
            sort_order,
            page: DEFAULT_PAGE,
            ..self.clone()
        }
    }

    /// Clears search, filters and sorting.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Arrow shown next to a column header.
    pub fn sort_indicator(&self, field: SortField) -> &'static str {
        match (self.sort_by == Some(field), self.sort_order) {
            (false, _) => "↕",
            (true, SortOrder::Asc) => "↑",
            (true, SortOrder::Desc) => "↓",
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.search.trim().is_empty() || !self.degree.is_empty() || self.experience.is_some()
    }

    /// Link to the index page showing this state.
    pub fn href(&self) -> String {
        match serde_html_form::to_string(self) {
            Ok(query) if query.is_empty() => "/".to_string(),
            Ok(query) => format!("/?{query}"),
            Err(err) => {
                log::error!("Failed to encode view state: {err}");
                "/".to_string()
            }
        }
    }
}

//! Query string parameters accepted by the listing endpoint and page.

use serde::Deserialize;
use validator::Validate;

use crate::domain::query::{AdvocateQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::domain::types::{ExperienceBucket, SortField, SortOrder};
use crate::forms::FormError;

/// Raw query string as sent by the browser. Every value is optional text so
/// that malformed numbers can fall back to defaults instead of failing
/// extraction.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocatesQueryForm {
    pub search: Option<String>,
    pub degree: Option<String>,
    pub experience: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Parsed parameters checked against their allowed ranges.
#[derive(Debug, Validate)]
pub struct AdvocatesQueryPayload {
    pub search: String,
    pub degree: String,
    pub experience: Option<ExperienceBucket>,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
    #[validate(range(min = 1))]
    pub page: i64,
    #[validate(range(min = 1, max = 1000))]
    pub limit: i64,
}

fn parse_or(value: Option<&str>, default: usize) -> i64 {
    value
        .map(str::trim)
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(default as i64)
}

impl From<AdvocatesQueryForm> for AdvocatesQueryPayload {
    fn from(form: AdvocatesQueryForm) -> Self {
        Self {
            page: parse_or(form.page.as_deref(), DEFAULT_PAGE),
            limit: parse_or(form.limit.as_deref(), DEFAULT_LIMIT),
            experience: form
                .experience
                .as_deref()
                .and_then(ExperienceBucket::from_param),
            sort_by: form.sort_by.as_deref().and_then(SortField::from_param),
            sort_order: form
                .sort_order
                .as_deref()
                .map(SortOrder::from_param)
                .unwrap_or_default(),
            search: form.search.unwrap_or_default(),
            degree: form.degree.unwrap_or_default(),
        }
    }
}

impl TryFrom<AdvocatesQueryForm> for AdvocateQuery {
    type Error = FormError;

    fn try_from(form: AdvocatesQueryForm) -> Result<Self, Self::Error> {
        let payload = AdvocatesQueryPayload::from(form);
        payload.validate()?;

        Ok(AdvocateQuery {
            search: payload.search,
            degree: (!payload.degree.is_empty()).then_some(payload.degree),
            experience: payload.experience,
            sort_by: payload.sort_by,
            sort_order: payload.sort_order,
            page: payload.page as usize,
            limit: payload.limit as usize,
        })
    }
}

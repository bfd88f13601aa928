//! Filter, sort and paginate pipeline over the advocate list.
//!
//! This is the single implementation of the listing semantics: the JSON API
//! and the rendered table both call [`query`].

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::advocate::Advocate;
use crate::domain::types::{ExperienceBucket, SortField, SortOrder};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 50;

/// Description of one requested view of the advocate list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvocateQuery {
    pub search: String,
    pub degree: Option<String>,
    pub experience: Option<ExperienceBucket>,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
    pub page: usize,
    pub limit: usize,
}

impl Default for AdvocateQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            degree: None,
            experience: None,
            sort_by: None,
            sort_order: SortOrder::Asc,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl AdvocateQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restricts results to an exact degree. An empty value clears the filter.
    pub fn degree(mut self, degree: impl Into<String>) -> Self {
        let degree = degree.into();
        self.degree = (!degree.is_empty()).then_some(degree);
        self
    }

    pub fn experience(mut self, bucket: ExperienceBucket) -> Self {
        self.experience = Some(bucket);
        self
    }

    pub fn sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = Some(field);
        self.sort_order = order;
        self
    }

    pub fn paginate(mut self, page: usize, limit: usize) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    fn matches(&self, advocate: &Advocate, needle: Option<&str>) -> bool {
        if let Some(needle) = needle
            && !advocate.matches_search(needle)
        {
            return false;
        }
        if let Some(degree) = &self.degree
            && advocate.degree.as_str() != degree
        {
            return false;
        }
        match self.experience {
            Some(bucket) => bucket.contains(advocate.years_of_experience),
            None => true,
        }
    }
}

/// Pagination metadata attached to every result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub limit: usize,
    /// Number of records left after filtering, before slicing.
    pub total_count: usize,
    pub total_pages: usize,
    pub has_more: bool,
}

/// One page of advocates plus the metadata describing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryResult {
    pub items: Vec<Advocate>,
    pub pagination: PageInfo,
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Number(u64),
    Text(String),
}

fn sort_key(advocate: &Advocate, field: SortField) -> SortKey {
    match field {
        SortField::FirstName => SortKey::Text(advocate.first_name.to_lowercase()),
        SortField::LastName => SortKey::Text(advocate.last_name.to_lowercase()),
        SortField::City => SortKey::Text(advocate.city.to_lowercase()),
        SortField::Degree => SortKey::Text(advocate.degree.to_lowercase()),
        SortField::YearsOfExperience => SortKey::Number(u64::from(advocate.years_of_experience)),
        SortField::PhoneNumber => SortKey::Number(advocate.phone_number.get()),
    }
}

/// Stable sort; descending order swaps the comparator operands so that
/// equal keys keep their relative order in both directions.
fn sort_advocates(advocates: Vec<&Advocate>, field: SortField, order: SortOrder) -> Vec<&Advocate> {
    let mut keyed: Vec<(SortKey, &Advocate)> = advocates
        .into_iter()
        .map(|advocate| (sort_key(advocate, field), advocate))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| -> Ordering {
        match order {
            SortOrder::Asc => a.cmp(b),
            SortOrder::Desc => b.cmp(a),
        }
    });

    keyed.into_iter().map(|(_, advocate)| advocate).collect()
}

/// Applies search, degree and experience filters, sorting and pagination.
///
/// Page and limit below one are treated as one. Out of range pages produce
/// an empty item list.
pub fn query(records: &[Advocate], request: &AdvocateQuery) -> QueryResult {
    // Blank input disables the search; otherwise the term is used as typed.
    let needle = (!request.search.trim().is_empty()).then(|| request.search.to_lowercase());

    let mut filtered: Vec<&Advocate> = records
        .iter()
        .filter(|advocate| request.matches(advocate, needle.as_deref()))
        .collect();

    if let Some(field) = request.sort_by {
        filtered = sort_advocates(filtered, field, request.sort_order);
    }

    let page = request.page.max(1);
    let limit = request.limit.max(1);
    let total_count = filtered.len();

    let start = (page - 1).saturating_mul(limit);
    let end = start.saturating_add(limit);
    let items = filtered
        .get(start.min(total_count)..end.min(total_count))
        .unwrap_or_default()
        .iter()
        .map(|advocate| (*advocate).clone())
        .collect();

    QueryResult {
        items,
        pagination: PageInfo {
            page,
            limit,
            total_count,
            total_pages: total_count.div_ceil(limit),
            has_more: end < total_count,
        },
    }
}

/// Sorted distinct degrees present in `records`.
pub fn distinct_degrees(records: &[Advocate]) -> Vec<String> {
    records
        .iter()
        .map(|advocate| advocate.degree.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

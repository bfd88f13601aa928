use crate::domain::query::{self, AdvocateQuery, DEFAULT_LIMIT, distinct_degrees};
use crate::domain::types::{ExperienceBucket, SortField, SortOrder};
use crate::dto::main::{
    ActiveFilter, AdvocateRow, ColumnHeader, HiddenField, IndexPageData, PageLink, SelectOption,
};
use crate::forms::advocates::AdvocatesQueryForm;
use crate::pagination::Paginated;
use crate::repository::AdvocateReader;
use crate::services::ServiceResult;
use crate::view::ViewState;

const COLUMNS: [(&str, Option<SortField>); 7] = [
    ("First Name", Some(SortField::FirstName)),
    ("Last Name", Some(SortField::LastName)),
    ("City", Some(SortField::City)),
    ("Degree", Some(SortField::Degree)),
    ("Specialties", None),
    ("Years of Experience", Some(SortField::YearsOfExperience)),
    ("Phone Number", Some(SortField::PhoneNumber)),
];

fn active_filters(state: &ViewState) -> Vec<ActiveFilter> {
    let mut filters = Vec::new();
    if !state.search.trim().is_empty() {
        filters.push(ActiveFilter {
            label: "Search",
            value: state.search.clone(),
        });
    }
    if !state.degree.is_empty() {
        filters.push(ActiveFilter {
            label: "Degree",
            value: state.degree.clone(),
        });
    }
    if let Some(bucket) = state.experience {
        filters.push(ActiveFilter {
            label: "Experience",
            value: bucket.as_str().to_string(),
        });
    }
    filters
}

/// Sort and page size survive a filter change; the page does not.
fn hidden_fields(state: &ViewState) -> Vec<HiddenField> {
    let mut fields = Vec::new();
    if let Some(field) = state.sort_by {
        fields.push(HiddenField {
            name: "sortBy",
            value: field.as_str().to_string(),
        });
    }
    if state.sort_order == SortOrder::Desc {
        fields.push(HiddenField {
            name: "sortOrder",
            value: state.sort_order.as_str().to_string(),
        });
    }
    if state.limit != DEFAULT_LIMIT {
        fields.push(HiddenField {
            name: "limit",
            value: state.limit.to_string(),
        });
    }
    fields
}

/// Loads the advocates table for the main index page.
pub fn load_index_page<R>(repo: &R, form: AdvocatesQueryForm) -> ServiceResult<IndexPageData>
where
    R: AdvocateReader + ?Sized,
{
    let query = AdvocateQuery::try_from(form)?;
    let state = ViewState::from(&query);

    let advocates = repo.list_advocates().map_err(|err| {
        log::error!("Failed to load advocates: {err}");
        err
    })?;
    let result = query::query(&advocates, &query);

    let offset = (result.pagination.page - 1).saturating_mul(result.pagination.limit);
    let rows = result
        .items
        .iter()
        .enumerate()
        .map(|(index, advocate)| AdvocateRow::new(advocate, offset + index))
        .collect();
    let advocates_page = Paginated::new(
        rows,
        result.pagination.page,
        result.pagination.total_pages,
    );

    let columns = COLUMNS
        .iter()
        .map(|&(label, field)| match field {
            Some(field) => ColumnHeader {
                label,
                sortable: true,
                indicator: state.sort_indicator(field),
                href: Some(state.toggle_sort(field).href()),
            },
            None => ColumnHeader {
                label,
                sortable: false,
                indicator: "",
                href: None,
            },
        })
        .collect();

    let degrees = distinct_degrees(&advocates)
        .into_iter()
        .map(|degree| SelectOption {
            selected: degree == state.degree,
            label: degree.clone(),
            value: degree,
        })
        .collect();

    let experience_options = ExperienceBucket::ALL
        .iter()
        .map(|bucket| SelectOption {
            value: bucket.as_str().to_string(),
            label: bucket.label().to_string(),
            selected: state.experience == Some(*bucket),
        })
        .collect();

    let page_links = advocates_page
        .pages
        .iter()
        .map(|page| PageLink {
            number: *page,
            href: page.map(|number| state.with_page(number).href()),
            current: *page == Some(advocates_page.page),
        })
        .collect();

    let previous_href = advocates_page
        .has_previous()
        .then(|| state.with_page(advocates_page.page - 1).href());
    let next_href = advocates_page
        .has_next()
        .then(|| state.with_page(advocates_page.page + 1).href());

    Ok(IndexPageData {
        total_count: result.pagination.total_count,
        total_records: advocates.len(),
        active_filters: active_filters(&state),
        columns,
        degrees,
        experience_options,
        page_links,
        previous_href,
        next_href,
        reset_href: state.reset().href(),
        has_filters: state.has_filters(),
        hidden_fields: hidden_fields(&state),
        advocates: advocates_page,
        search: state.search,
    })
}

//! DTOs shaped for the advocates table template.

use serde::Serialize;

use crate::domain::advocate::Advocate;
use crate::pagination::Paginated;

/// Specialties listed in a row before the rest collapse into a count.
pub const SPECIALTIES_SHOWN: usize = 3;

/// One table row, with values preformatted for display.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AdvocateRow {
    /// Record id, or the row position when the record has none.
    pub key: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Leading specialties; the remainder is only counted.
    pub specialties: Vec<String>,
    pub extra_specialties: usize,
    pub years_of_experience: u32,
    pub phone_number: String,
    pub phone_href: String,
}

impl AdvocateRow {
    pub fn new(advocate: &Advocate, position: usize) -> Self {
        Self {
            key: advocate
                .id
                .map_or_else(|| format!("row-{position}"), |id| id.to_string()),
            first_name: advocate.first_name.to_string(),
            last_name: advocate.last_name.to_string(),
            city: advocate.city.to_string(),
            degree: advocate.degree.to_string(),
            specialties: advocate
                .specialties
                .iter()
                .take(SPECIALTIES_SHOWN)
                .cloned()
                .collect(),
            extra_specialties: advocate.specialties.len().saturating_sub(SPECIALTIES_SHOWN),
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number.formatted(),
            phone_href: format!("tel:{}", advocate.phone_number),
        }
    }
}

/// Table column header. Only sortable columns carry a link.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnHeader {
    pub label: &'static str,
    pub sortable: bool,
    pub indicator: &'static str,
    pub href: Option<String>,
}

/// Filter currently narrowing the table, shown as a chip.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActiveFilter {
    pub label: &'static str,
    pub value: String,
}

/// Entry of a filter select box.
#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Hidden form input carrying state the filter form does not show.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HiddenField {
    pub name: &'static str,
    pub value: String,
}

/// Page navigation entry; gaps have neither number nor link.
#[derive(Debug, Clone, Serialize)]
pub struct PageLink {
    pub number: Option<usize>,
    pub href: Option<String>,
    pub current: bool,
}

/// Data required to render the main index template.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    pub advocates: Paginated<AdvocateRow>,
    /// Records left after filtering.
    pub total_count: usize,
    /// Records loaded in the store.
    pub total_records: usize,
    pub active_filters: Vec<ActiveFilter>,
    pub search: String,
    pub hidden_fields: Vec<HiddenField>,
    pub columns: Vec<ColumnHeader>,
    pub degrees: Vec<SelectOption>,
    pub experience_options: Vec<SelectOption>,
    pub page_links: Vec<PageLink>,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
    pub reset_href: String,
    pub has_filters: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::AdvocateId;

    fn advocate(specialties: &[&str]) -> Advocate {
        Advocate::try_new(
            "Emily",
            "Davis",
            "Houston",
            "PhD",
            specialties.iter().map(|s| s.to_string()).collect(),
            7,
            5553210987,
        )
        .unwrap()
    }

    #[test]
    fn row_collapses_specialties_past_three() {
        let row = AdvocateRow::new(&advocate(&["Grief", "Sleep", "ADHD", "Eating", "Trauma"]), 0);

        assert_eq!(row.specialties, vec!["Grief", "Sleep", "ADHD"]);
        assert_eq!(row.extra_specialties, 2);
    }

    #[test]
    fn row_keeps_short_specialty_lists() {
        let row = AdvocateRow::new(&advocate(&["Grief", "Sleep", "ADHD"]), 0);

        assert_eq!(row.specialties.len(), 3);
        assert_eq!(row.extra_specialties, 0);
    }

    #[test]
    fn row_links_phone_and_falls_back_to_position_key() {
        let row = AdvocateRow::new(&advocate(&[]), 7);
        assert_eq!(row.phone_href, "tel:5553210987");
        assert_eq!(row.key, "row-7");

        let row = AdvocateRow::new(&advocate(&[]).with_id(AdvocateId::new(5).unwrap()), 7);
        assert_eq!(row.key, "5");
    }
}

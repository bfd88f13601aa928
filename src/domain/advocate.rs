use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AdvocateId, CityName, Degree, PersonName, PhoneNumber, TypeConstraintError,
};

/// A directory entry describing one advocate.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    /// Stable identity when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AdvocateId>,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub city: CityName,
    pub degree: Degree,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub years_of_experience: u32,
    pub phone_number: PhoneNumber,
}

impl Advocate {
    /// Builds an advocate without an id from raw values.
    pub fn try_new(
        first_name: &str,
        last_name: &str,
        city: &str,
        degree: &str,
        specialties: Vec<String>,
        years_of_experience: u32,
        phone_number: u64,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: None,
            first_name: PersonName::new(first_name)?,
            last_name: PersonName::new(last_name)?,
            city: CityName::new(city)?,
            degree: Degree::new(degree)?,
            specialties,
            years_of_experience,
            phone_number: PhoneNumber::new(phone_number)?,
        })
    }

    #[must_use]
    pub fn with_id(mut self, id: AdvocateId) -> Self {
        self.id = Some(id);
        self
    }

    /// Checks whether any searchable field contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_search(&self, needle: &str) -> bool {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.city.as_str(),
            self.degree.as_str(),
        ]
        .into_iter()
        .chain(self.specialties.iter().map(String::as_str))
        .any(|field| field.to_lowercase().contains(needle))
            || self.years_of_experience.to_string().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Advocate {
        Advocate::try_new(
            "John",
            "Doe",
            "New York",
            "MD",
            vec!["Johnson's disease".to_string(), "Trauma & PTSD".to_string()],
            12,
            5551234567,
        )
        .unwrap()
    }

    #[test]
    fn search_matches_fields_case_insensitively() {
        let advocate = sample();
        assert!(advocate.matches_search("john"));
        assert!(advocate.matches_search("new york"));
        assert!(advocate.matches_search("md"));
        assert!(advocate.matches_search("ptsd"));
        assert!(advocate.matches_search("12"));
        assert!(advocate.matches_search("1"));
        assert!(!advocate.matches_search("chicago"));
    }

    #[test]
    fn phone_number_is_not_searchable() {
        assert!(!sample().matches_search("5551234567"));
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let json = serde_json::to_value(sample().with_id(AdvocateId::new(3).unwrap())).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["yearsOfExperience"], 12);
        assert_eq!(json["phoneNumber"], 5551234567_u64);
    }

    #[test]
    fn id_is_optional_in_json() {
        let raw = r#"{
            "firstName": "Jane",
            "lastName": "Doe",
            "city": "Boston",
            "degree": "PhD",
            "specialties": [],
            "yearsOfExperience": 3,
            "phoneNumber": 5550001111
        }"#;
        let advocate: Advocate = serde_json::from_str(raw).unwrap();
        assert_eq!(advocate.id, None);
        assert!(serde_json::to_value(&advocate).unwrap().get("id").is_none());
    }

    #[test]
    fn blank_names_are_rejected_on_load() {
        let raw = r#"{
            "firstName": " ",
            "lastName": "Doe",
            "city": "Boston",
            "degree": "PhD",
            "yearsOfExperience": 3,
            "phoneNumber": 5550001111
        }"#;
        assert!(serde_json::from_str::<Advocate>(raw).is_err());
    }
}

//! Diesel model for advocate rows.

use diesel::prelude::*;

use crate::domain::advocate::Advocate as DomainAdvocate;
use crate::domain::types::{AdvocateId, CityName, Degree, PersonName, PhoneNumber};
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::advocates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::advocate::Advocate`].
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// JSON array of specialty names.
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl TryFrom<Advocate> for DomainAdvocate {
    type Error = RepositoryError;

    fn try_from(row: Advocate) -> Result<Self, Self::Error> {
        let specialties: Vec<String> = serde_json::from_str(&row.specialties).map_err(|e| {
            RepositoryError::ValidationError(format!(
                "advocate {}: malformed specialties: {e}",
                row.id
            ))
        })?;
        let years_of_experience = u32::try_from(row.years_of_experience).map_err(|_| {
            RepositoryError::ValidationError(format!(
                "advocate {}: negative years of experience",
                row.id
            ))
        })?;

        Ok(Self {
            id: Some(AdvocateId::new(row.id)?),
            first_name: PersonName::new(row.first_name)?,
            last_name: PersonName::new(row.last_name)?,
            city: CityName::new(row.city)?,
            degree: Degree::new(row.degree)?,
            specialties,
            years_of_experience,
            phone_number: PhoneNumber::try_from(row.phone_number)?,
        })
    }
}

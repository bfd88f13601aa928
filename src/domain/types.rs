//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, non-blank
//! text, ten-digit phone numbers) so that once a value reaches the domain
//! layer it can be treated as trusted. Text is kept exactly as given; case
//! folding happens at query time only.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use phonenumber::{Mode, country, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number is not a ten digit number.
    #[error("invalid phone number")]
    InvalidPhone,
}

/// Unique identifier for an advocate record.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "i32", into = "i32")]
pub struct AdvocateId(i32);

impl AdvocateId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for AdvocateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for AdvocateId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AdvocateId> for i32 {
    fn from(value: AdvocateId) -> Self {
        value.0
    }
}

/// Macro to generate newtypes for text that must not be blank.
///
/// The value is stored verbatim; only the emptiness check looks at the
/// trimmed form.
macro_rules! non_blank_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs the value, rejecting blank input.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(value))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_blank_string_newtype!(PersonName, "First or last name of an advocate.");
non_blank_string_newtype!(CityName, "City an advocate practices in.");
non_blank_string_newtype!(Degree, "Academic degree held by an advocate, e.g. `MD`.");

const PHONE_MIN: u64 = 1_000_000_000;
const PHONE_MAX: u64 = 9_999_999_999;

/// Ten digit phone number stored numerically.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u64", into = "u64")]
pub struct PhoneNumber(u64);

impl PhoneNumber {
    /// Accepts only numbers with exactly ten digits.
    pub fn new(value: u64) -> Result<Self, TypeConstraintError> {
        if (PHONE_MIN..=PHONE_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidPhone)
        }
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Renders the number in US national format, falling back to the raw
    /// digits when the number cannot be parsed.
    pub fn formatted(self) -> String {
        let digits = self.0.to_string();
        match parse(Some(country::Id::US), &digits) {
            Ok(parsed) => parsed.format().mode(Mode::National).to_string(),
            Err(_) => digits,
        }
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for PhoneNumber {
    type Error = TypeConstraintError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for PhoneNumber {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value = u64::try_from(value).map_err(|_| TypeConstraintError::InvalidPhone)?;
        Self::new(value)
    }
}

impl From<PhoneNumber> for u64 {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

/// Discrete experience ranges offered by the filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ExperienceBucket {
    #[serde(rename = "0-5")]
    Junior,
    #[serde(rename = "6-10")]
    Mid,
    #[serde(rename = "11+")]
    Senior,
}

impl ExperienceBucket {
    pub const ALL: [ExperienceBucket; 3] = [Self::Junior, Self::Mid, Self::Senior];

    /// Parses the wire value. Unknown values yield `None`, which disables the
    /// filter.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "0-5" => Some(Self::Junior),
            "6-10" => Some(Self::Mid),
            "11+" => Some(Self::Senior),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "0-5",
            Self::Mid => "6-10",
            Self::Senior => "11+",
        }
    }

    /// Human readable label used by the filter select.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Junior => "0-5 years",
            Self::Mid => "6-10 years",
            Self::Senior => "11+ years",
        }
    }

    pub const fn contains(self, years: u32) -> bool {
        match self {
            Self::Junior => years <= 5,
            Self::Mid => years >= 6 && years <= 10,
            Self::Senior => years >= 11,
        }
    }
}

/// Advocate fields the table can be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    FirstName,
    LastName,
    City,
    Degree,
    YearsOfExperience,
    PhoneNumber,
}

impl SortField {
    /// Parses the camelCase field name. Unknown names (including
    /// `specialties`) yield `None`, which keeps insertion order.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "firstName" => Some(Self::FirstName),
            "lastName" => Some(Self::LastName),
            "city" => Some(Self::City),
            "degree" => Some(Self::Degree),
            "yearsOfExperience" => Some(Self::YearsOfExperience),
            "phoneNumber" => Some(Self::PhoneNumber),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::City => "city",
            Self::Degree => "degree",
            Self::YearsOfExperience => "yearsOfExperience",
            Self::PhoneNumber => "phoneNumber",
        }
    }
}

/// Direction applied to the sort comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `desc` selects descending order; anything else is ascending.
    pub fn from_param(value: &str) -> Self {
        if value == "desc" { Self::Desc } else { Self::Asc }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

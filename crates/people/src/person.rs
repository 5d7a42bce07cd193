use core::fmt;

use serde::{Deserialize, Serialize};

use roster_core::{Report, Validate};

use crate::location::Location;

pub const NAME_MAX_CHARS: usize = 50;
pub const AGE_MAX: i64 = 115;
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Hair color (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Red,
}

/// Person as submitted by clients.
///
/// The password is write-only: it is validated here and never reaches any
/// output type (see [`PersonProfile`]).
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Person {
    #[serde(alias = "firt_name")]
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    #[serde(default)]
    pub hair_color: Option<HairColor>,
    #[serde(default)]
    pub is_married: Option<bool>,
    pub password: String,
}

impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Person")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("age", &self.age)
            .field("hair_color", &self.hair_color)
            .field("is_married", &self.is_married)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Validate for Person {
    fn validate_into(&self, report: &mut Report) {
        report.length("first_name", &self.first_name, 1, NAME_MAX_CHARS);
        report.length("last_name", &self.last_name, 1, NAME_MAX_CHARS);
        report.greater_than("age", self.age, 0);
        report.at_most("age", self.age, AGE_MAX);
        report.min_length("password", &self.password, PASSWORD_MIN_CHARS);
    }
}

impl Person {
    /// Public view of this person (drops the password).
    pub fn profile(&self) -> PersonProfile {
        PersonProfile {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            hair_color: self.hair_color,
            is_married: self.is_married,
        }
    }
}

impl From<Person> for PersonProfile {
    fn from(person: Person) -> Self {
        Self {
            first_name: person.first_name,
            last_name: person.last_name,
            age: person.age,
            hair_color: person.hair_color,
            is_married: person.is_married,
        }
    }
}

/// Output shape of a person: every field except the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonProfile {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub hair_color: Option<HairColor>,
    pub is_married: Option<bool>,
}

/// A person's profile flattened together with a location.
///
/// The two field sets are disjoint, so the serialized form is a plain union
/// of both records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelocatedPerson {
    #[serde(flatten)]
    pub person: PersonProfile,
    #[serde(flatten)]
    pub location: Location,
}

impl RelocatedPerson {
    pub fn new(person: &Person, location: Location) -> Self {
        Self {
            person: person.profile(),
            location,
        }
    }
}

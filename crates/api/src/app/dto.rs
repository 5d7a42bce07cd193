use serde::Deserialize;

use roster_core::{Report, Validate};
use roster_people::person::NAME_MAX_CHARS;
use roster_people::{Location, Person};

// -------------------------
// Request DTOs
// -------------------------

/// Query for `GET /person/detail`.
#[derive(Debug, Deserialize)]
pub struct PersonDetailQuery {
    pub name: Option<String>,
    pub age: String,
}

impl Validate for PersonDetailQuery {
    fn validate_into(&self, report: &mut Report) {
        if let Some(name) = &self.name {
            report.length("name", name, 1, NAME_MAX_CHARS);
        }
    }
}

impl PersonDetailQuery {
    /// Key used when no name was given.
    pub const ANONYMOUS_KEY: &'static str = "null";

    pub fn into_entry(self) -> serde_json::Value {
        let key = self.name.unwrap_or_else(|| Self::ANONYMOUS_KEY.to_string());
        let mut map = serde_json::Map::new();
        map.insert(key, serde_json::Value::String(self.age));
        serde_json::Value::Object(map)
    }
}

/// Body for `PUT /person/{person_id}`.
#[derive(Debug, Deserialize)]
pub struct UpdatePersonRequest {
    pub person: Person,
    #[serde(alias = "Location")]
    pub location: Location,
}

impl Validate for UpdatePersonRequest {
    fn validate_into(&self, report: &mut Report) {
        report.nested("person", &self.person);
        report.nested("location", &self.location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_entry_uses_name_or_null_key() {
        let named = PersonDetailQuery {
            name: Some("Ana".to_string()),
            age: "30".to_string(),
        };
        assert_eq!(named.into_entry(), serde_json::json!({ "Ana": "30" }));

        let anonymous = PersonDetailQuery {
            name: None,
            age: "30".to_string(),
        };
        assert_eq!(anonymous.into_entry(), serde_json::json!({ "null": "30" }));
    }

    #[test]
    fn update_errors_are_nested_per_record() {
        let body: UpdatePersonRequest = serde_json::from_value(serde_json::json!({
            "person": {
                "first_name": "Miguel",
                "last_name": "Torres",
                "age": 0,
                "password": "soyelpassdemiguel",
            },
            "Location": { "city": "", "state": "Lima" },
        }))
        .unwrap();

        let mut report = Report::at("body");
        body.validate_into(&mut report);
        let locs: Vec<String> = report.into_errors().iter().map(|e| e.loc.join(".")).collect();
        assert_eq!(locs, vec!["body.person.age", "body.location.city"]);
    }
}

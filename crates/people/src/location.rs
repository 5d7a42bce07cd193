use serde::{Deserialize, Serialize};

use roster_core::{Report, Validate};

pub const PLACE_MAX_CHARS: usize = 50;

/// Supported countries (closed set). Wire names are capitalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    Argentina,
    Chile,
    Uruguay,
    Paraguay,
    Colombia,
    Venezuela,
    Peru,
    Bolivia,
    Brasil,
    Ecuador,
}

impl Country {
    pub const ALL: [Country; 10] = [
        Country::Argentina,
        Country::Chile,
        Country::Uruguay,
        Country::Paraguay,
        Country::Colombia,
        Country::Venezuela,
        Country::Peru,
        Country::Bolivia,
        Country::Brasil,
        Country::Ecuador,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub country: Option<Country>,
}

impl Validate for Location {
    fn validate_into(&self, report: &mut Report) {
        report.length("city", &self.city, 1, PLACE_MAX_CHARS);
        report.length("state", &self.state, 1, PLACE_MAX_CHARS);
    }
}

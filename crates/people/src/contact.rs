use serde::{Deserialize, Serialize};

use roster_core::{Report, Validate};

pub const MESSAGE_MIN_CHARS: usize = 20;

/// Contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl Validate for ContactMessage {
    fn validate_into(&self, report: &mut Report) {
        report.min_length("first_name", &self.first_name, 1);
        report.min_length("last_name", &self.last_name, 1);
        report.email("email", &self.email);
        report.min_length("message", &self.message, MESSAGE_MIN_CHARS);
    }
}

impl ContactMessage {
    /// Attach the client metadata that arrived alongside the form.
    pub fn acknowledge(self, user_agent: Option<String>, ads: Option<String>) -> ContactReceipt {
        ContactReceipt {
            contact: self,
            user_agent,
            ads,
        }
    }
}

/// What the contact endpoint answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    #[serde(flatten)]
    pub contact: ContactMessage,
    pub user_agent: Option<String>,
    pub ads: Option<String>,
}

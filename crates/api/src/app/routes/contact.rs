use axum::{Json, http::HeaderMap, response::IntoResponse};

use roster_people::ContactMessage;

use crate::app::extract::ValidForm;
use crate::headers;

/// Cookie carrying the ads-tracking value.
pub const ADS_COOKIE: &str = "ads";

pub async fn contact(
    headers: HeaderMap,
    ValidForm(message): ValidForm<ContactMessage>,
) -> impl IntoResponse {
    let user_agent = headers::user_agent(&headers);
    let ads = headers::cookie(&headers, ADS_COOKIE);
    tracing::debug!(email = %message.email, ?user_agent, "contact message received");
    Json(message.acknowledge(user_agent, ads))
}

use axum::{Json, response::IntoResponse};

use roster_people::LoginForm;

use crate::app::extract::ValidForm;

pub async fn login(ValidForm(form): ValidForm<LoginForm>) -> impl IntoResponse {
    tracing::debug!(username = %form.username, "login accepted");
    Json(form.accept())
}

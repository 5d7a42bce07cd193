use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use roster_people::{Person, PersonDirectory, PersonId, PersonProfile, RelocatedPerson};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::extract::{ValidJson, ValidPath, ValidQuery};

pub async fn create_person(ValidJson(person): ValidJson<Person>) -> impl IntoResponse {
    tracing::debug!(?person, "person accepted");
    (StatusCode::CREATED, Json(PersonProfile::from(person)))
}

pub async fn show_person(ValidQuery(query): ValidQuery<dto::PersonDetailQuery>) -> impl IntoResponse {
    Json(query.into_entry())
}

pub async fn person_exists(
    Extension(directory): Extension<PersonDirectory>,
    ValidPath(person_id): ValidPath<PersonId>,
) -> Result<impl IntoResponse, ApiError> {
    directory
        .ensure_exists(person_id)
        .inspect_err(|_| tracing::info!(%person_id, "unknown person requested"))?;

    let mut body = serde_json::Map::new();
    body.insert(person_id.to_string(), serde_json::Value::from("It Exists!"));
    Ok(Json(serde_json::Value::Object(body)))
}

pub async fn update_person(
    ValidPath(person_id): ValidPath<PersonId>,
    ValidJson(body): ValidJson<dto::UpdatePersonRequest>,
) -> impl IntoResponse {
    tracing::debug!(%person_id, "person updated");
    Json(RelocatedPerson::new(&body.person, body.location))
}

use axum::{
    Router,
    routing::{get, post, put},
};

pub mod contact;
pub mod images;
pub mod login;
pub mod people;
pub mod system;

/// Router for every endpoint the API exposes.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::home))
        .route("/health", get(system::health))
        .route("/person/new", post(people::create_person))
        .route("/person/detail", get(people::show_person))
        .route("/person/detail/:person_id", get(people::person_exists))
        .route("/person/:person_id", put(people::update_person))
        .route("/login", post(login::login))
        .route("/contact", post(contact::contact))
        .route("/post-image", post(images::post_image))
}

use axum::{routing::get, Router};

pub mod characters;
pub mod system;

/// Router for the character pages and the JSON detail endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/", get(characters::list_characters))
        .route(
            characters::CREATE_PATH,
            get(characters::create_form).post(characters::create_character),
        )
        .route(
            characters::CREATE_V1_PATH,
            get(characters::create_form_v1).post(characters::create_character_v1),
        )
        .route(
            characters::CREATE_V2_PATH,
            get(characters::create_form_v2).post(characters::create_character_v2),
        )
        .route("/characters/:id", get(characters::get_character))
}

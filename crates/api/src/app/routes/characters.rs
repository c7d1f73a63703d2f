use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Extension, Form, Path},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Json,
};

use roster_characters::{Character, CharacterCreateForm, ValidationFailures, ValidationStrategy};
use roster_core::{CharacterId, DomainError};

use crate::app::dto::{self, CharacterFormParams};
use crate::app::services::{AppServices, RegistrationError};
use crate::app::{errors, views};

/// Uses the configured default strategy.
pub const CREATE_PATH: &str = "/createCharacter";
/// Always the manual strategy.
pub const CREATE_V1_PATH: &str = "/createCharacterV1";
/// Always the declarative strategy.
pub const CREATE_V2_PATH: &str = "/createCharacterV2";

pub async fn list_characters(Extension(services): Extension<Arc<AppServices>>) -> Html<String> {
    Html(views::character_list(&services.characters_list()))
}

pub async fn get_character(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: CharacterId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.characters_get(id) {
        Some(c) => (StatusCode::OK, Json(dto::character_to_json(&c))).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}

pub async fn create_form(Extension(services): Extension<Arc<AppServices>>) -> Html<String> {
    empty_form(CREATE_PATH, services.default_strategy())
}

pub async fn create_form_v1() -> Html<String> {
    empty_form(CREATE_V1_PATH, ValidationStrategy::Manual)
}

pub async fn create_form_v2() -> Html<String> {
    empty_form(CREATE_V2_PATH, ValidationStrategy::Declarative)
}

pub async fn create_character(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Form<CharacterFormParams>, FormRejection>,
) -> axum::response::Response {
    let Form(params) = match params {
        Ok(form) => form,
        Err(rejection) => return form_rejection(rejection),
    };
    let result = services.register_with_default(params.bind());
    respond(result, CREATE_PATH, &params)
}

pub async fn create_character_v1(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Form<CharacterFormParams>, FormRejection>,
) -> axum::response::Response {
    let Form(params) = match params {
        Ok(form) => form,
        Err(rejection) => return form_rejection(rejection),
    };
    let result = services.register_character(ValidationStrategy::Manual, params.bind());
    respond(result, CREATE_V1_PATH, &params)
}

pub async fn create_character_v2(
    Extension(services): Extension<Arc<AppServices>>,
    params: Result<Form<CharacterFormParams>, FormRejection>,
) -> axum::response::Response {
    let Form(params) = match params {
        Ok(form) => form,
        Err(rejection) => return form_rejection(rejection),
    };
    let result = services.register_character(ValidationStrategy::Declarative, params.bind());
    respond(result, CREATE_V2_PATH, &params)
}

fn empty_form(action: &str, strategy: ValidationStrategy) -> Html<String> {
    let values = CharacterFormParams::from(&CharacterCreateForm::empty());
    Html(views::character_form(
        action,
        strategy,
        &values,
        &ValidationFailures::new(),
    ))
}

/// Redirect to the list on success; re-render with `200 OK` on failure.
fn respond(
    result: Result<Character, RegistrationError>,
    action: &str,
    params: &CharacterFormParams,
) -> axum::response::Response {
    match result {
        Ok(_) => Redirect::to("/").into_response(),
        Err(RegistrationError::Rejected { strategy, failures }) => (
            StatusCode::OK,
            Html(views::character_form(action, strategy, params, &failures)),
        )
            .into_response(),
        Err(RegistrationError::Domain(e)) => errors::domain_error_to_response(e),
    }
}

// Bodies that cannot be decoded at all (wrong content type, repeated keys).
fn form_rejection(rejection: FormRejection) -> axum::response::Response {
    tracing::debug!(error = %rejection.body_text(), "form body rejected");
    errors::json_error(rejection.status(), "invalid_form", rejection.body_text())
}

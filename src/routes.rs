use std::sync::Arc;

use axum::{
    Router,
    extract::{Form, Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    forms::{FieldErrors, MovieForm},
    templates,
};

const LIST_URL: &str = "/";

/// Outcome of a handler: a rendered page or a redirect after a successful write.
#[derive(Debug)]
pub enum Action {
    Page(String),
    Redirect(&'static str),
}

impl IntoResponse for Action {
    fn into_response(self) -> Response {
        match self {
            Action::Page(body) => Html(body).into_response(),
            Action::Redirect(target) => {
                (StatusCode::FOUND, [(header::LOCATION, target)]).into_response()
            }
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list))
        .route("/create/", get(create_form).post(create).fallback(create_form))
        .route("/{id}/update/", get(update_form).post(update).fallback(update_form))
        .route("/{id}/delete/", get(confirm_delete).post(delete).fallback(confirm_delete))
        .with_state(state)
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Action> {
    let movies = state.movies.fetch_all().await?;
    Ok(Action::Page(templates::movie_list_page(&movies)))
}

pub async fn create_form() -> Action {
    Action::Page(templates::movie_form_page(
        "Add movie",
        &MovieForm::default(),
        &FieldErrors::default(),
    ))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Action> {
    let form: MovieForm = pairs.into_iter().collect();
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let fields: Vec<_> = errors.fields().collect();
            tracing::debug!(?fields, "create rejected");
            return Ok(Action::Page(templates::movie_form_page("Add movie", &form, &errors)));
        }
    };

    let id = state.movies.insert(&input).await?;
    tracing::info!(id, title = %input.title, "movie created");
    Ok(Action::Redirect(LIST_URL))
}

pub async fn update_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Action> {
    let movie = state.movies.fetch_by_id(parse_id(&id)?).await?;
    Ok(Action::Page(templates::movie_form_page(
        "Edit movie",
        &MovieForm::from(&movie),
        &FieldErrors::default(),
    )))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Action> {
    let id = parse_id(&id)?;
    let form: MovieForm = pairs.into_iter().collect();
    // 404 takes precedence over validation errors.
    state.movies.fetch_by_id(id).await?;

    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            let fields: Vec<_> = errors.fields().collect();
            tracing::debug!(id, ?fields, "update rejected");
            return Ok(Action::Page(templates::movie_form_page("Edit movie", &form, &errors)));
        }
    };

    state.movies.update(id, &input).await?;
    tracing::info!(id, title = %input.title, "movie updated");
    Ok(Action::Redirect(LIST_URL))
}

pub async fn confirm_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Action> {
    let movie = state.movies.fetch_by_id(parse_id(&id)?).await?;
    Ok(Action::Page(templates::confirm_delete_page(&movie)))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Action> {
    let id = parse_id(&id)?;
    state.movies.delete(id).await?;
    tracing::info!(id, "movie deleted");
    Ok(Action::Redirect(LIST_URL))
}

/// Only plain decimal ids route to a movie; anything else is an unknown page.
fn parse_id(raw: &str) -> AppResult<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadPath);
    }
    raw.parse().map_err(|_| AppError::BadPath)
}

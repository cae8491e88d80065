//! Todo handlers.
//!
//! `list` and `read` answer with JSON. The mutating routes are driven by
//! HTML forms and redirect back to the frontend page on success.
//! Unparseable forms and path IDs are reported as `HttpError::BadRequest`.

use axum::Form;
use axum::Json;
use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Redirect;
use todo_core::{NewTodo, Todo, TodoUpdate};

use crate::error::HttpError;
use crate::state::AppState;

/// List all todos ordered by ID.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, HttpError> {
    Ok(Json(state.todos.list().await?))
}

/// Create a todo from a `description` form field.
pub async fn create(
    State(state): State<AppState>,
    form: Result<Form<NewTodo>, FormRejection>,
) -> Result<Redirect, HttpError> {
    let Form(todo) = form?;
    state.todos.create(todo).await?;
    Ok(Redirect::to(&state.frontend_url))
}

/// Get a single todo by ID.
pub async fn read(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Todo>, HttpError> {
    let Path(id) = id?;
    Ok(Json(state.todos.get(id).await?))
}

/// Update description and done flag (`id`, `description`, `done` fields).
pub async fn update(
    State(state): State<AppState>,
    form: Result<Form<TodoUpdate>, FormRejection>,
) -> Result<Redirect, HttpError> {
    let Form(update) = form?;
    state.todos.update(update).await?;
    Ok(Redirect::to(&state.frontend_url))
}

/// Delete a todo by ID.
pub async fn remove(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Redirect, HttpError> {
    let Path(id) = id?;
    state.todos.delete(id).await?;
    Ok(Redirect::to(&state.frontend_url))
}

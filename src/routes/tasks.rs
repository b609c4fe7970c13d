use crate::{
    auth::{AuthenticatedUser, MessageResponse},
    error::AppError,
    models::TaskInput,
    state::AppState,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

fn task_not_found() -> AppError {
    AppError::NotFound("Task not found".into())
}

/// Lists the authenticated user's tasks, newest first.
///
/// ## Responses:
/// - `200 OK`: JSON array of `Task` objects.
/// - `401 Unauthorized`: If the request lacks a valid access token.
#[get("")]
pub async fn list_tasks(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = state.tasks.list_tasks(user.id()).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task owned by the authenticated user.
///
/// ## Responses:
/// - `201 Created`: The newly created `Task`.
/// - `400 Bad Request`: Malformed body or a title/description outside the allowed lengths.
/// - `401 Unauthorized`: If the request lacks a valid access token.
#[post("")]
pub async fn create_task(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;
    let task = state
        .tasks
        .create_task(user.id(), task_data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(task))
}

/// Retrieves one of the authenticated user's tasks.
///
/// A task owned by someone else answers `404`, same as a missing one.
#[get("/{id}")]
pub async fn get_task(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let task = state
        .tasks
        .get_task(user.id(), task_id.into_inner())
        .await?
        .ok_or_else(task_not_found)?;
    Ok(HttpResponse::Ok().json(task))
}

/// Replaces title, description and completion state of a task.
#[put("/{id}")]
pub async fn update_task(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;
    let task = state
        .tasks
        .update_task(user.id(), task_id.into_inner(), task_data.into_inner())
        .await?
        .ok_or_else(task_not_found)?;
    Ok(HttpResponse::Ok().json(task))
}

#[delete("/{id}")]
pub async fn delete_task(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    if !state
        .tasks
        .delete_task(user.id(), task_id.into_inner())
        .await?
    {
        return Err(task_not_found());
    }
    Ok(HttpResponse::Ok().json(MessageResponse::new("Task deleted")))
}

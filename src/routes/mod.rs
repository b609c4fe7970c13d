pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::web;

use crate::auth::AuthMiddleware;
use crate::error::AppError;
use crate::state::AppState;

/// JSON extractor settings: any body that does not deserialize is a 400 with a JSON error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::debug!("Rejected body on {}: {}", req.path(), err);
        AppError::BadRequest("Invalid data".into()).into()
    })
}

/// Path extractor settings: a task id that is not a UUID cannot name any task.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        log::debug!("Rejected path {}: {}", req.path(), err);
        AppError::NotFound("Task not found".into()).into()
    })
}

/// Registers shared state, the session endpoints, health, and the gated `/tasks` scope.
pub fn config(cfg: &mut web::ServiceConfig, state: AppState) {
    let gate = AuthMiddleware::new(state.tokens.clone());

    cfg.app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(path_config())
        .service(health::health)
        .service(auth::signup)
        .service(auth::login)
        .service(auth::refresh)
        .service(auth::logout)
        .service(
            web::scope("/tasks")
                .wrap(gate)
                .service(tasks::list_tasks)
                .service(tasks::create_task)
                .service(tasks::get_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        );
}

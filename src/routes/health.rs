use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Health check endpoint
///
/// Returns the current status of the API and timestamp. Not behind the auth gate.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now()
    }))
}

#[cfg(test)]
mod tests {
    use crate::auth::{PasswordHasher, TokenService};
    use crate::state::AppState;
    use crate::store::MemoryStore;
    use actix_web::{test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_health_is_reachable_without_token() {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(
            store.clone(),
            store,
            TokenService::new(b"health_secret"),
            PasswordHasher::new(4),
        );
        let app =
            test::init_service(App::new().configure(|cfg| crate::routes::config(cfg, state)))
                .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["status"], "ok");
        let stamp = json["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }
}

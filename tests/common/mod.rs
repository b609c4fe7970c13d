#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header;
use actix_web::{test, App};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use taskgate::auth::{PasswordHasher, TokenService};
use taskgate::models::{Task, TaskInput, User};
use taskgate::store::{MemoryStore, TaskStore, UserStore};
use taskgate::{routes, AppError, AppState};
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"integration_test_secret";

/// Fresh state over an empty in-memory store. bcrypt runs at its minimum cost.
pub fn test_state() -> AppState {
    let store = Arc::new(MemoryStore::new());
    AppState::new(
        store.clone(),
        store,
        TokenService::new(TEST_SECRET),
        PasswordHasher::new(4),
    )
}

/// Store whose every call fails the way a lost database connection would.
pub struct UnavailableStore;

fn unavailable() -> AppError {
    AppError::DatabaseError("connection refused".into())
}

#[async_trait]
impl UserStore for UnavailableStore {
    async fn create_user(&self, _email: &str, _password_hash: &str) -> Result<User, AppError> {
        Err(unavailable())
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
        Err(unavailable())
    }
}

#[async_trait]
impl TaskStore for UnavailableStore {
    async fn list_tasks(&self, _user_id: i32) -> Result<Vec<Task>, AppError> {
        Err(unavailable())
    }

    async fn create_task(&self, _user_id: i32, _input: TaskInput) -> Result<Task, AppError> {
        Err(unavailable())
    }

    async fn get_task(&self, _user_id: i32, _id: Uuid) -> Result<Option<Task>, AppError> {
        Err(unavailable())
    }

    async fn update_task(
        &self,
        _user_id: i32,
        _id: Uuid,
        _input: TaskInput,
    ) -> Result<Option<Task>, AppError> {
        Err(unavailable())
    }

    async fn delete_task(&self, _user_id: i32, _id: Uuid) -> Result<bool, AppError> {
        Err(unavailable())
    }
}

pub fn unavailable_state() -> AppState {
    let store = Arc::new(UnavailableStore);
    AppState::new(
        store.clone(),
        store,
        TokenService::new(TEST_SECRET),
        PasswordHasher::new(4),
    )
}

pub async fn init_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    test::init_service(App::new().configure(|cfg| routes::config(cfg, state))).await
}

pub async fn post_json<S, B>(app: &S, uri: &str, body: Value) -> ServiceResponse<B>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
    test::call_service(app, req).await
}

/// Signs up and logs in, returning the access token and the raw refresh cookie value.
pub async fn signup_and_login<S, B>(app: &S, email: &str, password: &str) -> (String, String)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let credentials = json!({ "email": email, "password": password });

    let resp = post_json(app, "/signup", credentials.clone()).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

    let resp = post_json(app, "/login", credentials).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
    let refresh = refresh_cookie_value(&resp).expect("login should set the refresh cookie");
    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().expect("login body has a token").to_owned();

    (token, refresh)
}

pub fn refresh_cookie_value<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "refresh_token")
        .map(|c| c.value().to_owned())
}

pub fn set_cookie_header<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

#![doc = "The `taskgate` library crate."]
#![doc = ""]
#![doc = "Credential hashing, JWT access/refresh tokens, the request-gating middleware, the"]
#![doc = "session and task endpoints, and the persistence seams they run on. The binary"]
#![doc = "(`main.rs`) only reads configuration, connects to Postgres and starts the server."]

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use crate::error::AppError;
pub use crate::state::AppState;

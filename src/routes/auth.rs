use crate::{
    auth::{
        cleared_refresh_cookie, refresh_cookie, LoginRequest, LoginResponse, MessageResponse,
        RefreshResponse, SignupRequest, TokenError, REFRESH_COOKIE_NAME,
    },
    error::AppError,
    state::AppState,
};
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;
use validator::Validate;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Register a new user
///
/// Hashes the password and stores the account. Duplicate emails are rejected by the
/// store itself, and every store failure is reported the same way.
#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    signup_data.validate().map_err(|e| {
        log::debug!("Rejected signup: {}", e);
        AppError::BadRequest("Invalid data".into())
    })?;
    let SignupRequest { email, password } = signup_data.into_inner();

    let hasher = state.passwords;
    let password_hash = web::block(move || hasher.hash(&password)).await??;

    if let Err(e) = state.users.create_user(&email, &password_hash).await {
        log::warn!("Signup failed for {}: {}", email, e);
        return Err(AppError::BadRequest("Error creating user".into()));
    }

    log::info!("Created user {}", email);
    Ok(HttpResponse::Created().json(MessageResponse::new("User created successfully")))
}

/// Login user
///
/// Returns an access token in the body and sets the refresh token as an HTTP-only cookie.
/// Unknown email and wrong password produce the same response.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let LoginRequest { email, password } = login_data.into_inner();

    let user = match state.users.find_by_email(&email).await? {
        Some(user) => user,
        None => {
            log::warn!("Login attempt for unknown email");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
        }
    };

    let hasher = state.passwords;
    let secret = user.password_hash.clone();
    let matches = web::block(move || hasher.verify(&password, &secret)).await?;
    if !matches {
        log::warn!("Wrong password for user {}", user.id);
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let token_error = |_| AppError::InternalServerError("Error generating token".into());
    let access_token = state.tokens.issue_access(user.id).map_err(token_error)?;
    let refresh_token = state.tokens.issue_refresh(user.id).map_err(token_error)?;

    log::info!("User {} logged in", user.id);
    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie(
            &refresh_token,
            state.tokens.refresh_ttl(),
            state.cookie_secure,
        ))
        .json(LoginResponse {
            token: access_token,
        }))
}

/// Exchange the refresh cookie for a new access token
///
/// The refresh token itself is not rotated.
#[post("/refresh")]
pub async fn refresh(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<impl Responder, AppError> {
    let cookie = req
        .cookie(REFRESH_COOKIE_NAME)
        .ok_or_else(|| AppError::Unauthorized("Refresh token missing".into()))?;

    let claims = state.tokens.verify(cookie.value()).map_err(|e| match e {
        TokenError::Expired => AppError::Unauthorized("Refresh token expired".into()),
        _ => AppError::Unauthorized("Invalid refresh token".into()),
    })?;

    // Re-checked here on purpose even though `verify` already enforces expiry.
    if claims.exp <= Utc::now().timestamp() {
        return Err(AppError::Unauthorized("Refresh token expired".into()));
    }

    let access_token = state
        .tokens
        .issue_access(claims.sub)
        .map_err(|_| AppError::InternalServerError("Error generating new access token".into()))?;

    Ok(HttpResponse::Ok().json(RefreshResponse { access_token }))
}

/// Logout user
///
/// Clears the refresh cookie. No token is checked, so this always succeeds.
#[post("/logout")]
pub async fn logout(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .cookie(cleared_refresh_cookie(state.cookie_secure))
        .json(MessageResponse::new("Logout successful"))
}

//! Authentication endpoints

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::{cookie::Cookie, CookieJar};
use validator::Validate;

use crate::{
    error::AppResult,
    models::user::{LoginResponse, LoginUserPayload, RegisterUserPayload, UserProfile, UserShort},
    AppState,
};

use super::AuthenticatedUser;

/// Create a new account
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterUserPayload,
    responses(
        (status = 201, description = "User registered", body = UserProfile),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserPayload>,
) -> AppResult<(StatusCode, Json<UserProfile>)> {
    payload.validate()?;

    let user = state.services.users.register(&payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Login with email and password
///
/// The token is returned in the body and set as an HTTP-only cookie.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginUserPayload,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginUserPayload>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    payload.validate()?;

    let response = state.services.users.login(&payload).await?;

    let auth = &state.config.auth;
    let cookie = Cookie::build((auth.cookie_name.clone(), response.token.clone()))
        .path("/")
        .http_only(true)
        .secure(auth.cookie_secure);

    Ok((jar.add(cookie), Json(response)))
}

/// Get current user profile
#[utoipa::path(
    get,
    path = "/profile",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserProfile),
        (status = 403, description = "Not authorized")
    )
)]
pub async fn profile(
    State(state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<UserProfile>> {
    let user = state.services.users.profile(claims.user_id).await?;
    Ok(Json(user))
}

/// `{id, name}` of every user
#[utoipa::path(
    get,
    path = "/users/lookup",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Users", body = Vec<UserShort>),
        (status = 403, description = "Not authorized")
    )
)]
pub async fn lookup_users(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<UserShort>>> {
    let users = state.services.users.lookup().await?;
    Ok(Json(users))
}

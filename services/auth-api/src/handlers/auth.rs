//! Authentication handlers (register, login, refresh, logout, me)

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use vouch_auth_core::NewUser;
use vouch_axum::AuthUser;
use vouch_db::UserRepository;
use vouch_types::Identity;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Cookie carrying the refresh token between `/auth/refresh` calls
pub const REFRESH_COOKIE: &str = "refreshToken";

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: Identity,
    pub access_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: Identity,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /auth/register
///
/// Create an account and start a session: 201 with the access token in
/// the body and the refresh token in an HTTP-only cookie.
pub async fn register<R: UserRepository>(
    State(state): State<AppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let session = state
        .auth
        .register(NewUser {
            email: req.email,
            name: req.name,
            password: req.password,
            address: req.address,
            role: None,
        })
        .await?;

    let cookie = set_refresh_cookie(&state.config, &session.tokens.refresh_token);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            user: session.identity,
            access_token: session.tokens.access_token,
        }),
    ))
}

/// POST /auth/login
///
/// Exchange credentials for a fresh session. A prior session's refresh
/// token is silently invalidated.
pub async fn login<R: UserRepository>(
    State(state): State<AppState<R>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let session = state.auth.login(&req.email, &req.password).await?;

    let cookie = set_refresh_cookie(&state.config, &session.tokens.refresh_token);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            user: session.identity,
            access_token: session.tokens.access_token,
        }),
    ))
}

/// POST /auth/refresh
///
/// Rotate the refresh cookie and mint a new access token. The cookie
/// value presented here becomes permanently unusable.
pub async fn refresh<R: UserRepository>(
    State(state): State<AppState<R>>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    let token = read_cookie(&headers, REFRESH_COOKIE).ok_or(ApiError::MissingRefreshToken)?;

    let tokens = state.auth.refresh(&token).await?;

    let cookie = set_refresh_cookie(&state.config, &tokens.refresh_token);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(RefreshResponse {
            access_token: tokens.access_token,
        }),
    ))
}

/// POST /auth/logout
///
/// Clear the stored refresh token and the cookie. Idempotent.
pub async fn logout<R: UserRepository>(
    State(state): State<AppState<R>>,
    user: AuthUser,
) -> ApiResult<impl IntoResponse> {
    state.auth.logout(user.id).await?;

    let cookie = clear_refresh_cookie(&state.config);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(LogoutResponse { success: true }),
    ))
}

/// GET /auth/me
///
/// Identity attached by the authenticate gate.
pub async fn me(user: AuthUser) -> Json<MeResponse> {
    Json(MeResponse { user: user.0 })
}

// ============================================================================
// Cookie helpers
// ============================================================================

fn set_refresh_cookie(config: &Config, token: &str) -> String {
    let max_age = config.auth.refresh_ttl.as_secs();
    let mut cookie =
        format!("{REFRESH_COOKIE}={token}; HttpOnly; SameSite=Strict; Path=/; Max-Age={max_age}");
    if config.cookie_secure() {
        cookie.push_str("; Secure");
    }
    cookie
}

fn clear_refresh_cookie(config: &Config) -> String {
    let mut cookie = format!("{REFRESH_COOKIE}=; HttpOnly; SameSite=Strict; Path=/; Max-Age=0");
    if config.cookie_secure() {
        cookie.push_str("; Secure");
    }
    cookie
}

fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie_str = headers.get(header::COOKIE)?.to_str().ok()?;

    for cookie in cookie_str.split(';') {
        let value = cookie
            .trim()
            .strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='));
        if let Some(value) = value {
            return Some(value.to_string());
        }
    }

    None
}

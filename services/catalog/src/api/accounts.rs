//! Account API handlers: login and token refresh.
//!
//! # Purpose
//! Implements the username/password login flow and the token re-login path.
//! Login failures are deliberately indistinguishable between "no such user"
//! and "wrong password" so the endpoint cannot be used to enumerate
//! usernames.
use crate::api::error::{ApiError, api_internal, api_internal_message, api_not_found};
use crate::api::types::{LoginRequest, TokenResponse};
use crate::app::AppState;
use crate::auth::gate;
use crate::auth::password::verify_password;
use crate::store::{AccountStore, StoreError};
use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;

#[utoipa::path(
    post,
    path = "/accounts/login",
    tag = "accounts",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = TokenResponse),
        (status = 404, description = "Bad credentials", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let account = match state.store.find_account_by_username(&body.username).await {
        Ok(account) => Some(account),
        Err(StoreError::NotFound(_)) => None,
        Err(err) => return Err(api_internal("failed to look up account", &err)),
    };
    // One generic failure for unknown usernames and wrong passwords alike.
    let Some(account) = account else {
        return Err(api_not_found("Incorrect username or password"));
    };
    if !verify_password(&body.password, &account.password_hash) {
        return Err(api_not_found("Incorrect username or password"));
    }
    let token = state.tokens.issue(&account.id).map_err(|err| {
        tracing::error!(error = %err, "failed to issue token");
        api_internal_message("failed to issue token")
    })?;
    Ok(Json(TokenResponse { token }))
}

#[utoipa::path(
    post,
    path = "/accounts/logintoken",
    tag = "accounts",
    responses(
        (status = 200, description = "Fresh token issued", body = TokenResponse),
        (status = 401, description = "Missing or invalid token", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn login_with_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, ApiError> {
    // Session refresh, not re-authentication: the verified account id from
    // the presented token is enough, the password is not re-checked.
    let account_id = gate::authenticate(&state, &headers)?;
    let token = state.tokens.issue(&account_id).map_err(|err| {
        tracing::error!(error = %err, "failed to issue token");
        api_internal_message("failed to issue token")
    })?;
    Ok(Json(TokenResponse { token }))
}

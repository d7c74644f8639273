//! Authentication and authorization gates for mutating endpoints.
//!
//! # Purpose
//! Sequences the two request gates every mutating handler runs before
//! touching the catalog: token verification, then role resolution. The gates
//! keep the client-visible outcomes distinct: 401 for anything that amounts
//! to "re-authenticate" (missing/bad/expired token, vanished account), 403
//! for "authenticated but not allowed". Collapsing them would lose the
//! signal a caller needs to decide whether to log in again.
use crate::api::error::{ApiError, api_forbidden, api_internal, api_unauthorized};
use crate::app::AppState;
use crate::auth::authorize::{RoleResolution, resolve_admin};
use axum::http::HeaderMap;

/// Dedicated header carrying the catalog token. Preserved from the existing
/// client contract; this is not a standard bearer-auth header.
pub const TOKEN_HEADER: &str = "authentication";

/// Verify the request token and extract the account id it was issued for.
pub fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<String, ApiError> {
    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| api_unauthorized("No token provided"))?;
    // Malformed and expired tokens surface identically to the client.
    state
        .tokens
        .verify(token)
        .map_err(|_| api_unauthorized("Token not recognized"))
}

/// Run the full admin gate: authenticate, then resolve the account's role.
///
/// Returns the account id on pass so handlers can attribute the mutation.
pub async fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<String, ApiError> {
    let account_id = authenticate(state, headers)?;
    let resolution = resolve_admin(state.store.as_ref(), &account_id)
        .await
        .map_err(|err| api_internal("failed to resolve account role", &err))?;
    match resolution {
        RoleResolution::Admin(_) => Ok(account_id),
        RoleResolution::NotAdmin(_) | RoleResolution::MissingRole => {
            Err(api_forbidden("Administrator permissions required"))
        }
        // The token was valid but the account it names is gone; that is an
        // authentication failure, not an authorization one.
        RoleResolution::UnknownAccount => Err(api_unauthorized("Token not recognized")),
    }
}

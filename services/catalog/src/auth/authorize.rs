//! Role resolution for the admin gate.
//!
//! # Purpose
//! Resolves an account id to its role and admin flag ahead of mutating
//! catalog operations. The outcomes are explicit states rather than a
//! truthy/falsy check on a possibly-missing nested field:
//! - a vanished account is an authentication failure,
//! - a broken role reference or a role without the admin flag is an
//!   authorization failure,
//! - only a present role with `admin_permissions == true` passes.
use crate::model::Role;
use crate::store::{AccountStore, StoreError, StoreResult};

/// Outcome of resolving an account's role for the admin gate.
#[derive(Debug, Clone)]
pub enum RoleResolution {
    /// The account id no longer maps to a stored account.
    UnknownAccount,
    /// The account's role reference points at no stored role. A broken
    /// reference is an error condition, never an implicit grant.
    MissingRole,
    NotAdmin(Role),
    Admin(Role),
}

/// Resolve the admin gate for an account id.
///
/// # Errors
/// Propagates store failures other than the expected not-found lookups; those
/// become the explicit resolution states above.
pub async fn resolve_admin<S>(store: &S, account_id: &str) -> StoreResult<RoleResolution>
where
    S: AccountStore + ?Sized,
{
    let account = match store.get_account(account_id).await {
        Ok(account) => account,
        Err(StoreError::NotFound(_)) => return Ok(RoleResolution::UnknownAccount),
        Err(err) => return Err(err),
    };
    let role = match store.get_role(account.role_id()).await {
        Ok(role) => role,
        Err(StoreError::NotFound(_)) => return Ok(RoleResolution::MissingRole),
        Err(err) => return Err(err),
    };
    if role.admin_permissions {
        Ok(RoleResolution::Admin(role))
    } else {
        Ok(RoleResolution::NotAdmin(role))
    }
}

//! Caller identity resolution.
//!
//! Authentication happens upstream; this layer receives an already trusted
//! user id (or nothing) and maps it to the team that scopes every read and
//! write.

use salescript_storage::SalesStore;

use crate::error::ServiceError;

/// An authenticated user together with the team their requests act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: String,
    pub team_id: String,
}

/// Blank or absent ids are treated as unauthenticated.
pub(crate) fn require_user(user_id: Option<&str>) -> Result<&str, ServiceError> {
    user_id.map(str::trim).filter(|id| !id.is_empty()).ok_or(ServiceError::Unauthorized)
}

/// A user in several teams acts on the one joined first.
pub(crate) async fn resolve_caller(
    store: &dyn SalesStore,
    user_id: Option<&str>,
) -> Result<Caller, ServiceError> {
    let user_id = require_user(user_id)?;
    let membership = store.get_membership(user_id).await?.ok_or(ServiceError::NoTeam)?;
    Ok(Caller { user_id: user_id.to_owned(), team_id: membership.team_id })
}

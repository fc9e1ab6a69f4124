use std::sync::Arc;

use chrono::Utc;
use salescript_core::{MAX_NAME_LEN, Session, SessionStatus, normalize_company_name};
use salescript_storage::{SalesStore, SessionUpdate};

use crate::caller::resolve_caller;
use crate::error::ServiceError;

pub struct SessionService {
    store: Arc<dyn SalesStore>,
}

impl SessionService {
    #[must_use]
    pub fn new(store: Arc<dyn SalesStore>) -> Self {
        Self { store }
    }

    /// Start a new engagement for the caller's team. Always `active`.
    pub async fn create_session(
        &self,
        user_id: Option<&str>,
        company_name: Option<&str>,
    ) -> Result<Session, ServiceError> {
        let caller = resolve_caller(self.store.as_ref(), user_id).await?;
        if let Some(name) = company_name {
            check_name_len(name)?;
        }
        let session = Session::new(
            uuid::Uuid::new_v4().to_string(),
            caller.team_id,
            caller.user_id,
            company_name,
            Utc::now(),
        );
        self.store.create_session(&session).await?;
        tracing::info!(session_id = %session.id, team_id = %session.team_id, "session created");
        Ok(session)
    }

    pub async fn get_session(
        &self,
        user_id: Option<&str>,
        session_id: &str,
    ) -> Result<Session, ServiceError> {
        let caller = resolve_caller(self.store.as_ref(), user_id).await?;
        self.store
            .get_session(session_id, &caller.team_id)
            .await?
            .ok_or(ServiceError::SessionNotFound)
    }

    /// Overwrite the status. Any value of the fixed set is accepted from any state.
    pub async fn set_status(
        &self,
        user_id: Option<&str>,
        session_id: &str,
        status: &str,
    ) -> Result<Session, ServiceError> {
        self.update_session(user_id, session_id, Some(status), None).await
    }

    /// Set the display name; blank clears it.
    pub async fn set_company_name(
        &self,
        user_id: Option<&str>,
        session_id: &str,
        name: &str,
    ) -> Result<Session, ServiceError> {
        self.update_session(user_id, session_id, None, Some(name)).await
    }

    /// Apply status and/or company name in one write.
    ///
    /// The status is validated before anything is written. Rows of other
    /// teams are never touched and surface as [`ServiceError::SessionNotFound`].
    pub async fn update_session(
        &self,
        user_id: Option<&str>,
        session_id: &str,
        status: Option<&str>,
        company_name: Option<&str>,
    ) -> Result<Session, ServiceError> {
        let caller = resolve_caller(self.store.as_ref(), user_id).await?;

        let status = status.map(str::parse::<SessionStatus>).transpose()?;
        if let Some(name) = company_name {
            check_name_len(name)?;
        }
        let update = SessionUpdate { status, company_name: company_name.map(normalize_company_name) };
        if update.is_empty() {
            return Err(ServiceError::NothingToUpdate);
        }

        let session = self
            .store
            .update_session(session_id, &caller.team_id, &update)
            .await?
            .ok_or(ServiceError::SessionNotFound)?;
        tracing::info!(
            session_id = %session.id,
            team_id = %caller.team_id,
            user_id = %caller.user_id,
            status = %session.status,
            "session updated"
        );
        Ok(session)
    }
}

fn check_name_len(name: &str) -> Result<(), ServiceError> {
    if name.trim().chars().count() > MAX_NAME_LEN {
        return Err(ServiceError::InvalidInput(format!(
            "company name exceeds {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

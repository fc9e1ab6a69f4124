//! Storage types shared across modules

use salescript_core::SessionStatus;

/// Partial update of a session row. `None` leaves a column untouched.
///
/// `company_name: Some(None)` clears the name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    pub status: Option<SessionStatus>,
    pub company_name: Option<Option<String>>,
}

impl SessionUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.company_name.is_none()
    }
}

/// Filter for the script history listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub created_by: String,
    pub session_id: Option<String>,
    pub limit: usize,
}

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A tracked customer engagement. Scripts point at it via `session_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub team_id: String,
    pub created_by: String,
    pub company_name: Option<String>,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// New `active` session. `company_name` is normalized with [`normalize_company_name`].
    #[must_use]
    pub fn new(
        id: String,
        team_id: String,
        created_by: String,
        company_name: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            team_id,
            created_by,
            company_name: company_name.and_then(normalize_company_name),
            status: SessionStatus::Active,
            created_at,
        }
    }

    /// Whether the engagement has reached an outcome.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Lifecycle of a session: starts `active`, ends in one of the outcomes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    DemoBooked,
    Won,
    Lost,
}

impl SessionStatus {
    pub const ALL_VARIANTS_STR: &'static str = "active|demo_booked|won|lost";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Active => "active",
            Self::DemoBooked => "demo_booked",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// `demo_booked`, `won` and `lost` close the engagement.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Exact, case-sensitive match on the wire names. `"Won"` is rejected.
impl FromStr for SessionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "demo_booked" => Ok(Self::DemoBooked),
            "won" => Ok(Self::Won),
            "lost" => Ok(Self::Lost),
            _ => Err(CoreError::InvalidStatus(s.to_owned())),
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trim a display label; blank input means "no name".
#[must_use]
pub fn normalize_company_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_status() {
        for status in
            [SessionStatus::Active, SessionStatus::DemoBooked, SessionStatus::Won, SessionStatus::Lost]
        {
            assert_eq!(status.as_str().parse::<SessionStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_case_variants() {
        for raw in ["", "archived", "Won", "ACTIVE", " won", "demo-booked", "demoBooked"] {
            let err = raw.parse::<SessionStatus>().unwrap_err();
            assert_eq!(err, CoreError::InvalidStatus(raw.to_owned()));
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(!SessionStatus::Active.is_terminal());
        assert!(SessionStatus::DemoBooked.is_terminal());
        assert!(SessionStatus::Won.is_terminal());
        assert!(SessionStatus::Lost.is_terminal());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&SessionStatus::DemoBooked).unwrap();
        assert_eq!(json, "\"demo_booked\"");
        let back: SessionStatus = serde_json::from_str("\"lost\"").unwrap();
        assert_eq!(back, SessionStatus::Lost);
    }

    #[test]
    fn test_normalize_company_name() {
        assert_eq!(normalize_company_name("  Acme AB  "), Some("Acme AB".to_owned()));
        assert_eq!(normalize_company_name("ACME ab"), Some("ACME ab".to_owned()));
        assert_eq!(normalize_company_name(""), None);
        assert_eq!(normalize_company_name(" \t\n"), None);
    }

    #[test]
    fn test_new_session_is_active() {
        let session = Session::new(
            "s-1".to_owned(),
            "team-1".to_owned(),
            "user-1".to_owned(),
            Some("  Acme AB  "),
            Utc::now(),
        );
        assert_eq!(session.status, SessionStatus::Active);
        assert_eq!(session.company_name.as_deref(), Some("Acme AB"));
        assert!(!session.is_closed());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sections::ScriptSections;
use crate::session::SessionStatus;

/// One generation result.
///
/// `raw_output` is stored verbatim; `sections` is derived from it and may be
/// partially or entirely empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub session_id: Option<String>,
    pub team_id: String,
    pub created_by: String,
    pub input: String,
    pub raw_output: String,
    #[serde(flatten)]
    pub sections: ScriptSections,
}

impl Script {
    /// Build a script from raw model output, parsing the sections on the way in.
    #[must_use]
    pub fn from_output(
        id: String,
        created_at: DateTime<Utc>,
        session_id: Option<String>,
        team_id: String,
        created_by: String,
        input: String,
        raw_output: String,
    ) -> Self {
        let sections = ScriptSections::parse(&raw_output);
        Self { id, created_at, session_id, team_id, created_by, input, raw_output, sections }
    }
}

/// History row: a script joined with the display fields of its session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptHistoryEntry {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub input: String,
    pub raw_output: String,
    pub session_id: Option<String>,
    pub company_name: Option<String>,
    pub status: Option<SessionStatus>,
}

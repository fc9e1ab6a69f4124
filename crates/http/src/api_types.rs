//! Request and response bodies.

use salescript_core::{Playbook, Script, ScriptHistoryEntry, Session, Team};
use salescript_service::GeneratedScript;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Keeps an explicit `null` distinct from an absent field.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    /// Anything but a JSON string counts as missing input.
    pub input: Option<Value>,
    pub session_id: Option<String>,
}

impl GenerateRequest {
    pub fn input_text(&self) -> &str {
        self.input.as_ref().and_then(Value::as_str).unwrap_or_default()
    }
}

/// One canonical shape: the full model text in `raw_output` plus one field per section.
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub ok: bool,
    pub raw_output: String,
    pub summary: String,
    pub opening: String,
    pub qualifying: String,
    pub value_framing: String,
    pub objections: String,
    pub closing: String,
    pub coach_tips: String,
    pub script_id: Option<String>,
    pub session_id: Option<String>,
}

impl From<GeneratedScript> for GenerateResponse {
    fn from(generated: GeneratedScript) -> Self {
        let sections = generated.sections;
        Self {
            ok: true,
            raw_output: generated.raw_output,
            summary: sections.summary,
            opening: sections.opening,
            qualifying: sections.qualifying_questions,
            value_framing: sections.value_framing,
            objections: sections.objections,
            closing: sections.closing,
            coach_tips: sections.coach_tips,
            script_id: generated.script_id,
            session_id: generated.session_id,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateSessionRequest {
    pub company_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateSessionRequest {
    #[serde(deserialize_with = "present")]
    pub status: Option<Value>,
    pub company_name: Option<Value>,
}

impl UpdateSessionRequest {
    /// A present status that is not a string is passed on as its JSON text,
    /// so `null` or `7` fail status parsing like any unknown value.
    pub fn status_text(&self) -> Option<String> {
        self.status.as_ref().map(|status| match status {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Non-string names are ignored.
    pub fn company_name_text(&self) -> Option<&str> {
        self.company_name.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session: Session,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateTeamRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamResponse {
    pub team: Team,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlaybookResponse {
    pub playbook: Playbook,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub scripts: Vec<ScriptHistoryEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LatestScriptResponse {
    pub script: Option<Script>,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

//! Teams, memberships and the team playbook.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMembership {
    pub team_id: String,
    pub user_id: String,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Owner,
    Member,
}

impl MemberRole {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Owner => "owner",
            Self::Member => "member",
        }
    }
}

impl FromStr for MemberRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "member" => Ok(Self::Member),
            _ => Err(CoreError::InvalidRole(s.to_owned())),
        }
    }
}

/// How the team sells; drives the tone rules in the system prompt.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SalesMotion {
    #[default]
    Smb,
    Enterprise,
}

impl SalesMotion {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Smb => "smb",
            Self::Enterprise => "enterprise",
        }
    }
}

impl FromStr for SalesMotion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "smb" => Ok(Self::Smb),
            "enterprise" => Ok(Self::Enterprise),
            _ => Err(CoreError::InvalidSalesMotion(s.to_owned())),
        }
    }
}

/// Team-level defaults folded into the prompt ahead of the fixed system prompt.
///
/// Unset fields fall back to the defaults below when the prompt is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playbook {
    #[serde(default)]
    pub sales_motion: SalesMotion,
    pub tone_default: Option<String>,
    pub no_go_phrases: Option<String>,
    pub primary_objections: Option<String>,
}

impl Playbook {
    pub const DEFAULT_TONE: &'static str = "direct";
    pub const DEFAULT_NONE: &'static str = "none";

    #[must_use]
    pub fn tone(&self) -> &str {
        self.tone_default.as_deref().unwrap_or(Self::DEFAULT_TONE)
    }

    #[must_use]
    pub fn forbidden_phrases(&self) -> &str {
        self.no_go_phrases.as_deref().unwrap_or(Self::DEFAULT_NONE)
    }

    #[must_use]
    pub fn objections(&self) -> &str {
        self.primary_objections.as_deref().unwrap_or(Self::DEFAULT_NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playbook_defaults() {
        let playbook = Playbook::default();
        assert_eq!(playbook.sales_motion, SalesMotion::Smb);
        assert_eq!(playbook.tone(), "direct");
        assert_eq!(playbook.forbidden_phrases(), "none");
        assert_eq!(playbook.objections(), "none");
    }

    #[test]
    fn test_sales_motion_parse() {
        assert_eq!("Enterprise".parse::<SalesMotion>().unwrap(), SalesMotion::Enterprise);
        assert_eq!(" smb ".parse::<SalesMotion>().unwrap(), SalesMotion::Smb);
        assert!("midmarket".parse::<SalesMotion>().is_err());
    }

    #[test]
    fn test_member_role_round_trip() {
        assert_eq!(MemberRole::Owner.as_str().parse::<MemberRole>().unwrap(), MemberRole::Owner);
        assert!("admin".parse::<MemberRole>().is_err());
    }
}

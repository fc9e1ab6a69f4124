use std::sync::Arc;

use chrono::Utc;
use salescript_core::{MAX_NAME_LEN, MemberRole, Playbook, SalesMotion, Team, TeamMembership};
use salescript_storage::SalesStore;
use serde::Deserialize;

use crate::caller::{require_user, resolve_caller};
use crate::error::ServiceError;

/// Replacement playbook values as submitted by a client. Blank strings unset a field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaybookUpdate {
    pub sales_motion: Option<String>,
    pub tone_default: Option<String>,
    pub no_go_phrases: Option<String>,
    pub primary_objections: Option<String>,
}

impl PlaybookUpdate {
    fn into_playbook(self) -> Result<Playbook, ServiceError> {
        let sales_motion = match non_blank(self.sales_motion) {
            Some(raw) => raw.parse::<SalesMotion>()?,
            None => SalesMotion::default(),
        };
        Ok(Playbook {
            sales_motion,
            tone_default: non_blank(self.tone_default),
            no_go_phrases: non_blank(self.no_go_phrases),
            primary_objections: non_blank(self.primary_objections),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

pub struct TeamService {
    store: Arc<dyn SalesStore>,
}

impl TeamService {
    #[must_use]
    pub fn new(store: Arc<dyn SalesStore>) -> Self {
        Self { store }
    }

    /// Create a team owned by the caller, with the caller as its first member.
    ///
    /// Needs an identity but no existing membership.
    pub async fn create_team(&self, user_id: Option<&str>, name: &str) -> Result<Team, ServiceError> {
        let user_id = require_user(user_id)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::InvalidInput("team name must not be empty".to_owned()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ServiceError::InvalidInput(format!(
                "team name exceeds {MAX_NAME_LEN} characters"
            )));
        }

        let now = Utc::now();
        let team = Team {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            owner_id: user_id.to_owned(),
            created_at: now,
        };
        let owner = TeamMembership {
            team_id: team.id.clone(),
            user_id: user_id.to_owned(),
            role: MemberRole::Owner,
            joined_at: now,
        };
        self.store.create_team(&team, &owner).await?;
        tracing::info!(team_id = %team.id, owner_id = %team.owner_id, "team created");
        Ok(team)
    }

    /// The caller's team playbook, defaults if none was ever set.
    pub async fn get_playbook(&self, user_id: Option<&str>) -> Result<Playbook, ServiceError> {
        let caller = resolve_caller(self.store.as_ref(), user_id).await?;
        Ok(self.store.get_playbook(&caller.team_id).await?.unwrap_or_default())
    }

    /// Replace the caller's team playbook.
    pub async fn update_playbook(
        &self,
        user_id: Option<&str>,
        update: PlaybookUpdate,
    ) -> Result<Playbook, ServiceError> {
        let caller = resolve_caller(self.store.as_ref(), user_id).await?;
        let playbook = update.into_playbook()?;
        if !self.store.update_playbook(&caller.team_id, &playbook).await? {
            return Err(ServiceError::NoTeam);
        }
        tracing::info!(
            team_id = %caller.team_id,
            sales_motion = %playbook.sales_motion.as_str(),
            "playbook updated"
        );
        Ok(playbook)
    }
}

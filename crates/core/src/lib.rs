//! Core types for salescript.
//!
//! Domain records shared by every other crate, plus the tagged-section parser
//! that turns model output into a [`ScriptSections`] record.

mod constants;
mod env_config;
mod error;
mod script;
mod sections;
mod session;
mod team;

pub use constants::*;
pub use env_config::{env_parse_with_default, env_string};
pub use error::*;
pub use script::{Script, ScriptHistoryEntry};
pub use sections::{ScriptSections, SectionTag, extract_sections, extract_tag};
pub use session::{Session, SessionStatus, normalize_company_name};
pub use team::{MemberRole, Playbook, SalesMotion, Team, TeamMembership};

use std::fmt;
use std::str::FromStr;

use salescript_core::{CoreError, env_parse_with_default, env_string};
use salescript_llm::DEFAULT_LANGUAGE;

/// What generation does when the target session already has an outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClosedSessionPolicy {
    /// Generate regardless of status.
    #[default]
    Allow,
    /// Refuse with [`crate::ServiceError::SessionClosed`].
    Reject,
}

impl ClosedSessionPolicy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for ClosedSessionPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "reject" => Ok(Self::Reject),
            other => Err(CoreError::InvalidInput(format!("unknown closed-session policy: {other}"))),
        }
    }
}

impl fmt::Display for ClosedSessionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for the generation flow, built once by the entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub closed_session_policy: ClosedSessionPolicy,
    /// Language the model is told to answer in.
    pub language: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            closed_session_policy: ClosedSessionPolicy::default(),
            language: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}

impl GenerationConfig {
    /// Read `SALESCRIPT_CLOSED_SESSION_POLICY` and `SALESCRIPT_LANGUAGE`.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            closed_session_policy: env_parse_with_default(
                "SALESCRIPT_CLOSED_SESSION_POLICY",
                ClosedSessionPolicy::default(),
            ),
            language: env_string("SALESCRIPT_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned()),
        }
    }

    #[must_use]
    pub const fn with_closed_session_policy(mut self, policy: ClosedSessionPolicy) -> Self {
        self.closed_session_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("allow".parse::<ClosedSessionPolicy>().unwrap(), ClosedSessionPolicy::Allow);
        assert_eq!(" Reject ".parse::<ClosedSessionPolicy>().unwrap(), ClosedSessionPolicy::Reject);
        assert!("block".parse::<ClosedSessionPolicy>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.closed_session_policy, ClosedSessionPolicy::Allow);
        assert_eq!(config.language, "Swedish");
    }
}

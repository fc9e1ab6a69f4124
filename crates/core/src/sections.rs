//! Tagged-section protocol between the model and the application.
//!
//! The system prompt asks the model to partition its answer with bracketed
//! all-caps markers (`[SUMMARY]`, `[OPENING]`, ...), each on its own line and
//! in a fixed order. This module turns that semi-structured text back into a
//! typed record.
//!
//! Grammar, per requested tag:
//! - the section starts right after the first occurrence of `[TAG]`
//!   (exact, case-sensitive);
//! - it ends at the first bracketed all-caps token found after that marker,
//!   whatever its name, or at the end of the text;
//! - the body is trimmed. A missing marker yields an empty body.
//!
//! Every tag is searched from the start of the text, so a model that skips or
//! reorders sections still produces usable output. Parsing never fails.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Any bracketed token made of uppercase ASCII letters and whitespace.
static MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[A-Z\s]+\]").unwrap());

/// The seven sections of a sales script, in the order the model must emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionTag {
    Summary,
    Opening,
    QualifyingQuestions,
    ValueFraming,
    Objections,
    Closing,
    CoachTips,
}

impl SectionTag {
    /// Canonical emission order.
    pub const ALL: [SectionTag; 7] = [
        SectionTag::Summary,
        SectionTag::Opening,
        SectionTag::QualifyingQuestions,
        SectionTag::ValueFraming,
        SectionTag::Objections,
        SectionTag::Closing,
        SectionTag::CoachTips,
    ];

    /// Tag name as it appears between the brackets.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Summary => "SUMMARY",
            Self::Opening => "OPENING",
            Self::QualifyingQuestions => "QUALIFYING QUESTIONS",
            Self::ValueFraming => "VALUE FRAMING",
            Self::Objections => "OBJECTIONS",
            Self::Closing => "CLOSING",
            Self::CoachTips => "COACH TIPS",
        }
    }

    /// The literal marker, e.g. `[COACH TIPS]`.
    #[must_use]
    pub fn marker(&self) -> String {
        format!("[{}]", self.as_str())
    }

    /// Field name used for storage columns and JSON keys.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match *self {
            Self::Summary => "summary",
            Self::Opening => "opening",
            Self::QualifyingQuestions => "qualifying_questions",
            Self::ValueFraming => "value_framing",
            Self::Objections => "objections",
            Self::Closing => "closing",
            Self::CoachTips => "coach_tips",
        }
    }

    /// Canonical tag names, in order, for [`extract_sections`].
    #[must_use]
    pub fn canonical_names() -> [&'static str; 7] {
        Self::ALL.map(|tag| tag.as_str())
    }
}

impl std::fmt::Display for SectionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract the body of a single tag from `raw`.
///
/// Returns an empty string when the marker is absent.
#[must_use]
pub fn extract_tag(raw: &str, tag: &str) -> String {
    let marker = format!("[{tag}]");
    let Some(start) = raw.find(&marker) else {
        return String::new();
    };
    let rest = raw.get(start + marker.len()..).unwrap_or("");
    let body = match MARKER_PATTERN.find(rest) {
        Some(next) => rest.get(..next.start()).unwrap_or(rest),
        None => rest,
    };
    body.trim().to_owned()
}

/// Extract one `(tag, body)` pair per requested tag, preserving the order of `tags`.
///
/// Duplicate names in `tags` produce duplicate entries with identical bodies.
#[must_use]
pub fn extract_sections<'a>(raw: &str, tags: &[&'a str]) -> Vec<(&'a str, String)> {
    tags.iter().map(|tag| (*tag, extract_tag(raw, tag))).collect()
}

/// Parsed form of a model response. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSections {
    pub summary: String,
    pub opening: String,
    pub qualifying_questions: String,
    pub value_framing: String,
    pub objections: String,
    pub closing: String,
    pub coach_tips: String,
}

impl ScriptSections {
    /// Parse raw model output using the canonical seven-tag order.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut sections = Self::default();
        for tag in SectionTag::ALL {
            *sections.field_mut(tag) = extract_tag(raw, tag.as_str());
        }
        sections
    }

    #[must_use]
    pub fn get(&self, tag: SectionTag) -> &str {
        match tag {
            SectionTag::Summary => &self.summary,
            SectionTag::Opening => &self.opening,
            SectionTag::QualifyingQuestions => &self.qualifying_questions,
            SectionTag::ValueFraming => &self.value_framing,
            SectionTag::Objections => &self.objections,
            SectionTag::Closing => &self.closing,
            SectionTag::CoachTips => &self.coach_tips,
        }
    }

    fn field_mut(&mut self, tag: SectionTag) -> &mut String {
        match tag {
            SectionTag::Summary => &mut self.summary,
            SectionTag::Opening => &mut self.opening,
            SectionTag::QualifyingQuestions => &mut self.qualifying_questions,
            SectionTag::ValueFraming => &mut self.value_framing,
            SectionTag::Objections => &mut self.objections,
            SectionTag::Closing => &mut self.closing,
            SectionTag::CoachTips => &mut self.coach_tips,
        }
    }

    /// Non-empty sections in canonical order, one per tab of a tabbed view.
    pub fn tabs(&self) -> impl Iterator<Item = (SectionTag, &str)> {
        SectionTag::ALL
            .into_iter()
            .map(|tag| (tag, self.get(tag)))
            .filter(|(_, body)| !body.is_empty())
    }

    /// True when no section could be extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs().next().is_none()
    }
}

#[cfg(test)]
mod tests;

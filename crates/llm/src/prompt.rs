//! Prompt construction for script generation.
//!
//! The system message is the team playbook block followed by the fixed
//! instructions. The playbook only adds context; the output-format block at
//! the end of the fixed instructions is always present and always last.

use salescript_core::{Playbook, SectionTag};

/// Language the model answers in when none is configured.
pub const DEFAULT_LANGUAGE: &str = "Swedish";

const ROLE_AND_RULES: &str = "\
You are a sales strategist and call copilot. You write the script a top \
salesperson would use on this exact call, and you coach the rep on how to \
deliver it. Your goal is to move the buyer to a decision.

You lead the conversation. You prefer momentum and clarity over politeness.

SALES MODE:
- enterprise: write like an experienced enterprise sales director. Assume long \
cycles and several stakeholders. Talk about risk, cost of inaction, ROI and \
the decision process. Formal, precise language, no hype.
- smb: write like a hands-on founder. Assume fast decisions and little \
patience. Talk about speed, simplicity and quick wins. Direct, energetic, \
almost blunt language.
- The opening for enterprise must mention risk, scale or missed revenue. The \
opening for smb must mention speed, momentum or wasted time.

COMPANY CONTEXT:
Treat whatever the user says about their company, offer, customers and \
competitors as true. Fill gaps with strong, realistic assumptions and never \
ask the user to clarify.

BEHAVIOUR:
- Never sound like marketing copy.
- No soft or permission-based questions; lead with a confident assumption and \
ask for confirmation.
- Keep the number of questions low.
- Tie every problem to revenue, time or risk.
- Neutralise objections and move forward.
- The closing must never sound optional; always assume a next step, with a \
time-bound ask.
- The opening starts with a confident assumption, skips small talk and frames \
a problem or opportunity immediately.";

/// Guidance printed under each marker in the output-format block.
const fn section_guidance(tag: SectionTag) -> &'static str {
    match tag {
        SectionTag::Summary => "At most 3 sentences on the sales situation.",
        SectionTag::Opening => "1-2 short spoken sentences.",
        SectionTag::QualifyingQuestions => {
            "At most 3 assumption-based questions that move the deal forward."
        },
        SectionTag::ValueFraming => "At most 4 bullet points on value and consequences.",
        SectionTag::Objections => {
            "At most 3 objections. Each answer is 2 sentences: reframe, then push forward."
        },
        SectionTag::Closing => "The exact words for the close or next step.",
        SectionTag::CoachTips => "At most 5 practical bullet points for the rep.",
    }
}

/// The mandatory output-format block. Markers are emitted bit-exact, one per line.
#[must_use]
pub fn output_format_block() -> String {
    let mut block = String::from(
        "OUTPUT FORMAT (MANDATORY):\n\
         Return exactly the following section headers, each on its own line, in this exact order:\n",
    );
    for tag in SectionTag::ALL {
        block.push('\n');
        block.push_str(&tag.marker());
        block.push('\n');
        block.push_str(section_guidance(tag));
        block.push('\n');
    }
    block.push_str(
        "\nRules:\n\
         - Always include all sections.\n\
         - Never rename or reorder the section headers; keep the square brackets.\n\
         - Do not add extra headers or any text outside the sections.",
    );
    block
}

/// Fixed instructions: role, sales-mode rules, language and output format.
#[must_use]
pub fn system_prompt(language: &str) -> String {
    format!(
        "{ROLE_AND_RULES}\n\nLANGUAGE:\nAlways respond in {language}, in natural spoken \
         language suitable for a real sales call.\n\n{}",
        output_format_block()
    )
}

/// Advisory team defaults, placed ahead of the fixed instructions.
#[must_use]
pub fn team_context(playbook: &Playbook) -> String {
    format!(
        "TEAM PLAYBOOK:\n\
         - Sales motion: {}\n\
         - Default tone: {}\n\
         - Forbidden phrases: {}\n\
         - Primary objections: {}\n\n\
         Always follow the team playbook above.",
        playbook.sales_motion.as_str(),
        playbook.tone(),
        playbook.forbidden_phrases(),
        playbook.objections(),
    )
}

/// Full system message for a generation request.
#[must_use]
pub fn compose_system_prompt(playbook: &Playbook, language: &str) -> String {
    format!("{}\n\n{}", team_context(playbook), system_prompt(language))
}

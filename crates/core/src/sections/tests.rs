use super::{ScriptSections, SectionTag, extract_sections, extract_tag};

const FULL_OUTPUT: &str = "[SUMMARY]
Mid-size logistics firm losing deals to slow quotes.

[OPENING]
Ni tappar affärer varje vecka på att offerterna tar för lång tid.

[QUALIFYING QUESTIONS]
- Hur många offerter går ut per vecka?
- Vem äger processen idag?

[VALUE FRAMING]
- Snabbare offert = högre hit rate

[OBJECTIONS]
\"Vi har inte tid\" - Det är precis därför vi ska prata nu.

[CLOSING]
Vi bokar en demo på torsdag kl 10.

[COACH TIPS]
- Led samtalet
- Anta nästa steg
";

#[test]
fn test_full_output_recovers_every_section() {
    let sections = ScriptSections::parse(FULL_OUTPUT);
    assert_eq!(sections.summary, "Mid-size logistics firm losing deals to slow quotes.");
    assert_eq!(sections.opening, "Ni tappar affärer varje vecka på att offerterna tar för lång tid.");
    assert_eq!(
        sections.qualifying_questions,
        "- Hur många offerter går ut per vecka?\n- Vem äger processen idag?"
    );
    assert_eq!(sections.value_framing, "- Snabbare offert = högre hit rate");
    assert_eq!(sections.objections, "\"Vi har inte tid\" - Det är precis därför vi ska prata nu.");
    assert_eq!(sections.closing, "Vi bokar en demo på torsdag kl 10.");
    assert_eq!(sections.coach_tips, "- Led samtalet\n- Anta nästa steg");
}

#[test]
fn test_no_cross_contamination_between_adjacent_sections() {
    let sections = ScriptSections::parse(FULL_OUTPUT);
    for tag in SectionTag::ALL {
        let body = sections.get(tag);
        assert!(!body.contains('['), "{tag} leaked a marker: {body:?}");
    }
}

#[test]
fn test_missing_sections_are_empty() {
    let sections = ScriptSections::parse("[SUMMARY]\nFoo\n[OPENING]\nBar\n[CLOSING]\nBaz");
    assert_eq!(
        sections,
        ScriptSections {
            summary: "Foo".to_owned(),
            opening: "Bar".to_owned(),
            qualifying_questions: String::new(),
            value_framing: String::new(),
            objections: String::new(),
            closing: "Baz".to_owned(),
            coach_tips: String::new(),
        }
    );
}

#[test]
fn test_empty_text_yields_empty_sections() {
    let sections = ScriptSections::parse("");
    assert_eq!(sections, ScriptSections::default());
    assert!(sections.is_empty());
}

#[test]
fn test_text_without_markers_yields_empty_sections() {
    let sections = ScriptSections::parse("I'm sorry, I can't help with that.");
    assert!(sections.is_empty());
}

#[test]
fn test_non_canonical_order_ends_at_next_marker_in_text() {
    let raw = "[CLOSING]\nclose\n[OPENING]\nopen\n[SUMMARY]\nsum";
    let sections = ScriptSections::parse(raw);
    assert_eq!(sections.closing, "close");
    assert_eq!(sections.opening, "open");
    assert_eq!(sections.summary, "sum");
}

#[test]
fn test_unknown_marker_terminates_section() {
    let raw = "[SUMMARY]\nsum\n[NOTES]\nextra\n[OPENING]\nopen";
    let sections = ScriptSections::parse(raw);
    assert_eq!(sections.summary, "sum");
    assert_eq!(sections.opening, "open");
}

#[test]
fn test_lowercase_brackets_do_not_terminate_section() {
    let raw = "[SUMMARY]\nsee [the deck] and [Q3 numbers]\n[OPENING]\nopen";
    assert_eq!(extract_tag(raw, "SUMMARY"), "see [the deck] and [Q3 numbers]");
}

#[test]
fn test_markers_are_case_sensitive() {
    let raw = "[summary]\nlower\n[Opening]\nmixed";
    let sections = ScriptSections::parse(raw);
    assert!(sections.summary.is_empty());
    assert!(sections.opening.is_empty());
}

#[test]
fn test_duplicate_marker_uses_first_occurrence() {
    let raw = "[SUMMARY]\nfirst\n[SUMMARY]\nsecond";
    assert_eq!(extract_tag(raw, "SUMMARY"), "first");
}

#[test]
fn test_inline_markers() {
    let raw = "[SUMMARY] short [OPENING] direct [CLOSING] now";
    let sections = ScriptSections::parse(raw);
    assert_eq!(sections.summary, "short");
    assert_eq!(sections.opening, "direct");
    assert_eq!(sections.closing, "now");
}

#[test]
fn test_last_section_runs_to_end_of_text() {
    let raw = "preamble\n[COACH TIPS]\n  tip one\n  tip two  \n\n";
    assert_eq!(extract_tag(raw, "COACH TIPS"), "tip one\n  tip two");
}

#[test]
fn test_parsing_is_idempotent() {
    let first = ScriptSections::parse(FULL_OUTPUT);
    let second = ScriptSections::parse(FULL_OUTPUT);
    assert_eq!(first, second);
}

#[test]
fn test_extract_sections_returns_one_entry_per_tag_in_request_order() {
    let raw = "[B]\nbee\n[A]\nay";
    let result = extract_sections(raw, &["A", "B", "C"]);
    assert_eq!(
        result,
        vec![("A", "ay".to_owned()), ("B", "bee".to_owned()), ("C", String::new())]
    );
}

#[test]
fn test_extract_sections_matches_typed_parse() {
    let pairs = extract_sections(FULL_OUTPUT, &SectionTag::canonical_names());
    let sections = ScriptSections::parse(FULL_OUTPUT);
    for (tag, (name, body)) in SectionTag::ALL.into_iter().zip(pairs) {
        assert_eq!(tag.as_str(), name);
        assert_eq!(sections.get(tag), body);
    }
}

#[test]
fn test_tabs_skip_empty_sections() {
    let sections = ScriptSections::parse("[SUMMARY]\nFoo\n[CLOSING]\nBaz");
    let tabs: Vec<_> = sections.tabs().collect();
    assert_eq!(tabs, vec![(SectionTag::Summary, "Foo"), (SectionTag::Closing, "Baz")]);
}

#[test]
fn test_markers_are_bit_exact() {
    let markers: Vec<String> = SectionTag::ALL.iter().map(SectionTag::marker).collect();
    assert_eq!(
        markers,
        vec![
            "[SUMMARY]",
            "[OPENING]",
            "[QUALIFYING QUESTIONS]",
            "[VALUE FRAMING]",
            "[OBJECTIONS]",
            "[CLOSING]",
            "[COACH TIPS]",
        ]
    );
}

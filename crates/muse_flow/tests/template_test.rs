//! Prompt rendering tests over the public template API.

use muse_core::Record;
use muse_flow::PromptTemplate;
use serde_json::json;

fn record(value: serde_json::Value) -> Record {
    Record::from_value(value).unwrap()
}

const POEM_TEMPLATE: &str = "\
Theme: {{{theme}}}
{{#if existingPoem}}
Existing Poem:
{{{existingPoem}}}
{{/if}}
Stanza:
";

#[test]
fn conditional_block_renders_only_when_field_is_present() {
    let template = PromptTemplate::parse(POEM_TEMPLATE).unwrap();

    let with_poem = template.render(&record(json!({
        "theme": "loss",
        "existingPoem": "The lamps go out along the avenue",
    })));
    assert!(with_poem.contains("Theme: loss"));
    assert!(with_poem.contains("Existing Poem:"));
    assert!(with_poem.contains("The lamps go out along the avenue"));

    let without_poem = template.render(&record(json!({"theme": "loss"})));
    assert!(without_poem.contains("Theme: loss"));
    assert!(!without_poem.contains("Existing Poem:"));
    assert!(without_poem.contains("Stanza:"));
}

#[test]
fn rendering_is_deterministic() {
    let template = PromptTemplate::parse(POEM_TEMPLATE).unwrap();
    let input = record(json!({"theme": "a walk in the woods"}));

    assert_eq!(template.render(&input), template.render(&input));
}

#[test]
fn absent_field_renders_as_empty_text() {
    let template = PromptTemplate::parse("Theme: {{theme}}!").unwrap();

    assert_eq!(template.render(&record(json!({}))), "Theme: !");
}

#[test]
fn numbers_and_arrays_render_as_text() {
    let template = PromptTemplate::parse("Lines: {{lines}}, Tags: {{tags}}").unwrap();

    let rendered = template.render(&record(json!({
        "lines": 4,
        "tags": ["somber", "wintry"],
    })));
    assert_eq!(rendered, "Lines: 4, Tags: somber, wintry");
}

#[test]
fn empty_array_guard_skips_the_block() {
    let template =
        PromptTemplate::parse("{{#if tags}}Tags: {{tags}}{{/if}}done").unwrap();

    assert_eq!(template.render(&record(json!({"tags": []}))), "done");
    assert_eq!(
        template.render(&record(json!({"tags": ["quiet"]}))),
        "Tags: quietdone"
    );
}

//! Built-in catalog and registry tests.

use muse_core::Record;
use muse_error::{FlowErrorKind, MuseErrorKind, TemplateErrorKind};
use muse_flow::{
    FieldSpec, FlowAction, FlowDefinition, FlowRegistry, Schema, creative_flows, names,
};
use serde_json::json;

#[test]
fn catalog_registers_all_six_flows() {
    let registry = creative_flows().unwrap();

    assert_eq!(registry.len(), 6);
    assert_eq!(
        registry.names(),
        vec![
            names::CHARACTER_PROFILE,
            names::CONCEPT_ART,
            names::POEM_STANZA,
            names::SCRIPT_ANALYSIS,
            names::SONG_VERSE,
            names::STORY_PLOT,
        ]
    );
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = creative_flows().unwrap();

    let duplicate = FlowDefinition::structured(
        names::POEM_STANZA,
        "A second poem flow",
        Schema::new().field("theme", FieldSpec::string()),
        Schema::new().field("stanza", FieldSpec::string()),
        "Theme: {{theme}}",
    )
    .unwrap();

    let err = registry.register(duplicate).unwrap_err();
    match err.kind() {
        MuseErrorKind::Flow(flow_err) => {
            assert!(matches!(
                &flow_err.kind,
                FlowErrorKind::DuplicateFlow(name) if name == names::POEM_STANZA
            ));
        }
        other => panic!("expected a flow error, got: {}", other),
    }
    assert_eq!(registry.len(), 6);
}

#[test]
fn template_referencing_undeclared_field_is_rejected() {
    let err = FlowDefinition::structured(
        "bad-flow",
        "References a field the input schema lacks",
        Schema::new().field("theme", FieldSpec::string()),
        Schema::new().field("stanza", FieldSpec::string()),
        "Theme: {{theme}}\nMood: {{mood}}",
    )
    .unwrap_err();

    match err.kind() {
        MuseErrorKind::Template(template_err) => {
            assert!(matches!(
                &template_err.kind,
                TemplateErrorKind::UnknownField(field) if field == "mood"
            ));
        }
        other => panic!("expected a template error, got: {}", other),
    }
}

#[test]
fn iter_yields_flows_in_name_order() {
    let registry = creative_flows().unwrap();

    let names: Vec<&str> = registry.iter().map(|flow| flow.name().as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn empty_registry_resolves_nothing() {
    let registry = FlowRegistry::new();

    assert!(registry.is_empty());
    assert!(registry.resolve(names::POEM_STANZA).is_none());
}

#[test]
fn poem_template_skips_conditional_for_blank_guard() {
    let registry = creative_flows().unwrap();
    let flow = registry.resolve(names::POEM_STANZA).unwrap();
    let template = match flow.action() {
        FlowAction::Structured(template) => template,
        other => panic!("expected a structured flow, got: {:?}", other),
    };

    let input = Record::from_value(json!({"theme": "loss", "existingPoem": "   "})).unwrap();
    let prompt = template.render(&input);

    assert!(prompt.contains("Theme: loss"));
    assert!(!prompt.contains("Existing Poem:"));
}

#[test]
fn song_verse_template_inlines_keywords_when_present() {
    let registry = creative_flows().unwrap();
    let flow = registry.resolve(names::SONG_VERSE).unwrap();
    let template = match flow.action() {
        FlowAction::Structured(template) => template,
        other => panic!("expected a structured flow, got: {:?}", other),
    };

    let input = Record::from_value(json!({
        "theme": "rebellion",
        "chorus": "We won't back down tonight",
        "keywords": "neon, midnight",
    }))
    .unwrap();
    let prompt = template.render(&input);

    assert!(prompt.contains("Keywords to include: neon, midnight"));
}

//! Invocation behavior tests against a mock driver.

mod test_utils;

use muse_core::{MediaSource, Record};
use muse_error::{FlowErrorKind, MuseError, MuseErrorKind, ViolationKind};
use muse_flow::{FlowInvoker, creative_flows, names};
use serde_json::json;
use test_utils::MockDriver;

fn record(value: serde_json::Value) -> Record {
    Record::from_value(value).unwrap()
}

fn invoker(driver: MockDriver) -> FlowInvoker<MockDriver> {
    FlowInvoker::new(driver, creative_flows().unwrap())
}

fn flow_kind(err: &MuseError) -> &FlowErrorKind {
    match err.kind() {
        MuseErrorKind::Flow(flow_err) => &flow_err.kind,
        other => panic!("expected a flow error, got: {}", other),
    }
}

#[tokio::test]
async fn unknown_flow_makes_no_driver_call() {
    let driver = MockDriver::with_text("{}");
    let invoker = invoker(driver.clone());

    let err = invoker
        .invoke("sonnet-generator", &record(json!({})))
        .await
        .unwrap_err();

    assert!(matches!(flow_kind(&err), FlowErrorKind::UnknownFlow(name) if name == "sonnet-generator"));
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn missing_required_field_fails_before_any_call() {
    let driver = MockDriver::with_text(r#"{"stanza": "unused"}"#);
    let invoker = invoker(driver.clone());

    let err = invoker
        .invoke(names::POEM_STANZA, &record(json!({})))
        .await
        .unwrap_err();

    match flow_kind(&err) {
        FlowErrorKind::InvalidInput(violations) => {
            let violation = violations.iter().next().unwrap();
            assert_eq!(violation.field, "theme");
            assert_eq!(violation.kind, ViolationKind::Missing);
        }
        other => panic!("expected InvalidInput, got: {}", other),
    }
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn all_input_violations_are_reported_together() {
    let driver = MockDriver::with_text("{}");
    let invoker = invoker(driver.clone());

    let err = invoker
        .invoke(names::SONG_VERSE, &record(json!({"keywords": 42})))
        .await
        .unwrap_err();

    match flow_kind(&err) {
        FlowErrorKind::InvalidInput(violations) => {
            let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
            assert_eq!(fields, vec!["theme", "chorus", "keywords"]);
        }
        other => panic!("expected InvalidInput, got: {}", other),
    }
    assert_eq!(driver.call_count(), 0);
}

#[tokio::test]
async fn poem_stanza_returns_validated_record() {
    let driver = MockDriver::with_text(r#"{"stanza": "A hush of winter settles on the stair"}"#);
    let invoker = invoker(driver.clone());

    let output = invoker
        .invoke(names::POEM_STANZA, &record(json!({"theme": "loss"})))
        .await
        .unwrap();

    assert_eq!(
        output.get_str("stanza"),
        Some("A hush of winter settles on the stair")
    );
    assert_eq!(driver.call_count(), 1);

    let prompt = driver.last_prompt().unwrap();
    assert!(prompt.contains("Theme: loss"));
    assert!(!prompt.contains("Existing Poem:"));
}

#[tokio::test]
async fn poem_stanza_includes_existing_poem_when_provided() {
    let driver = MockDriver::with_text(r#"{"stanza": "And still the river carries what we lost"}"#);
    let invoker = invoker(driver.clone());

    invoker
        .invoke(
            names::POEM_STANZA,
            &record(json!({
                "theme": "loss",
                "existingPoem": "The lamps go out along the avenue",
            })),
        )
        .await
        .unwrap();

    let prompt = driver.last_prompt().unwrap();
    assert!(prompt.contains("Existing Poem:"));
    assert!(prompt.contains("The lamps go out along the avenue"));
}

#[tokio::test]
async fn story_plot_accepts_three_complete_outlines() {
    let canned = json!({
        "outlines": [
            {
                "title": "The Clockwork Alibi",
                "logline": "A detective discovers the killer is a machine built to mimic him.",
                "plot": "Setup: ... Confrontation: ... Resolution: ..."
            },
            {
                "title": "Gears of Guilt",
                "logline": "The machine begins confessing to crimes the detective forgot.",
                "plot": "Setup: ... Confrontation: ... Resolution: ..."
            },
            {
                "title": "Mainspring",
                "logline": "Stopping the machine means erasing the detective's own memory.",
                "plot": "Setup: ... Confrontation: ... Resolution: ..."
            }
        ]
    });
    let driver = MockDriver::with_text(canned.to_string());
    let invoker = invoker(driver.clone());

    let output = invoker
        .invoke(
            names::STORY_PLOT,
            &record(json!({"premise": "A detective hunts a clockwork killer."})),
        )
        .await
        .unwrap();

    let outlines = output.get_array("outlines").unwrap();
    assert_eq!(outlines.len(), 3);
    for outline in outlines {
        for field in ["title", "logline", "plot"] {
            let text = outline.get(field).and_then(|v| v.as_str()).unwrap();
            assert!(!text.is_empty());
        }
    }
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn script_analysis_surfaces_character_inconsistencies() {
    let canned = json!({
        "summary": "The script contradicts itself about Mara's age.",
        "storyGaps": [],
        "timelineConflicts": [],
        "characterInconsistencies": [
            "Mara is 30 in scene 1 but celebrates her 25th birthday in scene 4."
        ]
    });
    let driver = MockDriver::with_text(canned.to_string());
    let invoker = invoker(driver.clone());

    let output = invoker
        .invoke(
            names::SCRIPT_ANALYSIS,
            &record(json!({
                "scriptName": "mara.txt",
                "scriptContent": "MARA (30) enters. ... Later, MARA blows out 25 candles.",
            })),
        )
        .await
        .unwrap();

    let inconsistencies = output.get_array("characterInconsistencies").unwrap();
    assert!(!inconsistencies.is_empty());

    let prompt = driver.last_prompt().unwrap();
    assert!(prompt.contains("Script Name: mara.txt"));
    assert!(prompt.contains("25 candles"));
}

#[tokio::test]
async fn json_inside_code_fence_is_accepted() {
    let driver = MockDriver::with_text(
        "Here you go:\n```json\n{\"stanza\": \"Fenced but valid\"}\n```\nEnjoy!",
    );
    let invoker = invoker(driver);

    let output = invoker
        .invoke(names::POEM_STANZA, &record(json!({"theme": "loss"})))
        .await
        .unwrap();

    assert_eq!(output.get_str("stanza"), Some("Fenced but valid"));
}

#[tokio::test]
async fn nonconforming_response_is_generation_failed() {
    let driver = MockDriver::with_text(r#"{"poem": "wrong shape"}"#);
    let invoker = invoker(driver.clone());

    let err = invoker
        .invoke(names::POEM_STANZA, &record(json!({"theme": "loss"})))
        .await
        .unwrap_err();

    match flow_kind(&err) {
        FlowErrorKind::GenerationFailed(message) => {
            assert!(message.contains("stanza"));
        }
        other => panic!("expected GenerationFailed, got: {}", other),
    }
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn empty_response_is_generation_failed() {
    let driver = MockDriver::with_text("   \n  ");
    let invoker = invoker(driver.clone());

    let err = invoker
        .invoke(names::POEM_STANZA, &record(json!({"theme": "loss"})))
        .await
        .unwrap_err();

    assert!(matches!(flow_kind(&err), FlowErrorKind::GenerationFailed(_)));
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn driver_failure_is_generation_failed() {
    let driver = MockDriver::with_error("503 model overloaded");
    let invoker = invoker(driver.clone());

    let err = invoker
        .invoke(names::POEM_STANZA, &record(json!({"theme": "loss"})))
        .await
        .unwrap_err();

    match flow_kind(&err) {
        FlowErrorKind::GenerationFailed(message) => {
            assert!(message.contains("503"));
        }
        other => panic!("expected GenerationFailed, got: {}", other),
    }
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn concept_art_returns_data_uri() {
    let driver = MockDriver::with_image(MediaSource::Base64("aGVsbG8=".to_string()));
    let invoker = invoker(driver.clone());

    let output = invoker
        .invoke(
            names::CONCEPT_ART,
            &record(json!({
                "fullName": "Seraphina Vale",
                "coreTraits": "brave knight",
                "personalityTraits": ["loyal", "stubborn"],
                "backstory": "Raised in the border marches.",
                "motivations": "Redeem her exiled house.",
                "characterArc": "From blind duty to chosen loyalty.",
            })),
        )
        .await
        .unwrap();

    assert_eq!(
        output.get_str("imageDataUri"),
        Some("data:image/png;base64,aGVsbG8=")
    );
    assert_eq!(driver.call_count(), 1);

    let prompt = driver.last_prompt().unwrap();
    assert!(prompt.contains("Name: Seraphina Vale"));
    assert!(prompt.contains("Personality: loyal, stubborn"));
    assert!(prompt.contains("Story Context: N/A"));
    assert!(prompt.contains("Style: digital painting"));
}

#[tokio::test]
async fn concept_art_with_empty_media_is_generation_failed() {
    let driver = MockDriver::with_image(MediaSource::Base64(String::new()));
    let invoker = invoker(driver.clone());

    let err = invoker
        .invoke(
            names::CONCEPT_ART,
            &record(json!({
                "fullName": "Seraphina Vale",
                "coreTraits": "brave knight",
                "personalityTraits": ["loyal"],
                "backstory": "Raised in the border marches.",
                "motivations": "Redeem her exiled house.",
                "characterArc": "From blind duty to chosen loyalty.",
            })),
        )
        .await
        .unwrap_err();

    assert!(matches!(flow_kind(&err), FlowErrorKind::GenerationFailed(_)));
    assert_eq!(driver.call_count(), 1);
}

#[tokio::test]
async fn identical_input_renders_identical_prompts() {
    let driver = MockDriver::with_text(r#"{"stanza": "same"}"#);
    let invoker = invoker(driver.clone());
    let input = record(json!({"theme": "a walk in the woods"}));

    invoker.invoke(names::POEM_STANZA, &input).await.unwrap();
    let first = driver.last_prompt().unwrap();
    invoker.invoke(names::POEM_STANZA, &input).await.unwrap();
    let second = driver.last_prompt().unwrap();

    assert_eq!(first, second);
    assert_eq!(driver.call_count(), 2);
}

//! The built-in creative-writing flow catalog.
//!
//! Six flows cover the assistant's surfaces: poem stanzas, song verses,
//! character profiles, story plots, script inconsistency analysis, and
//! character concept art.

use crate::{FieldSpec, FlowDefinition, FlowRegistry, Schema};
use muse_core::Record;
use muse_error::MuseResult;
use serde_json::Value;

/// Names of the built-in flows.
pub mod names {
    /// Generate a new stanza for a poem.
    pub const POEM_STANZA: &str = "poem-stanza";
    /// Generate a verse for a song.
    pub const SONG_VERSE: &str = "song-verse";
    /// Generate a detailed character profile.
    pub const CHARACTER_PROFILE: &str = "character-profile";
    /// Generate three story plot outlines from a premise.
    pub const STORY_PLOT: &str = "story-plot";
    /// Analyze a script for inconsistencies.
    pub const SCRIPT_ANALYSIS: &str = "script-analysis";
    /// Generate concept art from a character profile.
    pub const CONCEPT_ART: &str = "concept-art";
}

const POEM_STANZA_PROMPT: &str = "\
You are a skilled poet, adept at creating evocative and meaningful stanzas.

Based on the provided theme and, if available, the existing poem, generate a new stanza that fits seamlessly and enhances the overall piece.

Theme: {{{theme}}}
{{#if existingPoem}}
Existing Poem:
{{{existingPoem}}}
{{/if}}

Stanza:
";

const SONG_VERSE_PROMPT: &str = "\
You are an expert songwriter and creative co-writer. Your task is to write a compelling verse for a song based on the provided theme, chorus, and keywords. The verse should match the tone and style of the chorus and seamlessly lead into it.

Theme: {{{theme}}}

Chorus:
{{{chorus}}}
{{#if keywords}}
Keywords to include: {{{keywords}}}
{{/if}}

Based on the information above, please generate one verse for the song.
";

const CHARACTER_PROFILE_PROMPT: &str = "\
You are an expert character designer for stories. Based on the provided information, generate a detailed character profile.

Character Name: {{{characterName}}}
Core Traits: {{{coreTraits}}}
{{#if storyContext}}
Story Context:
{{{storyContext}}}
{{/if}}

Flesh out the character with a full name, a list of personality traits, a compelling backstory, clear motivations, and a potential character arc.
";

const STORY_PLOT_PROMPT: &str = "\
You are a master storyteller and plot developer. Your task is to take a user's story premise and generate three distinct and compelling plot outlines.

For each outline, provide a catchy title, a one-sentence logline, and a detailed plot breakdown using the classic three-act structure (Setup, Confrontation, Resolution).

Story Premise: {{{premise}}}

Generate three unique plot outlines based on this premise.
";

const SCRIPT_ANALYSIS_PROMPT: &str = "\
You are a script analysis expert. You will analyze the provided script for story gaps, timeline conflicts, and character inconsistencies.

Script Name: {{{scriptName}}}
Script Content:
{{{scriptContent}}}

Provide a summary of your analysis, list any story gaps, timeline conflicts, and character inconsistencies found in the script. Include a descriptive summary.
";

/// Input fields shared by the concept-art flow and the character-profile
/// output: a complete character profile.
fn character_profile_fields() -> Schema {
    Schema::new()
        .field(
            "fullName",
            FieldSpec::string()
                .at_least(1)
                .describe("The character's full name."),
        )
        .field(
            "personalityTraits",
            FieldSpec::string_array().describe("A list of key personality traits."),
        )
        .field(
            "backstory",
            FieldSpec::string()
                .at_least(1)
                .describe("A summary of the character's backstory."),
        )
        .field(
            "motivations",
            FieldSpec::string()
                .at_least(1)
                .describe("The character's primary motivations."),
        )
        .field(
            "characterArc",
            FieldSpec::string()
                .at_least(1)
                .describe("A potential character arc for the story."),
        )
}

/// Build the image prompt for the concept-art flow.
///
/// Deliberately not a template: descriptive fields are concatenated into
/// one paragraph and the fixed style suffix is appended.
fn compose_concept_art(input: &Record) -> String {
    let traits = input
        .get_array("personalityTraits")
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    let story_context = input
        .get_str("storyContext")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("N/A");

    format!(
        "Generate a piece of concept art for a character.\n\n\
         Character Details:\n\
         - Name: {}\n\
         - Core Traits: {}\n\
         - Personality: {}\n\
         - Backstory: {}\n\
         - Motivations: {}\n\
         - Story Context: {}\n\n\
         Style: digital painting, detailed, character concept art, fantasy.",
        input.get_str("fullName").unwrap_or_default(),
        input.get_str("coreTraits").unwrap_or_default(),
        traits,
        input.get_str("backstory").unwrap_or_default(),
        input.get_str("motivations").unwrap_or_default(),
        story_context,
    )
}

fn poem_stanza() -> MuseResult<FlowDefinition> {
    FlowDefinition::structured(
        names::POEM_STANZA,
        "Generate a new stanza for a poem based on a theme",
        Schema::new()
            .field(
                "theme",
                FieldSpec::string().at_least(1).describe(
                    "The theme or concept for the poem stanza. For example, 'loss' or 'a walk in the woods'.",
                ),
            )
            .field(
                "existingPoem",
                FieldSpec::string()
                    .optional()
                    .describe("The existing poem, if any. This helps maintain context and style."),
            ),
        Schema::new().field(
            "stanza",
            FieldSpec::string()
                .at_least(1)
                .describe("The generated poem stanza."),
        ),
        POEM_STANZA_PROMPT,
    )
}

fn song_verse() -> MuseResult<FlowDefinition> {
    FlowDefinition::structured(
        names::SONG_VERSE,
        "Generate a verse for a song from its theme and chorus",
        Schema::new()
            .field(
                "theme",
                FieldSpec::string().at_least(1).describe(
                    "The theme or mood of the song. e.g., 'heartbreak', 'summer nights', 'rebellion'",
                ),
            )
            .field(
                "chorus",
                FieldSpec::string()
                    .at_least(1)
                    .describe("The lyrics of the song's chorus."),
            )
            .field(
                "keywords",
                FieldSpec::string()
                    .optional()
                    .describe("Optional keywords or concepts to include in the verse."),
            ),
        Schema::new().field(
            "verse",
            FieldSpec::string()
                .at_least(1)
                .describe("The generated song verse."),
        ),
        SONG_VERSE_PROMPT,
    )
}

fn character_profile() -> MuseResult<FlowDefinition> {
    FlowDefinition::structured(
        names::CHARACTER_PROFILE,
        "Generate a detailed character profile from a name and core traits",
        Schema::new()
            .field(
                "characterName",
                FieldSpec::string()
                    .at_least(1)
                    .describe("The name of the character."),
            )
            .field(
                "coreTraits",
                FieldSpec::string().at_least(1).describe(
                    "A few core traits of the character (e.g., 'brave knight', 'shy scientist').",
                ),
            )
            .field(
                "storyContext",
                FieldSpec::string()
                    .optional()
                    .describe("The context of the story the character is in."),
            ),
        character_profile_fields(),
        CHARACTER_PROFILE_PROMPT,
    )
}

fn story_plot() -> MuseResult<FlowDefinition> {
    let outline = Schema::new()
        .field(
            "title",
            FieldSpec::string()
                .at_least(1)
                .describe("The title of the story plot."),
        )
        .field(
            "logline",
            FieldSpec::string()
                .at_least(1)
                .describe("A one-sentence summary of the plot."),
        )
        .field(
            "plot",
            FieldSpec::string().at_least(1).describe(
                "The detailed plot outline, formatted with sections for Setup, Confrontation, and Resolution.",
            ),
        );

    FlowDefinition::structured(
        names::STORY_PLOT,
        "Generate three distinct plot outlines from a premise",
        Schema::new().field(
            "premise",
            FieldSpec::string()
                .at_least(1)
                .describe("A brief premise or idea for a story."),
        ),
        Schema::new().field(
            "outlines",
            FieldSpec::object_array(outline).describe("An array of three distinct plot outlines."),
        ),
        STORY_PLOT_PROMPT,
    )
}

fn script_analysis() -> MuseResult<FlowDefinition> {
    FlowDefinition::structured(
        names::SCRIPT_ANALYSIS,
        "Analyze a script for story gaps, timeline conflicts, and character inconsistencies",
        Schema::new()
            .field(
                "scriptContent",
                FieldSpec::string()
                    .at_least(1)
                    .describe("The content of the script to be analyzed."),
            )
            .field(
                "scriptName",
                FieldSpec::string()
                    .at_least(1)
                    .describe("The name of the script file."),
            ),
        Schema::new()
            .field(
                "summary",
                FieldSpec::string()
                    .at_least(1)
                    .describe("A summary of the script analysis."),
            )
            .field(
                "storyGaps",
                FieldSpec::string_array().describe("Identified story gaps in the script."),
            )
            .field(
                "timelineConflicts",
                FieldSpec::string_array().describe("Identified timeline conflicts in the script."),
            )
            .field(
                "characterInconsistencies",
                FieldSpec::string_array()
                    .describe("Identified character inconsistencies in the script."),
            ),
        SCRIPT_ANALYSIS_PROMPT,
    )
}

fn concept_art() -> FlowDefinition {
    let input = character_profile_fields()
        .field(
            "coreTraits",
            FieldSpec::string()
                .at_least(1)
                .describe("The character's core traits"),
        )
        .field(
            "storyContext",
            FieldSpec::string()
                .optional()
                .describe("The context of the story."),
        );

    FlowDefinition::image(
        names::CONCEPT_ART,
        "Generate concept art from a character profile",
        input,
        Schema::new().field(
            "imageDataUri",
            FieldSpec::string()
                .at_least(1)
                .describe("The generated image as a data URI."),
        ),
        compose_concept_art,
        "imageDataUri",
    )
}

/// Build the registry of built-in creative-writing flows.
///
/// Called once during process initialization; the resulting registry is
/// read-only thereafter.
///
/// # Errors
///
/// Returns an error if any template fails to compile or a flow name is
/// registered twice.
pub fn creative_flows() -> MuseResult<FlowRegistry> {
    let mut registry = FlowRegistry::new();
    registry.register(poem_stanza()?)?;
    registry.register(song_verse()?)?;
    registry.register(character_profile()?)?;
    registry.register(story_plot()?)?;
    registry.register(script_analysis()?)?;
    registry.register(concept_art())?;
    Ok(registry)
}

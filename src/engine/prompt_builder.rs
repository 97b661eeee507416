use crate::engine::protocol::ContentKind;
use crate::model::config::GeneratorConfig;
use crate::model::document::{SectionMarker, PROBLEM_SECTIONS};
use crate::model::topic::Topic;

/// Renders the prompts sent to the model.
/// Formatting only: no parsing, no networking.
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(kind: ContentKind, config: &GeneratorConfig, topic: &Topic) -> String {
        match kind {
            ContentKind::Mcq => Self::mcq(config, topic),
            ContentKind::LearningGuide => Self::learning_guide(config, topic),
            ContentKind::Problem => Self::problem(config, topic),
        }
    }

    pub fn mcq(config: &GeneratorConfig, topic: &Topic) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "Generate {} multiple-choice questions about {} in Rust.\n\n",
            config.settings.mcq_count, topic.name
        ));
        prompt.push_str(&format!("Difficulty: {}\n", config.difficulty));
        prompt.push_str(&format!("Current focus: {}\n", topic.subtopic));
        prompt.push_str(&format!("Key concepts: {}\n\n", topic.focus_list()));
        push_mcq_format(&mut prompt);
        prompt.push_str("Use markdown checkboxes. No answers.");

        prompt
    }

    pub fn learning_guide(config: &GeneratorConfig, topic: &Topic) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "Create a learning guide about {} - {} in Rust.\n\n",
            topic.name, topic.subtopic
        ));
        prompt.push_str(&format!("Difficulty: {}\n", config.difficulty));
        prompt.push_str(&format!("Focus: {}\n\n", topic.focus_list()));
        prompt.push_str("Structure:\n");
        prompt.push_str("1. Brief intro (2-3 sentences)\n");
        prompt.push_str("2. Core concepts\n");
        prompt.push_str("3. 2-3 code examples with comments\n");
        prompt.push_str("4. Common pitfalls\n\n");
        prompt.push_str("Concise. Markdown format.");

        prompt
    }

    /// The section headings asked for here are the ones the response is split on.
    pub fn problem(config: &GeneratorConfig, topic: &Topic) -> String {
        let mut prompt = String::new();

        prompt.push_str("Create a Rust coding problem.\n\n");
        prompt.push_str(&format!("Topic: {} - {}\n", topic.name, topic.subtopic));
        prompt.push_str(&format!("Difficulty: {}\n", config.difficulty));
        prompt.push_str(&format!("Focus: {}\n", topic.focus_list()));
        prompt.push_str(&format!(
            "Scaffold: {}\n\n",
            config.settings.problem_scaffold
        ));
        prompt.push_str("Output in three sections clearly marked:\n\n");

        for marker in &PROBLEM_SECTIONS {
            push_problem_section(&mut prompt, marker, config);
        }

        prompt.push_str("30-45 min problem.");

        prompt
    }
}

fn push_mcq_format(prompt: &mut String) {
    prompt.push_str("Format each question exactly as:\n\n");
    prompt.push_str("## Question N\n");
    prompt.push_str("[Question text]\n\n");
    for (letter, n) in ["A", "B", "C", "D"].iter().zip(1..) {
        prompt.push_str(&format!("- [ ] {letter}) Option {n}\n"));
    }
    prompt.push('\n');
    prompt.push_str("**Concept tested:** [concept]\n\n");
}

fn push_problem_section(prompt: &mut String, marker: &SectionMarker<'_>, config: &GeneratorConfig) {
    let hint = match marker.key {
        "description" => "[Problem statement and requirements]".to_string(),
        "starter" => format!(
            "[Rust code with TODOs - {} scaffolding]",
            config.settings.problem_scaffold
        ),
        "tests" => "[Rust unit tests]".to_string(),
        other => format!("[{other}]"),
    };

    prompt.push_str(marker.heading);
    prompt.push('\n');
    prompt.push_str(&hint);
    prompt.push_str("\n\n");
}

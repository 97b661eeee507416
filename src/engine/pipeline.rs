use tracing::{debug, info, warn};

use crate::engine::code_fence::extract_fenced_block;
use crate::engine::llm_client::{ContentGenerator, GenerationError};
use crate::engine::prompt_builder::PromptBuilder;
use crate::engine::protocol::ContentKind;
use crate::engine::section_parser::parse_sections;
use crate::model::config::GeneratorConfig;
use crate::model::content::{DailyContent, Problem};
use crate::model::document::PROBLEM_SECTIONS;
use crate::model::topic::Topic;

/// Language tag of the code blocks kept from the problem response.
pub const CODE_TAG: &str = "rust";

/// Runs the three generation requests for one topic, one after another.
pub struct Pipeline<'a, G: ContentGenerator> {
    generator: &'a G,
    config: &'a GeneratorConfig,
    topic: &'a Topic,
}

impl<'a, G: ContentGenerator> Pipeline<'a, G> {
    pub fn new(generator: &'a G, config: &'a GeneratorConfig, topic: &'a Topic) -> Self {
        Self {
            generator,
            config,
            topic,
        }
    }

    /// Stops at the first failed request.
    pub fn run(&self) -> Result<DailyContent, GenerationError> {
        let mcq = self.request(ContentKind::Mcq)?;
        let learning_guide = self.request(ContentKind::LearningGuide)?;
        let problem_raw = self.request(ContentKind::Problem)?;

        Ok(DailyContent {
            mcq,
            learning_guide,
            problem: parse_problem(&problem_raw),
        })
    }

    fn request(&self, kind: ContentKind) -> Result<String, GenerationError> {
        let prompt = PromptBuilder::build(kind, self.config, self.topic);
        info!(%kind, max_tokens = kind.max_tokens(), "generating");

        let text = self.generator.generate(&prompt, kind.max_tokens())?;
        debug!(%kind, chars = text.len(), "received");

        Ok(text)
    }
}

/// Splits the problem response and strips the code fences around its code.
pub fn parse_problem(raw: &str) -> Problem {
    let doc = parse_sections(raw, &PROBLEM_SECTIONS);

    if doc.is_empty() {
        warn!("problem response has no recognizable sections");
    } else if doc.len() < PROBLEM_SECTIONS.len() {
        warn!(
            found = doc.len(),
            expected = PROBLEM_SECTIONS.len(),
            "problem response is missing sections"
        );
    }

    Problem {
        description: doc.section_or_empty("description").to_string(),
        starter_code: extract_fenced_block(doc.section_or_empty("starter"), CODE_TAG).to_string(),
        test_code: extract_fenced_block(doc.section_or_empty("tests"), CODE_TAG).to_string(),
    }
}

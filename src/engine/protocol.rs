use std::fmt;

/// The three pieces generated on every run, in request order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Mcq,
    LearningGuide,
    Problem,
}

impl ContentKind {
    /// Output cap passed to the model.
    pub fn max_tokens(self) -> u32 {
        match self {
            ContentKind::Mcq => 2000,
            ContentKind::LearningGuide | ContentKind::Problem => 3000,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContentKind::Mcq => "mcq",
            ContentKind::LearningGuide => "learning guide",
            ContentKind::Problem => "problem",
        };
        f.write_str(label)
    }
}

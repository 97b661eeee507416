/// Coding exercise split out of the problem response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Problem {
    pub description: String,
    pub starter_code: String,
    pub test_code: String,
}

/// Everything produced by one run, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyContent {
    pub mcq: String,
    pub learning_guide: String,
    pub problem: Problem,
}

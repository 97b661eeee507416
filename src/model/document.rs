use std::collections::HashMap;

/// A heading that opens a named section in a generated response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMarker<'a> {
    pub heading: &'a str,
    pub key: &'a str,
}

impl<'a> SectionMarker<'a> {
    pub const fn new(heading: &'a str, key: &'a str) -> Self {
        Self { heading, key }
    }
}

/// Sections the problem prompt asks the model to emit, in order.
pub const PROBLEM_SECTIONS: [SectionMarker<'static>; 3] = [
    SectionMarker::new("## DESCRIPTION", "description"),
    SectionMarker::new("## STARTER_CODE", "starter"),
    SectionMarker::new("## TESTS", "tests"),
];

/// Section key → trimmed body. Keys whose marker never showed up are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    sections: HashMap<String, String>,
}

impl ParsedDocument {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.sections.get(key).map(String::as_str)
    }

    /// Missing sections read as empty content.
    pub fn section_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub(crate) fn insert(&mut self, key: &str, body: &str) {
        self.sections.insert(key.to_string(), body.to_string());
    }
}

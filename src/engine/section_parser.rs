use crate::model::document::{ParsedDocument, SectionMarker};

/// Splits a model response into the sections opened by `markers`.
///
/// A line opens a section when it starts with a marker heading; the rest of
/// that line is dropped; when several headings match, the first marker in
/// `markers` wins. Lines split on `\n` only, so a `\r` inside a body is kept.
/// Text before the first marker is ignored, and a repeated marker replaces
/// the earlier body for its key. Never fails: text without markers gives an
/// empty document.
pub fn parse_sections(text: &str, markers: &[SectionMarker<'_>]) -> ParsedDocument {
    let mut document = ParsedDocument::default();
    let mut current: Option<&str> = None;
    let mut lines: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let opened = markers
            .iter()
            .find(|marker| !marker.heading.is_empty() && line.starts_with(marker.heading));

        if let Some(marker) = opened {
            if let Some(key) = current {
                document.insert(key, lines.join("\n").trim());
            }
            current = Some(marker.key);
            lines.clear();
            continue;
        }

        if current.is_some() {
            lines.push(line);
        }
    }

    if let Some(key) = current {
        document.insert(key, lines.join("\n").trim());
    }

    document
}

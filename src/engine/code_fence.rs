const FENCE: &str = "```";

/// Returns the body of the first ```` ```<tag> ```` block in `text`, trimmed.
///
/// Text without such a block comes back unchanged. An opening fence that is
/// never closed yields everything after it.
pub fn extract_fenced_block<'a>(text: &'a str, tag: &str) -> &'a str {
    let opening = format!("{FENCE}{tag}");

    let Some(start) = text.find(&opening) else {
        return text;
    };

    let rest = &text[start + opening.len()..];
    let body = match rest.find(FENCE) {
        Some(end) => &rest[..end],
        None => rest,
    };

    body.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_tagged_block() {
        let text = "prose\n```lang\ncode here\n```\nmore prose";
        assert_eq!(extract_fenced_block(text, "lang"), "code here");
    }

    #[test]
    fn test_text_without_fence_is_unchanged() {
        let text = "  fn main() {}\n";
        assert_eq!(extract_fenced_block(text, "rust"), text);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "intro\n```rust\nfn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n```\n";
        let once = extract_fenced_block(text, "rust");
        let twice = extract_fenced_block(once, "rust");

        assert_eq!(once, "fn add(a: i32, b: i32) -> i32 {\n    a + b\n}");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_only_first_block_is_kept() {
        let text = "```rust\nfirst\n```\n\n```rust\nsecond\n```";
        assert_eq!(extract_fenced_block(text, "rust"), "first");
    }

    #[test]
    fn test_untagged_fence_is_ignored() {
        let text = "```\nplain\n```\n```rust\ntagged\n```";
        assert_eq!(extract_fenced_block(text, "rust"), "tagged");

        let untagged = "```\nplain\n```";
        assert_eq!(extract_fenced_block(untagged, "rust"), untagged);
    }

    #[test]
    fn test_unclosed_fence_takes_remainder() {
        let text = "Here you go:\n```rust\nstruct Stack;\n\nimpl Stack {}\n";
        assert_eq!(
            extract_fenced_block(text, "rust"),
            "struct Stack;\n\nimpl Stack {}"
        );
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(extract_fenced_block("```rust\n```", "rust"), "");
    }
}

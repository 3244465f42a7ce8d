/// The only validated condition in the system: submitted text must be
/// non-empty after trimming. Callers decline blank input silently.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Case-insensitive substring match used by the post search filter. An empty
/// needle matches everything, so an empty search box shows the full feed.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\r\n"));

        assert!(!is_blank("hi"));
        assert!(!is_blank("  hi  "));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Getting Started with React", "react"));
        assert!(contains_ignore_case("TypeScript", "TYPE"));
        assert!(contains_ignore_case("anything", ""));

        assert!(!contains_ignore_case("Web Development", "rust"));
    }
}

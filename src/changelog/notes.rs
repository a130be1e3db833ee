use regex::Regex;
use std::sync::LazyLock;

/// Placeholder line shown when a release body yields no usable notes.
pub const NOTES_UNAVAILABLE: &str = "Release notes not available";

/// Matches a "What's New" heading of one or two hashes, allowing decorative
/// symbols (emoji etc.) before the phrase and apostrophe/casing variants.
static WHATS_NEW_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#{1,2}\s*[^#\w\r\n]*what['’]?s\s+new").expect("heading pattern is valid")
});

/// Pull the "What's New" bullet list out of a release body.
///
/// The section runs from the matching heading to the next heading or the end
/// of the text; within it, lines starting with `-` or `*` become entries,
/// stripped of the marker and surrounding whitespace. A missing section, or
/// one without bullets, yields a single [`NOTES_UNAVAILABLE`] entry. The
/// result is never empty and this never fails.
pub fn extract_whats_new(body: &str) -> Vec<String> {
    let mut lines = body.lines();

    let found = lines
        .by_ref()
        .any(|line| WHATS_NEW_HEADING.is_match(line.trim_start()));
    if !found {
        return vec![NOTES_UNAVAILABLE.to_string()];
    }

    let bullets: Vec<String> = lines
        .map(str::trim)
        .take_while(|line| !line.starts_with('#'))
        .filter(|line| line.starts_with('-') || line.starts_with('*'))
        .map(|line| line[1..].trim().to_string())
        .collect();

    if bullets.is_empty() {
        vec![NOTES_UNAVAILABLE.to_string()]
    } else {
        bullets
    }
}

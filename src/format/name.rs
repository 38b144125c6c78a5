//! Display names for benchmark identifiers.

/// Separator Criterion group names use between words.
const WORD_SEPARATOR: char = '_';

/// Known identifier prefixes and their display phrases, checked in order.
const PREFIX_DISPLAY: &[(&str, &str)] = &[
    ("helix index", "Helix Index"),
    ("git status", "Git Status"),
    ("query staged", "Query Staged"),
    ("index read", "Index Read"),
];

/// Turn `helix_index_cached_run` into `Helix Index Cached Run`.
///
/// Underscores become spaces, the first matching known prefix is swapped
/// for its display phrase, and the result is title-cased.
#[must_use]
pub fn format_benchmark_name(raw: &str) -> String {
    let spaced = raw.replace(WORD_SEPARATOR, " ");

    let display = PREFIX_DISPLAY
        .iter()
        .find_map(|(prefix, phrase)| {
            spaced
                .strip_prefix(prefix)
                .map(|rest| format!("{phrase}{rest}"))
        })
        .unwrap_or(spaced);

    title_case(&display)
}

/// Upper-case every letter that follows a non-letter, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

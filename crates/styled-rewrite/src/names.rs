//! Property and selector name mapping.

/// Converts a kebab-case CSS property name to the camelCase form Panda uses
/// as an object key.
///
/// The first `-`-separated segment is kept as-is; each following segment has
/// its first character upper-cased and the rest left alone. Names without a
/// hyphen (already camelCase, or single words) come back unchanged.
pub fn camel_case(name: &str) -> String {
    debug_assert!(!name.is_empty(), "property name must be non-empty");

    let mut segments = name.split('-');
    let mut result = String::with_capacity(name.len());
    if let Some(first) = segments.next() {
        result.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            result.extend(head.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Maps a styled-components pseudo-selector to its Panda condition key.
///
/// Only the five selectors below are translated; every other selector string
/// passes through verbatim, `&` included. Matching is exact, never partial.
pub fn selector_key(selector: &str) -> &str {
    match selector {
        "&:focus" => "_focus",
        "&:hover" => "_hover",
        "&:active" => "_active",
        "&::after" => "_after",
        "&::before" => "_before",
        _ => selector,
    }
}

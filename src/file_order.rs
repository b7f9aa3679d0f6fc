use once_cell::sync::Lazy;
use regex::Regex;

// @module: Filename-based ordering for split subtitle files

// @const: Explicit `part<N>` token, the intentional split-naming convention
static PART_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)part(\d+)").unwrap());

// @const: Any digit run
static DIGIT_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Derive the sort key for a subtitle filename.
///
/// A case-insensitive `part<digits>` token wins; otherwise the last digit run
/// in the name is used; names without digits key to 0. The key is only a sort
/// key: ties are expected (e.g. all files keying to 0) and must be broken by
/// a stable sort at the call site.
pub fn extract_order_key(filename: &str) -> u64 {
    if let Some(caps) = PART_TOKEN_REGEX.captures(filename) {
        return caps
            .get(1)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
    }

    DIGIT_RUN_REGEX
        .find_iter(filename)
        .last()
        .map_or(0, |m| m.as_str().parse().unwrap_or(0))
}

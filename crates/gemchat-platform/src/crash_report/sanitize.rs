use std::sync::LazyLock;

use regex::Regex;

/// Ordered: specific patterns first, the generic `key=` form last.
static SECRET_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Google API keys
        r"AIza[0-9A-Za-z_\-]{20,100}",
        // Bearer tokens
        r"Bearer [a-zA-Z0-9._\-]+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)((?:key|token|secret|password)=)[a-zA-Z0-9_\-]{32,}").unwrap()
});

/// Redacts known secret patterns from the input string.
///
/// Replaces Google API keys, bearer tokens, and generic secrets (after
/// `key=`, `token=`, `secret=`, `password=`) with `[REDACTED]`.
pub fn sanitize_secrets(input: &str) -> String {
    let mut result = input.to_string();
    for re in SECRET_PATTERNS.iter() {
        result = re.replace_all(&result, "[REDACTED]").into_owned();
    }
    ASSIGNMENT_RE
        .replace_all(&result, "${1}[REDACTED]")
        .into_owned()
}

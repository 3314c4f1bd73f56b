//! Mobile GPU detection from the model name.

use once_cell::sync::Lazy;
use regex::Regex;

/// Names whose classification is pinned regardless of pattern logic.
const EXCEPTIONS: &[(&str, bool)] = &[
    ("RTX 5090M", true),
    ("RTX 5080M", true),
    ("RTX 5070TI M", true),
    ("RTX 5070M", true),
    ("RTX 5060M", true),
    ("RTX 5050M", true),
    ("RTX 4090M", true),
    ("RTX 4080M", true),
    ("RTX 4070M", true),
    ("RTX 4060M", true),
    ("RTX 4050M", true),
    ("RTX 3080TI M", true),
    ("RTX 3080M", true),
    ("RTX 3070TI M", true),
    ("RTX 3070M", true),
    ("RTX 3060M", true),
];

const SUFFIXES: &[&str] = &["M", "Mobile", "Max-Q"];

static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"M$", r"(?i)Mobile$", r"(?i)Max-Q$", r"\s+M$"]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid mobile pattern regex"))
        .collect()
});

/// Decide whether a GPU name denotes a mobile part.
///
/// Checked in order, first match wins:
/// 1. exact name in the exception table
/// 2. literal suffix (`M`, `Mobile`, `Max-Q`)
/// 3. pattern match (trailing `M`, case-insensitive `Mobile` / `Max-Q`, ` M`)
pub fn classify_mobile(name: &str) -> bool {
    if let Some((_, mobile)) = EXCEPTIONS.iter().find(|(n, _)| *n == name) {
        return *mobile;
    }

    if SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        return true;
    }

    PATTERNS.iter().any(|re| re.is_match(name))
}

use std::sync::OnceLock;

use regex::Regex;

/// Decorative characters trimmed from both ends of every line.
const DECORATIONS: &[char] = &[' ', '•', '*', '-', '–', '—', '.'];

/// Physical line separators, the same set Python's `str.splitlines` honours.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits a block of raw text into clean lines: whitespace runs collapse to a
/// single space, bullets and dashes are trimmed off the ends, and lines that
/// end up empty are dropped.
pub fn normalize(text: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("regex should be valid"));
    text.split(LINE_BREAKS)
        .map(|line| re.replace_all(line, " "))
        .map(|line| line.trim_matches(DECORATIONS).to_owned())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Line length the way a reader counts it, in characters rather than bytes.
pub fn char_len(line: &str) -> usize {
    line.chars().count()
}

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINE_BREAK_REGEX: Regex = Regex::new(r"(?i)<br\s*/?\s*>").unwrap();
    static ref NBSP_REGEX: Regex = Regex::new(r"(?i)&nbsp;|\x{00A0}").unwrap();
    static ref CARRIAGE_RETURN_REGEX: Regex = Regex::new(r"\r\n?").unwrap();
    static ref BLANK_LINE_REGEX: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Turns provider markup into plain text: `<br>` variants become newlines and
/// non-breaking spaces become ordinary spaces.
pub fn normalize(raw_text: &str) -> String {
    let text = CARRIAGE_RETURN_REGEX.replace_all(raw_text, "\n");
    let text = LINE_BREAK_REGEX.replace_all(&text, "\n");
    NBSP_REGEX.replace_all(&text, " ").into_owned()
}

/// Splits normalized text into trimmed, non-empty blocks separated by blank lines.
pub fn segment(text: &str) -> Vec<&str> {
    BLANK_LINE_REGEX
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

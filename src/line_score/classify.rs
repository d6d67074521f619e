use lazy_static::lazy_static;
use regex::Regex;

use crate::util::first_number;

lazy_static! {
    static ref HITS_REGEX: Regex = Regex::new(r"(?i)^(?:hits|h)(?:[^a-z]|$)").unwrap();
    static ref ERRORS_REGEX: Regex = Regex::new(r"(?i)^(?:errors|e)(?:[^a-z]|$)").unwrap();
    static ref INNINGS_REGEX: Regex = Regex::new(r"^[0-9\s]+$").unwrap();
}

/// What a single non-name line of a team block carries.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum LineKind {
    Hits(u32),
    Errors(u32),
    Innings(Vec<u32>),
    Unclassified,
}

/// Classifies one line of a team block. Hits is tested before errors, and
/// errors before innings; the first match wins. A hits or errors line with no
/// usable number counts as zero.
pub fn classify_line(line: &str) -> LineKind {
    let line = line.trim();
    if HITS_REGEX.is_match(line) {
        LineKind::Hits(first_number(line).unwrap_or_default())
    } else if ERRORS_REGEX.is_match(line) {
        LineKind::Errors(first_number(line).unwrap_or_default())
    } else if INNINGS_REGEX.is_match(line) {
        line.split_whitespace()
            .map(str::parse::<u32>)
            .collect::<Result<Vec<u32>, _>>()
            .map_or(LineKind::Unclassified, LineKind::Innings)
    } else {
        LineKind::Unclassified
    }
}

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DIGIT_RUN_REGEX: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// First run of ASCII digits anywhere in the string, if it parses as `T`.
pub(crate) fn first_number<T: FromStr>(s: &str) -> Option<T> {
    DIGIT_RUN_REGEX
        .find(s)
        .and_then(|m| m.as_str().parse::<T>().ok())
}

pub(crate) fn parse_opt<T: FromStr>(s: &str) -> Option<T> {
    s.trim().parse::<T>().ok()
}

pub(crate) fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_number_skips_leading_text() {
        assert_eq!(first_number::<u32>("Hits: 7 (2 HR)"), Some(7));
        assert_eq!(first_number::<u32>("H12"), Some(12));
        assert_eq!(first_number::<u32>("Hits: n/a"), None);
    }

    #[test]
    fn first_number_rejects_overflow() {
        assert_eq!(first_number::<u32>("Hits 99999999999"), None);
    }

    #[test]
    fn parse_opt_trims() {
        assert_eq!(parse_opt::<u32>(" 4 "), Some(4));
        assert_eq!(parse_opt::<u32>(""), None);
        assert_eq!(parse_opt::<u32>("-"), None);
    }
}

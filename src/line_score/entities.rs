use std::fmt;

use serde::Serialize;

use crate::line_score::render::render_table;

/// Runs scored in one inning. `None` means the inning has not been played or
/// the provider did not report it, which is not the same as a scoreless inning.
pub type InningScore = Option<u32>;

/// Innings in a regulation game; shorter lines are padded up to this.
pub const REGULATION_INNINGS: usize = 9;

/// Display name used when a block carries no team label at all.
pub const UNKNOWN_TEAM: &str = "未知";

#[derive(Debug, Eq, PartialEq, Clone, Serialize)]
pub struct TeamLineScore {
    display_name: String,
    innings: Vec<InningScore>,
    runs: u32,
    hits: u32,
    errors: u32,
}

impl TeamLineScore {
    /// Pads `innings` with unavailable markers up to nine and derives runs from
    /// whatever innings are present. Extra innings are kept as-is.
    pub fn new(display_name: &str, innings: Vec<u32>, hits: u32, errors: u32) -> Self {
        let display_name = match display_name.trim() {
            "" => UNKNOWN_TEAM.to_string(),
            name => name.to_string(),
        };
        let mut innings: Vec<InningScore> = innings.into_iter().map(Some).collect();
        if innings.len() < REGULATION_INNINGS {
            innings.resize(REGULATION_INNINGS, None);
        }
        let runs = innings
            .iter()
            .flatten()
            .fold(0_u32, |acc, r| acc.saturating_add(*r));
        Self {
            display_name,
            innings,
            runs,
            hits,
            errors,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn innings(&self) -> &[InningScore] {
        &self.innings
    }

    pub const fn runs(&self) -> u32 {
        self.runs
    }

    pub const fn hits(&self) -> u32 {
        self.hits
    }

    pub const fn errors(&self) -> u32 {
        self.errors
    }
}

/// Every team line found in one provider result, in source order, along with
/// the rendered fixed-width table.
#[derive(Debug, Eq, PartialEq, Clone, Serialize)]
pub struct BoxScore {
    lines: Vec<TeamLineScore>,
    table: String,
}

impl BoxScore {
    pub fn new(lines: Vec<TeamLineScore>) -> Self {
        let table = render_table(&lines);
        Self { lines, table }
    }

    pub fn lines(&self) -> &[TeamLineScore] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamLineScore> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Inning columns needed to show every line without dropping extras.
    pub fn inning_columns(&self) -> usize {
        inning_columns(&self.lines)
    }
}

pub(crate) fn inning_columns(lines: &[TeamLineScore]) -> usize {
    lines
        .iter()
        .map(|l| l.innings.len())
        .max()
        .unwrap_or(REGULATION_INNINGS)
        .max(REGULATION_INNINGS)
}

impl fmt::Display for BoxScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_lines_with_unavailable_innings() {
        let line = TeamLineScore::new("Team A", vec![1, 0, 2], 3, 0);
        assert_eq!(line.innings().len(), REGULATION_INNINGS);
        assert_eq!(&line.innings()[..3], &[Some(1), Some(0), Some(2)]);
        assert!(line.innings()[3..].iter().all(Option::is_none));
        assert_eq!(line.runs(), 3);
    }

    #[test]
    fn keeps_extra_innings() {
        let innings = vec![0; 9].into_iter().chain([0, 1, 1]).collect();
        let line = TeamLineScore::new("Team A", innings, 5, 1);
        assert_eq!(line.innings().len(), 12);
        assert_eq!(line.runs(), 2);
    }

    #[test]
    fn empty_name_uses_sentinel() {
        let line = TeamLineScore::new("  ", vec![], 0, 0);
        assert_eq!(line.display_name(), UNKNOWN_TEAM);
    }

    #[test]
    fn runs_saturate() {
        let line = TeamLineScore::new("Team A", vec![u32::MAX, 1], 0, 0);
        assert_eq!(line.runs(), u32::MAX);
    }

    #[test]
    fn inning_columns_tracks_widest_line() {
        let short = TeamLineScore::new("A", vec![1], 0, 0);
        let long = TeamLineScore::new("B", vec![0; 11], 0, 0);
        assert_eq!(BoxScore::new(vec![]).inning_columns(), 9);
        assert_eq!(BoxScore::new(vec![short.clone()]).inning_columns(), 9);
        assert_eq!(BoxScore::new(vec![short, long]).inning_columns(), 11);
    }

    #[test]
    fn serializes_unavailable_innings_as_null() {
        let score = BoxScore::new(vec![TeamLineScore::new("A", vec![2], 1, 0)]);
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["lines"][0]["innings"][0], 2);
        assert!(json["lines"][0]["innings"][1].is_null());
        assert_eq!(json["lines"][0]["runs"], 2);
    }
}

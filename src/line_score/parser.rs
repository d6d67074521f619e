use thiserror::Error;

use crate::line_score::classify::{classify_line, LineKind};
use crate::line_score::entities::{BoxScore, TeamLineScore};
use crate::line_score::markup::{normalize, segment};
use crate::teams::ResolveName;

/// Marks the start of the inning annotation some providers append to the team name.
const INNINGS_ANNOTATION: &str = "Innings:";

#[derive(Debug, Eq, PartialEq, Clone, Copy, Error)]
pub enum ParseError {
    #[error("Box score text is empty")]
    EmptyInput,
}

/// Parses a provider box score result into one line per team block.
///
/// Only empty or whitespace-only text is rejected. Anything else yields a
/// best-effort `BoxScore`: lines the classifier does not recognize are skipped,
/// missing stats default to zero and missing innings stay unavailable.
pub fn parse<R: ResolveName + ?Sized>(
    raw_text: &str,
    resolver: &R,
) -> Result<BoxScore, ParseError> {
    if raw_text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let text = normalize(raw_text);
    let lines = segment(&text)
        .into_iter()
        .map(|block| parse_block(block, resolver))
        .collect();
    Ok(BoxScore::new(lines))
}

/// Parses a single team block. The first line names the team; later lines are
/// classified independently and the last line of each kind wins.
pub fn parse_block<R: ResolveName + ?Sized>(block: &str, resolver: &R) -> TeamLineScore {
    let mut lines = block.lines();
    let name = lines.next().map(team_label).unwrap_or_default();
    let display_name = resolver.resolve(name);

    let mut innings = vec![];
    let mut hits = 0;
    let mut errors = 0;
    for line in lines {
        match classify_line(line) {
            LineKind::Hits(h) => hits = h,
            LineKind::Errors(e) => errors = e,
            LineKind::Innings(i) => innings = i,
            LineKind::Unclassified => {}
        }
    }
    TeamLineScore::new(&display_name, innings, hits, errors)
}

fn team_label(line: &str) -> &str {
    line.find(INNINGS_ANNOTATION)
        .map_or(line, |idx| &line[..idx])
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::teams::TeamNameTable;

    fn teams() -> TeamNameTable {
        TeamNameTable::cpbl()
    }

    #[test]
    fn rejects_blank_text() {
        for text in ["", "   ", "\n\n", " \t\r\n "] {
            assert_eq!(parse(text, &teams()), Err(ParseError::EmptyInput));
        }
    }

    #[test]
    fn markup_only_text_is_an_empty_box_score() {
        let score = parse("<br><br/>&nbsp;", &teams()).unwrap();
        assert!(score.is_empty());
        assert_eq!(score.table(), "1 2 3 4 5 6 7 8 9 | R  H  E");
    }

    #[test]
    fn strips_innings_annotation_from_name() {
        assert_eq!(team_label("CTBC Brothers Innings: 9"), "CTBC Brothers");
        assert_eq!(team_label("  TSG Hawks  "), "TSG Hawks");
        assert_eq!(team_label("Innings: 9"), "");
        assert_eq!(team_label("TSG Hawks innings: 9"), "TSG Hawks innings: 9");
    }

    #[test]
    fn name_only_block() {
        let line = parse_block("Rakuten Monkeys Innings: 0", &teams());
        assert_eq!(line.display_name(), "樂天桃猿");
        assert_eq!(line.innings(), &[None; 9]);
        assert_eq!((line.runs(), line.hits(), line.errors()), (0, 0, 0));
    }

    #[test]
    fn fields_in_any_order() {
        let line = parse_block("Fubon Guardians\nErrors: 2\nHits: 8\n3 0 0 1", &teams());
        assert_eq!(line.display_name(), "富邦悍將");
        assert_eq!(
            line.innings(),
            &[Some(3), Some(0), Some(0), Some(1), None, None, None, None, None]
        );
        assert_eq!(line.runs(), 4);
        assert_eq!(line.hits(), 8);
        assert_eq!(line.errors(), 2);
    }

    #[test]
    fn last_line_of_each_kind_wins() {
        let block = "Wei Chuan Dragons\nHits: 3\n1 1\nErrors: 4\nHits: 5\n0 0 2\nErrors";
        let line = parse_block(block, &teams());
        assert_eq!(line.hits(), 5);
        assert_eq!(line.errors(), 0);
        assert_eq!(line.runs(), 2);
        assert_eq!(&line.innings()[..4], &[Some(0), Some(0), Some(2), None]);
    }

    #[test]
    fn unknown_lines_are_skipped() {
        let line = parse_block("Team X\nLOB: 7\nPitchers: 4\nH 6", &teams());
        assert_eq!(line.display_name(), "Team X");
        assert_eq!(line.hits(), 6);
        assert_eq!(line.innings(), &[None; 9]);
    }

    #[test]
    fn empty_name_line_uses_sentinel() {
        let line = parse_block("Innings: 9\n1 0 0", &teams());
        assert_eq!(line.display_name(), crate::UNKNOWN_TEAM);
        assert_eq!(line.runs(), 1);
    }
}

//! Stone extraction from SGF text.
//!
//! Only the setup properties `AB` (add black) and `AW` (add white) are read,
//! plus `SZ` for the board size. The scan is a best-effort scrape, not a
//! grammar: anything it does not recognise is skipped, and it never fails.
//!
//! ## Example
//!
//! ```
//! use sgf_quadrants::board::Color;
//! use sgf_quadrants::sgf::{Stone, parse};
//!
//! let stones = parse("(;AB[aa][bb]AW[cc])");
//! assert_eq!(
//!     stones,
//!     vec![
//!         Stone::new(0, 0, Color::Black),
//!         Stone::new(1, 1, Color::Black),
//!         Stone::new(2, 2, Color::White),
//!     ]
//! );
//! ```

use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::board::Color;
use crate::constants::{BOARD_SIZE, MAX_BOARD_SIZE};
use crate::coord::{Point, decode_sized, encode};

/// `AB` followed by one or more bracketed values.
static BLACK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bAB((?:\s*\[[^\]]*\])+)").unwrap());

/// `AW` followed by one or more bracketed values.
static WHITE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bAW((?:\s*\[[^\]]*\])+)").unwrap());

/// A value holding exactly two lowercase letters.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\s*([a-z]{2})\]").unwrap());

static SIZE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bSZ\[\s*(\d+)\s*\]").unwrap());

/// A stone placed by a setup property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stone {
    pub column: usize,
    pub row: usize,
    pub color: Color,
}

impl Stone {
    pub fn new(column: usize, row: usize, color: Color) -> Self {
        Self { column, row, color }
    }

    pub fn point(&self) -> Point {
        (self.column, self.row)
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.color {
            Color::Black => 'B',
            Color::White => 'W',
        };
        match encode(self.point(), MAX_BOARD_SIZE) {
            Some(token) => write!(f, "{prefix}[{token}]"),
            None => write!(f, "{prefix}[{},{}]", self.column, self.row),
        }
    }
}

/// Extract the setup stones of a 19x19 record.
pub fn parse(text: &str) -> Vec<Stone> {
    parse_sized(text, BOARD_SIZE)
}

/// Extract the setup stones of a record on a board of `board_size` lines.
///
/// Black stones come first, then white, each in source order. Only the first
/// `AB` and the first `AW` block are read. Tokens naming points off the board
/// are dropped silently, and duplicates are passed through.
pub fn parse_sized(text: &str, board_size: usize) -> Vec<Stone> {
    let mut stones = Vec::new();
    scan_block(&BLACK_BLOCK, text, board_size, Color::Black, &mut stones);
    scan_block(&WHITE_BLOCK, text, board_size, Color::White, &mut stones);
    stones
}

fn scan_block(block: &Regex, text: &str, board_size: usize, color: Color, out: &mut Vec<Stone>) {
    let Some(values) = block.captures(text).and_then(|c| c.get(1)) else {
        debug!("no {} property", color.property());
        return;
    };
    let before = out.len();
    for token in TOKEN.captures_iter(values.as_str()) {
        match decode_sized(&token[1], board_size) {
            Ok((column, row)) => out.push(Stone::new(column, row, color)),
            Err(e) => debug!("skipping {} token {:?}: {e}", color.property(), &token[1]),
        }
    }
    debug!("{}: {} stones", color.property(), out.len() - before);
}

/// Board size from the `SZ` property, if it holds a single number.
pub fn board_size(text: &str) -> Option<usize> {
    SIZE.captures(text).and_then(|c| c[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_black_then_white() {
        let stones = parse("(;AB[aa][bb]AW[cc])");
        assert_eq!(
            stones,
            vec![
                Stone::new(0, 0, Color::Black),
                Stone::new(1, 1, Color::Black),
                Stone::new(2, 2, Color::White),
            ]
        );
    }

    #[test]
    fn test_parse_white_before_black_in_source() {
        let stones = parse("(;AW[dd]AB[pp][pd])");
        assert_eq!(
            stones,
            vec![
                Stone::new(15, 15, Color::Black),
                Stone::new(15, 3, Color::Black),
                Stone::new(3, 3, Color::White),
            ]
        );
    }

    #[test]
    fn test_parse_no_setup_properties() {
        assert!(parse("(;FF[4])").is_empty());
        assert!(parse("").is_empty());
        assert!(parse("not sgf at all").is_empty());
    }

    #[test]
    fn test_parse_skips_off_board_tokens() {
        let stones = parse("(;AB[aa][tt][zz][ss])");
        assert_eq!(
            stones,
            vec![Stone::new(0, 0, Color::Black), Stone::new(18, 18, Color::Black)]
        );
    }

    #[test]
    fn test_parse_ignores_malformed_values() {
        // Empty value, a one-letter value and an uppercase value.
        let stones = parse("(;AB[][a][AA][cd]AW[ef])");
        assert_eq!(
            stones,
            vec![Stone::new(2, 3, Color::Black), Stone::new(4, 5, Color::White)]
        );
    }

    #[test]
    fn test_parse_skips_longer_values() {
        assert_eq!(parse("(;AB[abc][dd])"), vec![Stone::new(3, 3, Color::Black)]);
        assert!(parse("(;AB[tab][xyzdd]AW[aaa])").is_empty());
    }

    #[test]
    fn test_parse_unterminated_block() {
        assert!(parse("(;AB[aa").is_empty());
    }

    #[test]
    fn test_parse_whitespace_between_values() {
        let stones = parse("(;AB[aa]\n  [bb] AW[cc])");
        assert_eq!(stones.len(), 3);
        assert_eq!(stones[1], Stone::new(1, 1, Color::Black));
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let stones = parse("(;AB[dd][dd]AW[dd])");
        assert_eq!(stones.len(), 3);
        assert!(stones.iter().all(|s| s.point() == (3, 3)));
    }

    #[test]
    fn test_parse_ignores_longer_identifiers() {
        assert!(parse("(;XAB[aa]GAW[bb])").is_empty());
    }

    #[test]
    fn test_parse_sized() {
        let stones = parse_sized("(;SZ[9]AB[aa][ii][jj])", 9);
        assert_eq!(
            stones,
            vec![Stone::new(0, 0, Color::Black), Stone::new(8, 8, Color::Black)]
        );
    }

    #[test]
    fn test_board_size() {
        assert_eq!(board_size("(;GM[1]SZ[19]AB[aa])"), Some(19));
        assert_eq!(board_size("(;SZ[ 9 ])"), Some(9));
        assert_eq!(board_size("(;SZ[19:13])"), None);
        assert_eq!(board_size("(;FF[4])"), None);
    }

    #[test]
    fn test_stone_display() {
        assert_eq!(Stone::new(15, 3, Color::Black).to_string(), "B[pd]");
        assert_eq!(Stone::new(0, 18, Color::White).to_string(), "W[as]");
    }
}

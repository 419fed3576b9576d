//! SGF coordinate tokens and board labels.
//!
//! SGF addresses a point with two lowercase letters, column first:
//! `"aa"` is the top-left corner and `"ss"` the bottom-right corner of a
//! 19x19 board. Image labels use a separate uppercase alphabet that starts at
//! `'A'` for index 0 and skips nothing.

use crate::constants::{BOARD_SIZE, MAX_BOARD_SIZE};

/// A point on the board as `(column, row)`, both zero-based.
pub type Point = (usize, usize);

/// Why a coordinate token was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Token is not exactly two characters long
    Length(usize),
    /// Character does not name a line on the board
    OutOfRange(char),
}

impl std::fmt::Display for CoordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordError::Length(n) => write!(f, "coordinate must be two letters, got {n}"),
            CoordError::OutOfRange(c) => write!(f, "coordinate letter '{c}' is off the board"),
        }
    }
}

impl std::error::Error for CoordError {}

/// Decode a token on the default 19x19 board.
///
/// ```
/// use sgf_quadrants::coord::decode;
///
/// assert_eq!(decode("aa"), Ok((0, 0)));
/// assert_eq!(decode("pd"), Ok((15, 3)));
/// assert!(decode("tt").is_err());
/// ```
pub fn decode(token: &str) -> Result<Point, CoordError> {
    decode_sized(token, BOARD_SIZE)
}

/// Decode a token on a board of `board_size` lines.
pub fn decode_sized(token: &str, board_size: usize) -> Result<Point, CoordError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), Some(r), None) => Ok((letter_index(c, board_size)?, letter_index(r, board_size)?)),
        _ => Err(CoordError::Length(token.chars().count())),
    }
}

fn letter_index(c: char, board_size: usize) -> Result<usize, CoordError> {
    if !c.is_ascii_lowercase() {
        return Err(CoordError::OutOfRange(c));
    }
    let idx = (c as u8 - b'a') as usize;
    if idx >= board_size.min(MAX_BOARD_SIZE) {
        return Err(CoordError::OutOfRange(c));
    }
    Ok(idx)
}

/// Encode a point back into its SGF token.
///
/// Returns `None` if the point is off a board of `board_size` lines.
pub fn encode((column, row): Point, board_size: usize) -> Option<String> {
    let limit = board_size.min(MAX_BOARD_SIZE);
    if column >= limit || row >= limit {
        return None;
    }
    Some([column, row].iter().map(|&i| (b'a' + i as u8) as char).collect())
}

/// Uppercase label for a column or row index: `0 -> 'A'`, `18 -> 'S'`.
pub fn label_char(index: usize) -> Option<char> {
    if index < MAX_BOARD_SIZE {
        Some((b'A' + index as u8) as char)
    } else {
        None
    }
}

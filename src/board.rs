//! 2D board grid built from parsed stones.
//!
//! The renderer works directly on stone lists; this grid is used for the
//! text dump of a position and for spotting points that malformed input
//! places more than one stone on.

use std::fmt;

use crate::coord::{Point, label_char};
use crate::sgf::Stone;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// SGF property identifier that adds stones of this colour.
    pub fn property(self) -> &'static str {
        match self {
            Color::Black => "AB",
            Color::White => "AW",
        }
    }
}

pub struct Board {
    pub size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from a stone list. Later stones win on shared points.
    pub fn from_stones(size: usize, stones: &[Stone]) -> Self {
        let mut board = Self::new(size);
        for stone in stones {
            board.place(stone.column, stone.row, stone.color);
        }
        board
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    /// Put a stone on the board. Returns the colour it replaced, if any.
    pub fn place(&mut self, x: usize, y: usize, color: Color) -> Option<Color> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let idx = self.idx(x, y);
        self.cells[idx].replace(color)
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }
}

/// Points that appear more than once in a stone list, in first-seen order.
pub fn duplicate_points(stones: &[Stone]) -> Vec<Point> {
    let mut seen = std::collections::HashSet::new();
    let mut dups = Vec::new();
    for stone in stones {
        let pt = stone.point();
        if !seen.insert(pt) && !dups.contains(&pt) {
            dups.push(pt);
        }
    }
    dups
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..self.size {
            write!(f, " {}", label_char(x).unwrap_or('?'))?;
        }
        writeln!(f)?;
        for y in 0..self.size {
            write!(f, " {}", label_char(y).unwrap_or('?'))?;
            for x in 0..self.size {
                let ch = match self.get(x, y) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

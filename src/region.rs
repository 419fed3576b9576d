//! Board regions and the quadrant plan.
//!
//! A [`BoardRegion`] is an inclusive rectangle of board coordinates that is
//! rendered as one image. [`plan_quadrants`] splits a board into four such
//! rectangles.
//!
//! # Seam
//!
//! The quadrants share their middle line: on a 19x19 board the left quadrants
//! end at column 9 and the right quadrants start at column 9 (rows likewise).
//! Stones on that line are drawn in every image that touches it, and a stone
//! on the centre point appears in all four. Each image therefore shows a
//! complete 10x10 corner of the board with its own edge line.

use crate::render::RenderError;
use crate::sgf::Stone;

/// An inclusive rectangle of board coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardRegion {
    pub start_column: usize,
    pub end_column: usize,
    pub start_row: usize,
    pub end_row: usize,
    /// Identifier used to name the output image
    pub label: String,
}

impl BoardRegion {
    pub fn new(
        start_column: usize,
        end_column: usize,
        start_row: usize,
        end_row: usize,
        label: impl Into<String>,
    ) -> Self {
        Self {
            start_column,
            end_column,
            start_row,
            end_row,
            label: label.into(),
        }
    }

    /// The whole board as a single region.
    pub fn full(board_size: usize) -> Self {
        let last = board_size.saturating_sub(1);
        Self::new(0, last, 0, last, "full")
    }

    /// Number of columns covered (inclusive span); 0 for a reversed region.
    pub fn columns(&self) -> usize {
        self.end_column
            .checked_sub(self.start_column)
            .map_or(0, |d| d.saturating_add(1))
    }

    /// Number of rows covered (inclusive span); 0 for a reversed region.
    pub fn rows(&self) -> usize {
        self.end_row
            .checked_sub(self.start_row)
            .map_or(0, |d| d.saturating_add(1))
    }

    pub fn contains(&self, column: usize, row: usize) -> bool {
        (self.start_column..=self.end_column).contains(&column)
            && (self.start_row..=self.end_row).contains(&row)
    }

    /// Stones that fall inside the region, in input order.
    pub fn stones<'a>(&'a self, stones: &'a [Stone]) -> impl Iterator<Item = &'a Stone> + 'a {
        stones.iter().filter(|s| self.contains(s.column, s.row))
    }

    /// Check that the region is non-empty and lies on a board of `board_size` lines.
    pub fn validate(&self, board_size: usize) -> Result<(), RenderError> {
        let reason = if self.start_column > self.end_column {
            "start column is past end column"
        } else if self.start_row > self.end_row {
            "start row is past end row"
        } else if self.end_column >= board_size || self.end_row >= board_size {
            "region extends past the board edge"
        } else {
            return Ok(());
        };
        Err(RenderError::InvalidRegion {
            label: self.label.clone(),
            reason,
        })
    }
}

/// Split a board into four overlapping quadrants.
///
/// Order: top-right, bottom-right, top-left, bottom-left. The middle line
/// `(board_size - 1) / 2` belongs to both neighbours (see the module docs).
pub fn plan_quadrants(board_size: usize) -> Vec<BoardRegion> {
    let last = board_size.saturating_sub(1);
    let mid = last / 2;
    vec![
        BoardRegion::new(mid, last, 0, mid, "top-right"),
        BoardRegion::new(mid, last, mid, last, "bottom-right"),
        BoardRegion::new(0, mid, 0, mid, "top-left"),
        BoardRegion::new(0, mid, mid, last, "bottom-left"),
    ]
}

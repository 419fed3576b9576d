//! Constants for board dimensions, pixel geometry, and colours.
//!
//! These are the defaults behind [`RenderStyle`](crate::render::RenderStyle).
//! Every value here can be overridden at runtime; nothing in the renderer reads
//! them directly except through a style value.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
pub const BOARD_SIZE: usize = 19;

/// Largest board size the two-letter SGF alphabet (`a`..`z`) can address.
pub const MAX_BOARD_SIZE: usize = 26;

/// Star points on a 19x19 board (absolute coordinates on both axes).
pub const STAR_POINTS_19: [usize; 3] = [3, 9, 15];

/// Star points on a 13x13 board.
pub const STAR_POINTS_13: [usize; 3] = [3, 6, 9];

/// Star points on a 9x9 board.
pub const STAR_POINTS_9: [usize; 3] = [2, 4, 6];

// =============================================================================
// Pixel Geometry
// =============================================================================

/// Distance between adjacent grid lines, in pixels.
pub const CELL_SIZE: u32 = 30;

/// Blank space around the grid, in pixels. Labels are drawn inside it.
pub const MARGIN: u32 = 40;

/// Stone diameter, in pixels.
pub const STONE_SIZE: u32 = 24;

/// Star point radius, in pixels.
pub const STAR_RADIUS: i32 = 3;

/// Border line thickness, in pixels.
pub const BORDER_WIDTH: u32 = 2;

/// Largest canvas side, in pixels, that a style may produce.
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Each bitmap font pixel is drawn as a square of this many pixels.
pub const LABEL_SCALE: u32 = 2;

// =============================================================================
// Colours (RGBA)
// =============================================================================

/// Wooden board background.
pub const BOARD_COLOR: [u8; 4] = [220, 179, 92, 255];

/// Grid lines, labels, star points, black stones and white stone outlines.
pub const INK_COLOR: [u8; 4] = [0, 0, 0, 255];

/// White stone fill.
pub const WHITE_STONE_COLOR: [u8; 4] = [255, 255, 255, 255];

// =============================================================================
// Output
// =============================================================================

/// File name prefix for region images (`<prefix>_<label>.png`).
pub const OUTPUT_PREFIX: &str = "goboard";

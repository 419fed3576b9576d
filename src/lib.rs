//! sgf-quadrants: render the setup stones of an SGF record as board images.
//!
//! The crate reads the `AB` / `AW` stones from SGF text and draws the board one
//! rectangular region at a time, by default as four overlapping quadrants of a
//! 19x19 board.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, pixel geometry and colours
//! - [`coord`] - SGF coordinate tokens and axis labels
//! - [`sgf`] - Best-effort stone extraction from SGF text
//! - [`board`] - 2D grid of stones with a text dump
//! - [`region`] - Board regions and the quadrant plan
//! - [`render`] - Region rendering and PNG encoding
//! - [`glyphs`] - Bitmap font for the axis labels
//! - [`samples`] - Built-in sample positions
//!
//! ## Example
//!
//! ```
//! use sgf_quadrants::region::plan_quadrants;
//! use sgf_quadrants::render::{RenderStyle, encode_png, render};
//! use sgf_quadrants::sgf::parse;
//!
//! let stones = parse("(;SZ[19]AB[pd][dp]AW[pp][dd])");
//! let style = RenderStyle::default();
//!
//! for region in plan_quadrants(style.board_size) {
//!     let image = render(&region, &stones, &style).unwrap();
//!     let png = encode_png(&image).unwrap();
//!     println!("{}: {} bytes", region.label, png.len());
//! }
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod glyphs;
pub mod region;
pub mod render;
pub mod samples;
pub mod sgf;

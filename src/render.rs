//! Region rendering.
//!
//! [`render`] draws one [`BoardRegion`] into a fresh RGBA canvas: background,
//! border, interior grid, star points, axis labels and the stones inside the
//! region. All drawing parameters come from an immutable [`RenderStyle`];
//! there is no shared drawing state between calls, so regions can be rendered
//! in any order or in parallel.
//!
//! A logical coordinate `v` on an axis starting at `start` lands on pixel
//! `margin + (v - start) * cell_size`.
//!
//! ## Example
//!
//! ```
//! use sgf_quadrants::region::plan_quadrants;
//! use sgf_quadrants::render::{RenderStyle, render_regions};
//! use sgf_quadrants::sgf::parse;
//!
//! let stones = parse("(;AB[dd][pp]AW[dp])");
//! let style = RenderStyle::default();
//! let images = render_regions(&plan_quadrants(style.board_size), &stones, &style).unwrap();
//! assert_eq!(images.len(), 4);
//! assert_eq!(images[0].image.dimensions(), (380, 380));
//! ```

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut,
};
use imageproc::rect::Rect;
use log::debug;

use crate::board::Color;
use crate::constants::*;
use crate::coord::{Point, label_char};
use crate::glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH, draw_glyph_mut};
use crate::region::BoardRegion;
use crate::sgf::Stone;

/// Rendering failure.
#[derive(Debug)]
pub enum RenderError {
    /// Region is empty, reversed, or runs off the board
    InvalidRegion { label: String, reason: &'static str },
    /// Style values that cannot produce a drawing
    InvalidStyle(String),
    /// PNG encoding failed
    Encode(image::ImageError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::InvalidRegion { label, reason } => {
                write!(f, "invalid region '{label}': {reason}")
            }
            RenderError::InvalidStyle(msg) => write!(f, "invalid render style: {msg}"),
            RenderError::Encode(e) => write!(f, "failed to encode image: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Encode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Encode(e)
    }
}

/// Every parameter the renderer reads.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    /// Board size (NxN); regions and star points must lie inside it
    pub board_size: usize,
    /// Distance between grid lines
    pub cell_size: u32,
    /// Space around the grid
    pub margin: u32,
    pub stone_diameter: u32,
    /// Star point lines, in absolute board coordinates on both axes
    pub star_points: Vec<usize>,
    pub star_radius: i32,
    pub border_width: u32,
    /// Pixel size of one bitmap font dot
    pub label_scale: u32,
    pub background: Rgba<u8>,
    /// Lines, labels, star points, black stones, white stone outlines
    pub ink: Rgba<u8>,
    pub white_stone: Rgba<u8>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::for_board_size(BOARD_SIZE)
    }
}

impl RenderStyle {
    /// Default style for an NxN board, with the usual star points for 9, 13 and 19.
    pub fn for_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            cell_size: CELL_SIZE,
            margin: MARGIN,
            stone_diameter: STONE_SIZE,
            star_points: star_points_for(board_size),
            star_radius: STAR_RADIUS,
            border_width: BORDER_WIDTH,
            label_scale: LABEL_SCALE,
            background: Rgba(BOARD_COLOR),
            ink: Rgba(INK_COLOR),
            white_stone: Rgba(WHITE_STONE_COLOR),
        }
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        let problem = if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            format!("board size {} is outside 1..={MAX_BOARD_SIZE}", self.board_size)
        } else if self.cell_size == 0 {
            "cell size must be positive".to_string()
        } else if self.stone_diameter == 0 {
            "stone diameter must be positive".to_string()
        } else if self.label_scale == 0 {
            "label scale must be positive".to_string()
        } else if self.star_radius < 0 {
            "star radius must not be negative".to_string()
        } else if let Some(p) = self.star_points.iter().find(|&&p| p >= self.board_size) {
            format!("star point {p} is off a {} board", self.board_size)
        } else if self.side(self.board_size).is_none() {
            format!(
                "cell size {} and margin {} exceed {MAX_CANVAS_SIDE} px per side",
                self.cell_size, self.margin
            )
        } else if [self.stone_diameter, self.border_width, self.label_scale]
            .iter()
            .any(|&v| v > MAX_CANVAS_SIDE)
            || self.star_radius > MAX_CANVAS_SIDE as i32
        {
            format!("stroke and glyph sizes must not exceed {MAX_CANVAS_SIDE} px")
        } else {
            return Ok(());
        };
        Err(RenderError::InvalidStyle(problem))
    }

    /// Canvas `(width, height)` for a region: span times cell size plus both margins.
    ///
    /// Fails if either side would exceed [`MAX_CANVAS_SIDE`].
    pub fn canvas_size(&self, region: &BoardRegion) -> Result<(u32, u32), RenderError> {
        let side = |span: usize| {
            self.side(span).ok_or_else(|| {
                RenderError::InvalidStyle(format!(
                    "canvas for region '{}' exceeds {MAX_CANVAS_SIDE} px per side",
                    region.label
                ))
            })
        };
        Ok((side(region.columns())?, side(region.rows())?))
    }

    fn side(&self, span: usize) -> Option<u32> {
        u32::try_from(span)
            .ok()?
            .checked_mul(self.cell_size)?
            .checked_add(self.margin.checked_mul(2)?)
            .filter(|&side| side <= MAX_CANVAS_SIDE)
    }

    fn to_px(&self, logical: usize, start: usize) -> i32 {
        (self.margin + (logical - start) as u32 * self.cell_size) as i32
    }
}

/// Conventional star points for common board sizes; none for the rest.
pub fn star_points_for(board_size: usize) -> Vec<usize> {
    match board_size {
        19 => STAR_POINTS_19.to_vec(),
        13 => STAR_POINTS_13.to_vec(),
        9 => STAR_POINTS_9.to_vec(),
        _ => Vec::new(),
    }
}

/// Star points that fall inside a region, column-major.
pub fn star_points_in(region: &BoardRegion, style: &RenderStyle) -> Vec<Point> {
    let mut points = Vec::new();
    for &x in &style.star_points {
        if !(region.start_column..=region.end_column).contains(&x) {
            continue;
        }
        for &y in &style.star_points {
            if (region.start_row..=region.end_row).contains(&y) {
                points.push((x, y));
            }
        }
    }
    points
}

/// One rendered region.
pub struct RenderedRegion {
    pub label: String,
    pub image: RgbaImage,
}

/// Render one region of the board.
///
/// Stones outside the region are ignored. Fails on an invalid style or a
/// region that is reversed or leaves the board.
pub fn render(
    region: &BoardRegion,
    stones: &[Stone],
    style: &RenderStyle,
) -> Result<RgbaImage, RenderError> {
    style.validate()?;
    region.validate(style.board_size)?;

    let (width, height) = style.canvas_size(region)?;
    let mut img = RgbaImage::from_pixel(width, height, style.background);

    draw_grid(&mut img, region, style);
    for (x, y) in star_points_in(region, style) {
        let center = (
            style.to_px(x, region.start_column),
            style.to_px(y, region.start_row),
        );
        draw_filled_circle_mut(&mut img, center, style.star_radius, style.ink);
    }
    draw_labels(&mut img, region, style);

    let mut drawn = 0;
    for stone in region.stones(stones) {
        draw_stone(&mut img, region, style, stone);
        drawn += 1;
    }
    debug!(
        "rendered {} ({}x{} px, {drawn} stones)",
        region.label, width, height
    );
    Ok(img)
}

/// Render each region in order.
pub fn render_regions(
    regions: &[BoardRegion],
    stones: &[Stone],
    style: &RenderStyle,
) -> Result<Vec<RenderedRegion>, RenderError> {
    regions
        .iter()
        .map(|region| {
            Ok(RenderedRegion {
                label: region.label.clone(),
                image: render(region, stones, style)?,
            })
        })
        .collect()
}

/// Encode an image as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

fn draw_grid(img: &mut RgbaImage, region: &BoardRegion, style: &RenderStyle) {
    let left = style.margin as i32;
    let top = style.margin as i32;
    let right = style.to_px(region.end_column, region.start_column);
    let bottom = style.to_px(region.end_row, region.start_row);

    // Border grows outward from the outermost grid line.
    for i in 0..style.border_width as i32 {
        let rect = Rect::at(left - i, top - i)
            .of_size((right - left + 1 + 2 * i) as u32, (bottom - top + 1 + 2 * i) as u32);
        draw_hollow_rect_mut(img, rect, style.ink);
    }

    for i in 1..region.columns().saturating_sub(1) {
        let x = style.to_px(region.start_column + i, region.start_column) as f32;
        draw_line_segment_mut(img, (x, top as f32), (x, bottom as f32), style.ink);
    }
    for i in 1..region.rows().saturating_sub(1) {
        let y = style.to_px(region.start_row + i, region.start_row) as f32;
        draw_line_segment_mut(img, (left as f32, y), (right as f32, y), style.ink);
    }
}

fn draw_labels(img: &mut RgbaImage, region: &BoardRegion, style: &RenderStyle) {
    let glyph_w = (GLYPH_WIDTH * style.label_scale) as i32;
    let glyph_h = (GLYPH_HEIGHT * style.label_scale) as i32;
    let margin = style.margin as i32;

    let top = (margin - glyph_h) / 2;
    for column in region.start_column..=region.end_column {
        if let Some(c) = label_char(column) {
            let x = style.to_px(column, region.start_column) - glyph_w / 2;
            draw_glyph_mut(img, c, x, top, style.label_scale, style.ink);
        }
    }

    let left = (margin - glyph_w) / 2;
    for row in region.start_row..=region.end_row {
        if let Some(c) = label_char(row) {
            let y = style.to_px(row, region.start_row) - glyph_h / 2;
            draw_glyph_mut(img, c, left, y, style.label_scale, style.ink);
        }
    }
}

fn draw_stone(img: &mut RgbaImage, region: &BoardRegion, style: &RenderStyle, stone: &Stone) {
    let center = (
        style.to_px(stone.column, region.start_column),
        style.to_px(stone.row, region.start_row),
    );
    let radius = (style.stone_diameter / 2) as i32;
    match stone.color {
        Color::Black => draw_filled_circle_mut(img, center, radius, style.ink),
        Color::White => {
            draw_filled_circle_mut(img, center, radius, style.white_stone);
            draw_hollow_circle_mut(img, center, radius, style.ink);
        }
    }
}

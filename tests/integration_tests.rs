//! Integration tests for sgf-quadrants
//!
//! End-to-end checks from SGF text through the quadrant plan to rendered
//! images, including the shared seam between neighbouring quadrants.

use std::collections::HashSet;

use sgf_quadrants::board::{Board, Color};
use sgf_quadrants::coord::{Point, decode, encode};
use sgf_quadrants::region::{BoardRegion, plan_quadrants};
use sgf_quadrants::render::{RenderError, RenderStyle, encode_png, render, render_regions};
use sgf_quadrants::samples::{SAMPLE_1, SAMPLE_2};
use sgf_quadrants::sgf::{Stone, parse};

// =============================================================================
// Helper functions
// =============================================================================

/// Random stone set with distinct points, deterministic for a given seed.
fn random_stones(seed: u64, count: usize) -> Vec<Stone> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut seen = HashSet::new();
    let mut stones = Vec::new();
    while stones.len() < count {
        let pt = (rng.usize(0..19), rng.usize(0..19));
        if seen.insert(pt) {
            let color = if rng.bool() { Color::Black } else { Color::White };
            stones.push(Stone::new(pt.0, pt.1, color));
        }
    }
    stones
}

/// SGF text holding the given stones.
fn to_sgf(stones: &[Stone]) -> String {
    let values = |color: Color| -> String {
        stones
            .iter()
            .filter(|s| s.color == color)
            .map(|s| format!("[{}]", encode(s.point(), 19).unwrap()))
            .collect()
    };
    format!("(;FF[4]SZ[19]AB{}AW{})", values(Color::Black), values(Color::White))
}

fn quadrant_points(region: &BoardRegion, stones: &[Stone]) -> HashSet<Point> {
    region.stones(stones).map(|s| s.point()).collect()
}

// =============================================================================
// Coordinates and parsing
// =============================================================================

#[test]
fn test_decode_full_alphabet() {
    for (column, c) in ('a'..='s').enumerate() {
        for (row, r) in ('a'..='s').enumerate() {
            let token = format!("{c}{r}");
            assert_eq!(decode(&token), Ok((column, row)));
            assert_eq!(encode((column, row), 19), Some(token));
        }
    }
    assert_eq!(decode("aa"), Ok((0, 0)));
    assert_eq!(decode("ss"), Ok((18, 18)));
}

#[test]
fn test_parse_reference_record() {
    assert_eq!(
        parse("(;AB[aa][bb]AW[cc])"),
        vec![
            Stone::new(0, 0, Color::Black),
            Stone::new(1, 1, Color::Black),
            Stone::new(2, 2, Color::White),
        ]
    );
    assert!(parse("(;FF[4])").is_empty());
}

#[test]
fn test_parse_sample_1() {
    let stones = parse(SAMPLE_1);
    assert_eq!(stones.len(), 26);
    assert_eq!(stones[0], Stone::new(16, 16, Color::Black));
    assert_eq!(stones[9], Stone::new(18, 12, Color::Black));
    assert_eq!(stones[10], Stone::new(18, 16, Color::White));
    assert_eq!(stones[25], Stone::new(15, 16, Color::White));
}

#[test]
fn test_parse_generated_record() {
    let stones = random_stones(7, 60);
    let parsed = parse(&to_sgf(&stones));
    let expected: Vec<Stone> = stones
        .iter()
        .filter(|s| s.color == Color::Black)
        .chain(stones.iter().filter(|s| s.color == Color::White))
        .copied()
        .collect();
    assert_eq!(parsed, expected);
}

// =============================================================================
// Quadrant coverage and the seam
// =============================================================================

#[test]
fn test_full_region_contains_every_stone() {
    let stones = parse(SAMPLE_2);
    let full = BoardRegion::full(19);
    assert_eq!(full.stones(&stones).count(), stones.len());
}

#[test]
fn test_quadrant_union_is_input() {
    for seed in 1..=5 {
        let stones = random_stones(seed, 120);
        let all: HashSet<Point> = stones.iter().map(|s| s.point()).collect();
        let union: HashSet<Point> = plan_quadrants(19)
            .iter()
            .flat_map(|r| quadrant_points(r, &stones))
            .collect();
        assert_eq!(union, all, "seed {seed}");
    }
}

#[test]
fn test_seam_stones_shared_by_neighbours() {
    let stones = parse("(;AB[jj][jc]AW[cj][dd])");
    let quadrants = plan_quadrants(19);
    let counts: Vec<usize> = quadrants.iter().map(|r| r.stones(&stones).count()).collect();

    // Centre point (9, 9) sits in all four quadrants.
    for r in &quadrants {
        assert!(r.contains(9, 9), "{}", r.label);
    }
    // top-right: jj, jc. bottom-right: jj. top-left: jj, jc, cj, dd. bottom-left: jj, cj.
    assert_eq!(counts, vec![2, 1, 4, 2]);

    // Off the seam, quadrants are disjoint.
    let off_seam = random_stones(11, 80)
        .into_iter()
        .filter(|s| s.column != 9 && s.row != 9)
        .collect::<Vec<_>>();
    let total: usize = quadrants.iter().map(|r| r.stones(&off_seam).count()).sum();
    assert_eq!(total, off_seam.len());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_render_sample_quadrants() {
    let stones = parse(SAMPLE_2);
    let style = RenderStyle::default();
    let images = render_regions(&plan_quadrants(19), &stones, &style).unwrap();

    let labels: Vec<_> = images.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["top-right", "bottom-right", "top-left", "bottom-left"]);
    for rendered in &images {
        assert_eq!(rendered.image.dimensions(), (380, 380));
        let png = encode_png(&rendered.image).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (380, 380));
    }

    // Black qr = (16, 17) in the bottom-right quadrant: 7 and 8 cells in.
    let bottom_right = &images[1].image;
    assert_eq!(*bottom_right.get_pixel(40 + 7 * 30 + 4, 40 + 8 * 30 + 4), style.ink);
    // White rd = (17, 3) in the top-right quadrant.
    let top_right = &images[0].image;
    assert_eq!(
        *top_right.get_pixel(40 + 8 * 30 + 4, 40 + 3 * 30 + 4),
        style.white_stone
    );
}

#[test]
fn test_render_size_follows_style() {
    let mut style = RenderStyle::default();
    style.cell_size = 20;
    style.margin = 10;
    style.stone_diameter = 16;
    for region in plan_quadrants(19) {
        let img = render(&region, &[], &style).unwrap();
        assert_eq!(img.dimensions(), (10 * 20 + 2 * 10, 10 * 20 + 2 * 10));
    }
    let full = render(&BoardRegion::full(19), &[], &style).unwrap();
    assert_eq!(full.dimensions(), (19 * 20 + 20, 19 * 20 + 20));
}

#[test]
fn test_render_small_board() {
    let style = RenderStyle::for_board_size(9);
    let stones = sgf_quadrants::sgf::parse_sized("(;SZ[9]AB[cc]AW[gg])", 9);
    let images = render_regions(&plan_quadrants(9), &stones, &style).unwrap();
    // Quadrants of a 9x9 board span 5 lines.
    for rendered in &images {
        assert_eq!(rendered.image.dimensions(), (5 * 30 + 80, 5 * 30 + 80));
    }
}

#[test]
fn test_render_rejects_region_off_board() {
    let style = RenderStyle::for_board_size(9);
    let result = render_regions(&plan_quadrants(19), &[], &style);
    assert!(matches!(result, Err(RenderError::InvalidRegion { .. })));
}

// =============================================================================
// Text dump
// =============================================================================

#[test]
fn test_board_dump_of_sample() {
    let stones = parse(SAMPLE_1);
    let board = Board::from_stones(19, &stones);
    assert_eq!(board.count(Color::Black), 10);
    assert_eq!(board.count(Color::White), 16);
    let text = board.to_string();
    assert_eq!(text.lines().count(), 20);
    // Row S holds white stones at P, Q and S.
    assert!(text.lines().last().unwrap().ends_with("O O . O"));
}

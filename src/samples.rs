//! Built-in sample positions, used when no input file is given.

/// Lower-right corner fight: ten black and sixteen white stones.
pub const SAMPLE_1: &str = "(;GM[1]SZ[19]CA[UTF-8]ST[0]AP[GOWrite:3.2.0]FF[4]FG[259:]\
AB[qq][qn][rq][qr][qo][qp][qm][rp][rm][sm]\
AW[sq][rk][pr][pl][rr][ql][ps][qs][pm][ss][pn][sn][po][ro][pp][pq]\
MULTIGOGM[1]PM[2])";

/// Whole-board problem collection: 28 black and 45 white stones in all four corners.
pub const SAMPLE_2: &str = "(;FF[4]CA[UTF-8]ST[0]GM[1]AP[GOWrite:3.2.0]SZ[19]PM[2]\
AW[rd][rk][pr][ea][rr][co][eo][pm][la][dc][ec][bq][eq][po][lc][be][fq][mc][ce][gq][ro][nc]\
[oc][rc][pq][sq][pl][bb][ql][ps][eb][qs][ss][bp][dp][pn][lb][cd][sn][ar][sb][pp][gr][pd][qd]\
AB[qr][ac][qm][ma][cc][rm][sm][cq][dq][qo][pc][qc][fs][qq][rq][cb][db][bd][qn][mb][nb][ob]\
[br][rb][er][fr][qp][rp]\
MULTIGOGM[1]FG[259:])";

/// Look up a sample by its 1-based number.
pub fn sample(n: usize) -> Option<&'static str> {
    match n {
        1 => Some(SAMPLE_1),
        2 => Some(SAMPLE_2),
        _ => None,
    }
}

//! 2D simplex-gradient noise for the wave displacement.
//!
//! Seedless and deterministic: equal inputs always produce equal outputs, on
//! every platform. The vertex shader carries the same algorithm in WGSL; the
//! two are kept interchangeable in character (range, frequency content) but
//! bit-exact agreement between CPU and GPU is not part of the contract.

const F2: f32 = 0.366_025_4; // (sqrt(3) - 1) / 2
const G2: f32 = 0.211_324_87; // (3 - sqrt(3)) / 6

fn hash(x: i32, y: i32) -> u32 {
    let mut h = (x as u32).wrapping_mul(668_265_263);
    h = h.wrapping_add((y as u32).wrapping_mul(2_654_435_761));
    h ^= h >> 13;
    h = h.wrapping_mul(1_274_126_177);
    h ^= h >> 16;
    h
}

fn gradient(h: u32) -> (f32, f32) {
    let angle = (h as f32) / (u32::MAX as f32) * std::f32::consts::TAU;
    (angle.cos(), angle.sin())
}

/// Sample the noise field at `(x, y)`. Returns a value in [-1, 1].
pub fn noise_2d(x: f32, y: f32) -> f32 {
    let s = (x + y) * F2;
    let i = (x + s).floor() as i32;
    let j = (y + s).floor() as i32;

    let t = (i + j) as f32 * G2;
    let x0 = x - (i as f32 - t);
    let y0 = y - (j as f32 - t);

    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f32 + G2;
    let y1 = y0 - j1 as f32 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let mut n = 0.0;

    let t0 = 0.5 - x0 * x0 - y0 * y0;
    if t0 > 0.0 {
        let t0 = t0 * t0;
        let (gx, gy) = gradient(hash(i, j));
        n += t0 * t0 * (gx * x0 + gy * y0);
    }

    let t1 = 0.5 - x1 * x1 - y1 * y1;
    if t1 > 0.0 {
        let t1 = t1 * t1;
        let (gx, gy) = gradient(hash(i + i1, j + j1));
        n += t1 * t1 * (gx * x1 + gy * y1);
    }

    let t2 = 0.5 - x2 * x2 - y2 * y2;
    if t2 > 0.0 {
        let t2 = t2 * t2;
        let (gx, gy) = gradient(hash(i + 1, j + 1));
        n += t2 * t2 * (gx * x2 + gy * y2);
    }

    (40.0 * n).clamp(-1.0, 1.0)
}

//! SIMD Protractor kernel using the `wide` crate.
//!
//! Each `f64x4` holds two interleaved points. The cross term is formed by
//! swapping the x/y lanes of the second vector and alternating signs.

use crate::metric::VectorKernel;
use wide::f64x4;

const LANES: usize = 4;

#[inline]
fn load(slice: &[f64]) -> f64x4 {
    f64x4::from([slice[0], slice[1], slice[2], slice[3]])
}

#[inline]
fn load_swapped(slice: &[f64]) -> f64x4 {
    f64x4::from([slice[1], slice[0], slice[3], slice[2]])
}

#[inline]
fn hsum(v: f64x4) -> f64 {
    let arr = v.to_array();
    arr[0] + arr[1] + arr[2] + arr[3]
}

/// `wide::f64x4` kernel, two points per iteration.
pub struct SimdKernel;

impl VectorKernel for SimdKernel {
    fn dot_cross(v1: &[f64], v2: &[f64]) -> (f64, f64) {
        let len = v1.len().min(v2.len());
        let simd_end = len / LANES * LANES;
        let signs = f64x4::from([1.0, -1.0, 1.0, -1.0]);

        let mut dot = f64x4::ZERO;
        let mut cross = f64x4::ZERO;
        for i in (0..simd_end).step_by(LANES) {
            let p = load(&v1[i..i + LANES]);
            dot += p * load(&v2[i..i + LANES]);
            cross += p * load_swapped(&v2[i..i + LANES]) * signs;
        }

        let mut a = hsum(dot);
        let mut b = hsum(cross);
        for (p, q) in v1[simd_end..len]
            .chunks_exact(2)
            .zip(v2[simd_end..len].chunks_exact(2))
        {
            a += p[0] * q[0] + p[1] * q[1];
            b += p[0] * q[1] - p[1] * q[0];
        }
        (a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::SimdKernel;
    use crate::metric::scalar::ScalarKernel;
    use crate::metric::VectorKernel;

    #[test]
    fn matches_scalar_with_odd_point_count() {
        let v1: Vec<f64> = (0..10).map(|i| (i as f64 * 0.37).sin()).collect();
        let v2: Vec<f64> = (0..10).map(|i| (i as f64 * 0.91).cos()).collect();
        let (sa, sb) = ScalarKernel::dot_cross(&v1, &v2);
        let (va, vb) = SimdKernel::dot_cross(&v1, &v2);
        assert!((sa - va).abs() < 1e-12);
        assert!((sb - vb).abs() < 1e-12);
    }
}

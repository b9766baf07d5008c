//! Scalar Protractor kernel.

use crate::metric::VectorKernel;

/// Straightforward loop over interleaved coordinate pairs.
pub struct ScalarKernel;

impl VectorKernel for ScalarKernel {
    fn dot_cross(v1: &[f64], v2: &[f64]) -> (f64, f64) {
        let mut a = 0.0;
        let mut b = 0.0;
        for (p, q) in v1.chunks_exact(2).zip(v2.chunks_exact(2)) {
            a += p[0] * q[0] + p[1] * q[1];
            b += p[0] * q[1] - p[1] * q[0];
        }
        (a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::ScalarKernel;
    use crate::metric::VectorKernel;

    #[test]
    fn dot_cross_of_quarter_turn() {
        // (1, 0) rotated by +90 degrees is (0, 1).
        let (a, b) = ScalarKernel::dot_cross(&[1.0, 0.0], &[0.0, 1.0]);
        assert_eq!(a, 0.0);
        assert_eq!(b, 1.0);
    }
}

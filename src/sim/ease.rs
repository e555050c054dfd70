//! Cubic Bezier easing curves (CSS `cubic-bezier()` semantics)

/// Easing curve through (0,0), (x1,y1), (x2,y2), (1,1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// CSS `ease`
pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
        // B(s) = 3(1-s)^2 s p1 + 3(1-s) s^2 p2 + s^3
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    #[inline]
    fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    }

    /// Curve parameter whose x equals `x`
    fn solve_x(&self, x: f32) -> f32 {
        // Newton first, it converges in a few steps for sane control points
        let mut s = x;
        for _ in 0..8 {
            let err = Self::bezier(self.x1, self.x2, s) - x;
            if err.abs() < 1e-6 {
                return s;
            }
            let slope = Self::bezier_slope(self.x1, self.x2, s);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= err / slope;
        }

        // Bisection fallback; x(s) is monotonic for x1, x2 in [0, 1]
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        s = x;
        for _ in 0..32 {
            let value = Self::bezier(self.x1, self.x2, s);
            if (value - x).abs() < 1e-6 {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }

    /// Eased progress for linear progress `t` (clamped to [0, 1])
    pub fn sample(&self, t: f32) -> f32 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        Self::bezier(self.y1, self.y2, self.solve_x(t)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(EASE.sample(0.0), 0.0);
        assert_eq!(EASE.sample(1.0), 1.0);
        assert_eq!(EASE.sample(-3.0), 0.0);
        assert_eq!(EASE.sample(7.0), 1.0);
        assert_eq!(EASE.sample(f32::NAN), 0.0);
    }

    #[test]
    fn test_linear_curve_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((linear.sample(t) - t).abs() < 1e-4);
        }
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let y = EASE.sample(i as f32 / 100.0);
            assert!(y >= prev - 1e-6);
            prev = y;
        }
    }

    #[test]
    fn test_ease_known_value() {
        // CSS ease is already ~80% done at the halfway point
        let y = EASE.sample(0.5);
        assert!((y - 0.8024).abs() < 0.005);
    }
}

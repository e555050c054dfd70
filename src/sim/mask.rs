//! Silhouette alpha masks
//!
//! Shapes are rasterized once, at one sample per playfield unit, and then
//! looked up through an inverse rotate + translate. Lookups outside the mask
//! read as transparent.

use glam::Vec2;

/// How much wider the bottom of the egg is than the top
const EGG_TAPER: f32 = 0.15;

/// An 8-bit alpha raster centered on its shape's origin
#[derive(Debug, Clone)]
pub struct SilhouetteMask {
    width: usize,
    height: usize,
    alpha: Vec<u8>,
}

impl SilhouetteMask {
    /// Rasterize a mask by evaluating `inside` at every sample center.
    ///
    /// `inside` receives normalized coordinates in [-1, 1] on both axes,
    /// y pointing down.
    pub fn rasterize(width: usize, height: usize, inside: impl Fn(f32, f32) -> bool) -> Self {
        let mut alpha = vec![0u8; width * height];
        let half_w = width as f32 / 2.0;
        let half_h = height as f32 / 2.0;
        for py in 0..height {
            let v = (py as f32 + 0.5 - half_h) / half_h;
            for px in 0..width {
                let u = (px as f32 + 0.5 - half_w) / half_w;
                if inside(u, v) {
                    alpha[py * width + px] = 255;
                }
            }
        }
        Self {
            width,
            height,
            alpha,
        }
    }

    /// Egg silhouette filling a `width` x `height` box, broad end down
    pub fn egg(width: f32, height: f32) -> Self {
        Self::rasterize(
            width.round().max(1.0) as usize,
            height.round().max(1.0) as usize,
            |u, v| u * u <= (1.0 - v * v) * (1.0 + EGG_TAPER * v),
        )
    }

    /// Filled disc of the given radius
    pub fn circle(radius: f32) -> Self {
        let size = (radius * 2.0).round().max(1.0) as usize;
        Self::rasterize(size, size, |u, v| u * u + v * v <= 1.0)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Radius of the circle that encloses the mask under any rotation
    pub fn bounding_radius(&self) -> f32 {
        Vec2::new(self.width as f32, self.height as f32).length() / 2.0
    }

    /// Alpha at a point relative to the shape center (unrotated)
    #[inline]
    pub fn sample(&self, local: Vec2) -> u8 {
        let mx = (local.x + self.width as f32 / 2.0).floor();
        let my = (local.y + self.height as f32 / 2.0).floor();
        // Also rejects NaN
        if !(mx >= 0.0 && my >= 0.0) {
            return 0;
        }
        let (mx, my) = (mx as usize, my as usize);
        if mx >= self.width || my >= self.height {
            return 0;
        }
        self.alpha[my * self.width + mx]
    }

    /// Alpha at `offset` from the shape center when the shape is drawn
    /// rotated by `angle_deg` (clockwise on screen)
    #[inline]
    pub fn sample_rotated(&self, offset: Vec2, angle_deg: f32) -> u8 {
        let inverse = Vec2::from_angle(-angle_deg.to_radians());
        self.sample(inverse.rotate(offset))
    }

    /// Number of opaque samples
    pub fn coverage(&self) -> usize {
        self.alpha.iter().filter(|&&a| a > 0).count()
    }
}

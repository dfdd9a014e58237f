//! Render-target abstraction for the fog backdrop.
//!
//! The fog simulation never talks to a concrete renderer. It paints through
//! the [`Surface`] trait: clear, then one soft radial puff per particle.
//! Any backend that can composite translucent blobs qualifies; the crate
//! ships [`RasterSurface`], a plain CPU RGBA8 buffer, which is enough for
//! offscreen composition and for tests.

use glam::Vec2;

/// Something the fog can paint on, once per tick.
pub trait Surface {
    /// Erase the previous frame.
    fn clear(&mut self);

    /// Composite one fog puff: a radial falloff blob centered at `center`,
    /// `alpha` opaque at the center, fully transparent at `radius`. No hard
    /// edge.
    fn puff(&mut self, center: Vec2, radius: f32, alpha: f32);
}

/// Cool gray-blue fog tint.
const FOG_TINT: [u8; 3] = [200, 210, 230];

/// A software RGBA8 surface.
///
/// Pixels are stored row-major as `[r, g, b, a]`. Use [`RasterSurface::bytes`]
/// to hand the frame to whatever displays or encodes it.
#[derive(Clone, Debug)]
pub struct RasterSurface {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 4]>,
}

impl RasterSurface {
    /// Create a surface of the given pixel dimensions, cleared to
    /// transparent black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 4]; width * height],
        }
    }

    /// Surface width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Surface height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resize the pixel buffer. Contents are cleared; the next tick repaints
    /// every particle anyway.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, [0; 4]);
    }

    /// Pixel at `(x, y)`, row-major.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        self.pixels[y * self.width + x]
    }

    /// The whole frame as raw RGBA bytes.
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        self.pixels.fill([0; 4]);
    }

    fn puff(&mut self, center: Vec2, radius: f32, alpha: f32) {
        if radius <= 0.0 || alpha <= 0.0 {
            return;
        }

        // Clamp the bounding box to the buffer; particles may sit partly or
        // fully outside while drifting toward the reset margin.
        let x0 = ((center.x - radius).floor().max(0.0)) as usize;
        let y0 = ((center.y - radius).floor().max(0.0)) as usize;
        let x1 = (center.x + radius).ceil().min(self.width as f32).max(0.0) as usize;
        let y1 = (center.y + radius).ceil().min(self.height as f32).max(0.0) as usize;

        for y in y0..y1 {
            for x in x0..x1 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5).distance(center);
                if d >= radius {
                    continue;
                }
                // Linear falloff from full alpha at the center to zero at
                // the rim.
                let coverage = alpha * (1.0 - d / radius);
                let px = &mut self.pixels[y * self.width + x];
                for c in 0..3 {
                    let src = FOG_TINT[c] as f32 * coverage;
                    let dst = px[c] as f32 * (1.0 - coverage);
                    px[c] = (src + dst).round().min(255.0) as u8;
                }
                let a = px[3] as f32 + 255.0 * coverage * (1.0 - px[3] as f32 / 255.0);
                px[3] = a.round().min(255.0) as u8;
            }
        }
    }
}

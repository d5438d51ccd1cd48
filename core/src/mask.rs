use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

const OPAQUE: u8 = u8::MAX;
const CLEAR: u8 = 0;

/// Opaque foil covering the card. Only the alpha plane varies; every pixel shares the fill colour.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    alpha: Array2<u8>,
    color: Rgb,
}

impl Mask {
    pub fn new(size: Size2, color: Rgb) -> Result<Self> {
        let size = validate_size(size)?;
        Ok(Self {
            alpha: Array2::from_elem(size.to_nd_shape(), OPAQUE),
            color,
        })
    }

    pub fn size(&self) -> Size2 {
        let (rows, cols) = self.alpha.dim();
        (cols as Dim, rows as Dim)
    }

    pub fn total_pixels(&self) -> PixelCount {
        self.alpha.len() as PixelCount
    }

    /// Alpha at `(x, y)`, or `None` outside the surface.
    pub fn alpha_at(&self, (x, y): (Dim, Dim)) -> Option<u8> {
        self.alpha.get([y as usize, x as usize]).copied()
    }

    /// Clears every pixel whose centre lies within `radius` of `center`.
    ///
    /// Returns how many pixels went from covered to clear with this call. Parts of the disc that fall
    /// outside the surface are clipped.
    pub fn erase_disc(&mut self, center: Point2, radius: f64) -> PixelCount {
        let (cx, cy) = center;
        if !(cx.is_finite() && cy.is_finite() && radius.is_finite()) || radius <= 0.0 {
            return 0;
        }

        let (width, height) = self.size();
        let Some((x_lo, x_hi)) = span(cx, radius, width) else {
            return 0;
        };
        let Some((y_lo, y_hi)) = span(cy, radius, height) else {
            return 0;
        };

        let radius_sq = radius * radius;
        let mut cleared = 0;
        for y in y_lo..=y_hi {
            let dy = y as f64 + 0.5 - cy;
            for x in x_lo..=x_hi {
                let dx = x as f64 + 0.5 - cx;
                if dx * dx + dy * dy > radius_sq {
                    continue;
                }
                let alpha = &mut self.alpha[[y, x]];
                if *alpha != CLEAR {
                    *alpha = CLEAR;
                    cleared += 1;
                }
            }
        }
        cleared
    }

    #[cfg(test)]
    pub(crate) fn erase_all(&mut self) {
        self.alpha.fill(CLEAR);
    }

    /// Full scan of the alpha plane for fully transparent pixels.
    pub fn revealed_pixels(&self) -> PixelCount {
        self.alpha.iter().filter(|&&alpha| alpha == CLEAR).count() as PixelCount
    }

    /// Serialises the mask as row-major RGBA8, ready to upload as canvas image data.
    pub fn write_rgba(&self, out: &mut Vec<u8>) {
        let Rgb { r, g, b } = self.color;
        out.clear();
        out.reserve(self.alpha.len() * 4);
        for &alpha in self.alpha.iter() {
            out.extend_from_slice(&[r, g, b, alpha]);
        }
    }
}

pub(crate) fn validate_size(size: Size2) -> Result<Size2> {
    if size.0 == 0 || size.1 == 0 {
        return Err(ScratchError::EmptySurface);
    }
    let pixels = area(size);
    if pixels > MAX_SURFACE_PIXELS {
        return Err(ScratchError::SurfaceTooLarge(pixels));
    }
    Ok(size)
}

/// Index range along one axis touched by a disc, clipped to `0..len`.
fn span(center: f64, radius: f64, len: Dim) -> Option<(usize, usize)> {
    // `as` saturates, and the extra pixel on each side covers truncation toward zero.
    let lo = ((center - radius) as i64).saturating_sub(1).max(0);
    let hi = ((center + radius) as i64)
        .saturating_add(1)
        .min(i64::from(len) - 1);
    (lo <= hi).then(|| (lo as usize, hi as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(size: Size2) -> Mask {
        Mask::new(size, Rgb::FOIL).unwrap()
    }

    #[test]
    fn new_mask_is_fully_opaque() {
        let mask = mask((30, 20));

        assert_eq!(mask.size(), (30, 20));
        assert_eq!(mask.total_pixels(), 600);
        assert_eq!(mask.revealed_pixels(), 0);
        assert_eq!(mask.alpha_at((29, 19)), Some(255));
        assert_eq!(mask.alpha_at((30, 0)), None);
    }

    #[test]
    fn rejects_degenerate_sizes() {
        assert_eq!(
            Mask::new((0, 10), Rgb::FOIL).unwrap_err(),
            ScratchError::EmptySurface
        );
        assert_eq!(
            Mask::new((1 << 13, 1 << 12), Rgb::FOIL).unwrap_err(),
            ScratchError::SurfaceTooLarge(1 << 25)
        );
    }

    #[test]
    fn erase_disc_clears_pixels_near_center_only() {
        let mut mask = mask((20, 20));

        let cleared = mask.erase_disc((10.0, 10.0), 3.0);

        assert!(cleared > 0);
        assert_eq!(mask.revealed_pixels(), cleared);
        assert_eq!(mask.alpha_at((10, 10)), Some(0));
        assert_eq!(mask.alpha_at((9, 9)), Some(0));
        assert_eq!(mask.alpha_at((14, 10)), Some(255));
        assert_eq!(mask.alpha_at((0, 0)), Some(255));
    }

    #[test]
    fn erase_disc_reports_only_newly_cleared_pixels() {
        let mut mask = mask((20, 20));

        let first = mask.erase_disc((10.0, 10.0), 4.0);
        let second = mask.erase_disc((10.0, 10.0), 4.0);

        assert!(first > 0);
        assert_eq!(second, 0);
    }

    #[test]
    fn erase_disc_is_clipped_at_the_edges() {
        let mut mask = mask((10, 10));

        let cleared = mask.erase_disc((0.0, 0.0), 2.0);

        // only the centres (0.5, 0.5), (1.5, 0.5) and (0.5, 1.5) are within 2 of the corner
        assert_eq!(cleared, 3);
        assert_eq!(mask.erase_disc((-50.0, -50.0), 5.0), 0);
        assert_eq!(mask.erase_disc((500.0, 5.0), 5.0), 0);
    }

    #[test]
    fn erase_disc_ignores_invalid_input() {
        let mut mask = mask((10, 10));

        assert_eq!(mask.erase_disc((f64::NAN, 5.0), 3.0), 0);
        assert_eq!(mask.erase_disc((5.0, 5.0), 0.0), 0);
        assert_eq!(mask.erase_disc((5.0, 5.0), f64::INFINITY), 0);
        assert_eq!(mask.revealed_pixels(), 0);
    }

    #[test]
    fn huge_brush_covers_whole_surface() {
        let mut mask = mask((12, 7));

        assert_eq!(mask.erase_disc((6.0, 3.5), 1e6), 84);
        assert_eq!(mask.revealed_pixels(), mask.total_pixels());
    }

    #[test]
    fn write_rgba_uses_fill_color_and_alpha() {
        let mut mask = Mask::new((2, 1), Rgb::new(1, 2, 3)).unwrap();
        mask.erase_disc((0.5, 0.5), 0.5);
        let mut out = Vec::new();

        mask.write_rgba(&mut out);

        assert_eq!(out, [1, 2, 3, 0, 1, 2, 3, 255]);
    }
}

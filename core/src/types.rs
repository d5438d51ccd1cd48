/// Single raster axis used for surface width and height, in buffer pixels.
pub type Dim = u32;

/// Count type used for revealed-pixel and total-pixel counts.
pub type PixelCount = u32;

/// Surface dimensions `(width, height)`.
pub type Size2 = (Dim, Dim);

/// Continuous position `(x, y)`, either in client space or buffer space.
pub type Point2 = (f64, f64);

/// Largest surface accepted by the engine, in pixels.
pub const MAX_SURFACE_PIXELS: u64 = 1 << 24;

pub trait ToNdShape {
    type Output;
    fn to_nd_shape(self) -> Self::Output;
}

impl ToNdShape for Size2 {
    type Output = (usize, usize);

    /// Rows first, so the standard layout matches the row-major RGBA order of a canvas.
    fn to_nd_shape(self) -> Self::Output {
        (self.1 as usize, self.0 as usize)
    }
}

pub const fn area(size: Size2) -> u64 {
    (size.0 as u64) * (size.1 as u64)
}

/// Plain 8-bit colour used for the mask fill.
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `#888`, the foil colour of every card so far.
    pub const FOIL: Rgb = Rgb::new(0x88, 0x88, 0x88);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::FOIL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nd_shape_is_rows_then_columns() {
        assert_eq!((300, 200).to_nd_shape(), (200, 300));
    }

    #[test]
    fn area_does_not_overflow_u32() {
        assert_eq!(area((Dim::MAX, 2)), 2 * Dim::MAX as u64);
    }
}

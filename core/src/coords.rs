use crate::*;

/// Where the canvas sits on the page and how its backing buffer relates to its displayed box.
///
/// CSS can stretch a canvas, so the displayed size and the buffer size differ after layout changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasGeometry {
    pub left: f64,
    pub top: f64,
    pub display_width: f64,
    pub display_height: f64,
    pub buffer: Size2,
}

impl CanvasGeometry {
    /// Geometry of a canvas displayed at its buffer size at the page origin.
    #[cfg(test)]
    fn unscaled(buffer: Size2) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            display_width: f64::from(buffer.0),
            display_height: f64::from(buffer.1),
            buffer,
        }
    }

    /// Maps a client-space position into buffer pixels.
    pub fn to_buffer(&self, (client_x, client_y): Point2) -> Point2 {
        (
            (client_x - self.left) * axis_scale(self.buffer.0, self.display_width),
            (client_y - self.top) * axis_scale(self.buffer.1, self.display_height),
        )
    }
}

fn axis_scale(buffer: Dim, displayed: f64) -> f64 {
    if displayed > 0.0 {
        f64::from(buffer) / displayed
    } else {
        1.0
    }
}

/// An axis-aligned face box in frame pixel coordinates.
///
/// Corners are `(x0, y0)` top-left inclusive and `(x1, y1)` bottom-right
/// exclusive, so `width = x1 - x0` and `height = y1 - y0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BoundingBox {
    /// Scales a normalized `[x0, y0, x1, y1]` box (model output, `0..1`)
    /// to pixel coordinates, clamped to the frame.
    ///
    /// Localizers occasionally emit coordinates slightly outside the unit
    /// range; those are clamped rather than rejected.
    pub fn from_normalized(coords: [f32; 4], frame_width: u32, frame_height: u32) -> BoundingBox {
        let scale = |v: f32, limit: u32| -> u32 {
            let px = v * limit as f32;
            px.clamp(0.0, limit as f32) as u32
        };
        let x0 = scale(coords[0], frame_width);
        let y0 = scale(coords[1], frame_height);
        let x1 = scale(coords[2], frame_width);
        let y1 = scale(coords[3], frame_height);
        BoundingBox {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_from_normalized_scales_to_pixels() {
        let b = BoundingBox::from_normalized([0.25, 0.5, 0.75, 1.0], 400, 300);
        assert_eq!(b, BoundingBox { x0: 100, y0: 150, x1: 300, y1: 300 });
        assert_eq!(b.width(), 200);
        assert_eq!(b.height(), 150);
    }

    #[rstest]
    #[case::negative([-0.1, -0.2, 0.5, 0.5])]
    #[case::above_one([0.1, 0.1, 1.3, 1.7])]
    fn test_from_normalized_clamps_to_frame(#[case] coords: [f32; 4]) {
        let b = BoundingBox::from_normalized(coords, 400, 300);
        assert!(b.x1 <= 400);
        assert!(b.y1 <= 300);
    }

    #[test]
    fn test_from_normalized_reorders_flipped_corners() {
        let b = BoundingBox::from_normalized([0.8, 0.9, 0.2, 0.1], 100, 100);
        assert_eq!(b, BoundingBox { x0: 20, y0: 10, x1: 80, y1: 90 });
    }

    #[test]
    fn test_degenerate_box_has_zero_size() {
        let b = BoundingBox::from_normalized([0.5, 0.5, 0.5, 0.5], 400, 300);
        assert_eq!(b.width(), 0);
        assert_eq!(b.height(), 0);
    }
}

use ndarray::ArrayView3;

use crate::shared::bounding_box::BoundingBox;

/// A single video frame: contiguous RGB bytes in row-major order.
///
/// Format conversion happens at I/O boundaries only; everything above them
/// treats pixel data as opaque. A frame is owned by the loop iteration that
/// pulled it and discarded afterwards.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Nearest-neighbor resample to `target_width`, preserving aspect ratio.
    ///
    /// Returns `self` unchanged when the frame is already at the target
    /// width. Height is rounded to at least one row.
    pub fn resize_to_width(&self, target_width: u32) -> Frame {
        if self.width == target_width {
            return self.clone();
        }
        let ratio = target_width as f64 / self.width as f64;
        let target_height = ((self.height as f64 * ratio).round() as u32).max(1);
        self.resample(target_width, target_height)
    }

    /// Extracts the pixels inside `bbox` as a new frame.
    ///
    /// The box is clamped to the frame bounds; a box with zero area yields
    /// a `None` rather than an empty frame.
    pub fn crop(&self, bbox: &BoundingBox) -> Option<Frame> {
        let x0 = bbox.x0.min(self.width);
        let y0 = bbox.y0.min(self.height);
        let x1 = bbox.x1.min(self.width);
        let y1 = bbox.y1.min(self.height);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        let w = (x1 - x0) as usize;
        let h = (y1 - y0) as usize;
        let ch = self.channels as usize;
        let src_row = self.width as usize * ch;

        let mut data = Vec::with_capacity(w * h * ch);
        for row in y0 as usize..y1 as usize {
            let start = row * src_row + x0 as usize * ch;
            data.extend_from_slice(&self.data[start..start + w * ch]);
        }
        Some(Frame::new(data, w as u32, h as u32, self.channels, self.index))
    }

    fn resample(&self, target_width: u32, target_height: u32) -> Frame {
        let src_w = self.width as usize;
        let src_h = self.height as usize;
        let dst_w = target_width as usize;
        let dst_h = target_height as usize;
        let ch = self.channels as usize;

        let mut data = Vec::with_capacity(dst_w * dst_h * ch);
        for y in 0..dst_h {
            let src_y = (((y as f64 + 0.5) * src_h as f64 / dst_h as f64) as usize).min(src_h - 1);
            for x in 0..dst_w {
                let src_x =
                    (((x as f64 + 0.5) * src_w as f64 / dst_w as f64) as usize).min(src_w - 1);
                let offset = (src_y * src_w + src_x) * ch;
                data.extend_from_slice(&self.data[offset..offset + ch]);
            }
        }
        Frame::new(data, target_width, target_height, self.channels, self.index)
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}

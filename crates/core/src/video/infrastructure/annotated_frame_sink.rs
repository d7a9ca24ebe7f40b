use std::path::PathBuf;

use crate::detection::domain::detection::Detection;
use crate::shared::bounding_box::BoundingBox;
use crate::shared::frame::Frame;
use crate::video::domain::presentation_sink::{PresentationSink, SinkSignal};

/// Box outline thickness in pixels.
const OUTLINE_PX: u32 = 2;

/// Box outline color (RGB).
const OUTLINE_COLOR: [u8; 3] = [255, 0, 0];

/// Writes each frame as a PNG with detection boxes burned in, one file per
/// frame, and logs the age captions and frame rate.
///
/// Uses the `image` crate for encoding; pixel drawing happens directly on
/// the frame buffer.
pub struct AnnotatedFrameSink {
    output_dir: PathBuf,
}

impl AnnotatedFrameSink {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }
}

impl PresentationSink for AnnotatedFrameSink {
    fn present(
        &mut self,
        frame: &Frame,
        detections: &[Detection],
        fps: f64,
    ) -> Result<SinkSignal, Box<dyn std::error::Error>> {
        let mut annotated = frame.clone();
        for detection in detections {
            draw_outline(&mut annotated, &detection.bounding_box);
            log::info!("face at {:?}: {}", detection.bounding_box, detection.caption());
        }
        log::debug!("fps: {fps:.0}");

        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("frame_{:06}.png", frame.index()));
        let img = image::RgbImage::from_raw(
            annotated.width(),
            annotated.height(),
            annotated.data().to_vec(),
        )
        .ok_or("Failed to create image from frame data")?;
        img.save(&path)?;

        Ok(SinkSignal::Continue)
    }
}

/// Burns a rectangle outline into the frame buffer, clamped to the frame.
fn draw_outline(frame: &mut Frame, bbox: &BoundingBox) {
    let w = frame.width();
    let h = frame.height();
    let x0 = bbox.x0.min(w);
    let y0 = bbox.y0.min(h);
    let x1 = bbox.x1.min(w);
    let y1 = bbox.y1.min(h);

    for y in y0..y1 {
        for x in x0..x1 {
            let on_vertical_edge = x < x0 + OUTLINE_PX || x + OUTLINE_PX > x1;
            let on_horizontal_edge = y < y0 + OUTLINE_PX || y + OUTLINE_PX > y1;
            if on_vertical_edge || on_horizontal_edge {
                set_pixel(frame, x, y, OUTLINE_COLOR);
            }
        }
    }
}

fn set_pixel(frame: &mut Frame, x: u32, y: u32, rgb: [u8; 3]) {
    let ch = frame.channels() as usize;
    let offset = (y as usize * frame.width() as usize + x as usize) * ch;
    frame.data_mut()[offset..offset + 3].copy_from_slice(&rgb);
}

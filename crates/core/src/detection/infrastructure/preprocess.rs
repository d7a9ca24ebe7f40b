use ndarray::Array4;

use crate::detection::infrastructure::model_artifacts::ModelDescriptor;
use crate::shared::frame::Frame;

/// Builds the NCHW float input tensor a scorer expects from an RGB frame.
///
/// Nearest-neighbor resample to the descriptor's input size, optional R/B
/// swap for BGR-trained models, then `(value - mean[c]) * scale` per
/// channel. Mirrors the blob construction the stock detectors were
/// trained against.
pub fn input_tensor(frame: &Frame, descriptor: &ModelDescriptor) -> Array4<f32> {
    let src = frame.as_ndarray();
    let src_h = frame.height() as usize;
    let src_w = frame.width() as usize;
    let dst_h = descriptor.input_height as usize;
    let dst_w = descriptor.input_width as usize;

    let mut tensor = Array4::<f32>::zeros((1, 3, dst_h, dst_w));

    for y in 0..dst_h {
        let src_y = (((y as f64 + 0.5) * src_h as f64 / dst_h as f64) as usize).min(src_h - 1);
        for x in 0..dst_w {
            let src_x = (((x as f64 + 0.5) * src_w as f64 / dst_w as f64) as usize).min(src_w - 1);
            for c in 0..3 {
                let src_c = if descriptor.swap_rb { 2 - c } else { c };
                let raw = src[[src_y, src_x, src_c]] as f32;
                tensor[[0, c, y, x]] = (raw - descriptor.mean[c]) * descriptor.scale;
            }
        }
    }

    tensor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn descriptor(w: u32, h: u32, mean: [f32; 3], swap_rb: bool) -> ModelDescriptor {
        ModelDescriptor {
            input_width: w,
            input_height: h,
            mean,
            scale: 1.0,
            swap_rb,
        }
    }

    fn solid_frame(w: u32, h: u32, rgb: [u8; 3]) -> Frame {
        let mut data = Vec::with_capacity((w * h * 3) as usize);
        for _ in 0..(w * h) {
            data.extend_from_slice(&rgb);
        }
        Frame::new(data, w, h, 3, 0)
    }

    #[test]
    fn test_tensor_shape() {
        let frame = solid_frame(200, 100, [128, 128, 128]);
        let tensor = input_tensor(&frame, &descriptor(300, 300, [0.0; 3], false));
        assert_eq!(tensor.shape(), &[1, 3, 300, 300]);
    }

    #[test]
    fn test_mean_subtraction() {
        let frame = solid_frame(50, 50, [104, 177, 123]);
        let tensor = input_tensor(&frame, &descriptor(10, 10, [104.0, 177.0, 123.0], false));
        assert_relative_eq!(tensor[[0, 0, 5, 5]], 0.0);
        assert_relative_eq!(tensor[[0, 1, 5, 5]], 0.0);
        assert_relative_eq!(tensor[[0, 2, 5, 5]], 0.0);
    }

    #[test]
    fn test_swap_rb_reorders_channels() {
        let frame = solid_frame(20, 20, [10, 20, 30]);
        let tensor = input_tensor(&frame, &descriptor(4, 4, [0.0; 3], true));
        // Channel 0 of the tensor is the frame's B channel.
        assert_relative_eq!(tensor[[0, 0, 0, 0]], 30.0);
        assert_relative_eq!(tensor[[0, 1, 0, 0]], 20.0);
        assert_relative_eq!(tensor[[0, 2, 0, 0]], 10.0);
    }

    #[test]
    fn test_scale_applied_after_mean() {
        let frame = solid_frame(8, 8, [200, 200, 200]);
        let mut desc = descriptor(2, 2, [100.0; 3], false);
        desc.scale = 0.5;
        let tensor = input_tensor(&frame, &desc);
        assert_relative_eq!(tensor[[0, 0, 0, 0]], 50.0);
    }
}

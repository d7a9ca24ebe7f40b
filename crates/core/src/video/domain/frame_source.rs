use crate::shared::frame::Frame;

/// Supplies the continuous frame sequence the loop consumes.
///
/// `next_frame` may block until a frame is available; `Ok(None)` means the
/// source is exhausted (end of file, camera disconnected). Implementations
/// handle codec and container details.
pub trait FrameSource: Send {
    fn next_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>>;
}

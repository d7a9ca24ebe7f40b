use std::time::Instant;

use crossbeam_channel::Receiver;

use crate::pipeline::detect_ages_use_case::DetectAgesUseCase;
use crate::shared::constants::CANONICAL_FRAME_WIDTH;
use crate::signal::domain::engine::SignalEngine;
use crate::video::domain::frame_source::FrameSource;
use crate::video::domain::presentation_sink::{PresentationSink, SinkSignal};

/// What to do when a frame yields no detections.
///
/// `Halt` treats a faceless frame as an operational fault and ends the
/// run ("check your camera"). `Skip` continues with the next frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyFramePolicy {
    #[default]
    Halt,
    Skip,
}

/// How a monitoring session ended. None of these are errors; seam
/// failures propagate as `Err` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The frame source ran out of frames.
    SourceExhausted,
    /// The presentation sink requested a stop.
    QuitRequested,
    /// The interrupt channel fired (e.g. Ctrl-C).
    Interrupted,
    /// A frame produced no detections under the `Halt` policy.
    HaltedNoFaces,
}

/// One crossing-monitor session: pulls frames, detects ages, presents
/// results, and drives the signal engine from the last detection of each
/// frame.
///
/// Strictly sequential: the engine's blocking cycle runs to completion
/// before the next frame is pulled, so detections produced meanwhile are
/// dropped by construction.
pub struct MonitorCrossingUseCase {
    source: Box<dyn FrameSource>,
    detector: DetectAgesUseCase,
    sink: Box<dyn PresentationSink>,
    engine: SignalEngine,
    empty_frame_policy: EmptyFramePolicy,
    interrupt: Option<Receiver<()>>,
}

impl MonitorCrossingUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        detector: DetectAgesUseCase,
        sink: Box<dyn PresentationSink>,
        engine: SignalEngine,
        empty_frame_policy: EmptyFramePolicy,
        interrupt: Option<Receiver<()>>,
    ) -> Self {
        Self {
            source,
            detector,
            sink,
            engine,
            empty_frame_policy,
            interrupt,
        }
    }

    /// Runs the frame loop until the source, sink, policy, or operator
    /// ends it.
    pub fn execute(&mut self) -> Result<Outcome, Box<dyn std::error::Error>> {
        let mut last_iteration = Instant::now();

        loop {
            if self.interrupted() {
                return Ok(Outcome::Interrupted);
            }

            let Some(frame) = self.source.next_frame()? else {
                return Ok(Outcome::SourceExhausted);
            };
            let frame = frame.resize_to_width(CANONICAL_FRAME_WIDTH);

            let detections = self.detector.execute(&frame)?;

            let now = Instant::now();
            let fps = 1.0 / (now - last_iteration).as_secs_f64().max(1e-9);
            last_iteration = now;

            if detections.is_empty() {
                match self.empty_frame_policy {
                    EmptyFramePolicy::Halt => {
                        log::error!("no face detected, check your camera");
                        return Ok(Outcome::HaltedNoFaces);
                    }
                    EmptyFramePolicy::Skip => {
                        log::debug!("no face in frame {}, skipping", frame.index());
                        continue;
                    }
                }
            }

            if self.sink.present(&frame, &detections, fps)? == SinkSignal::Quit {
                return Ok(Outcome::QuitRequested);
            }

            // Last processed face wins; earlier detections in the frame
            // only feed the presentation.
            if let Some(observed) = detections.last() {
                log::info!("observed age bracket {}", observed.age_bucket);
                self.engine.run_cycle(observed.age_bucket);
            }
        }
    }

    fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|rx| rx.try_recv().is_ok())
    }
}

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use crosslight_core::detection::infrastructure::onnx_age_classifier::OnnxAgeClassifier;
use crosslight_core::detection::infrastructure::onnx_face_localizer::OnnxFaceLocalizer;
use crosslight_core::pipeline::detect_ages_use_case::DetectAgesUseCase;
use crosslight_core::pipeline::monitor_crossing_use_case::{
    EmptyFramePolicy, MonitorCrossingUseCase, Outcome,
};
use crosslight_core::signal::domain::engine::SignalEngine;
use crosslight_core::signal::infrastructure::log_cycle_observer::LogCycleObserver;
use crosslight_core::signal::infrastructure::system_clock::SystemClock;
use crosslight_core::video::domain::presentation_sink::{NullPresentationSink, PresentationSink};
use crosslight_core::video::infrastructure::annotated_frame_sink::AnnotatedFrameSink;
use crosslight_core::video::infrastructure::ffmpeg_source::FfmpegFrameSource;

/// Exit code for the no-face operational halt, distinct from structural
/// errors (1) and a normal stop (0).
const EXIT_NO_FACES: i32 = 2;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OnEmpty {
    /// Stop the run on the first frame without a detected face.
    Halt,
    /// Skip faceless frames and keep watching.
    Skip,
}

/// Age-aware pedestrian crossing signal driven by a video feed.
#[derive(Parser)]
#[command(name = "crosslight")]
struct Cli {
    /// Input video file or stream.
    input: PathBuf,

    /// Directory holding the face localizer artifacts (config.json + model.onnx).
    #[arg(long)]
    face_model: PathBuf,

    /// Directory holding the age classifier artifacts (config.json + model.onnx).
    #[arg(long)]
    age_model: PathBuf,

    /// Face detection confidence threshold (0.0-1.0).
    #[arg(long, default_value = "0.5")]
    confidence: f32,

    /// What to do with a frame that has no detected face.
    #[arg(long, value_enum, default_value = "halt")]
    on_empty: OnEmpty,

    /// Write annotated frames (detection boxes) into this directory.
    #[arg(long)]
    annotated_dir: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    log::info!("loading face localizer from {}", cli.face_model.display());
    let localizer = OnnxFaceLocalizer::new(&cli.face_model)?;
    log::info!("loading age classifier from {}", cli.age_model.display());
    let classifier = OnnxAgeClassifier::new(&cli.age_model)?;

    let source = FfmpegFrameSource::open(&cli.input)?;
    let sink: Box<dyn PresentationSink> = match cli.annotated_dir {
        Some(dir) => Box::new(AnnotatedFrameSink::new(dir)),
        None => Box::new(NullPresentationSink),
    };

    let detector =
        DetectAgesUseCase::new(Box::new(localizer), Box::new(classifier), cli.confidence);
    let engine = SignalEngine::new(Box::new(SystemClock), Box::new(LogCycleObserver));

    let (quit_tx, quit_rx) = crossbeam_channel::bounded(1);
    ctrlc::set_handler(move || {
        let _ = quit_tx.try_send(());
    })?;

    log::info!("signal starts red; watching {}", cli.input.display());
    let mut session = MonitorCrossingUseCase::new(
        Box::new(source),
        detector,
        sink,
        engine,
        policy(cli.on_empty),
        Some(quit_rx),
    );

    match session.execute()? {
        Outcome::SourceExhausted => {
            log::info!("input exhausted");
            Ok(0)
        }
        Outcome::QuitRequested => {
            log::info!("quit requested");
            Ok(0)
        }
        Outcome::Interrupted => {
            log::info!("interrupted");
            Ok(0)
        }
        Outcome::HaltedNoFaces => Ok(EXIT_NO_FACES),
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input not found: {}", cli.input.display()).into());
    }
    if !(0.0..=1.0).contains(&cli.confidence) {
        return Err(format!(
            "Confidence must be between 0.0 and 1.0, got {}",
            cli.confidence
        )
        .into());
    }
    Ok(())
}

fn policy(on_empty: OnEmpty) -> EmptyFramePolicy {
    match on_empty {
        OnEmpty::Halt => EmptyFramePolicy::Halt,
        OnEmpty::Skip => EmptyFramePolicy::Skip,
    }
}

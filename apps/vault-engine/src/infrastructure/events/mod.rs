//! Event publisher adapters.

mod recording;

pub use recording::RecordingEventPublisher;

//! Narration - Player-visible battle log lines
//!
//! The engine reports what happens through a [`NarrationSink`] and never
//! decides how the lines are shown.

/// Receiver for narrated battle events
pub trait NarrationSink {
    fn emit(&mut self, message: &str);
}

impl NarrationSink for Vec<String> {
    fn emit(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl<S: NarrationSink + ?Sized> NarrationSink for &mut S {
    fn emit(&mut self, message: &str) {
        (**self).emit(message);
    }
}

/// Forwards every line to `tracing` at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNarrator;

impl NarrationSink for TracingNarrator {
    fn emit(&mut self, message: &str) {
        tracing::info!(target: "zoid_core::narration", "{}", message);
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNarrator;

impl NarrationSink for SilentNarrator {
    fn emit(&mut self, _message: &str) {}
}

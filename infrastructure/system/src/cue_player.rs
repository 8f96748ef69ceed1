use business::domain::notification::services::{Cue, CuePlayer};

/// Headless stand-in for the storefront's sound effects: cues are traced
/// instead of played.
pub struct TracingCuePlayer;

impl CuePlayer for TracingCuePlayer {
    fn play(&self, cue: Cue) {
        tracing::debug!(target: "storefront", cue = %cue, "Playing sound cue");
    }
}

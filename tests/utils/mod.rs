pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use mocks::{AudioCue, RecordingAudioSink};
#[allow(unused_imports)]
pub use setup::{scratch_dir, TestSetup, TestSetupBuilder};

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(hilo::Card::new(hilo::Rank::$rank, hilo::Suit::$suit)),*]
    };
}

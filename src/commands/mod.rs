//! Command implementations

pub mod benchmark;
pub mod play;
pub mod preview;

pub use benchmark::{GenerationBenchmark, run_generation_benchmark};
pub use play::run_play;
pub use preview::{PreviewResult, preview_puzzle};

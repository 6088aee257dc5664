// src/lib.rs
// ============================================================================
// BIN-R8TOR4 - Conversor de binarios float64 ↔ float32
// ============================================================================

pub mod binfile;
pub mod config;
pub mod convert;
pub mod dtype;
pub mod error;
pub mod pipeline;
pub mod samples;

// Re-exports principales
pub use binfile::{read_samples, write_samples, ReadOptions, ReadOutcome};
pub use config::{Args, Config, DEFAULT_OUTPUT};
pub use convert::{convert, narrow, widen, ConversionStats};
pub use dtype::{Direction, Precision};
pub use error::ConvertError;
pub use pipeline::{run, RunReport};
pub use samples::Samples;

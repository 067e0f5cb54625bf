//! Validation errors reported by the input adapter
//!
//! These are the only recoverable errors in the engine: the learner typed
//! something the visualizer cannot run on, so no trace is generated and the
//! message is shown instead.

use thiserror::Error;

/// Why raw input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// More valid elements than the visualizer can display
    #[error("too many elements: {count} given, at most {max} allowed")]
    TooManyElements { count: usize, max: usize },

    /// Nothing usable was left once malformed tokens were dropped
    #[error("empty after filtering: no valid {expected} found")]
    Empty { expected: &'static str },

    /// A well-formed number outside the allowed range
    #[error("value out of range: {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// Visualizer name that is not in the catalog
    #[error("unknown visualizer '{0}'")]
    UnknownVisualizer(String),

    /// Preset index past the end of a visualizer's preset list
    #[error("preset {index} does not exist ({available} available)")]
    UnknownPreset { index: usize, available: usize },
}

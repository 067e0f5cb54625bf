//! Rejected controller calls
//!
//! Misuse is refused at the call boundary and leaves the controller untouched.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ControllerError {
    /// Speed multipliers must be finite, strictly positive, and give an
    /// interval that fits in a `Duration`
    #[error("invalid speed {requested}: the step interval would be unusable")]
    InvalidSpeed { requested: f64 },
}

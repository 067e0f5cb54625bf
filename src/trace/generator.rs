//! The contract shared by every algorithm family

use super::{StepKind, Trace, TracePayload};
use crate::input::{Constraints, TypedInput};
use serde::Serialize;
use std::fmt;

/// Pure `input -> Trace` function for one algorithm family.
///
/// Implementations supply only their kind enum, payload type and step
/// production; the data model and the playback controller are shared.
///
/// `generate` must:
/// - terminate, producing at most [`TraceGenerator::step_bound`] steps
/// - accept sizes 0 and 1 without special handling at the call site
/// - report on its terminal step the same result as [`TraceGenerator::oracle`]
/// - return structurally identical traces for equal inputs
pub trait TraceGenerator {
    type Input: Clone + fmt::Debug;
    type Kind: StepKind + Serialize;
    type Payload: TracePayload + Clone + PartialEq + fmt::Debug + Serialize;

    /// Input limits enforced by the adapter before this generator runs
    fn constraints(&self) -> Constraints;

    /// Convert adapter output into this family's input.
    ///
    /// Panics if `typed` has the wrong shape: that input bypassed the adapter.
    fn accept(&self, typed: TypedInput) -> Self::Input;

    fn generate(&self, input: &Self::Input) -> Trace<Self::Kind, Self::Payload>;

    /// Plain, uninstrumented reference implementation
    fn oracle(&self, input: &Self::Input) -> <Self::Payload as TracePayload>::Output;

    /// Upper bound on trace length for an input of `n` elements
    fn step_bound(&self, n: usize) -> usize;
}

//! Step and trace data model
//!
//! A [`Trace`] is the complete, immutable record of one algorithm run: an
//! ordered list of [`Step`]s, each a self-contained snapshot that can be
//! rendered without looking at any other step.
//!
//! # Invariants
//!
//! Every trace produced through [`TraceBuilder`] satisfies:
//! - at least one step
//! - the first step (and only the first) has a start-class kind
//! - the last step (and only the last) has a terminal-class kind
//! - every description is non-empty
//!
//! Violations are programming errors in a generator and panic immediately.
//!
//! - [`generator`]: the [`TraceGenerator`] contract every algorithm family implements

pub mod generator;

pub use generator::TraceGenerator;

use serde::Serialize;
use std::fmt;

/// Closed, per-family set of step tags.
pub trait StepKind: Copy + Eq + fmt::Debug {
    /// True for the kind that opens every trace
    fn is_start(self) -> bool;

    /// True for kinds that end a trace
    fn is_terminal(self) -> bool;

    /// Short lowercase tag used by the UI and in exported traces
    fn label(self) -> &'static str;
}

/// Payloads expose the algorithm result once the run is over.
pub trait TracePayload {
    type Output: Clone + PartialEq + fmt::Debug;

    /// `Some` only on the terminal step
    fn result(&self) -> Option<&Self::Output>;
}

/// One renderable snapshot: the action just taken plus the full state after it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step<K, P> {
    pub kind: K,
    pub description: String,
    pub payload: P,
}

/// Ordered, non-empty, immutable sequence of steps
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace<K, P> {
    steps: Vec<Step<K, P>>,
}

impl<K: StepKind, P> Trace<K, P> {
    /// Number of steps (always >= 1)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; provided for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step<K, P>> {
        self.steps.get(index)
    }

    pub fn first(&self) -> &Step<K, P> {
        &self.steps[0]
    }

    /// The terminal step
    pub fn last(&self) -> &Step<K, P> {
        &self.steps[self.steps.len() - 1]
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn steps(&self) -> &[Step<K, P>] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<K, P>> {
        self.steps.iter()
    }

    /// Kind sequence, in order
    pub fn kinds(&self) -> Vec<K> {
        self.steps.iter().map(|s| s.kind).collect()
    }

    /// Number of steps tagged with `kind`
    pub fn count(&self, kind: K) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    /// Index of the first step tagged with `kind`
    pub fn position(&self, kind: K) -> Option<usize> {
        self.steps.iter().position(|s| s.kind == kind)
    }
}

impl<K: StepKind, P: TracePayload> Trace<K, P> {
    /// Result reported by the terminal step
    pub fn result(&self) -> &P::Output {
        match self.last().payload.result() {
            Some(result) => result,
            None => panic!("terminal step {:?} carries no result", self.last().kind),
        }
    }
}

impl<K: Serialize, P: Serialize> Trace<K, P> {
    /// Deterministic JSON encoding; identical traces give identical bytes.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a, K, P> IntoIterator for &'a Trace<K, P> {
    type Item = &'a Step<K, P>;
    type IntoIter = std::slice::Iter<'a, Step<K, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Append-only builder that enforces the trace invariants step by step.
#[derive(Debug)]
pub struct TraceBuilder<K, P> {
    steps: Vec<Step<K, P>>,
}

impl<K: StepKind, P> TraceBuilder<K, P> {
    pub fn new() -> Self {
        TraceBuilder { steps: Vec::new() }
    }

    /// Record one step. `payload` must be an owned snapshot, never shared
    /// with the generator's working state.
    pub fn push(&mut self, kind: K, description: impl Into<String>, payload: P) {
        let description = description.into();
        assert!(
            !description.trim().is_empty(),
            "step {} ({:?}) has an empty description",
            self.steps.len(),
            kind
        );
        if self.steps.is_empty() {
            assert!(kind.is_start(), "trace must open with a start step, got {:?}", kind);
        } else {
            assert!(!kind.is_start(), "start step {:?} repeated at {}", kind, self.steps.len());
        }
        if let Some(last) = self.steps.last() {
            assert!(
                !last.kind.is_terminal(),
                "step {:?} pushed after terminal step {:?}",
                kind,
                last.kind
            );
        }
        self.steps.push(Step {
            kind,
            description,
            payload,
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the trace. Panics unless it ends with a terminal step.
    pub fn finish(self) -> Trace<K, P> {
        let last = self
            .steps
            .last()
            .unwrap_or_else(|| panic!("generator produced an empty trace"));
        assert!(
            last.kind.is_terminal(),
            "trace ends with non-terminal step {:?}",
            last.kind
        );
        Trace { steps: self.steps }
    }
}

impl<K: StepKind, P> Default for TraceBuilder<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    enum Toy {
        Start,
        Work,
        Done,
    }

    impl StepKind for Toy {
        fn is_start(self) -> bool {
            self == Toy::Start
        }
        fn is_terminal(self) -> bool {
            self == Toy::Done
        }
        fn label(self) -> &'static str {
            match self {
                Toy::Start => "start",
                Toy::Work => "work",
                Toy::Done => "done",
            }
        }
    }

    #[test]
    fn test_builder_accepts_well_formed_trace() {
        let mut builder = TraceBuilder::new();
        builder.push(Toy::Start, "begin", 0u32);
        builder.push(Toy::Work, "work once", 1);
        builder.push(Toy::Done, "finished", 2);
        let trace = builder.finish();

        assert_eq!(trace.len(), 3);
        assert_eq!(trace.kinds(), vec![Toy::Start, Toy::Work, Toy::Done]);
        assert_eq!(trace.count(Toy::Work), 1);
        assert_eq!(trace.position(Toy::Done), Some(2));
        assert_eq!(trace.last().payload, 2);
    }

    #[test]
    #[should_panic(expected = "empty trace")]
    fn test_empty_trace_panics() {
        TraceBuilder::<Toy, u32>::new().finish();
    }

    #[test]
    #[should_panic(expected = "empty description")]
    fn test_empty_description_panics() {
        let mut builder = TraceBuilder::new();
        builder.push(Toy::Start, "  ", 0u32);
    }

    #[test]
    #[should_panic(expected = "must open with a start step")]
    fn test_missing_start_panics() {
        let mut builder = TraceBuilder::new();
        builder.push(Toy::Work, "work", 0u32);
    }

    #[test]
    #[should_panic(expected = "after terminal step")]
    fn test_step_after_terminal_panics() {
        let mut builder = TraceBuilder::new();
        builder.push(Toy::Start, "begin", 0u32);
        builder.push(Toy::Done, "finished", 0);
        builder.push(Toy::Work, "too late", 0);
    }

    #[test]
    #[should_panic(expected = "non-terminal")]
    fn test_unterminated_trace_panics() {
        let mut builder = TraceBuilder::new();
        builder.push(Toy::Start, "begin", 0u32);
        builder.finish();
    }
}

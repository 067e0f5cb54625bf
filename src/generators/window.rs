//! Two-pointer / sliding window family
//!
//! Both generators share [`WindowKind`]. Every move of `right` is an
//! `expand` step, every move of `left` is a `contract` step, and a `record`
//! step appears only when the best answer strictly improves, so improving
//! steps are distinguishable from plain pointer moves.
//!
//! - [`LongestUniqueRun`]: longest contiguous run with no repeated symbol.
//!   Aggregate is the set of symbols in the window.
//! - [`ShortestSumWindow`]: shortest contiguous run of positive integers
//!   whose sum reaches a target. Aggregate is the running sum.
//!
//! Each pointer moves at most `n` times and each move yields at most one
//! record, so traces have at most `3n + 2` steps.

use super::{format_symbols, format_values};
use crate::config::{SUM_VALUE_RANGE, SYMBOLS_MAX_LEN, TARGET_RANGE, WINDOW_MAX_LEN};
use crate::input::{Constraints, TypedInput, ValidationError};
use crate::trace::{StepKind, Trace, TraceBuilder, TraceGenerator, TracePayload};
use rustc_hash::FxHashSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowKind {
    Start,
    /// `right` moved one position
    Expand,
    /// `left` moved one position
    Contract,
    /// Best answer improved
    Record,
    Done,
}

impl StepKind for WindowKind {
    fn is_start(self) -> bool {
        self == WindowKind::Start
    }

    fn is_terminal(self) -> bool {
        self == WindowKind::Done
    }

    fn label(self) -> &'static str {
        match self {
            WindowKind::Start => "start",
            WindowKind::Expand => "expand",
            WindowKind::Contract => "contract",
            WindowKind::Record => "record",
            WindowKind::Done => "done",
        }
    }
}

/// Window over a symbol sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniqueRunPayload {
    pub symbols: Vec<char>,
    pub left: usize,
    /// Last index inside the window, `None` before the first expansion
    pub right: Option<usize>,
    /// Window members in order
    pub window: Vec<char>,
    pub best_len: usize,
    /// Inclusive bounds of the best run so far
    pub best_range: Option<(usize, usize)>,
    pub result: Option<usize>,
}

impl TracePayload for UniqueRunPayload {
    type Output = usize;

    fn result(&self) -> Option<&usize> {
        self.result.as_ref()
    }
}

/// Longest run without repeated symbols
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestUniqueRun;

impl TraceGenerator for LongestUniqueRun {
    type Input = Vec<char>;
    type Kind = WindowKind;
    type Payload = UniqueRunPayload;

    fn constraints(&self) -> Constraints {
        Constraints::symbols(SYMBOLS_MAX_LEN).allowing_empty()
    }

    fn accept(&self, typed: TypedInput) -> Vec<char> {
        match typed {
            TypedInput::Symbols(symbols) => symbols,
            other => panic!("longest unique run requires symbols, got {:?}", other),
        }
    }

    fn generate(&self, input: &Vec<char>) -> Trace<WindowKind, UniqueRunPayload> {
        let mut state = UniqueRunPayload {
            symbols: input.clone(),
            left: 0,
            right: None,
            window: Vec::new(),
            best_len: 0,
            best_range: None,
            result: None,
        };
        let mut members: FxHashSet<char> = FxHashSet::default();
        let mut trace = TraceBuilder::new();

        if input.is_empty() {
            trace.push(
                WindowKind::Start,
                "Empty input: there is no window to slide",
                state.clone(),
            );
            state.result = Some(0);
            trace.push(
                WindowKind::Done,
                "The longest run of an empty input has length 0",
                state,
            );
            return trace.finish();
        }

        trace.push(
            WindowKind::Start,
            format!("Slide a window over \"{}\", starting empty", format_symbols(input)),
            state.clone(),
        );

        for (right, &incoming) in input.iter().enumerate() {
            while members.contains(&incoming) {
                let leaving = input[state.left];
                members.remove(&leaving);
                state.window.remove(0);
                state.left += 1;
                trace.push(
                    WindowKind::Contract,
                    format!(
                        "'{}' is already in the window: drop '{}' and move left to {}",
                        incoming, leaving, state.left
                    ),
                    state.clone(),
                );
            }

            members.insert(incoming);
            state.window.push(incoming);
            state.right = Some(right);
            trace.push(
                WindowKind::Expand,
                format!("Move right to {}: add '{}'", right, incoming),
                state.clone(),
            );

            let len = right + 1 - state.left;
            if len > state.best_len {
                state.best_len = len;
                state.best_range = Some((state.left, right));
                trace.push(
                    WindowKind::Record,
                    format!(
                        "New best: \"{}\" has length {}",
                        format_symbols(&state.window),
                        len
                    ),
                    state.clone(),
                );
            }
        }

        state.result = Some(state.best_len);
        let description = match state.best_range {
            Some((from, to)) => format!(
                "Done: the longest run without repeats is \"{}\", length {}",
                format_symbols(&input[from..=to]),
                state.best_len
            ),
            None => "Done: no run found".to_string(),
        };
        trace.push(WindowKind::Done, description, state);

        let trace = trace.finish();
        tracing::debug!(symbols = input.len(), steps = trace.len(), "longest unique run traced");
        trace
    }

    fn oracle(&self, input: &Vec<char>) -> usize {
        let mut best = 0;
        for start in 0..input.len() {
            let mut seen = FxHashSet::default();
            for &symbol in &input[start..] {
                if !seen.insert(symbol) {
                    break;
                }
            }
            best = best.max(seen.len());
        }
        best
    }

    fn step_bound(&self, n: usize) -> usize {
        3 * n + 2
    }
}

/// Window over positive integers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SumWindowPayload {
    pub values: Vec<i64>,
    pub target: i64,
    pub left: usize,
    pub right: Option<usize>,
    pub sum: i64,
    pub best_len: Option<usize>,
    pub best_range: Option<(usize, usize)>,
    /// Shortest length, `0` when no window reaches the target
    pub result: Option<usize>,
}

impl TracePayload for SumWindowPayload {
    type Output = usize;

    fn result(&self) -> Option<&usize> {
        self.result.as_ref()
    }
}

/// Shortest run whose sum is at least `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestSumWindow {
    target: i64,
}

impl ShortestSumWindow {
    /// Targets must be positive; with a non-positive target the empty
    /// window already qualifies and `left` would run past `right`.
    pub fn new(target: i64) -> Result<Self, ValidationError> {
        let (min, max) = TARGET_RANGE;
        if target < min || target > max {
            return Err(ValidationError::OutOfRange {
                value: target,
                min,
                max,
            });
        }
        Ok(ShortestSumWindow { target })
    }

    pub fn target(&self) -> i64 {
        self.target
    }
}

impl TraceGenerator for ShortestSumWindow {
    type Input = Vec<i64>;
    type Kind = WindowKind;
    type Payload = SumWindowPayload;

    fn constraints(&self) -> Constraints {
        Constraints::integers(WINDOW_MAX_LEN, SUM_VALUE_RANGE.0, SUM_VALUE_RANGE.1).allowing_empty()
    }

    fn accept(&self, typed: TypedInput) -> Vec<i64> {
        match typed {
            TypedInput::Integers(values) => values,
            other => panic!("shortest sum window requires integers, got {:?}", other),
        }
    }

    fn generate(&self, input: &Vec<i64>) -> Trace<WindowKind, SumWindowPayload> {
        assert!(
            input.iter().all(|&v| v > 0),
            "shortest sum window requires positive values, got {:?}",
            input
        );

        let target = self.target;
        let mut state = SumWindowPayload {
            values: input.clone(),
            target,
            left: 0,
            right: None,
            sum: 0,
            best_len: None,
            best_range: None,
            result: None,
        };
        let mut trace = TraceBuilder::new();

        if input.is_empty() {
            trace.push(
                WindowKind::Start,
                "Empty input: there is no window to slide",
                state.clone(),
            );
            state.result = Some(0);
            trace.push(
                WindowKind::Done,
                format!("No window can reach {} in an empty input: answer 0", target),
                state,
            );
            return trace.finish();
        }

        trace.push(
            WindowKind::Start,
            format!(
                "Find the shortest window of {} with sum >= {}",
                format_values(input),
                target
            ),
            state.clone(),
        );

        for (right, &value) in input.iter().enumerate() {
            state.sum += value;
            state.right = Some(right);
            trace.push(
                WindowKind::Expand,
                format!("Move right to {}: add {}, sum = {}", right, value, state.sum),
                state.clone(),
            );

            while state.sum >= target {
                let len = right + 1 - state.left;
                if state.best_len.map_or(true, |best| len < best) {
                    state.best_len = Some(len);
                    state.best_range = Some((state.left, right));
                    trace.push(
                        WindowKind::Record,
                        format!(
                            "Sum {} >= {} with {} element(s): new best length {}",
                            state.sum, target, len, len
                        ),
                        state.clone(),
                    );
                }

                let leaving = input[state.left];
                state.sum -= leaving;
                state.left += 1;
                trace.push(
                    WindowKind::Contract,
                    format!(
                        "Drop {} and move left to {}: sum = {}",
                        leaving, state.left, state.sum
                    ),
                    state.clone(),
                );
            }
        }

        state.result = Some(state.best_len.unwrap_or(0));
        let description = match state.best_range {
            Some((from, to)) => format!(
                "Done: the shortest window reaching {} is {}, length {}",
                target,
                format_values(&input[from..=to]),
                to + 1 - from
            ),
            None => format!("Done: no window reaches {}, answer 0", target),
        };
        trace.push(WindowKind::Done, description, state);

        let trace = trace.finish();
        tracing::debug!(
            values = input.len(),
            target,
            steps = trace.len(),
            "shortest sum window traced"
        );
        trace
    }

    fn oracle(&self, input: &Vec<i64>) -> usize {
        let mut best: Option<usize> = None;
        for start in 0..input.len() {
            let mut sum = 0;
            for (offset, &value) in input[start..].iter().enumerate() {
                sum += value;
                if sum >= self.target {
                    let len = offset + 1;
                    best = Some(best.map_or(len, |b| b.min(len)));
                    break;
                }
            }
        }
        best.unwrap_or(0)
    }

    fn step_bound(&self, n: usize) -> usize {
        3 * n + 2
    }
}

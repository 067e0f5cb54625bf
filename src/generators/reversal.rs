//! In-place reversal of a singly linked list
//!
//! Nodes live in an arena (`values[i]`, `links[i]`), so cursors are plain
//! indices and every snapshot is an independent copy.
//!
//! # Step sequence
//!
//! ```text
//! start, initialize, { read-next, mutate, advance(prev), advance(current) } * n, done
//! ```
//!
//! An empty list produces `start, done`. Trace length is `4n + 3` for `n > 0`.

use crate::config::LIST_MAX_LEN;
use crate::input::{Constraints, TypedInput};
use crate::trace::{StepKind, Trace, TraceBuilder, TraceGenerator, TracePayload};
use serde::Serialize;

/// Value range accepted for list nodes
pub const NODE_VALUE_RANGE: (i64, i64) = (-99, 99);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReversalKind {
    Start,
    Initialize,
    /// `next` saved before the link it came from is overwritten
    ReadNext,
    /// One link rewritten to point backwards
    Mutate,
    /// One cursor moved
    Advance,
    Done,
}

impl StepKind for ReversalKind {
    fn is_start(self) -> bool {
        self == ReversalKind::Start
    }

    fn is_terminal(self) -> bool {
        self == ReversalKind::Done
    }

    fn label(self) -> &'static str {
        match self {
            ReversalKind::Start => "start",
            ReversalKind::Initialize => "initialize",
            ReversalKind::ReadNext => "read-next",
            ReversalKind::Mutate => "mutate",
            ReversalKind::Advance => "advance",
            ReversalKind::Done => "done",
        }
    }
}

/// Full list state after one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReversalPayload {
    pub values: Vec<i64>,
    /// `links[i]` is the node that node `i` points to
    pub links: Vec<Option<usize>>,
    pub head: Option<usize>,
    pub prev: Option<usize>,
    pub current: Option<usize>,
    pub next: Option<usize>,
    /// Traversal order from the new head, terminal step only
    pub result: Option<Vec<i64>>,
}

impl ReversalPayload {
    /// Values reached by following links from `head`
    pub fn traversal(&self) -> Vec<i64> {
        let mut order = Vec::with_capacity(self.values.len());
        let mut cursor = self.head;
        while let Some(index) = cursor {
            // Only reachable if a generator left a cycle in the links.
            if order.len() == self.values.len() {
                panic!("link cycle detected while traversing from {:?}", self.head);
            }
            order.push(self.values[index]);
            cursor = self.links[index];
        }
        order
    }

    /// `3 → 2 → 1 → none`
    pub fn describe_order(&self) -> String {
        let mut parts: Vec<String> = self.traversal().iter().map(|v| v.to_string()).collect();
        parts.push("none".to_string());
        parts.join(" → ")
    }

    fn node(&self, cursor: Option<usize>) -> String {
        match cursor {
            Some(index) => format!("node {}", self.values[index]),
            None => "none".to_string(),
        }
    }
}

impl TracePayload for ReversalPayload {
    type Output = Vec<i64>;

    fn result(&self) -> Option<&Vec<i64>> {
        self.result.as_ref()
    }
}

/// Pointer-rewrite generator for linked list reversal
#[derive(Debug, Clone, Copy, Default)]
pub struct ListReversal;

impl TraceGenerator for ListReversal {
    type Input = Vec<i64>;
    type Kind = ReversalKind;
    type Payload = ReversalPayload;

    fn constraints(&self) -> Constraints {
        Constraints::integers(LIST_MAX_LEN, NODE_VALUE_RANGE.0, NODE_VALUE_RANGE.1).allowing_empty()
    }

    fn accept(&self, typed: TypedInput) -> Vec<i64> {
        match typed {
            TypedInput::Integers(values) => values,
            other => panic!("list reversal requires integers, got {:?}", other),
        }
    }

    fn generate(&self, input: &Vec<i64>) -> Trace<ReversalKind, ReversalPayload> {
        let n = input.len();
        let mut state = ReversalPayload {
            values: input.clone(),
            links: (0..n).map(|i| if i + 1 < n { Some(i + 1) } else { None }).collect(),
            head: if n > 0 { Some(0) } else { None },
            prev: None,
            current: None,
            next: None,
            result: None,
        };
        let mut trace = TraceBuilder::new();

        if n == 0 {
            trace.push(ReversalKind::Start, "The list is empty: head is none", state.clone());
            state.result = Some(Vec::new());
            trace.push(
                ReversalKind::Done,
                "Nothing to reverse: an empty list is its own reversal",
                state,
            );
            return trace.finish();
        }

        trace.push(
            ReversalKind::Start,
            format!("Reverse the list {}", state.describe_order()),
            state.clone(),
        );

        state.current = state.head;
        trace.push(
            ReversalKind::Initialize,
            format!("Initialize prev = none, current = {}", state.node(state.current)),
            state.clone(),
        );

        while let Some(current) = state.current {
            state.next = state.links[current];
            trace.push(
                ReversalKind::ReadNext,
                format!(
                    "Save next = {} before overwriting the link of node {}",
                    state.node(state.next),
                    state.values[current]
                ),
                state.clone(),
            );

            state.links[current] = state.prev;
            trace.push(
                ReversalKind::Mutate,
                format!(
                    "Point node {} back at {}",
                    state.values[current],
                    state.node(state.prev)
                ),
                state.clone(),
            );

            state.prev = Some(current);
            trace.push(
                ReversalKind::Advance,
                format!("Move prev to {}", state.node(state.prev)),
                state.clone(),
            );

            state.current = state.next;
            trace.push(
                ReversalKind::Advance,
                format!("Move current to {}", state.node(state.current)),
                state.clone(),
            );
        }

        state.head = state.prev;
        state.next = None;
        state.result = Some(state.traversal());
        let description = format!(
            "current is none, so prev ({}) is the new head: {}",
            state.node(state.head),
            state.describe_order()
        );
        trace.push(ReversalKind::Done, description, state);

        let trace = trace.finish();
        tracing::debug!(nodes = n, steps = trace.len(), "list reversal traced");
        trace
    }

    fn oracle(&self, input: &Vec<i64>) -> Vec<i64> {
        input.iter().rev().copied().collect()
    }

    fn step_bound(&self, n: usize) -> usize {
        if n == 0 {
            2
        } else {
            4 * n + 3
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_node_kind_sequence() {
        let trace = ListReversal.generate(&vec![1, 2, 3]);
        let labels: Vec<&str> = trace.iter().map(|s| s.kind.label()).collect();

        assert_eq!(labels[0], "start");
        assert_eq!(labels[1], "initialize");
        assert_eq!(
            &labels[2..6],
            &["read-next", "mutate", "advance", "advance"]
        );
        assert_eq!(*labels.last().unwrap(), "done");
        assert_eq!(trace.len(), ListReversal.step_bound(3));
    }

    #[test]
    fn test_snapshots_are_independent() {
        let trace = ListReversal.generate(&vec![1, 2]);
        // After the first mutate node 0 points at none; the start snapshot
        // must still show the original forward link.
        assert_eq!(trace.first().payload.links, vec![Some(1), None]);
        let first_mutate = trace.position(ReversalKind::Mutate).unwrap();
        assert_eq!(trace.get(first_mutate).unwrap().payload.links, vec![None, None]);
        assert_eq!(trace.last().payload.links, vec![None, Some(0)]);
    }

    #[test]
    fn test_single_node_still_rewrites_once() {
        let trace = ListReversal.generate(&vec![7]);
        assert_eq!(trace.count(ReversalKind::Mutate), 1);
        assert_eq!(trace.result(), &vec![7]);
        assert!(trace.last().description.contains("7 → none"));
    }

    #[test]
    #[should_panic(expected = "requires integers")]
    fn test_wrong_input_shape_is_fatal() {
        ListReversal.accept(TypedInput::Symbols(vec!['a']));
    }
}

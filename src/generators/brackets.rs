//! Balanced bracket validation with an explicit stack
//!
//! # Step sequence
//!
//! ```text
//! start, { push | pop } * k, ( mismatch | done )
//! ```
//!
//! The scan stops at the first mismatch, which is itself terminal: no step
//! after it touches the stack. A closer arriving on an empty stack is a
//! mismatch, never vacuously valid. Trace length is at most `n + 2`.
//!
//! Final validity is `!mismatch && stack.is_empty()`; both conjuncts are
//! visible on the terminal payload.

use crate::config::BRACKETS_MAX_LEN;
use crate::input::{Constraints, TypedInput};
use crate::trace::{StepKind, Trace, TraceBuilder, TraceGenerator, TracePayload};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BracketKind {
    Start,
    Push,
    Pop,
    Mismatch,
    Done,
}

impl StepKind for BracketKind {
    fn is_start(self) -> bool {
        self == BracketKind::Start
    }

    fn is_terminal(self) -> bool {
        matches!(self, BracketKind::Mismatch | BracketKind::Done)
    }

    fn label(self) -> &'static str {
        match self {
            BracketKind::Start => "start",
            BracketKind::Push => "push",
            BracketKind::Pop => "pop",
            BracketKind::Mismatch => "mismatch",
            BracketKind::Done => "done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketPayload {
    pub input: Vec<char>,
    /// Index of the symbol just processed
    pub position: Option<usize>,
    /// Bottom first
    pub stack: Vec<char>,
    pub mismatch: bool,
    pub result: Option<bool>,
}

impl TracePayload for BracketPayload {
    type Output = bool;

    fn result(&self) -> Option<&bool> {
        self.result.as_ref()
    }
}

/// Opening bracket for a closer, `None` for openers
fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

fn is_opener(symbol: char) -> bool {
    matches!(symbol, '(' | '[' | '{')
}

/// Stack-matching generator for `()[]{}` strings
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketMatching;

impl TraceGenerator for BracketMatching {
    type Input = Vec<char>;
    type Kind = BracketKind;
    type Payload = BracketPayload;

    fn constraints(&self) -> Constraints {
        Constraints::brackets(BRACKETS_MAX_LEN).allowing_empty()
    }

    fn accept(&self, typed: TypedInput) -> Vec<char> {
        match typed {
            TypedInput::Symbols(symbols) => symbols,
            other => panic!("bracket matching requires symbols, got {:?}", other),
        }
    }

    fn generate(&self, input: &Vec<char>) -> Trace<BracketKind, BracketPayload> {
        let mut state = BracketPayload {
            input: input.clone(),
            position: None,
            stack: Vec::new(),
            mismatch: false,
            result: None,
        };
        let mut trace = TraceBuilder::new();

        if input.is_empty() {
            trace.push(BracketKind::Start, "Empty input: nothing to scan", state.clone());
            state.result = Some(true);
            trace.push(
                BracketKind::Done,
                "No brackets at all, so the input is balanced",
                state,
            );
            return trace.finish();
        }

        let text: String = input.iter().collect();
        trace.push(
            BracketKind::Start,
            format!("Scan \"{}\" left to right with an empty stack", text),
            state.clone(),
        );

        for (index, &symbol) in input.iter().enumerate() {
            state.position = Some(index);

            if is_opener(symbol) {
                state.stack.push(symbol);
                trace.push(
                    BracketKind::Push,
                    format!("'{}' at index {} opens a group: push it", symbol, index),
                    state.clone(),
                );
                continue;
            }

            let expected = opener_for(symbol)
                .unwrap_or_else(|| panic!("'{}' at index {} is not a bracket", symbol, index));

            match state.stack.last().copied() {
                Some(top) if top == expected => {
                    state.stack.pop();
                    trace.push(
                        BracketKind::Pop,
                        format!("'{}' at index {} closes '{}': pop it", symbol, index, top),
                        state.clone(),
                    );
                }
                top => {
                    let description = match top {
                        Some(top) => format!(
                            "'{}' at index {} does not match the top of the stack '{}': not balanced",
                            symbol, index, top
                        ),
                        None => format!(
                            "'{}' at index {} has nothing to close: the stack is empty, not balanced",
                            symbol, index
                        ),
                    };
                    state.mismatch = true;
                    state.result = Some(false);
                    trace.push(BracketKind::Mismatch, description, state);
                    return trace.finish();
                }
            }
        }

        let balanced = state.stack.is_empty();
        state.position = None;
        state.result = Some(balanced);
        let description = if balanced {
            "Input exhausted with an empty stack: balanced".to_string()
        } else {
            format!(
                "Input exhausted with {} unclosed opener(s) on the stack: not balanced",
                state.stack.len()
            )
        };
        trace.push(BracketKind::Done, description, state);

        let trace = trace.finish();
        tracing::debug!(symbols = input.len(), steps = trace.len(), "bracket matching traced");
        trace
    }

    fn oracle(&self, input: &Vec<char>) -> bool {
        let mut stack = Vec::new();
        for &symbol in input {
            if is_opener(symbol) {
                stack.push(symbol);
            } else if stack.pop() != opener_for(symbol) {
                return false;
            }
        }
        stack.is_empty()
    }

    fn step_bound(&self, n: usize) -> usize {
        n + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_closer_on_empty_stack_is_mismatch() {
        let trace = BracketMatching.generate(&symbols(")("));
        assert_eq!(trace.kinds(), vec![BracketKind::Start, BracketKind::Mismatch]);
        assert!(trace.last().description.contains("stack is empty"));
        assert!(!trace.result());
    }

    #[test]
    fn test_unclosed_opener_fails_at_done() {
        let trace = BracketMatching.generate(&symbols("(()"));
        let last = trace.last();
        assert_eq!(last.kind, BracketKind::Done);
        assert!(!last.payload.mismatch);
        assert_eq!(last.payload.stack, vec!['(']);
        assert_eq!(last.payload.result, Some(false));
    }

    #[test]
    fn test_empty_input_is_balanced() {
        let trace = BracketMatching.generate(&Vec::new());
        assert_eq!(trace.len(), 2);
        assert!(trace.result());
    }

    #[test]
    fn test_oracle_basics() {
        assert!(BracketMatching.oracle(&symbols("{[()]}")));
        assert!(!BracketMatching.oracle(&symbols("(]")));
        assert!(!BracketMatching.oracle(&symbols("]")));
        assert!(!BracketMatching.oracle(&symbols("((")));
    }
}

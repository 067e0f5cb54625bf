//! Input adapter
//!
//! Turns raw learner text into a typed value every generator can consume
//! without further checks. Parsing is forgiving about layout:
//!
//! ```text
//! "1, 2, 3"   "[1 2 3]"   "{1, 2, 3}"   "1 -> 2 -> 3"   "1;2;3"
//! ```
//!
//! all read as the same list. Tokens that do not parse as the element type
//! are dropped silently; only three conditions are errors:
//! - nothing valid remains ([`ValidationError::Empty`])
//! - too many elements ([`ValidationError::TooManyElements`])
//! - a number outside the allowed range ([`ValidationError::OutOfRange`])
//!
//! Blank input is accepted as an empty value only when the constraints
//! allow it. Input consisting solely of dropped tokens is always `Empty`.

pub mod errors;

pub use errors::ValidationError;

use std::num::IntErrorKind;

/// Element type a visualizer operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Signed integers, separated by whitespace, commas, semicolons or arrows
    Integer,
    /// One of `()[]{}`; every other character is dropped
    Bracket,
    /// ASCII letters and digits, one element per character
    Symbol,
}

impl ElementKind {
    fn describe(self) -> &'static str {
        match self {
            ElementKind::Integer => "integers",
            ElementKind::Bracket => "brackets",
            ElementKind::Symbol => "letters or digits",
        }
    }
}

/// Per-visualizer input limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    pub max_len: usize,
    pub element: ElementKind,
    /// Inclusive value range, integers only
    pub range: Option<(i64, i64)>,
    pub allow_empty: bool,
}

impl Constraints {
    pub fn integers(max_len: usize, min: i64, max: i64) -> Self {
        Constraints {
            max_len,
            element: ElementKind::Integer,
            range: Some((min, max)),
            allow_empty: false,
        }
    }

    pub fn brackets(max_len: usize) -> Self {
        Constraints {
            max_len,
            element: ElementKind::Bracket,
            range: None,
            allow_empty: false,
        }
    }

    pub fn symbols(max_len: usize) -> Self {
        Constraints {
            max_len,
            element: ElementKind::Symbol,
            range: None,
            allow_empty: false,
        }
    }

    /// Accept blank input as an empty collection
    pub fn allowing_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }
}

/// Adapter output, shaped by [`ElementKind`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedInput {
    Integers(Vec<i64>),
    Symbols(Vec<char>),
}

impl TypedInput {
    pub fn len(&self) -> usize {
        match self {
            TypedInput::Integers(values) => values.len(),
            TypedInput::Symbols(symbols) => symbols.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse and validate `raw` against `constraints`. Pure.
pub fn parse(raw: &str, constraints: &Constraints) -> Result<TypedInput, ValidationError> {
    let (typed, tokens_seen) = match constraints.element {
        ElementKind::Integer => {
            let (values, seen) = parse_integers(raw, constraints.range)?;
            (TypedInput::Integers(values), seen)
        }
        ElementKind::Bracket | ElementKind::Symbol => {
            let (symbols, seen) = parse_symbols(raw, constraints.element);
            (TypedInput::Symbols(symbols), seen)
        }
    };

    if typed.is_empty() && !(tokens_seen == 0 && constraints.allow_empty) {
        return Err(ValidationError::Empty {
            expected: constraints.element.describe(),
        });
    }
    if typed.len() > constraints.max_len {
        return Err(ValidationError::TooManyElements {
            count: typed.len(),
            max: constraints.max_len,
        });
    }

    tracing::debug!(elements = typed.len(), tokens_seen, "input accepted");
    Ok(typed)
}

fn is_list_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | '[' | ']' | '(' | ')' | '{' | '}' | '→')
}

/// Returns the valid values and the number of non-empty tokens examined.
fn parse_integers(
    raw: &str,
    range: Option<(i64, i64)>,
) -> Result<(Vec<i64>, usize), ValidationError> {
    let mut values = Vec::new();
    let mut seen = 0;

    let tokens = raw
        .split(is_list_separator)
        .flat_map(|chunk| chunk.split("->"))
        .filter(|token| !token.is_empty());

    for token in tokens {
        seen += 1;
        let (value, overflowed) = match token.parse::<i64>() {
            Ok(value) => (value, false),
            Err(e) => match e.kind() {
                // A numeral too large for i64 is still a number: report it
                IntErrorKind::PosOverflow => (i64::MAX, true),
                IntErrorKind::NegOverflow => (i64::MIN, true),
                _ => {
                    tracing::trace!(token, "dropping malformed integer token");
                    continue;
                }
            },
        };
        let (min, max) = range.unwrap_or((i64::MIN, i64::MAX));
        if overflowed || value < min || value > max {
            return Err(ValidationError::OutOfRange { value, min, max });
        }
        values.push(value);
    }

    Ok((values, seen))
}

fn parse_symbols(raw: &str, element: ElementKind) -> (Vec<char>, usize) {
    let mut symbols = Vec::new();
    let mut seen = 0;

    for c in raw.chars() {
        if c.is_whitespace() || matches!(c, ',' | '"' | '\'') {
            continue;
        }
        seen += 1;
        let keep = match element {
            ElementKind::Bracket => matches!(c, '(' | ')' | '[' | ']' | '{' | '}'),
            _ => c.is_ascii_alphanumeric(),
        };
        if keep {
            symbols.push(c);
        } else {
            tracing::trace!(symbol = %c, "dropping symbol outside the alphabet");
        }
    }

    (symbols, seen)
}

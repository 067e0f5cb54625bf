//! Trace generators, one module per algorithm family
//!
//! - [`reversal`]: pointer-rewrite family (in-place linked list reversal)
//! - [`brackets`]: matching/stack family (balanced bracket validation)
//! - [`window`]: two-pointer/window family (longest run without repeats,
//!   shortest sub-array reaching a target sum)
//!
//! Each generator keeps a working state value, mutates it one primitive action
//! at a time, and pushes an owned clone of it after every action. No payload
//! ever aliases the working state, so scrubbing a trace can never observe a
//! later mutation.

pub mod brackets;
pub mod reversal;
pub mod window;

pub use brackets::BracketMatching;
pub use reversal::ListReversal;
pub use window::{LongestUniqueRun, ShortestSumWindow};

/// `[2, 3, 1]`
pub(crate) fn format_values(values: &[i64]) -> String {
    let inner: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", inner.join(", "))
}

/// `abc`
pub(crate) fn format_symbols(symbols: &[char]) -> String {
    symbols.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting_helpers() {
        assert_eq!(format_values(&[]), "[]");
        assert_eq!(format_values(&[2, -3]), "[2, -3]");
        assert_eq!(format_symbols(&['(', ']']), "(]");
    }
}

// Raw text through the adapter and into each generator

use stepwise::catalog::{build_trace, Visualizer};
use stepwise::config::{BRACKETS_MAX_LEN, LIST_MAX_LEN};
use stepwise::generators::{BracketMatching, ListReversal, LongestUniqueRun, ShortestSumWindow};
use stepwise::input::{self, Constraints, TypedInput, ValidationError};
use stepwise::trace::TraceGenerator;

#[test]
fn test_list_separators_are_interchangeable() {
    let constraints = ListReversal.constraints();
    let expected = TypedInput::Integers(vec![1, 2, 3]);
    for raw in [
        "1 2 3",
        "1,2,3",
        "[1, 2, 3]",
        "{1, 2, 3}",
        "1 -> 2 -> 3",
        "1 → 2 → 3",
        "(1; 2; 3)",
    ] {
        assert_eq!(input::parse(raw, &constraints).unwrap(), expected, "{:?}", raw);
    }
}

#[test]
fn test_malformed_tokens_are_dropped() {
    let trace = build_trace(&ListReversal, "4, x, 5, 6.5, 6").unwrap();
    assert_eq!(trace.first().payload.values, vec![4, 5, 6]);
}

#[test]
fn test_only_malformed_tokens_is_empty() {
    let err = build_trace(&ListReversal, "a b c").unwrap_err();
    assert!(matches!(err, ValidationError::Empty { .. }));
    assert!(err.to_string().starts_with("empty after filtering"));
}

#[test]
fn test_list_length_limit() {
    let raw: Vec<String> = (1..=LIST_MAX_LEN as i64 + 1).map(|v| v.to_string()).collect();
    let err = build_trace(&ListReversal, &raw.join(" ")).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TooManyElements {
            count: LIST_MAX_LEN + 1,
            max: LIST_MAX_LEN
        }
    );
}

#[test]
fn test_brackets_ignore_other_symbols() {
    let trace = build_trace(&BracketMatching, "( a ) [ 1 ]").unwrap();
    assert_eq!(trace.first().payload.input, vec!['(', ')', '[', ']']);
    assert!(*trace.result());
}

#[test]
fn test_bracket_length_limit() {
    let raw = "()".repeat(BRACKETS_MAX_LEN / 2 + 1);
    assert!(matches!(
        build_trace(&BracketMatching, &raw),
        Err(ValidationError::TooManyElements { .. })
    ));
}

#[test]
fn test_symbols_skip_quotes_and_commas() {
    let trace = build_trace(&LongestUniqueRun, "\"a\", 'b', c").unwrap();
    assert_eq!(trace.first().payload.symbols, vec!['a', 'b', 'c']);
    assert_eq!(*trace.result(), 3);
}

#[test]
fn test_out_of_range_is_an_error() {
    let generator = ShortestSumWindow::new(7).unwrap();
    assert!(matches!(
        build_trace(&generator, "3 100"),
        Err(ValidationError::OutOfRange { value: 100, .. })
    ));
    assert!(matches!(
        build_trace(&ListReversal, "1 -500"),
        Err(ValidationError::OutOfRange { value: -500, .. })
    ));
}

#[test]
fn test_numeral_too_large_for_i64_is_out_of_range() {
    assert!(matches!(
        build_trace(&ListReversal, "1 99999999999999999999 3"),
        Err(ValidationError::OutOfRange { value: i64::MAX, min: -99, max: 99 })
    ));
    assert!(matches!(
        build_trace(&ListReversal, "1 -99999999999999999999"),
        Err(ValidationError::OutOfRange { value: i64::MIN, .. })
    ));

    // Unbounded integer constraints still refuse to drop the numeral
    let unbounded = Constraints {
        range: None,
        ..Constraints::integers(4, 0, 9)
    };
    assert!(matches!(
        input::parse("5 123456789012345678901234", &unbounded),
        Err(ValidationError::OutOfRange { value: i64::MAX, .. })
    ));
}

#[test]
fn test_blank_input_needs_allow_empty() {
    let strict = Constraints::integers(4, 0, 9);
    assert!(input::parse("  ", &strict).is_err());
    assert_eq!(
        input::parse("  ", &strict.allowing_empty()).unwrap(),
        TypedInput::Integers(vec![])
    );
}

#[test]
fn test_unknown_visualizer_message() {
    let err = Visualizer::from_slug("quick-sort").unwrap_err();
    assert_eq!(err.to_string(), "unknown visualizer 'quick-sort'");
}

// Concrete walkthroughs of each visualizer

use stepwise::catalog::build_trace;
use stepwise::generators::brackets::BracketKind;
use stepwise::generators::reversal::ReversalKind;
use stepwise::generators::window::WindowKind;
use stepwise::generators::{BracketMatching, ListReversal, LongestUniqueRun, ShortestSumWindow};
use stepwise::trace::{StepKind, TraceGenerator};

fn symbols(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[test]
fn test_reverse_five_nodes() {
    let trace = ListReversal.generate(&vec![1, 2, 3, 4, 5]);

    let last = trace.last();
    assert_eq!(last.kind, ReversalKind::Done);
    assert_eq!(last.payload.result, Some(vec![5, 4, 3, 2, 1]));
    assert_eq!(last.payload.describe_order(), "5 → 4 → 3 → 2 → 1 → none");
    assert!(last.description.contains("5 → 4 → 3 → 2 → 1 → none"));

    // One link rewrite per node
    assert_eq!(trace.count(ReversalKind::Mutate), 5);
    assert_eq!(trace.count(ReversalKind::ReadNext), 5);
    assert_eq!(trace.count(ReversalKind::Advance), 10);
    assert_eq!(trace.len(), 4 * 5 + 3);
}

#[test]
fn test_reverse_empty_list() {
    let trace = ListReversal.generate(&Vec::new());

    assert!(trace.len() >= 1);
    assert!(trace.first().kind.is_start());
    assert_eq!(trace.last().kind, ReversalKind::Done);
    assert!(trace.last().description.contains("Nothing to reverse"));
    assert_eq!(trace.count(ReversalKind::Mutate), 0);
    assert_eq!(trace.result(), &Vec::<i64>::new());
}

#[test]
fn test_reverse_empty_list_through_adapter() {
    let trace = build_trace(&ListReversal, "   ").expect("blank list is allowed");
    assert_eq!(trace.len(), 2);
}

#[test]
fn test_brackets_crossed_pairs() {
    let trace = BracketMatching.generate(&symbols("([)]"));

    let mismatch_at = trace
        .position(BracketKind::Mismatch)
        .expect("a mismatch step");
    let mismatch = trace.get(mismatch_at).unwrap();
    assert_eq!(mismatch.payload.position, Some(2));
    assert_eq!(mismatch.payload.stack, vec!['(', '[']);
    assert!(mismatch.description.contains("'['"));

    // Nothing touches the stack after the mismatch
    assert_eq!(mismatch_at, trace.last_index());
    assert_eq!(trace.count(BracketKind::Pop), 0);
    assert!(!*trace.result());
}

#[test]
fn test_brackets_three_pairs() {
    let trace = BracketMatching.generate(&symbols("()[]{}"));

    let push_pop = trace
        .iter()
        .filter(|s| matches!(s.kind, BracketKind::Push | BracketKind::Pop))
        .count();
    assert_eq!(push_pop, 6);
    assert_eq!(trace.count(BracketKind::Mismatch), 0);
    assert_eq!(trace.last().kind, BracketKind::Done);
    assert!(*trace.result());
}

#[test]
fn test_brackets_validity_conjuncts_visible() {
    let unclosed = BracketMatching.generate(&symbols("[("));
    let last = &unclosed.last().payload;
    assert!(!last.mismatch);
    assert!(!last.stack.is_empty());
    assert_eq!(last.result, Some(false));

    let crossed = BracketMatching.generate(&symbols("(]"));
    let last = &crossed.last().payload;
    assert!(last.mismatch);
    assert_eq!(last.result, Some(false));
}

#[test]
fn test_unique_run_pwwkew() {
    let trace = LongestUniqueRun.generate(&symbols("pwwkew"));

    assert_eq!(*trace.result(), 3);
    // Each record strictly improves on the previous best
    let bests: Vec<usize> = trace
        .iter()
        .filter(|s| s.kind == WindowKind::Record)
        .map(|s| s.payload.best_len)
        .collect();
    assert_eq!(bests, vec![1, 2, 3]);
}

#[test]
fn test_unique_run_moves_are_single_pointer() {
    let trace = LongestUniqueRun.generate(&symbols("abba"));
    for pair in trace.steps().windows(2) {
        let (before, after) = (&pair[0].payload, &pair[1].payload);
        match pair[1].kind {
            WindowKind::Expand => {
                assert_eq!(before.left, after.left);
                assert_eq!(after.right, Some(before.right.map_or(0, |r| r + 1)));
            }
            WindowKind::Contract => {
                assert_eq!(after.left, before.left + 1);
                assert_eq!(before.right, after.right);
            }
            WindowKind::Record => {
                assert_eq!((before.left, before.right), (after.left, after.right));
                assert!(after.best_len > before.best_len);
            }
            _ => {}
        }
    }
}

#[test]
fn test_shortest_sum_through_adapter() {
    let generator = ShortestSumWindow::new(11).unwrap();
    let trace = build_trace(&generator, "1, 2, 3, 4, 5").unwrap();

    assert_eq!(*trace.result(), 3);
    assert_eq!(trace.last().payload.best_range, Some((2, 4)));
    assert!(trace.len() <= generator.step_bound(5));
}

#[test]
fn test_shortest_sum_rejects_zero_values() {
    let generator = ShortestSumWindow::new(7).unwrap();
    assert!(build_trace(&generator, "1 0 3").is_err());
}

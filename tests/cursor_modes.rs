//! Traversal mode tests: cycle, bounce and once over ranges and lists

use range_iter::{CursorConfig, Mode, Value};
use test_case::test_case;

mod common;
use common::*;

#[test]
fn test_range_cycle_wraps_once_per_traversal() {
    let config = CursorConfig::range(0, 10, 1, Mode::Cycle);
    let outputs = run_fresh(&config, 12);

    let mut expected = ints(&(0..=10).collect::<Vec<i64>>());
    expected.push(Value::Int(0));
    assert_eq!(currents(&outputs), expected);

    // Completion fires exactly once, on the 11th call (10 -> 0)
    let first_eleven = &completions(&outputs)[..11];
    assert_eq!(first_eleven.iter().filter(|&&c| c).count(), 1);
    assert!(outputs[10].cycle_completed);
    assert_eq!(outputs[10].next, Value::Int(0));
}

#[test]
fn test_bounce_completes_only_on_low_rebound() {
    let config = CursorConfig::range(0, 5, 2, Mode::Bounce);
    let outputs = run_fresh(&config, 6);

    assert_eq!(currents(&outputs), ints(&[0, 2, 4, 4, 2, 0]));
    assert_eq!(nexts(&outputs), ints(&[2, 4, 4, 2, 0, 2]));
    assert_eq!(
        completions(&outputs),
        vec![false, false, false, false, false, true]
    );
}

#[test]
fn test_once_holds_at_end_forever() {
    let config = CursorConfig::range(0, 3, 1, Mode::Once);
    let outputs = run_fresh(&config, 10);

    assert_eq!(currents(&outputs)[..4], ints(&[0, 1, 2, 3])[..]);
    for out in &outputs[3..] {
        assert_eq!(out.current, Value::Int(3));
        assert_eq!(out.next, Value::Int(3));
        assert!(out.cycle_completed);
    }
    assert!(!outputs[2].cycle_completed);
}

#[test]
fn test_custom_values_override_end() {
    let config = CursorConfig::range(0, 10, 1, Mode::Cycle).with_custom_values("1,2,3");
    let outputs = run_fresh(&config, 4);

    assert_eq!(currents(&outputs), ints(&[1, 2, 3, 1]));
    assert_eq!(completions(&outputs), vec![false, false, true, false]);
}

#[test_case(Mode::Cycle, 2, 6, 3, &[2, 5, 2, 5] ; "cycle range jumps to start")]
#[test_case(Mode::Bounce, 0, 3, 1, &[0, 1, 2, 3, 2, 1, 0, 1] ; "bounce unit step")]
#[test_case(Mode::Bounce, 1, 4, 2, &[1, 3, 3, 1, 3] ; "bounce offset range")]
#[test_case(Mode::Once, 0, 5, 2, &[0, 2, 4, 5, 5] ; "once clamps overshoot")]
#[test_case(Mode::Cycle, 4, 4, 1, &[4, 4, 4] ; "single value range")]
#[test_case(Mode::Bounce, 8, 2, 1, &[8, 8, 8] ; "inverted range collapses to start")]
fn test_range_sequences(mode: Mode, start: i64, end: i64, step: i64, expected: &[i64]) {
    let config = CursorConfig::range(start, end, step, mode);
    let outputs = run_fresh(&config, expected.len());
    assert_eq!(currents(&outputs), ints(expected));
}

#[test_case(Mode::Cycle, 2, &[10, 30, 20, 10, 30] ; "cycle wraps modulo length")]
#[test_case(Mode::Bounce, 1, &[10, 20, 30, 20, 10, 20] ; "bounce over list")]
#[test_case(Mode::Once, 1, &[10, 20, 30, 30] ; "once stops at last element")]
fn test_list_sequences(mode: Mode, step: i64, expected: &[i64]) {
    let config = CursorConfig::new()
        .with_mode(mode)
        .with_step(step)
        .with_value_list(ints(&[10, 20, 30]));
    let outputs = run_fresh(&config, expected.len());
    assert_eq!(currents(&outputs), ints(expected));
}

#[test]
fn test_fractional_custom_values_keep_precision() {
    let config = CursorConfig::new().with_custom_values("1, 1.4, 1.9, 2");
    let outputs = run_fresh(&config, 4);
    assert_eq!(
        currents(&outputs),
        vec![Value::Int(1), Value::Float(1.4), Value::Float(1.9), Value::Int(2)]
    );
}

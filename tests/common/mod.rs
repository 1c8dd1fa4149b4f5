#![allow(dead_code)]

use range_iter::{Advance, CursorConfig, IterationCursor, Value};

/// Advance a fresh cursor `n` times under one configuration.
pub fn run_fresh(config: &CursorConfig, n: usize) -> Vec<Advance> {
    let mut cursor = IterationCursor::new();
    run(&mut cursor, config, n)
}

/// Advance an existing cursor `n` times.
pub fn run(cursor: &mut IterationCursor, config: &CursorConfig, n: usize) -> Vec<Advance> {
    (0..n).map(|_| cursor.advance(config)).collect()
}

pub fn currents(outputs: &[Advance]) -> Vec<Value> {
    outputs.iter().map(|out| out.current).collect()
}

pub fn nexts(outputs: &[Advance]) -> Vec<Value> {
    outputs.iter().map(|out| out.next).collect()
}

pub fn completions(outputs: &[Advance]) -> Vec<bool> {
    outputs.iter().map(|out| out.cycle_completed).collect()
}

pub fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

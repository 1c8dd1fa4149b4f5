//! Iteration cursor
//!
//! Per call:
//! - detect configuration changes against the stored snapshot
//! - resolve the active source (custom text, supplied list or range)
//! - reset the index to `start` when uninitialized or when anything changed
//! - read `current`, step the index, read `next`, commit

mod config;
mod snapshot;
mod transition;

pub use config::{CursorConfig, Mode, Value, END_LIMITS, START_LIMITS, STEP_LIMITS};
pub use snapshot::{ConfigChange, ConfigSnapshot};
pub use transition::{advance_index, Direction, Domain, Transition};

use crate::source::ActiveSource;

/// Output of one invocation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Advance {
    /// Value at the index held before this step
    pub current: Value,

    /// Value at the index after this step
    pub next: Value,

    /// Whether this step finished a traversal
    pub cycle_completed: bool,
}

impl Advance {
    /// `(current, next, cycle_completed)`
    pub fn into_tuple(self) -> (Value, Value, bool) {
        (self.current, self.next, self.cycle_completed)
    }
}

impl From<Advance> for (Value, Value, bool) {
    fn from(advance: Advance) -> Self {
        advance.into_tuple()
    }
}

/// State carried between invocations of one cursor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CursorState {
    current_index: Option<i64>,
    direction: Direction,
    cycle_completed: bool,
    snapshot: ConfigSnapshot,
}

impl CursorState {
    /// Uninitialized state
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the next call will read as `current` (`None` until first call)
    pub fn current_index(&self) -> Option<i64> {
        self.current_index
    }

    /// Bounce direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Completion flag from the last call
    pub fn cycle_completed(&self) -> bool {
        self.cycle_completed
    }

    /// Configuration seen on the last call
    pub fn snapshot(&self) -> &ConfigSnapshot {
        &self.snapshot
    }

    fn reset(&mut self, start: i64) {
        self.current_index = Some(start);
        self.direction = Direction::Forward;
        self.cycle_completed = false;
    }

    /// Advance by exactly one step under `config`, mutating in place.
    pub fn advance(&mut self, config: &CursorConfig) -> Advance {
        let mut should_reset = config.reset_requested();
        if should_reset {
            tracing::info!("reset requested");
        }
        for change in self.snapshot.observe(config) {
            tracing::info!(%change, "configuration changed, resetting counter");
            should_reset = true;
        }

        let source = ActiveSource::resolve(config);
        let domain = source.domain(config);

        let index = match self.current_index {
            Some(index) if !should_reset => index,
            _ => {
                tracing::info!(start = config.start(), "counter reset");
                self.reset(config.start());
                config.start()
            }
        };
        // Guards a start past the end of a list, and a dropped list that
        // leaves a list position behind in range mode
        let index = domain.clamp(index);

        let transition = advance_index(config.mode(), domain, index, config.step(), self.direction);
        self.current_index = Some(transition.index);
        self.direction = transition.direction;
        self.cycle_completed = transition.cycle_completed;

        let advance = Advance {
            current: source.value_at(index),
            next: source.value_at(transition.index),
            cycle_completed: transition.cycle_completed,
        };
        tracing::info!(
            current = %advance.current,
            next = %advance.next,
            mode = %config.mode(),
            completed = advance.cycle_completed,
            "range iterator step"
        );
        advance
    }
}

/// Pure form of [`CursorState::advance`]: `(config, prior) -> (output, state)`
pub fn step(config: &CursorConfig, prior: &CursorState) -> (Advance, CursorState) {
    let mut state = prior.clone();
    let advance = state.advance(config);
    (advance, state)
}

/// A single cursor owning its own state
#[derive(Debug, Clone, Default)]
pub struct IterationCursor {
    state: CursorState,
}

impl IterationCursor {
    /// Fresh, uninitialized cursor
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one step
    pub fn advance(&mut self, config: &CursorConfig) -> Advance {
        self.state.advance(config)
    }

    /// Current state
    pub fn state(&self) -> &CursorState {
        &self.state
    }
}

//! # Stateful Range Iteration for Re-invoked Workflow Nodes
//!
//! A workflow engine calls a node once per tick and keeps no iteration
//! state of its own. This crate supplies the missing cursor: each call
//! yields the current value, the next value, and whether a traversal
//! just completed.
//!
//! ## Core Algorithm
//!
//! 1. **Change detection**: any changed field (or a changed list fingerprint) resets the cursor
//! 2. **Source resolution**: parsed custom text > supplied list > plain `start..=end` range
//! 3. **Stepping**: `cycle` wraps, `bounce` reflects, `once` holds at the end
//!
//! ## Usage Example
//!
//! ```
//! use range_iter::{CursorConfig, IterationCursor, Mode, Value};
//!
//! let config = CursorConfig::range(0, 2, 1, Mode::Cycle);
//! let mut cursor = IterationCursor::new();
//!
//! let first = cursor.advance(&config);
//! assert_eq!((first.current, first.next), (Value::Int(0), Value::Int(1)));
//!
//! cursor.advance(&config);
//! let wrap = cursor.advance(&config);
//! assert_eq!(wrap.next, Value::Int(0));
//! assert!(wrap.cycle_completed);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod cursor;     // Iteration state machine
pub mod source;     // Active value source resolution
pub mod registry;   // Per-identity cursor store
pub mod logging;    // Subscriber setup for binaries and hosts
/// Python bindings exposing the cursor registry to a Python workflow host.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use cursor::{step, Advance, CursorConfig, CursorState, Direction, IterationCursor, Mode, Value};
pub use registry::{CursorId, CursorRegistry, Extensions};
pub use source::{parse_custom_values, ActiveSource};

use thiserror::Error;

/// Errors surfaced by the cursor and its registry
#[derive(Error, Debug)]
pub enum CursorError {
    /// Custom value text contains a token that is not a number
    #[error("invalid custom value '{token}' at position {position}")]
    InvalidCustomValue {
        /// Zero-based element position
        position: usize,
        /// Offending token after trimming
        token: String,
    },

    /// Custom value text contains `inf` or `nan`
    #[error("non-finite custom value '{token}' at position {position}")]
    NonFiniteCustomValue {
        /// Zero-based element position
        position: usize,
        /// Offending token after trimming
        token: String,
    },

    /// Mode name is not one of `cycle`, `bounce`, `once`
    #[error("unknown mode '{0}' (expected cycle, bounce or once)")]
    UnknownMode(String),

    /// No cursor registered under this id
    #[error("unknown cursor '{0}'")]
    UnknownCursor(CursorId),

    /// A cursor is already registered under this id
    #[error("cursor '{0}' already exists")]
    DuplicateCursor(CursorId),
}

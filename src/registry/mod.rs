//! Per-identity cursor store for hosts that re-invoke nodes every tick.
//!
//! The host owns one registry and keys cursors by its stable node id.
//! Cursors are created and evicted explicitly; `advance` on an unknown id
//! is an error rather than an implicit instantiation.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::cursor::{Advance, CursorConfig, CursorState};
use crate::CursorError;

/// Stable host-supplied identity of one logical cursor
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CursorId(String);

impl CursorId {
    /// Wrap a host id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Raw id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CursorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CursorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CursorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Extra named inputs a host may wire into the node.
///
/// Accepted and ignored: the keys are logged at debug level and the
/// values never influence iteration.
pub type Extensions = HashMap<String, Box<dyn Any + Send + Sync>>;

/// Registry of cursor states keyed by [`CursorId`]
#[derive(Debug, Default)]
pub struct CursorRegistry {
    cursors: HashMap<CursorId, CursorState>,
}

impl CursorRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            cursors: HashMap::new(),
        }
    }

    /// Whether the host must re-run the node even with unchanged inputs.
    ///
    /// Always `true`: the cursor advances on every call, so its output
    /// can never be cached by input equality.
    pub fn is_changed(&self) -> bool {
        true
    }

    /// Create a fresh cursor; fails if `id` is already registered.
    pub fn create(&mut self, id: impl Into<CursorId>) -> Result<(), CursorError> {
        let id = id.into();
        if self.cursors.contains_key(&id) {
            return Err(CursorError::DuplicateCursor(id));
        }
        tracing::debug!(%id, "cursor created");
        self.cursors.insert(id, CursorState::new());
        Ok(())
    }

    /// Create `id` unless it already exists; returns whether it was created.
    pub fn ensure(&mut self, id: impl Into<CursorId>) -> bool {
        let id = id.into();
        if self.cursors.contains_key(&id) {
            return false;
        }
        tracing::debug!(%id, "cursor created");
        self.cursors.insert(id, CursorState::new());
        true
    }

    /// Remove a cursor, returning its final state
    pub fn evict(&mut self, id: &CursorId) -> Option<CursorState> {
        let evicted = self.cursors.remove(id);
        if evicted.is_some() {
            tracing::debug!(%id, "cursor evicted");
        }
        evicted
    }

    /// Whether `id` is registered
    pub fn contains(&self, id: &CursorId) -> bool {
        self.cursors.contains_key(id)
    }

    /// Number of registered cursors
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Whether no cursors are registered
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Inspect the state of `id`
    pub fn state(&self, id: &CursorId) -> Option<&CursorState> {
        self.cursors.get(id)
    }

    /// Advance cursor `id` by one step.
    pub fn advance(
        &mut self,
        id: &CursorId,
        config: &CursorConfig,
        extensions: &Extensions,
    ) -> Result<Advance, CursorError> {
        let state = self
            .cursors
            .get_mut(id)
            .ok_or_else(|| CursorError::UnknownCursor(id.clone()))?;

        if !extensions.is_empty() {
            let mut keys: Vec<&str> = extensions.keys().map(String::as_str).collect();
            keys.sort_unstable();
            tracing::debug!(%id, ?keys, "received dynamic inputs");
        }

        Ok(state.advance(config))
    }
}

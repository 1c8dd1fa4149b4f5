//! Last-seen configuration, kept only for change detection

use std::fmt;

use super::{CursorConfig, Mode};
use crate::source::{fingerprint, Fingerprint};

/// A single configuration field that differs from the previous call
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigChange {
    /// Custom value text changed
    CustomValues {
        /// Previous text
        from: String,
        /// New text
        to: String,
    },
    /// `start` changed (`from` is `None` on the first call)
    Start {
        /// Previous value
        from: Option<i64>,
        /// New value
        to: i64,
    },
    /// `end` changed
    End {
        /// Previous value
        from: Option<i64>,
        /// New value
        to: i64,
    },
    /// `step` changed
    Step {
        /// Previous value
        from: Option<i64>,
        /// New value
        to: i64,
    },
    /// `mode` changed
    Mode {
        /// Previous mode
        from: Option<Mode>,
        /// New mode
        to: Mode,
    },
    /// Supplied value list content changed
    ValueList,
}

struct Prev<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Prev<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => f.write_str("unset"),
        }
    }
}

impl fmt::Display for ConfigChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigChange::CustomValues { from, to } => {
                write!(f, "custom values changed from '{}' to '{}'", from, to)
            }
            ConfigChange::Start { from, to } => {
                write!(f, "start changed from {} to {}", Prev(from), to)
            }
            ConfigChange::End { from, to } => {
                write!(f, "end changed from {} to {}", Prev(from), to)
            }
            ConfigChange::Step { from, to } => {
                write!(f, "step changed from {} to {}", Prev(from), to)
            }
            ConfigChange::Mode { from, to } => {
                write!(f, "mode changed from {} to {}", Prev(from), to)
            }
            ConfigChange::ValueList => f.write_str("value list changed"),
        }
    }
}

/// Fields seen on the previous call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigSnapshot {
    custom_values: String,
    start: Option<i64>,
    end: Option<i64>,
    step: Option<i64>,
    mode: Option<Mode>,
    value_list: Option<Fingerprint>,
}

impl ConfigSnapshot {
    /// Compare `config` field by field, record it, and return every change.
    ///
    /// The list fingerprint is only compared when a list is supplied; an
    /// absent list leaves the stored fingerprint untouched.
    pub fn observe(&mut self, config: &CursorConfig) -> Vec<ConfigChange> {
        let mut changes = Vec::new();

        if config.custom_values() != self.custom_values {
            changes.push(ConfigChange::CustomValues {
                from: std::mem::replace(&mut self.custom_values, config.custom_values().to_string()),
                to: config.custom_values().to_string(),
            });
        }

        if self.start != Some(config.start()) {
            changes.push(ConfigChange::Start {
                from: self.start.replace(config.start()),
                to: config.start(),
            });
        }

        if self.end != Some(config.end()) {
            changes.push(ConfigChange::End {
                from: self.end.replace(config.end()),
                to: config.end(),
            });
        }

        if self.step != Some(config.step()) {
            changes.push(ConfigChange::Step {
                from: self.step.replace(config.step()),
                to: config.step(),
            });
        }

        if self.mode != Some(config.mode()) {
            changes.push(ConfigChange::Mode {
                from: self.mode.replace(config.mode()),
                to: config.mode(),
            });
        }

        if let Some(values) = config.value_list() {
            let digest = fingerprint(values);
            if self.value_list != Some(digest) {
                self.value_list = Some(digest);
                changes.push(ConfigChange::ValueList);
            }
        }

        changes
    }
}

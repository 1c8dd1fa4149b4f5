//! Mode-specific index advance: i' = i + s·d, corrected at the bounds

use super::Mode;

/// Travel direction (only bounce mode ever turns around)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Toward the upper bound
    #[default]
    Forward,

    /// Toward the lower bound
    Backward,
}

impl Direction {
    /// Sign applied to the step magnitude
    pub fn sign(&self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Index space the cursor moves in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Positions `0..len` of a non-empty value list; U = `len - 1`
    /// replaces any configured `end`
    List {
        /// List length (≥ 1)
        len: usize,
    },

    /// Integers `start..=end`; the index is the value
    Range {
        /// Lower bound
        start: i64,
        /// Upper bound (≥ start)
        end: i64,
    },
}

impl Domain {
    /// Range domain; `start > end` collapses to the single value `start`
    pub fn range(start: i64, end: i64) -> Self {
        Domain::Range {
            start,
            end: end.max(start),
        }
    }

    /// Lower bound L
    pub fn lower(&self) -> i64 {
        match *self {
            Domain::List { .. } => 0,
            Domain::Range { start, .. } => start,
        }
    }

    /// Upper bound U
    pub fn upper(&self) -> i64 {
        match *self {
            Domain::List { len } => len as i64 - 1,
            Domain::Range { end, .. } => end,
        }
    }

    /// Clamp an index into `[L, U]`
    pub fn clamp(&self, index: i64) -> i64 {
        index.clamp(self.lower(), self.upper())
    }

    /// Wrap an index that ran past U (cycle mode)
    fn wrap(&self, candidate: i64) -> i64 {
        match *self {
            Domain::List { len } => candidate.rem_euclid(len as i64),
            Domain::Range { start, .. } => start,
        }
    }
}

/// Result of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Committed next index, always inside the domain
    pub index: i64,

    /// Direction to use on the following step
    pub direction: Direction,

    /// Whether this step finished a traversal
    pub cycle_completed: bool,
}

/// Compute the next index for `mode` from `index`.
///
/// Bounce completes only on the low rebound: one cycle is a trip to the
/// far end and back. A reflection that still lands outside the domain
/// (step wider than the domain) is clamped before being returned.
pub fn advance_index(
    mode: Mode,
    domain: Domain,
    index: i64,
    step: i64,
    direction: Direction,
) -> Transition {
    let lower = domain.lower();
    let upper = domain.upper();

    match mode {
        Mode::Cycle => {
            let candidate = index + step;
            if candidate > upper {
                Transition {
                    index: domain.wrap(candidate),
                    direction: Direction::Forward,
                    cycle_completed: true,
                }
            } else {
                Transition {
                    index: candidate,
                    direction: Direction::Forward,
                    cycle_completed: false,
                }
            }
        }
        Mode::Bounce => {
            let candidate = index + step * direction.sign();
            if candidate > upper {
                Transition {
                    index: domain.clamp(upper - (candidate - upper)),
                    direction: Direction::Backward,
                    cycle_completed: false,
                }
            } else if candidate < lower {
                Transition {
                    index: domain.clamp(lower + (lower - candidate)),
                    direction: Direction::Forward,
                    cycle_completed: true,
                }
            } else {
                Transition {
                    index: candidate,
                    direction,
                    cycle_completed: false,
                }
            }
        }
        Mode::Once => {
            let candidate = index + step;
            Transition {
                index: candidate.min(upper),
                direction: Direction::Forward,
                cycle_completed: candidate > upper,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_list_wraps_modulo_length() {
        let domain = Domain::List { len: 4 };
        let t = advance_index(Mode::Cycle, domain, 3, 3, Direction::Forward);
        assert_eq!(t.index, 2); // 6 mod 4
        assert!(t.cycle_completed);
    }

    #[test]
    fn test_cycle_range_jumps_to_start() {
        let domain = Domain::range(2, 6);
        let t = advance_index(Mode::Cycle, domain, 5, 3, Direction::Forward);
        assert_eq!(t.index, 2);
        assert!(t.cycle_completed);
    }

    #[test]
    fn test_bounce_reflects_at_both_bounds() {
        let domain = Domain::range(0, 5);

        let high = advance_index(Mode::Bounce, domain, 4, 2, Direction::Forward);
        assert_eq!(high.index, 4);
        assert_eq!(high.direction, Direction::Backward);
        assert!(!high.cycle_completed);

        let low = advance_index(Mode::Bounce, domain, 0, 2, Direction::Backward);
        assert_eq!(low.index, 2);
        assert_eq!(low.direction, Direction::Forward);
        assert!(low.cycle_completed);
    }

    #[test]
    fn test_bounce_clamps_oversized_reflection() {
        let domain = Domain::List { len: 2 };
        let t = advance_index(Mode::Bounce, domain, 0, 5, Direction::Forward);
        // 5 reflects off 1 to -3, then clamps to 0
        assert_eq!(t.index, 0);
        assert_eq!(t.direction, Direction::Backward);
    }

    #[test]
    fn test_once_holds_at_upper_bound() {
        let domain = Domain::range(0, 3);
        let t = advance_index(Mode::Once, domain, 3, 1, Direction::Forward);
        assert_eq!(t.index, 3);
        assert!(t.cycle_completed);
    }

    #[test]
    fn test_inverted_range_is_single_value() {
        let domain = Domain::range(7, 3);
        assert_eq!(domain.lower(), 7);
        assert_eq!(domain.upper(), 7);
        let t = advance_index(Mode::Cycle, domain, 7, 1, Direction::Forward);
        assert_eq!(t.index, 7);
        assert!(t.cycle_completed);
    }
}

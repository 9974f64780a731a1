//! Tunable weights and the candidate selection policy.

use std::fmt;

/// How the candidate set is cut from the ranked move list before the
/// random pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// The `k` best moves (at least one).
    TopK(usize),
    /// Every move scoring within this many centipawns of the best.
    Margin(i32),
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy::TopK(3)
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::TopK(k) => write!(f, "top {k}"),
            SelectionPolicy::Margin(cp) => write!(f, "within {cp} cp"),
        }
    }
}

/// Bonuses and penalties applied by [`score_move`](crate::score_move),
/// plus the selection policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    pub policy: SelectionPolicy,
    /// Added when the move gives check.
    pub check_bonus: i32,
    /// Added on top of the check bonus when the move mates.
    pub mate_bonus: i32,
    pub castle_bonus: i32,
    /// Added for landing on d4, e4, d5 or e5.
    pub center_bonus: i32,
    /// A piece left en prise loses its value divided by this.
    pub hanging_divisor: i32,
    /// Enemy pieces allowed near the mover's king before the penalty applies.
    pub king_danger_threshold: usize,
    pub king_danger_penalty: i32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            policy: SelectionPolicy::default(),
            check_bonus: 50,
            mate_bonus: 10_000,
            castle_bonus: 60,
            center_bonus: 20,
            hanging_divisor: 2,
            king_danger_threshold: 1,
            king_danger_penalty: 50,
        }
    }
}

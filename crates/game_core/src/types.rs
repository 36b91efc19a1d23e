use std::fmt;

/// Game-theoretic score. Positive favours [`Side::Max`], negative [`Side::Min`].
pub type Score = i64;

/// Base magnitude of a decided game; always dominates heuristic scores.
pub const WIN_SCORE: Score = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// First mover, plays `X`.
    Max,
    /// Second mover, plays `O`.
    Min,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Side::Max => 0,
            Side::Min => 1,
        }
    }

    /// Marker label shown on boards and sent to external agents.
    pub fn label(self) -> &'static str {
        match self {
            Side::Max => "X",
            Side::Min => "O",
        }
    }

    /// True if a higher score is better for this side.
    pub fn is_maximizing(self) -> bool {
        self == Side::Max
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Board coordinates of a marker placed by a move, as written to move logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub column: usize,
    /// Counted from the top row.
    pub row: usize,
}

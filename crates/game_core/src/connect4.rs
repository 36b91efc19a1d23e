//! Connect Four on an arbitrary grid: the reference game for the arena.

use std::fmt;

use crate::game::Game;
use crate::types::{Placement, Score, Side, WIN_SCORE};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 8;
pub const DEFAULT_CONNECT: usize = 4;

/// Grid of markers, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Connect4State {
    rows: usize,
    columns: usize,
    cells: Vec<Option<Side>>,
}

impl Connect4State {
    pub fn empty(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        }
    }

    /// Parses a grid from top to bottom. `X` is Max, `O` is Min, anything
    /// else (`.` or space) is empty. Rows must share one width.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let columns = rows.first()?.chars().count();
        let mut cells = Vec::with_capacity(rows.len() * columns);
        for row in rows {
            if row.chars().count() != columns {
                return None;
            }
            cells.extend(row.chars().map(|c| match c {
                'X' | 'x' => Some(Side::Max),
                'O' | 'o' => Some(Side::Min),
                _ => None,
            }));
        }
        Some(Self {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Side> {
        self.cells[row * self.columns + column]
    }

    fn set(&mut self, row: usize, column: usize, side: Side) {
        self.cells[row * self.columns + column] = Some(side);
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|c| **c == Some(side)).count()
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells() == 0
    }

    /// Lowest empty row of `column`, if the column has room.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        (0..self.rows).rev().find(|&row| self.get(row, column).is_none())
    }

    /// Markers stacked in `column`.
    pub fn height(&self, column: usize) -> usize {
        (0..self.rows)
            .filter(|&row| self.get(row, column).is_some())
            .count()
    }

    /// The same grid with every marker's owner swapped.
    pub fn swapped(&self) -> Self {
        Self {
            rows: self.rows,
            columns: self.columns,
            cells: self.cells.iter().map(|c| c.map(Side::other)).collect(),
        }
    }

    fn has_line(&self, side: Side, connect: usize) -> bool {
        const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

        for row in 0..self.rows {
            for column in 0..self.columns {
                if self.get(row, column) != Some(side) {
                    continue;
                }
                for (dr, dc) in DIRECTIONS {
                    if self.run_length(side, row, column, dr, dc, connect) >= connect {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn run_length(
        &self,
        side: Side,
        row: usize,
        column: usize,
        dr: isize,
        dc: isize,
        limit: usize,
    ) -> usize {
        let mut len = 0;
        let (mut r, mut c) = (row as isize, column as isize);
        while len < limit
            && (0..self.rows as isize).contains(&r)
            && (0..self.columns as isize).contains(&c)
            && self.get(r as usize, c as usize) == Some(side)
        {
            len += 1;
            r += dr;
            c += dc;
        }
        len
    }
}

impl fmt::Display for Connect4State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            f.write_str("|")?;
            for column in 0..self.columns {
                let mark = self.get(row, column).map_or(" ", Side::label);
                write!(f, "{mark}|")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "-".repeat(2 * self.columns + 1))?;
        let labels: Vec<String> = (0..self.columns).map(|c| c.to_string()).collect();
        writeln!(f, " {}", labels.join(" "))
    }
}

/// Connect Four rules for a `rows` x `columns` grid needing `connect` in a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connect4 {
    pub rows: usize,
    pub columns: usize,
    pub connect: usize,
}

impl Default for Connect4 {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            connect: DEFAULT_CONNECT,
        }
    }
}

impl Connect4 {
    pub fn new(rows: usize, columns: usize, connect: usize) -> Self {
        Self {
            rows,
            columns,
            connect,
        }
    }
}

impl Game for Connect4 {
    type State = Connect4State;
    type Action = usize;

    fn initial_state(&self) -> Connect4State {
        Connect4State::empty(self.rows, self.columns)
    }

    fn transitions(&self, state: &Connect4State) -> Vec<(usize, Connect4State)> {
        let side = self.side_to_move(state);
        let mut out = Vec::with_capacity(state.columns);
        for column in 0..state.columns {
            if let Some(row) = state.landing_row(column) {
                let mut next = state.clone();
                next.set(row, column, side);
                out.push((column, next));
            }
        }
        out
    }

    fn goal(&self, state: &Connect4State) -> Option<Score> {
        let empty = state.empty_cells() as Score;
        if state.has_line(Side::Max, self.connect) {
            return Some(WIN_SCORE + empty);
        }
        if state.has_line(Side::Min, self.connect) {
            return Some(-WIN_SCORE - empty);
        }
        if state.is_full() {
            return Some(0);
        }
        None
    }

    fn side_to_move(&self, state: &Connect4State) -> Side {
        if state.count(Side::Max) > state.count(Side::Min) {
            Side::Min
        } else {
            Side::Max
        }
    }

    fn heuristic(&self, state: &Connect4State) -> Score {
        state.count(Side::Max) as Score - state.count(Side::Min) as Score
    }

    fn placement(&self, after: &Connect4State, column: &usize) -> Placement {
        Placement {
            column: *column,
            row: after.rows().saturating_sub(after.height(*column)),
        }
    }
}

#[cfg(test)]
#[path = "connect4_tests.rs"]
mod connect4_tests;

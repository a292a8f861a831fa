pub mod render;

use serde::Serialize;
use thiserror::Error;

/// Number of pegs on the board.
pub const NR_PEGS: usize = 3;

/// Largest supported disk count. The solution takes `2^n - 1` moves, so the
/// move list grows exponentially in the disk count.
pub const MAX_DISKS: u8 = 30;

/// Index of one of the three pegs.
///
/// Invariant: can only represent valid peg indices
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize)]
pub struct PegIdx(u8);

impl PegIdx {
    pub fn new(idx: u8) -> Option<PegIdx> {
        if (idx as usize) < NR_PEGS {
            Some(PegIdx(idx))
        } else {
            None
        }
    }

    /// The peg that is neither `self` nor `other`.
    ///
    /// The two pegs must differ, otherwise the spare peg is not unique.
    pub fn spare(self, other: PegIdx) -> PegIdx {
        assert_ne!(self, other, "spare peg requires two distinct pegs");
        PegIdx(3 - self.0 - other.0)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A disk, identified by its size.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize)]
pub struct Disk(pub u8);

/// Relocation of the top disk of `from` onto the top of `to`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Move {
    pub from: PegIdx,
    pub to: PegIdx,
}

/// The state of all three pegs.
///
/// Each peg stores its disks bottom-to-top, and the sizes on a peg strictly
/// decrease from bottom to top at all times.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Towers {
    pegs: [Vec<Disk>; NR_PEGS],
}

impl Towers {
    /// All `nr_disks` disks stacked on `from`, largest at the bottom.
    pub fn new(nr_disks: u8, from: PegIdx) -> Towers {
        let mut pegs: [Vec<Disk>; NR_PEGS] = std::array::from_fn(|_| Vec::new());
        pegs[from.index()] = (1..=nr_disks).rev().map(Disk).collect();

        Towers { pegs }
    }

    pub fn peg(&self, idx: PegIdx) -> &[Disk] {
        &self.pegs[idx.index()]
    }

    pub fn pegs(&self) -> &[Vec<Disk>; NR_PEGS] {
        &self.pegs
    }

    /// Height of the tallest peg.
    pub fn tallest(&self) -> usize {
        self.pegs.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Move the top disk of `from` onto `to`.
    ///
    /// Panics if `from` is empty or if the disk would land on a smaller
    /// one. Neither can be triggered by user input, only by a bug in the
    /// calling code.
    pub fn move_top(&mut self, from: PegIdx, to: PegIdx) {
        let disk = self.pegs[from.index()]
            .pop()
            .expect("tried to move from an empty peg");

        if let Some(&top) = self.pegs[to.index()].last() {
            assert!(
                disk < top,
                "disk {disk:?} may not rest on smaller disk {top:?}"
            );
        }

        log::debug!("moving disk {} from {from} to {to}", disk.0);
        self.pegs[to.index()].push(disk);
    }
}

/// A full solution: the state before and after, and every move in between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub begin: Towers,
    pub end: Towers,
    pub moves: Vec<Move>,
}

/// Rejected input. Reported before any computation starts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("at least one disk is required")]
    NoDisks,
    #[error("at most {MAX_DISKS} disks are supported, got {0}")]
    TooManyDisks(u8),
    #[error("peg index {0} is out of range, pegs are 0 to 2")]
    InvalidPeg(u8),
}

/// Working state of one solve run: the pegs being rearranged plus the moves
/// recorded so far.
struct Solver {
    towers: Towers,
    moves: Vec<Move>,
}

impl Solver {
    /// Move a stack of `nr_disks` disks from `from` to `to`.
    ///
    /// A stack of one disk moves directly. A taller stack first moves its
    /// upper `nr_disks - 1` disks onto the spare peg, which frees the
    /// largest disk to move directly, then moves the upper stack from the
    /// spare peg on top of it.
    fn move_stack(&mut self, nr_disks: u8, from: PegIdx, to: PegIdx) {
        if nr_disks == 1 {
            self.move_top(from, to);
            return;
        }

        let spare = from.spare(to);
        self.move_stack(nr_disks - 1, from, spare);
        self.move_top(from, to);
        self.move_stack(nr_disks - 1, spare, to);
    }

    fn move_top(&mut self, from: PegIdx, to: PegIdx) {
        self.towers.move_top(from, to);
        self.moves.push(Move { from, to });
    }
}

/// Solve the puzzle: move `nr_disks` disks from peg `from` to peg `to`.
///
/// Peg indices are 0-based. `from == to` is accepted and solved by zero
/// moves. The same input always produces the same move sequence.
pub fn solve(nr_disks: u8, from: u8, to: u8) -> Result<Solution, SolveError> {
    if nr_disks == 0 {
        return Err(SolveError::NoDisks);
    }
    if nr_disks > MAX_DISKS {
        return Err(SolveError::TooManyDisks(nr_disks));
    }
    let from = PegIdx::new(from).ok_or(SolveError::InvalidPeg(from))?;
    let to = PegIdx::new(to).ok_or(SolveError::InvalidPeg(to))?;

    log::info!("solving {nr_disks} disks from peg {from} to peg {to}");

    let begin = Towers::new(nr_disks, from);
    let mut solver = Solver {
        towers: begin.clone(),
        moves: Vec::new(),
    };

    if from != to {
        solver.move_stack(nr_disks, from, to);

        let min_moves = (1u64 << nr_disks) - 1;
        assert_eq!(
            solver.moves.len() as u64,
            min_moves,
            "solution must take exactly the minimum number of moves"
        );
    }

    Ok(Solution {
        begin,
        end: solver.towers,
        moves: solver.moves,
    })
}

//! The board, sole owner of the simulation state: the sparse alive set and
//! the generation and population counters.

use crate::rule::{next_generation, CellSet};
use crate::Pos;

/// How `Board::seed` treats the cells already on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Discard the current alive set before inserting.
    Replace,
    /// Insert into the existing alive set, accumulating a pattern.
    Append,
}

#[derive(Debug, Default, Clone)]
pub struct Board {
    alive: CellSet,
    generation: u64,
    population: usize,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `cells` as alive. Duplicates collapse by set semantics; any
    /// i32 coordinate is valid. Does not touch the generation counter.
    pub fn seed(&mut self, cells: impl IntoIterator<Item = Pos>, mode: SeedMode) {
        if mode == SeedMode::Replace {
            self.alive.clear();
        }
        self.alive.extend(cells);
        self.population = self.alive.len();
    }

    /// Advances exactly one generation. Deterministic: the same prior set
    /// always yields the same next set. An empty board stays empty, the
    /// generation counter still increments.
    pub fn step(&mut self) {
        self.alive = next_generation(&self.alive);
        self.generation += 1;
        self.population = self.alive.len();
    }

    /// Clears the alive set and zeroes both counters.
    pub fn reset(&mut self) {
        self.alive.clear();
        self.generation = 0;
        self.population = 0;
    }

    pub fn is_alive(&self, pos: Pos) -> bool {
        self.alive.contains(&pos)
    }

    /// An owned copy of the cells alive right now; later mutation of the
    /// board cannot change a previously returned snapshot.
    pub fn snapshot(&self) -> Vec<Pos> {
        self.alive.iter().copied().collect()
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos;

    fn sorted(mut cells: Vec<Pos>) -> Vec<Pos> {
        cells.sort_by_key(|pos| (pos.x, pos.y));
        cells
    }

    const GLIDER: [Pos; 5] = [pos!(1, 0), pos!(2, 1), pos!(0, 2), pos!(1, 2), pos!(2, 2)];

    #[test]
    fn test_empty_board_is_stable() {
        let mut board = Board::new();
        board.step();
        assert_eq!(board.population(), 0);
        assert_eq!(board.generation(), 1);
        assert!(board.snapshot().is_empty());
    }

    #[test]
    fn test_seed_replace_discards_previous_cells() {
        let mut board = Board::new();
        board.seed([pos!(5, 5)], SeedMode::Replace);
        board.seed([pos!(0, 0), pos!(1, 1)], SeedMode::Replace);
        assert!(!board.is_alive(pos!(5, 5)));
        assert_eq!(board.population(), 2);
    }

    #[test]
    fn test_seed_append_accumulates() {
        let mut board = Board::new();
        board.seed([pos!(0, 0)], SeedMode::Append);
        board.seed([pos!(1, 0)], SeedMode::Append);
        assert_eq!(board.population(), 2);
    }

    #[test]
    fn test_seed_append_overlap_does_not_double_count() {
        let mut board = Board::new();
        board.seed([pos!(2, 3)], SeedMode::Append);
        board.seed([pos!(2, 3)], SeedMode::Append);
        assert_eq!(board.population(), 1);
    }

    #[test]
    fn test_glider_translates_by_one_one_every_four_steps() {
        let mut board = Board::new();
        board.seed(GLIDER, SeedMode::Replace);
        for _ in 0..4 {
            board.step();
        }
        let expected: Vec<_> = GLIDER.iter().map(|&cell| cell + pos!(1, 1)).collect();
        assert_eq!(sorted(board.snapshot()), sorted(expected));
        assert_eq!(board.population(), 5);
    }

    #[test]
    fn test_counters_track_steps_and_snapshot_cardinality() {
        let mut board = Board::new();
        board.seed(GLIDER, SeedMode::Replace);
        for step in 1..=6u64 {
            board.step();
            assert_eq!(board.generation(), step);
            assert_eq!(board.population(), board.snapshot().len());
        }
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_steps() {
        let mut board = Board::new();
        board.seed([pos!(1, 0), pos!(1, 1), pos!(1, 2)], SeedMode::Replace);
        let before = sorted(board.snapshot());
        board.step();
        assert_eq!(before, sorted(vec![pos!(1, 0), pos!(1, 1), pos!(1, 2)]));
        assert_ne!(before, sorted(board.snapshot()));
    }

    #[test]
    fn test_reset_clears_cells_and_counters() {
        let mut board = Board::new();
        board.seed(GLIDER, SeedMode::Replace);
        board.step();
        board.step();
        board.reset();
        assert_eq!(board.population(), 0);
        assert_eq!(board.generation(), 0);
        assert!(board.snapshot().is_empty());
    }
}

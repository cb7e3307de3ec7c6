//! The generation transition, pure functions over the alive set.
//!
//! One step examines only the candidate set, alive cells and their Moore
//! neighbors; any other cell has zero alive neighbors and cannot change
//! state. Counting always consults the current set while building a fresh
//! one, so every cell of a generation observes the same prior state.

use std::collections::HashSet;

use metrohash::MetroBuildHasher;

use crate::{pos, Pos};

/// The sparse alive set. Membership means alive, absence means dead; memory
/// stays proportional to population, never to a bounding box.
pub type CellSet = HashSet<Pos, MetroBuildHasher>;

/// The 8 cells of the Moore neighborhood of `pos`, center excluded.
pub fn neighbors(pos: Pos) -> impl Iterator<Item = Pos> {
    (-1..=1)
        .flat_map(|x| (-1..=1).map(move |y| pos!(x, y)))
        .filter(|offset| *offset != pos!(0, 0))
        .map(move |offset| pos + offset)
}

/// Counts the alive cells among the 8 neighbors of `pos`.
pub fn neighbor_count(alive: &CellSet, pos: Pos) -> usize {
    neighbors(pos).filter(|pos| alive.contains(pos)).count()
}

/// Every cell whose state may change this generation: the union of each
/// alive cell with its neighborhood.
pub fn candidates(alive: &CellSet) -> CellSet {
    let mut candidates = CellSet::default();
    for &cell in alive {
        candidates.insert(cell);
        candidates.extend(neighbors(cell));
    }
    candidates
}

/// Applies B3/S23 to every candidate and returns the next alive set.
pub fn next_generation(alive: &CellSet) -> CellSet {
    let mut next = CellSet::default();
    for cell in candidates(alive) {
        let is_alive = alive.contains(&cell);
        match (is_alive, neighbor_count(alive, cell)) {
            (true, 2) | (true, 3) => {
                next.insert(cell);
            }
            (false, 3) => {
                next.insert(cell);
            }
            _ => (), // dies or stays dead
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[Pos]) -> CellSet {
        cells.iter().copied().collect()
    }

    #[test]
    fn test_neighbors_exclude_center() {
        let around: Vec<_> = neighbors(pos!(0, 0)).collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&pos!(0, 0)));
    }

    #[test]
    fn test_neighbor_count_consults_current_set() {
        let alive = set(&[pos!(0, 0), pos!(1, 0), pos!(-1, -1)]);
        assert_eq!(neighbor_count(&alive, pos!(0, 0)), 2);
        assert_eq!(neighbor_count(&alive, pos!(5, 5)), 0);
    }

    #[test]
    fn test_candidates_cover_alive_and_halo() {
        let alive = set(&[pos!(0, 0)]);
        let candidates = candidates(&alive);
        assert_eq!(candidates.len(), 9);
        assert!(candidates.contains(&pos!(0, 0)));
        assert!(candidates.contains(&pos!(-1, 1)));
    }

    #[test]
    fn test_empty_set_stays_empty() {
        assert!(next_generation(&CellSet::default()).is_empty());
    }

    #[test]
    fn test_lone_cell_dies() {
        assert!(next_generation(&set(&[pos!(3, -2)])).is_empty());
    }

    #[test]
    fn test_block_is_still_life() {
        let block = set(&[pos!(0, 0), pos!(1, 0), pos!(0, 1), pos!(1, 1)]);
        assert_eq!(next_generation(&block), block);
    }

    #[test]
    fn test_blinker_oscillates() {
        let vertical = set(&[pos!(1, 0), pos!(1, 1), pos!(1, 2)]);
        let horizontal = next_generation(&vertical);
        assert_eq!(horizontal, set(&[pos!(0, 1), pos!(1, 1), pos!(2, 1)]));
        assert_eq!(next_generation(&horizontal), vertical);
    }

    #[test]
    fn test_determinism() {
        let alive = set(&[pos!(1, 0), pos!(2, 1), pos!(0, 2), pos!(1, 2), pos!(2, 2)]);
        assert_eq!(next_generation(&alive), next_generation(&alive.clone()));
    }
}

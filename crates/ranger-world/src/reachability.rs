//! Reachability queries over a finished map.
//!
//! Movement is 4-connected: an entity steps between orthogonally adjacent
//! walkable tiles.

use std::collections::{HashMap, HashSet, VecDeque};

use ranger_common::TileCoord;

use crate::grid::ParkMap;

/// All tiles reachable from `start` through walkable tiles (4-connected BFS).
///
/// Empty when `start` itself is not walkable.
#[must_use]
pub fn reachable_from(map: &ParkMap, start: TileCoord) -> HashSet<TileCoord> {
    let mut seen = HashSet::new();
    if !map.is_walkable_at(start) {
        return seen;
    }

    let mut open = VecDeque::from([start]);
    seen.insert(start);
    while let Some(pos) = open.pop_front() {
        for next in pos.neighbors4() {
            if map.is_walkable_at(next) && seen.insert(next) {
                open.push_back(next);
            }
        }
    }
    seen
}

/// Whether a walkable 4-connected path joins `from` and `to`.
#[must_use]
pub fn is_reachable(map: &ParkMap, from: TileCoord, to: TileCoord) -> bool {
    reachable_from(map, from).contains(&to)
}

/// Length in steps of the shortest 4-connected walkable path, if any.
#[must_use]
pub fn path_length(map: &ParkMap, from: TileCoord, to: TileCoord) -> Option<usize> {
    if !map.is_walkable_at(from) || !map.is_walkable_at(to) {
        return None;
    }

    let mut seen = HashSet::from([from]);
    let mut open = VecDeque::from([(from, 0usize)]);
    while let Some((pos, dist)) = open.pop_front() {
        if pos == to {
            return Some(dist);
        }
        for next in pos.neighbors4() {
            if map.is_walkable_at(next) && seen.insert(next) {
                open.push_back((next, dist + 1));
            }
        }
    }
    None
}

/// First tile to step onto along a shortest walkable path from `from` to
/// `to`. `None` when no path exists or `from == to`.
///
/// Searches backwards from `to`, then picks the neighbour of `from` that is
/// closest to it; ties go to the first in [`TileCoord::neighbors4`] order.
#[must_use]
pub fn first_step(map: &ParkMap, from: TileCoord, to: TileCoord) -> Option<TileCoord> {
    if from == to || !map.is_walkable_at(to) {
        return None;
    }

    let mut dist = HashMap::from([(to, 0usize)]);
    let mut open = VecDeque::from([to]);
    while let Some(pos) = open.pop_front() {
        if pos == from {
            break;
        }
        let d = dist[&pos];
        for next in pos.neighbors4() {
            if map.is_walkable_at(next) && !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                open.push_back(next);
            }
        }
    }

    from.neighbors4()
        .into_iter()
        .filter_map(|n| dist.get(&n).map(|&d| (n, d)))
        .min_by_key(|&(_, d)| d)
        .map(|(n, _)| n)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: TileCoord = TileCoord::new(0, 0);

    fn map(text: &str) -> ParkMap {
        ParkMap::from_ascii(text, START, START).expect("fixture should parse")
    }

    #[test]
    fn test_blocked_by_river() {
        let map = map("..~..\n..~..\n..~..");
        assert!(!is_reachable(&map, START, TileCoord::new(4, 0)));
        assert_eq!(reachable_from(&map, START).len(), 6);
    }

    #[test]
    fn test_diagonal_gap_is_not_a_path() {
        let map = map("#T\nT#");
        assert!(!is_reachable(&map, START, TileCoord::new(1, 1)));
    }

    #[test]
    fn test_path_length_around_trees() {
        let map = map("..T.\n.TT.\n....");
        assert_eq!(path_length(&map, START, TileCoord::new(3, 0)), Some(7));
        assert_eq!(path_length(&map, START, TileCoord::new(2, 0)), None);
    }

    #[test]
    fn test_first_step_follows_shortest_path() {
        let map = map("..T.\n.TT.\n....");
        assert_eq!(first_step(&map, START, TileCoord::new(3, 0)), Some(TileCoord::new(0, 1)));
        assert_eq!(first_step(&map, START, TileCoord::new(1, 0)), Some(TileCoord::new(1, 0)));
        assert_eq!(first_step(&map, START, START), None);
        assert_eq!(first_step(&map, START, TileCoord::new(2, 0)), None);
    }

    #[test]
    fn test_unwalkable_start_reaches_nothing() {
        let map = map("T..\n...");
        assert!(reachable_from(&map, START).is_empty());
    }
}

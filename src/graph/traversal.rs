//! Depth-limited reachability

use std::collections::{HashSet, VecDeque};

use super::{DependencyGraph, Direction};

/// Collect every resource reachable from `start` in at most `depth_limit` hops
///
/// Depth 1 is the direct neighbours of `start`. The walk is breadth-first,
/// so each resource is recorded at its shortest distance and expanded at
/// most once; cycles, including ones through `start`, terminate. `start`
/// itself is only part of the result when a cycle leads back to it.
pub fn traverse(
    graph: &DependencyGraph,
    direction: Direction,
    start: &str,
    depth_limit: u8,
) -> HashSet<String> {
    let mut reached: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<(&str, u8)> = VecDeque::new();
    queue.push_back((start, 0));

    while let Some((resource, depth)) = queue.pop_front() {
        if depth >= depth_limit {
            continue;
        }
        let Some(neighbours) = graph.edges(direction, resource) else {
            continue;
        };
        for neighbour in neighbours {
            if reached.insert(neighbour.clone()) {
                queue.push_back((neighbour.as_str(), depth + 1));
            }
        }
    }

    tracing::debug!(
        "{:?} traversal from {} (depth {}) reached {} resources",
        direction,
        start,
        depth_limit,
        reached.len()
    );
    reached
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &[&str])]) -> DependencyGraph {
        DependencyGraph::from_depends_on(edges.iter().map(|(from, to)| {
            (
                from.to_string(),
                to.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
            )
        }))
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_depth_one_is_direct_neighbours() {
        let g = graph(&[("A", &["B", "C"]), ("B", &["D"])]);
        assert_eq!(traverse(&g, Direction::DependsOn, "A", 1), set(&["B", "C"]));
    }

    #[test]
    fn test_depth_two_reaches_grandchildren() {
        let g = graph(&[("A", &["B", "C"]), ("B", &["D"]), ("C", &[]), ("D", &[])]);
        assert_eq!(
            traverse(&g, Direction::DependsOn, "A", 2),
            set(&["B", "C", "D"])
        );
    }

    #[test]
    fn test_reverse_direction() {
        let g = graph(&[("A", &["B"]), ("B", &["D"]), ("C", &["D"])]);
        assert_eq!(
            traverse(&g, Direction::RequiredBy, "D", 5),
            set(&["A", "B", "C"])
        );
    }

    #[test]
    fn test_shortcut_does_not_hide_deeper_nodes() {
        // C is reachable at depth 1 and depth 2; D must still be found via the
        // shorter route.
        let g = graph(&[("A", &["B", "C"]), ("B", &["C"]), ("C", &["D"])]);
        assert_eq!(
            traverse(&g, Direction::DependsOn, "A", 2),
            set(&["B", "C", "D"])
        );
    }

    #[test]
    fn test_cycle_through_start_terminates() {
        let g = graph(&[("A", &["B"]), ("B", &["C"]), ("C", &["A"])]);
        let reached = traverse(&g, Direction::DependsOn, "A", u8::MAX);
        assert_eq!(reached, set(&["A", "B", "C"]));
    }

    #[test]
    fn test_unknown_start_is_empty() {
        let g = graph(&[("A", &["B"])]);
        assert!(traverse(&g, Direction::DependsOn, "Z", 3).is_empty());
        assert!(traverse(&g, Direction::RequiredBy, "A", 3).is_empty());
    }
}

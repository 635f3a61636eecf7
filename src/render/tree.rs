//! Indented tree output with box-drawing connectors

use super::DisplayForm;
use crate::graph::{DependencyGraph, Direction};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const CONTINUE_INDENT: &str = "│   ";
const CLOSED_INDENT: &str = "    ";

/// Parameters for a single tree rendering
#[derive(Debug, Clone, Copy)]
pub struct TreeRequest<'a> {
    /// First line of the output, already in display form
    pub header: &'a str,
    /// MRN the walk starts from
    pub start: &'a str,
    /// Deepest level that is printed; nodes at this level are not expanded
    pub depth_limit: u8,
    pub form: DisplayForm,
}

/// Render the neighbourhood of `request.start` as a tree
///
/// Children are sorted by MRN at every level. The tree is not
/// deduplicated: a resource reachable through several parents shows up
/// under each of them, and a cycle repeats until the depth limit cuts it.
pub fn render_tree(
    graph: &DependencyGraph,
    direction: Direction,
    request: &TreeRequest<'_>,
) -> Vec<String> {
    let mut lines = vec![request.header.to_string()];
    if request.depth_limit > 0 {
        walk(graph, direction, request, request.start, "", 1, &mut lines);
    }
    lines
}

fn walk(
    graph: &DependencyGraph,
    direction: Direction,
    request: &TreeRequest<'_>,
    parent: &str,
    indent: &str,
    depth: u8,
    lines: &mut Vec<String>,
) {
    let Some(children) = graph.edges(direction, parent) else {
        return;
    };

    let mut sorted: Vec<&String> = children.iter().collect();
    sorted.sort();

    let last = sorted.len().saturating_sub(1);
    for (i, child) in sorted.into_iter().enumerate() {
        let (edge, child_indent) = if i == last {
            (LAST_BRANCH, CLOSED_INDENT)
        } else {
            (BRANCH, CONTINUE_INDENT)
        };

        lines.push(format!("{indent}{edge}{}", request.form.display(child)));

        if depth < request.depth_limit {
            let next_indent = format!("{indent}{child_indent}");
            walk(
                graph,
                direction,
                request,
                child,
                &next_indent,
                depth + 1,
                lines,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DependencyGraph {
        DependencyGraph::from_depends_on([
            ("A".to_string(), vec!["C".to_string(), "B".to_string()]),
            ("B".to_string(), vec!["D".to_string()]),
        ])
    }

    fn request(depth_limit: u8) -> TreeRequest<'static> {
        TreeRequest {
            header: "A",
            start: "A",
            depth_limit,
            form: DisplayForm::Mrn,
        }
    }

    #[test]
    fn test_depth_two_tree() {
        let lines = render_tree(&sample(), Direction::DependsOn, &request(2));
        assert_eq!(lines, vec!["A", "├── B", "│   └── D", "└── C"]);
    }

    #[test]
    fn test_depth_one_stops_at_children() {
        let lines = render_tree(&sample(), Direction::DependsOn, &request(1));
        assert_eq!(lines, vec!["A", "├── B", "└── C"]);
    }

    #[test]
    fn test_closed_branch_indent() {
        let graph = DependencyGraph::from_depends_on([
            ("A".to_string(), vec!["B".to_string()]),
            ("B".to_string(), vec!["C".to_string(), "D".to_string()]),
        ]);
        let lines = render_tree(&graph, Direction::DependsOn, &request(3));
        assert_eq!(lines, vec!["A", "└── B", "    ├── C", "    └── D"]);
    }

    #[test]
    fn test_cycle_is_cut_by_depth() {
        let graph = DependencyGraph::from_depends_on([
            ("A".to_string(), vec!["B".to_string()]),
            ("B".to_string(), vec!["A".to_string()]),
        ]);
        let lines = render_tree(&graph, Direction::DependsOn, &request(3));
        assert_eq!(lines, vec!["A", "└── B", "    └── A", "        └── B"]);
    }

    #[test]
    fn test_leaf_start_prints_header_only() {
        let lines = render_tree(&sample(), Direction::DependsOn, &request(3));
        let leaf = render_tree(
            &sample(),
            Direction::DependsOn,
            &TreeRequest {
                header: "D",
                start: "D",
                ..request(3)
            },
        );
        assert_eq!(lines.len(), 4);
        assert_eq!(leaf, vec!["D"]);
    }

    #[test]
    fn test_zero_depth_prints_header_only() {
        let lines = render_tree(&sample(), Direction::DependsOn, &request(0));
        assert_eq!(lines, vec!["A"]);
    }
}

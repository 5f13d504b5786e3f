//! Dependency cycle detection.
//!
//! Builds a directed graph (task → each of its dependencies) and reports
//! circular dependency chains.
//!
//! # Algorithm
//!
//! Depth-first search with three-state node coloring, driven by an
//! explicit stack so deep chains cannot overflow the call stack. A
//! back-edge (an edge to an `InProgress` node) closes a cycle; the cycle
//! is the current path from that node onward with the node appended again.
//!
//! The search is shallow: once a root's traversal finds a cycle it stops
//! and moves to the next unvisited root. Nodes left on the abandoned path
//! are marked `Done`, so later roots never report a chain that merely
//! runs into them.
//!
//! Traversal order follows input order: roots in task order, edges in
//! dependency-list order. Edges to unknown ids are kept as leaf nodes.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.3

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

use crate::models::{Task, TaskId};

/// Result of cycle detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    /// Whether at least one cycle was found.
    pub has_cycle: bool,
    /// Closed paths, e.g. `["1", "2", "1"]`.
    pub cycles: Vec<Vec<TaskId>>,
}

impl CycleReport {
    fn from_cycles(cycles: Vec<Vec<TaskId>>) -> Self {
        Self {
            has_cycle: !cycles.is_empty(),
            cycles,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Adjacency-list dependency graph over interned task ids.
#[derive(Debug, Default)]
struct DependencyGraph<'a> {
    ids: Vec<&'a TaskId>,
    index: HashMap<&'a str, usize>,
    edges: Vec<Vec<usize>>,
    /// Nodes that have their own task record, in first-seen order.
    roots: Vec<usize>,
}

impl<'a> DependencyGraph<'a> {
    fn build(tasks: &'a [Task]) -> Self {
        let mut graph = Self::default();

        // Register every task first so node order follows task order.
        for task in tasks {
            let before = graph.ids.len();
            let node = graph.intern(&task.id);
            if graph.ids.len() > before {
                graph.roots.push(node);
            }
        }

        // A repeated id keeps the dependency list of its last record.
        for task in tasks {
            let node = graph.intern(&task.id);
            let targets: Vec<usize> = task
                .dependencies
                .iter()
                .map(|dep| graph.intern(dep))
                .collect();
            graph.edges[node] = targets;
        }

        graph
    }

    fn intern(&mut self, id: &'a TaskId) -> usize {
        if let Some(&node) = self.index.get(id.as_str()) {
            return node;
        }
        let node = self.ids.len();
        self.ids.push(id);
        self.index.insert(id.as_str(), node);
        self.edges.push(Vec::new());
        node
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Detects circular dependencies among tasks.
///
/// # Examples
/// ```
/// use task_triage::cycles::detect_cycles;
/// use task_triage::models::Task;
///
/// let tasks = vec![
///     Task::new("1").with_dependency("2"),
///     Task::new("2").with_dependency("1"),
/// ];
/// let report = detect_cycles(&tasks);
/// assert!(report.has_cycle);
/// assert_eq!(report.cycles.len(), 1);
/// ```
pub fn detect_cycles(tasks: &[Task]) -> CycleReport {
    let graph = DependencyGraph::build(tasks);
    let mut state = vec![VisitState::Unvisited; graph.len()];
    let mut cycles = Vec::new();

    for &root in &graph.roots {
        if state[root] != VisitState::Unvisited {
            continue;
        }
        if let Some(cycle) = search_from(root, &graph, &mut state) {
            trace!(root = %graph.ids[root], length = cycle.len() - 1, "dependency cycle");
            cycles.push(cycle);
        }
    }

    CycleReport::from_cycles(cycles)
}

/// Runs one root's traversal; returns the first cycle it closes.
fn search_from(
    root: usize,
    graph: &DependencyGraph<'_>,
    state: &mut [VisitState],
) -> Option<Vec<TaskId>> {
    // Each frame: (node, position of the next edge to follow).
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
    state[root] = VisitState::InProgress;

    while let Some(frame) = stack.last_mut() {
        let (node, next_edge) = *frame;

        let Some(&target) = graph.edges[node].get(next_edge) else {
            state[node] = VisitState::Done;
            stack.pop();
            continue;
        };
        frame.1 += 1;

        match state[target] {
            VisitState::Unvisited => {
                state[target] = VisitState::InProgress;
                stack.push((target, 0));
            }
            VisitState::InProgress => {
                let start = stack
                    .iter()
                    .position(|&(n, _)| n == target)
                    .unwrap_or(0);
                let mut cycle: Vec<TaskId> = stack[start..]
                    .iter()
                    .map(|&(n, _)| graph.ids[n].clone())
                    .collect();
                cycle.push(graph.ids[target].clone());

                for &(n, _) in &stack {
                    state[n] = VisitState::Done;
                }
                return Some(cycle);
            }
            VisitState::Done => {}
        }
    }

    None
}

//! Search drivers for the eight-puzzle.
//!
//! Four strategies share this module: depth-first, breadth-first, and
//! iterative-deepening search run one bounded loop parameterized by a
//! frontier removal policy, while A* keeps its own driver around a
//! priority-ordered open list and a closed set.
//!
//! Nodes live in a per-invocation arena (`Vec` of nodes indexed by
//! position); a node's parent is an arena index, with `None` marking the
//! synthetic root above the start node. The parent graph is acyclic because
//! a parent's depth is always strictly below its child's, so walking the
//! links from a goal node always terminates at the sentinel.
use crate::engine::Board;
use crate::heuristics::Heuristic;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

/// Checks whether the `current` state matches the `goal` state cell for
/// cell, regardless of how `current` was reached.
pub fn goal_check(current: &Board, goal: &Board) -> bool {
    current == goal
}

/// Outcome of one search invocation, for all four strategies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// True when the goal state was reached.
    pub success: bool,
    /// Ordered state sequence from the start board to the goal board.
    /// Empty when the search failed.
    pub path: Vec<Board>,
    /// Number of blank-tile moves along `path`: edges, not states.
    /// Zero when the search failed.
    pub moves: u32,
    /// Bookkeeping count of the search effort: the size of the visited set
    /// for the uninformed strategies, the size of the closed set for A*.
    pub expanded: usize,
}

impl SearchReport {
    fn failure(expanded: usize) -> Self {
        SearchReport {
            success: false,
            path: Vec::new(),
            moves: 0,
            expanded,
        }
    }
}

/// A node in the search graph: a state, a back-reference to the node it was
/// generated from, and its depth in moves from the start state.
#[derive(Clone, Debug)]
struct SearchNode {
    state: Board,
    parent: Option<usize>,
    depth: u32,
}

/// A search node extended with the A* scores: `h`, the heuristic estimate
/// to the goal, and `f = h + depth`, the evaluation score the open list is
/// ordered by.
#[derive(Clone, Debug)]
struct AStarNode {
    state: Board,
    parent: Option<usize>,
    depth: u32,
    #[allow(dead_code)]
    h: u32,
    f: u32,
}

/// Back-link access shared by the two node representations, so path
/// reconstruction is written once.
trait PathNode {
    fn state(&self) -> &Board;
    fn parent(&self) -> Option<usize>;
}

impl PathNode for SearchNode {
    fn state(&self) -> &Board {
        &self.state
    }

    fn parent(&self) -> Option<usize> {
        self.parent
    }
}

impl PathNode for AStarNode {
    fn state(&self) -> &Board {
        &self.state
    }

    fn parent(&self) -> Option<usize> {
        self.parent
    }
}

/// Walks parent links from `goal_id` back to the root sentinel and returns
/// the start-to-goal state sequence together with the move count. The
/// sentinel counts as one path entry even though it carries no state, so
/// the move count is the number of entries minus two.
fn reconstruct_path<N: PathNode>(arena: &[N], goal_id: usize) -> (Vec<Board>, u32) {
    let mut states = Vec::new();
    let mut entries = 1u32; // the root sentinel
    let mut current = Some(goal_id);
    while let Some(id) = current {
        states.push(arena[id].state().clone());
        entries += 1;
        current = arena[id].parent();
    }
    states.reverse();
    (states, entries - 2)
}

/// Frontier removal policy for the uninformed strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RemovalPolicy {
    /// Remove the most recently added node (stack). Depth-first behavior.
    Lifo,
    /// Remove the least recently added node (queue). Breadth-first behavior.
    Fifo,
}

/// The shared uninformed search loop.
///
/// Starting from a frontier and visited set holding only the start node,
/// repeatedly removes one node per `policy`. A removed node that passes the
/// goal test ends the search. A removed node whose depth exceeds the
/// configured limit is consumed without expansion: it stays visited but
/// generates no children. Any other node is expanded, and each successor
/// state not yet in the visited set is recorded in both the visited set and
/// the frontier. The search fails when the frontier empties.
fn run_uninformed(
    policy: RemovalPolicy,
    start: &Board,
    goal: &Board,
    depth_limit: Option<u32>,
) -> SearchReport {
    let mut arena = vec![SearchNode {
        state: start.clone(),
        parent: None,
        depth: 0,
    }];
    let mut visited: HashSet<Board> = HashSet::new();
    visited.insert(start.clone());
    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(0);

    loop {
        let id = match policy {
            RemovalPolicy::Lifo => frontier.pop_back(),
            RemovalPolicy::Fifo => frontier.pop_front(),
        };
        let id = match id {
            Some(id) => id,
            None => return SearchReport::failure(visited.len()),
        };

        if goal_check(&arena[id].state, goal) {
            let (path, moves) = reconstruct_path(&arena, id);
            return SearchReport {
                success: true,
                path,
                moves,
                expanded: visited.len(),
            };
        }

        if let Some(limit) = depth_limit {
            if arena[id].depth > limit {
                continue;
            }
        }

        let child_depth = arena[id].depth + 1;
        for child_state in arena[id].state.successors() {
            if visited.contains(&child_state) {
                continue;
            }
            visited.insert(child_state.clone());
            arena.push(SearchNode {
                state: child_state,
                parent: Some(id),
                depth: child_depth,
            });
            frontier.push_back(arena.len() - 1);
        }
    }
}

/// Depth-first search: LIFO frontier, optional depth limit.
///
/// Finds some path to the goal when one is discoverable within the limit;
/// the path is a valid move sequence but not necessarily a shortest one.
pub fn solve_dfs(start: &Board, goal: &Board, depth_limit: Option<u32>) -> SearchReport {
    run_uninformed(RemovalPolicy::Lifo, start, goal, depth_limit)
}

/// Breadth-first search: FIFO frontier, optional depth limit.
///
/// Unit move costs make the first goal hit a shortest path, so the reported
/// move count equals the true solution distance whenever the search
/// succeeds without a limit cutting it short.
pub fn solve_bfs(start: &Board, goal: &Board, depth_limit: Option<u32>) -> SearchReport {
    run_uninformed(RemovalPolicy::Fifo, start, goal, depth_limit)
}

/// Iterative-deepening search: the depth-first loop re-run from scratch
/// with depth limits 1, 2, 3, ... up to and including `max_depth`.
///
/// Failure is reported only after the last limit is exhausted, and the
/// returned expanded count is that of the final attempt. With `max_depth`
/// of zero no attempt is made and the search fails with zero expansions.
// TODO: reuse the node arena across rounds instead of rebuilding it for
// every depth limit.
pub fn solve_ids(start: &Board, goal: &Board, max_depth: u32) -> SearchReport {
    let mut last = SearchReport::failure(0);
    for limit in 1..=max_depth {
        last = run_uninformed(RemovalPolicy::Lifo, start, goal, Some(limit));
        if last.success {
            break;
        }
    }
    last
}

/// Entry in the A* open list.
///
/// Ordered by ascending `f`, with ties broken by ascending insertion
/// sequence so that equal-cost entries pop in the order they were added.
/// `BinaryHeap` is a max-heap, so both comparisons are reversed.
#[derive(Clone, Debug, PartialEq, Eq)]
struct OpenEntry {
    f: u32,
    seq: u64,
    id: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of open nodes for A*, keyed by evaluation score.
///
/// `add` and `pop` both cost O(log n). Equal scores pop in insertion
/// order, which pins the tie-break deterministically.
struct OpenList {
    heap: BinaryHeap<OpenEntry>,
    next_seq: u64,
}

impl OpenList {
    fn new() -> Self {
        OpenList {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    fn add(&mut self, f: u32, id: usize) {
        self.heap.push(OpenEntry {
            f,
            seq: self.next_seq,
            id,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.id)
    }
}

/// A* search: open list ordered by ascending `f = h + depth`, closed set of
/// expanded states, heuristic selected by the caller.
///
/// Each popped node is goal-tested against the open list's minimum; a
/// non-goal node enters the closed set, and, unless its depth exceeds the
/// optional limit, its children are scored immediately and pushed to open.
/// Children whose state is already closed are discarded; a state already
/// waiting in open is pushed again rather than re-prioritized, and whichever
/// copy pops first wins. A closed state is never revisited, even if a
/// cheaper route to it turns up later; with the Manhattan heuristic the
/// first route is already the cheapest, so reported paths stay shortest.
pub fn solve_astar(
    start: &Board,
    goal: &Board,
    heuristic: Heuristic,
    depth_limit: Option<u32>,
) -> SearchReport {
    let start_h = heuristic.evaluate(start, goal);
    let mut arena = vec![AStarNode {
        state: start.clone(),
        parent: None,
        depth: 0,
        h: start_h,
        f: start_h,
    }];
    let mut open = OpenList::new();
    open.add(arena[0].f, 0);
    let mut closed: HashSet<Board> = HashSet::new();

    while let Some(id) = open.pop() {
        if goal_check(&arena[id].state, goal) {
            let (path, moves) = reconstruct_path(&arena, id);
            return SearchReport {
                success: true,
                path,
                moves,
                expanded: closed.len(),
            };
        }

        closed.insert(arena[id].state.clone());

        if let Some(limit) = depth_limit {
            if arena[id].depth > limit {
                continue;
            }
        }

        let child_depth = arena[id].depth + 1;
        for child_state in arena[id].state.successors() {
            if closed.contains(&child_state) {
                continue;
            }
            let h = heuristic.evaluate(&child_state, goal);
            let f = h + child_depth;
            arena.push(AStarNode {
                state: child_state,
                parent: Some(id),
                depth: child_depth,
                h,
                f,
            });
            open.add(f, arena.len() - 1);
        }
    }

    SearchReport::failure(closed.len())
}

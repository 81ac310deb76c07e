use smallvec::SmallVec;

use crate::cell::{Cell, Direction};
use crate::grid::MazeGrid;
use crate::solver::informed::{heuristic_value, informed_search};
use crate::solver::{SearchOutcome, SolveError, SolveOptions};
use crate::{expand_waypoints, C, D};

/// Bits of the four cardinal directions.
const CARDINALS: u8 = 0b0101_0101;

fn has_bit(mask: u8, d: i32) -> bool {
    mask & (1 << d.rem_euclid(8)) != 0
}

/// Whether a node reached by travelling in `dir` has a forced neighbor: a
/// blocked cell adjacent perpendicular to the travel direction that breaks
/// path symmetry and requires a turn through this node. `mask` is the
/// walkable-neighbor bitmask of the node; missing bits (blocked or out of
/// bounds) count as blocking.
pub(crate) fn forced(mask: u8, dir: Direction) -> bool {
    let d = dir.num();
    if dir.diagonal() {
        !has_bit(mask, d + 3) || !has_bit(mask, d + 5)
    } else {
        !has_bit(mask, d + 2) || !has_bit(mask, d + 6)
    }
}

/// The pruned neighborhood of a node reached by travelling in `dir`, as a
/// direction bitmask. Keeps the natural neighbors (those not reachable at
/// equal cost without passing through the node) plus any forced neighbors,
/// intersected with the walkable mask. The rotate-left trick works because
/// direction indices are cyclic with a 45° step.
pub(crate) fn pruned_mask(mask: u8, dir: Direction, allow_diagonal: bool) -> u8 {
    let d = dir.num() as u32;
    let allowed = if !allow_diagonal {
        // Forward plus both perpendiculars; perpendicular probes during the
        // jump scan take care of turns that matter.
        0b0100_0101_u8.rotate_left(d) & CARDINALS
    } else if dir.diagonal() {
        // Natural: forward and its two cardinal components.
        let mut m = 0b1000_0011_u8.rotate_left(d);
        if !has_bit(mask, d as i32 + 3) {
            m |= 1 << ((d + 2) % 8);
        }
        if !has_bit(mask, d as i32 + 5) {
            m |= 1 << ((d + 6) % 8);
        }
        m
    } else {
        let mut m = 1u8 << d;
        if !has_bit(mask, d as i32 + 2) {
            m |= 1 << ((d + 1) % 8);
        }
        if !has_bit(mask, d as i32 + 6) {
            m |= 1 << ((d + 7) % 8);
        }
        m
    };
    mask & allowed
}

/// Straight scan in a cardinal direction: steps until blocked (dead end),
/// the goal, or a forced neighbor. Used both as the cardinal jump in
/// 8-connected mode and as the perpendicular probe.
fn jump_straight<F>(
    grid: &MazeGrid,
    mut current: Cell,
    mut cost: i32,
    dir: Direction,
    goal: &F,
) -> Option<(Cell, i32)>
where
    F: Fn(&Cell) -> bool,
{
    debug_assert!(!dir.diagonal());
    loop {
        let next = current + dir;
        if !grid.is_walkable(next) {
            return None;
        }
        current = next;
        if goal(&current) || forced(grid.neighbour_mask(current), dir) {
            return Some((current, cost));
        }
        cost += C;
    }
}

/// Jumps from `current` in `dir`, skipping symmetric intermediate cells,
/// until the goal, a forced neighbor, or a dead end. Diagonal jumps probe
/// their two cardinal components at every step; 4-connected cardinal jumps
/// probe both perpendiculars so a goal beside the scan line is not passed.
/// The returned cost is the Euclidean length of the jump in scaled units.
fn jump<F>(
    grid: &MazeGrid,
    mut current: Cell,
    mut cost: i32,
    dir: Direction,
    allow_diagonal: bool,
    goal: &F,
) -> Option<(Cell, i32)>
where
    F: Fn(&Cell) -> bool,
{
    if allow_diagonal && !dir.diagonal() {
        return jump_straight(grid, current, cost, dir, goal);
    }
    let step = if dir.diagonal() { D } else { C };
    loop {
        let next = current + dir;
        if !grid.is_walkable(next) {
            return None;
        }
        current = next;
        if goal(&current) || forced(grid.neighbour_mask(current), dir) {
            return Some((current, cost));
        }
        if dir.diagonal() {
            let (side_a, side_b) = dir.components();
            if jump_straight(grid, current, C, side_a, goal).is_some()
                || jump_straight(grid, current, C, side_b, goal).is_some()
            {
                return Some((current, cost));
            }
        } else {
            // 4-connected mode: check the perpendicular lines.
            let perp_a = dir.rotate_ccw(2);
            let perp_b = dir.rotate_cw(2);
            if jump_straight(grid, current, C, perp_a, goal).is_some()
                || jump_straight(grid, current, C, perp_b, goal).is_some()
            {
                return Some((current, cost));
            }
        }
        cost += step;
    }
}

/// Successor generation for JPS: the start node expands its full
/// neighborhood; every later node expands only its pruned directions, each
/// jumped as far as possible.
fn jps_successors<F>(
    grid: &MazeGrid,
    parent: Option<&Cell>,
    node: &Cell,
    allow_diagonal: bool,
    goal: &F,
) -> SmallVec<[(Cell, i32); 8]>
where
    F: Fn(&Cell) -> bool,
{
    let Some(parent_cell) = parent else {
        return grid.neighbors_with_cost(node, allow_diagonal);
    };
    let mut successors = SmallVec::new();
    let Some(travel) = parent_cell.direction_to(node) else {
        return successors;
    };
    let mask = pruned_mask(grid.neighbour_mask(*node), travel, allow_diagonal);
    for d in 0..8 {
        if mask & (1 << d) == 0 {
            continue;
        }
        let dir = Direction::from_num(d);
        let first_step = if dir.diagonal() { D } else { C };
        if let Some(jump_point) = jump(grid, *node, first_step, dir, allow_diagonal, goal) {
            successors.push(jump_point);
        }
    }
    successors
}

/// Jump Point Search: A* over jump points instead of one-step neighbors.
/// Returns the same path costs as A* under an admissible heuristic; the
/// waypoint path is expanded to unit steps before being returned.
pub(crate) fn jps(
    grid: &MazeGrid,
    start: Cell,
    goal: Cell,
    options: &SolveOptions,
) -> Result<SearchOutcome, SolveError> {
    let is_goal = |cell: &Cell| *cell == goal;
    let outcome = informed_search(
        start,
        |parent, node| jps_successors(grid, parent, node, options.allow_diagonal, &is_goal),
        |cell| heuristic_value(options.heuristic, cell, &goal),
        |cell| *cell == goal,
        options.max_expansions,
    )?;
    Ok(SearchOutcome {
        found: outcome.waypoints.is_some(),
        path: outcome.waypoints.map(expand_waypoints).unwrap_or_default(),
        explored: outcome.explored,
        nodes_expanded: outcome.nodes_expanded,
    })
}

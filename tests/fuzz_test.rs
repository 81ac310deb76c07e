//! Randomized cross-checks: every algorithm against a flood-fill
//! reachability oracle, and the optimal algorithms against each other.

use maze_pathfinding::{
    solve, Algorithm, Cell, Heuristic, MazeGrid, SolveOptions, C, D,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALGORITHMS: [Algorithm; 4] = [
    Algorithm::Dfs,
    Algorithm::Bfs,
    Algorithm::Astar,
    Algorithm::Jps,
];

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, wall_rate: f64) -> MazeGrid {
    let mut grid = MazeGrid::new(rows, cols, true);
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            if rng.gen_bool(wall_rate) {
                grid.set_walkable(Cell::new(row, col), false);
            }
        }
    }
    grid
}

fn random_walkable_pair(rng: &mut StdRng, grid: &MazeGrid) -> Option<(Cell, Cell)> {
    let walkable: Vec<Cell> = (0..grid.rows() as i32)
        .flat_map(|row| (0..grid.cols() as i32).map(move |col| Cell::new(row, col)))
        .filter(|cell| grid.is_walkable(*cell))
        .collect();
    if walkable.len() < 2 {
        return None;
    }
    let start = walkable[rng.gen_range(0..walkable.len())];
    let goal = walkable[rng.gen_range(0..walkable.len())];
    Some((start, goal))
}

fn path_cost(path: &[Cell]) -> i32 {
    path.windows(2)
        .map(|pair| {
            if pair[0].row != pair[1].row && pair[0].col != pair[1].col {
                D
            } else {
                C
            }
        })
        .sum()
}

fn assert_path_legal(grid: &MazeGrid, path: &[Cell], diagonal: bool) {
    for pair in path.windows(2) {
        assert_eq!(pair[0].chebyshev_distance(&pair[1]), 1);
        if !diagonal {
            assert_eq!(pair[0].manhattan_distance(&pair[1]), 1);
        }
        assert!(grid.is_walkable(pair[1]));
    }
}

/// `found` must agree with the connected-components oracle for every
/// algorithm in both movement modes.
#[test]
fn found_matches_reachability_oracle() {
    let mut rng = StdRng::seed_from_u64(41);
    for round in 0..60 {
        let rows = rng.gen_range(2..20);
        let cols = rng.gen_range(2..20);
        let grid = random_grid(&mut rng, rows, cols, 0.35);
        let Some((start, goal)) = random_walkable_pair(&mut rng, &grid) else {
            continue;
        };
        for diagonal in [false, true] {
            let expected = grid.reachable(&start, &goal, diagonal);
            let options = SolveOptions {
                allow_diagonal: diagonal,
                heuristic: Heuristic::Octile,
                max_expansions: None,
            };
            for algorithm in ALGORITHMS {
                let result = solve(&grid, start, goal, algorithm, &options).unwrap();
                assert_eq!(
                    result.found, expected,
                    "round {}: {} disagrees with the oracle (diagonal: {})\n{}",
                    round, algorithm, diagonal, grid
                );
                if result.found {
                    assert_eq!(result.path.first(), Some(&start));
                    assert_eq!(result.path.last(), Some(&goal));
                    assert_path_legal(&grid, &result.path, diagonal);
                } else {
                    assert!(result.path.is_empty());
                }
            }
        }
    }
}

/// BFS minimizes hops; on a 4-directional grid every step costs the same, so
/// A* paths must have the same length.
#[test]
fn bfs_and_astar_agree_on_hop_counts() {
    let mut rng = StdRng::seed_from_u64(97);
    for round in 0..60 {
        let grid = random_grid(&mut rng, 14, 14, 0.3);
        let Some((start, goal)) = random_walkable_pair(&mut rng, &grid) else {
            continue;
        };
        let options = SolveOptions::default();
        let bfs = solve(&grid, start, goal, Algorithm::Bfs, &options).unwrap();
        let astar = solve(&grid, start, goal, Algorithm::Astar, &options).unwrap();
        assert_eq!(bfs.found, astar.found, "round {}", round);
        if bfs.found {
            assert_eq!(
                bfs.path.len(),
                astar.path.len(),
                "round {}: BFS and A* disagree on path length\n{}",
                round,
                grid
            );
        }
    }
}

/// JPS is A* over jump points: same path costs, never more expansions.
#[test]
fn jps_and_astar_agree_on_costs() {
    let mut rng = StdRng::seed_from_u64(113);
    for round in 0..60 {
        let grid = random_grid(&mut rng, 16, 16, 0.3);
        let Some((start, goal)) = random_walkable_pair(&mut rng, &grid) else {
            continue;
        };
        for diagonal in [false, true] {
            let options = SolveOptions {
                allow_diagonal: diagonal,
                heuristic: Heuristic::Octile,
                max_expansions: None,
            };
            let astar = solve(&grid, start, goal, Algorithm::Astar, &options).unwrap();
            let jps = solve(&grid, start, goal, Algorithm::Jps, &options).unwrap();
            assert_eq!(astar.found, jps.found, "round {} (diagonal: {})", round, diagonal);
            if astar.found {
                assert_eq!(
                    path_cost(&astar.path),
                    path_cost(&jps.path),
                    "round {}: JPS cost differs from A* (diagonal: {})\n{}",
                    round,
                    diagonal,
                    grid
                );
            }
        }
    }
}

/// DFS gives no optimality guarantee but its paths must still be legal and
/// at least as long as the BFS ones.
#[test]
fn dfs_paths_are_legal_and_never_shorter_than_bfs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..40 {
        let grid = random_grid(&mut rng, 12, 12, 0.25);
        let Some((start, goal)) = random_walkable_pair(&mut rng, &grid) else {
            continue;
        };
        let options = SolveOptions::default();
        let dfs = solve(&grid, start, goal, Algorithm::Dfs, &options).unwrap();
        let bfs = solve(&grid, start, goal, Algorithm::Bfs, &options).unwrap();
        assert_eq!(dfs.found, bfs.found);
        if dfs.found {
            assert_path_legal(&grid, &dfs.path, false);
            assert!(dfs.path.len() >= bfs.path.len());
        }
    }
}

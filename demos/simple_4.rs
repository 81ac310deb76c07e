//! Minimal example: solve a small maze with each of the four algorithms and
//! print the paths.

use maze_pathfinding::{cost_as_float, solve, Algorithm, MazeGrid, SolveOptions, C};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let maze = MazeGrid::from_ascii(
        "A..#....\n\
         .#.#.##.\n\
         .#.#.#..\n\
         .#...#.#\n\
         .#####.#\n\
         .......B\n",
    )?;
    let start = maze.start.ok_or("maze has no start marker")?;
    let goal = maze.goal.ok_or("maze has no goal marker")?;
    println!("{}", maze.grid);

    for algorithm in [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Astar,
        Algorithm::Jps,
    ] {
        let result = solve(&maze.grid, start, goal, algorithm, &SolveOptions::default())?;
        println!(
            "{:>4}: found: {}, steps: {}, cost: {}, nodes expanded: {}",
            algorithm.to_string(),
            result.found,
            result.path.len().saturating_sub(1),
            cost_as_float((result.path.len().saturating_sub(1)) as i32 * C),
            result.nodes_expanded
        );
    }
    Ok(())
}

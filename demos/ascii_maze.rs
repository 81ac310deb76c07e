//! Solves an ASCII maze with diagonals enabled and renders the explored
//! cells and the found path on top of it.

use maze_pathfinding::{
    solve, Algorithm, Cell, Heuristic, MazeGrid, SearchResult, SolveOptions,
};

const MAZE: &str = "\
A....#.......#......
.###.#.#####.#.####.
...#.#.....#...#....
.#.#.#####.#.#.#.###
.#.#.....#.#.#.#...#
.#.#####.#.#.#.###.#
.#.......#...#.....#
.#########.#######.#
...........#.......B
";

fn render(grid: &MazeGrid, result: &SearchResult) -> String {
    let on_path: Vec<Cell> = result.path.clone();
    let mut out = String::new();
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let cell = Cell::new(row, col);
            let ch = if !grid.is_walkable(cell) {
                '#'
            } else if on_path.contains(&cell) {
                '*'
            } else if result.explored.contains(&cell) {
                'o'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let maze = MazeGrid::from_ascii(MAZE)?;
    let start = maze.start.ok_or("maze has no start marker")?;
    let goal = maze.goal.ok_or("maze has no goal marker")?;
    let options = SolveOptions {
        allow_diagonal: true,
        heuristic: Heuristic::Octile,
        max_expansions: None,
    };

    for algorithm in [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Astar,
        Algorithm::Jps,
    ] {
        let result = solve(&maze.grid, start, goal, algorithm, &options)?;
        println!(
            "{} (found: {}, steps: {}, nodes expanded: {})",
            algorithm,
            result.found,
            result.path.len().saturating_sub(1),
            result.nodes_expanded
        );
        println!("{}", render(&maze.grid, &result));
    }
    Ok(())
}

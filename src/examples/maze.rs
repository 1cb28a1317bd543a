//! A rectangular grid maze, the classic consumer of the search engines:
//! DFS finds *a* route, BFS the fewest-step route, and A* the fewest-step
//! route guided by Manhattan distance.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::search::{
    node::Cost,
    problem::{InformedProblem, SearchProblem},
};

/// What one maze cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Blocked,
    Start,
    Goal,
}

/// A position in the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MazeLocation {
    pub row: usize,
    pub column: usize,
}

/// Straight-line-free grid distance between two locations.
pub fn manhattan_distance(from: MazeLocation, to: MazeLocation) -> Cost {
    (from.row.abs_diff(to.row) + from.column.abs_diff(to.column)) as Cost
}

/// A rectangular maze with a start and a goal.
///
/// Implements [`SearchProblem`] (moves in the four cardinal directions,
/// blocked cells impassable) and [`InformedProblem`] (Manhattan distance,
/// which is admissible and consistent for unit-cost cardinal moves).
#[derive(Debug, Clone)]
pub struct Maze {
    rows: usize,
    columns: usize,
    start: MazeLocation,
    goal: MazeLocation,
    grid: Vec<Vec<Cell>>,
}

impl Maze {
    /// An unobstructed maze.
    pub fn open(rows: usize, columns: usize, start: MazeLocation, goal: MazeLocation) -> Self {
        let mut grid = vec![vec![Cell::Empty; columns]; rows];
        grid[start.row][start.column] = Cell::Start;
        grid[goal.row][goal.column] = Cell::Goal;
        Self {
            rows,
            columns,
            start,
            goal,
            grid,
        }
    }

    /// A maze whose cells are independently blocked with probability
    /// `sparseness`.
    ///
    /// The caller supplies the rng, so a seeded generator reproduces the
    /// same maze. Start and goal cells are always passable.
    pub fn random<R: Rng>(
        rows: usize,
        columns: usize,
        start: MazeLocation,
        goal: MazeLocation,
        sparseness: f64,
        rng: &mut R,
    ) -> Self {
        let mut maze = Self::open(rows, columns, start, goal);
        for row in 0..rows {
            for column in 0..columns {
                if maze.grid[row][column] == Cell::Empty && rng.gen_bool(sparseness) {
                    maze.grid[row][column] = Cell::Blocked;
                }
            }
        }
        maze
    }

    /// Blocks a single cell. Blocking the start or goal is ignored.
    pub fn block(&mut self, location: MazeLocation) {
        if self.grid[location.row][location.column] == Cell::Empty {
            self.grid[location.row][location.column] = Cell::Blocked;
        }
    }

    pub fn start(&self) -> MazeLocation {
        self.start
    }

    pub fn goal(&self) -> MazeLocation {
        self.goal
    }

    /// Renders the maze with a solved path overlaid as `*`.
    pub fn solved_view(&self, path: &[MazeLocation]) -> String {
        self.render(path)
    }

    fn render(&self, path: &[MazeLocation]) -> String {
        let mut out = String::with_capacity(self.rows * (self.columns + 1));
        for row in 0..self.rows {
            for column in 0..self.columns {
                let location = MazeLocation { row, column };
                let glyph = match self.grid[row][column] {
                    Cell::Start => 'S',
                    Cell::Goal => 'G',
                    Cell::Blocked => 'X',
                    Cell::Empty if path.contains(&location) => '*',
                    Cell::Empty => ' ',
                };
                out.push(glyph);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

impl SearchProblem for Maze {
    type State = MazeLocation;

    fn is_goal(&self, state: &Self::State) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Self::State) -> Vec<Self::State> {
        let MazeLocation { row, column } = *state;
        let mut locations = Vec::new();
        if row + 1 < self.rows && self.grid[row + 1][column] != Cell::Blocked {
            locations.push(MazeLocation {
                row: row + 1,
                column,
            });
        }
        if row > 0 && self.grid[row - 1][column] != Cell::Blocked {
            locations.push(MazeLocation {
                row: row - 1,
                column,
            });
        }
        if column + 1 < self.columns && self.grid[row][column + 1] != Cell::Blocked {
            locations.push(MazeLocation {
                row,
                column: column + 1,
            });
        }
        if column > 0 && self.grid[row][column - 1] != Cell::Blocked {
            locations.push(MazeLocation {
                row,
                column: column - 1,
            });
        }
        locations
    }
}

impl InformedProblem for Maze {
    fn heuristic(&self, state: &Self::State) -> Cost {
        manhattan_distance(*state, self.goal)
    }
}

use clap::Parser;
use quaero::examples::maze::{Maze, MazeLocation};
use quaero::search::engine::{astar, bfs, dfs, SearchOutcome, SearchStats};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of rows in the generated maze.
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Number of columns in the generated maze.
    #[arg(long, default_value_t = 10)]
    columns: usize,

    /// Probability that any given cell is blocked.
    #[arg(long, default_value_t = 0.2)]
    sparseness: f64,

    /// Seed for the maze generator.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Emit the results as JSON instead of rendered mazes.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct EngineReport {
    engine: &'static str,
    solved: bool,
    cost: Option<u64>,
    path: Vec<MazeLocation>,
    stats: SearchStats,
}

fn report(engine: &'static str, outcome: &SearchOutcome<MazeLocation>) -> EngineReport {
    EngineReport {
        engine,
        solved: outcome.is_goal_reached(),
        cost: outcome.cost(),
        path: outcome.path().unwrap_or_default(),
        stats: outcome.stats.clone(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // 1. Generate a random maze from the seed.
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let start = MazeLocation { row: 0, column: 0 };
    let goal = MazeLocation {
        row: args.rows - 1,
        column: args.columns - 1,
    };
    let maze = Maze::random(args.rows, args.columns, start, goal, args.sparseness, &mut rng);

    // 2. Run all three engines over the same maze.
    let outcomes = [
        ("dfs", dfs(&maze, maze.start())),
        ("bfs", bfs(&maze, maze.start())),
        ("astar", astar(&maze, maze.start())),
    ];

    // 3. Report.
    if args.json {
        let reports: Vec<EngineReport> = outcomes
            .into_iter()
            .map(|(engine, outcome)| report(engine, &outcome))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).expect("reports serialise")
        );
        return;
    }

    println!("{maze}");
    for (engine, outcome) in &outcomes {
        match outcome.path() {
            Some(path) => {
                println!(
                    "\n{} found a path of cost {}:",
                    engine,
                    outcome.cost().expect("solved searches have a cost")
                );
                println!("{}", maze.solved_view(&path));
            }
            None => println!("\n{engine} found no path"),
        }
        println!(
            "expanded {} nodes, generated {}, frontier peak {}",
            outcome.stats.nodes_expanded, outcome.stats.nodes_generated, outcome.stats.frontier_peak
        );
    }
}

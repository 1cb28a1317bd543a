use clap::Parser;
use quaero::csp::stats::render_stats_table;
use quaero::error::Result;
use quaero::examples::queens::queens_solver;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board size, which is also the number of queens.
    #[arg(long, default_value_t = 8)]
    n: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // 1. Build the solver: one variable per column, row domain 1..=n.
    let solver = queens_solver(args.n)?;

    // 2. Solve.
    let (solution, stats) = solver.solve();

    // 3. Render the board.
    match solution {
        Some(solution) => {
            let n = args.n as usize;
            let mut board = vec![vec!['.'; n]; n];
            for column in 1..=args.n {
                let row = *solution.get(&column).expect("every column is bound");
                board[(row - 1) as usize][(column - 1) as usize] = 'Q';
            }
            for row in board {
                println!("{}", row.into_iter().collect::<String>());
            }
        }
        None => println!("no arrangement of {} queens avoids every attack", args.n),
    }

    // 4. Report search effort.
    println!(
        "\nnodes visited: {}, backtracks: {}",
        stats.nodes_visited, stats.backtracks
    );
    println!("{}", render_stats_table(&stats, solver.constraints()));

    Ok(())
}

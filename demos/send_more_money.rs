use clap::Parser;
use quaero::csp::stats::render_stats_table;
use quaero::error::Result;
use quaero::examples::send_more_money::{send_more_money_solver, LETTERS};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Emit the letter-to-digit mapping as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // 1. Build and solve the cryptarithm.
    let solver = send_more_money_solver()?;
    let (solution, stats) = solver.solve();

    // 2. Report the mapping.
    match solution {
        Some(solution) if args.json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&solution).expect("mapping serialises")
            );
        }
        Some(solution) => {
            let value = |word: &str| {
                word.chars().fold(0u64, |acc, letter| {
                    acc * 10 + u64::from(*solution.get(&letter).expect("letter is bound"))
                })
            };
            for letter in LETTERS {
                println!(
                    "{} = {}",
                    letter,
                    solution.get(&letter).expect("letter is bound")
                );
            }
            println!("\n{} + {} = {}", value("SEND"), value("MORE"), value("MONEY"));
        }
        None => println!("no digit assignment satisfies SEND + MORE = MONEY"),
    }

    println!(
        "\nnodes visited: {}, backtracks: {}",
        stats.nodes_visited, stats.backtracks
    );
    println!("{}", render_stats_table(&stats, solver.constraints()));

    Ok(())
}

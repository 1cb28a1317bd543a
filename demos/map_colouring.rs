use clap::Parser;
use quaero::csp::stats::render_stats_table;
use quaero::error::Result;
use quaero::examples::map_colouring::{australia_solver, Colour, REGIONS};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of colours in the palette (Australia needs 3).
    #[arg(long, default_value_t = 3)]
    colours: usize,

    /// Emit the colouring as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // 1. Build the solver over the requested palette.
    let palette = [Colour::Red, Colour::Green, Colour::Blue];
    let palette = &palette[..args.colours.min(palette.len())];
    let solver = australia_solver(palette)?;

    // 2. Solve.
    let (solution, stats) = solver.solve();

    // 3. Report the colouring.
    match solution {
        Some(solution) if args.json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&solution).expect("colouring serialises")
            );
        }
        Some(solution) => {
            for region in REGIONS {
                let colour = solution.get(&region).expect("every region is coloured");
                println!("{:?} -> {:?}", region, colour);
            }
        }
        None => println!("{} colours are not enough for this map", palette.len()),
    }

    println!(
        "\nnodes visited: {}, backtracks: {}",
        stats.nodes_visited, stats.backtracks
    );
    println!("{}", render_stats_table(&stats, solver.constraints()));

    Ok(())
}

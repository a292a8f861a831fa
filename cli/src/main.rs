use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use common::{MAX_DISKS, Solution, solve};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solves the Tower of Hanoi puzzle, printing the peg layouts and every move.", long_about = None)]
struct Args {
    /// Number of disks stacked on the start peg
    #[clap(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=MAX_DISKS as i64))]
    disks: u8,

    /// Peg the disks start on (1 to 3)
    #[clap(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    from: u8,

    /// Peg the disks must be moved to (1 to 3)
    #[clap(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=3))]
    to: u8,

    /// Print the solution as JSON instead of text
    #[clap(long)]
    json: bool,

    /// Raise diagnostic output on stderr (-v, -vv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    configure_logging(args.verbose)?;

    // pegs are 1-indexed on the command line, 0-indexed internally
    let solution = solve(args.disks, args.from - 1, args.to - 1).context("invalid puzzle input")?;

    if args.json {
        print_json(&solution)?;
    } else {
        print_text(&solution);
    }

    Ok(())
}

fn configure_logging(verbosity: u8) -> anyhow::Result<()> {
    let directives = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to set up logging")
}

fn print_text(solution: &Solution) {
    println!("{}", "> Begin state:".bold());
    println!();
    println!("{}", solution.begin);
    println!();

    println!("{}", "> End state:".bold());
    println!();
    println!("{}", solution.end);
    println!();

    let headline = format!("> Finished in {} moves:", solution.moves.len());
    println!("{}", headline.bold());
    println!();
    for (nr, mv) in solution.moves.iter().enumerate() {
        println!("\tMove {}: {}", nr + 1, mv);
    }
}

fn print_json(solution: &Solution) -> anyhow::Result<()> {
    let json = serde_json::json!({
        "nr_moves": solution.moves.len(),
        "moves": solution.moves,
        "final_state": solution.end.pegs(),
    });
    println!("{}", serde_json::to_string_pretty(&json)?);

    Ok(())
}

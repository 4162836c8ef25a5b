use clique_bench::pipeline;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::path::PathBuf;

use clap::Parser;

/// Generate a random graph, list its maximal cliques and print the maximum clique size
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    #[clap(short = 'n', long, default_value_t = 50)]
    nnodes: usize,

    /// edge probability
    #[clap(short, default_value_t = 0.5)]
    p: f64,

    #[clap(short, long)]
    seed: Option<u64>,

    #[clap(long, default_value = "files/graph.txt")]
    graph: PathBuf,

    #[clap(long, default_value = "files/graph_cliques.txt")]
    cliques: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => Xoshiro256StarStar::seed_from_u64(seed),
        None => Xoshiro256StarStar::from_entropy(),
    };
    let size = pipeline(args.nnodes, args.p, &args.graph, &args.cliques, &mut rng)?;
    println!("{}", size);
    Ok(())
}

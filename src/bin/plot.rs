use clique_bench::plot_results;
use std::path::PathBuf;

use clap::Parser;

/// Plot stored timings of several algorithms into one chart
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    #[clap(required = true)]
    algorithms: Vec<String>,

    #[clap(long, default_value = "results")]
    results_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let out = plot_results(&args.algorithms, &args.results_dir)?;
    println!("{}", out.display());
    Ok(())
}

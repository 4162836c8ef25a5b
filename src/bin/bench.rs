use clique_bench::*;
use std::path::PathBuf;

use clap::Parser;

/// Time external maximum clique programs over a sweep of random graph sizes
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// names of the executables (local) or job files without `.slurm` (queue) in the source directory
    #[clap(required = true)]
    algorithms: Vec<String>,

    /// smallest graph
    #[clap(long, default_value_t = 10)]
    min_vertices: usize,

    /// largest graph (inclusive)
    #[clap(long, default_value_t = 100)]
    max_vertices: usize,

    #[clap(long, default_value_t = 10)]
    step: usize,

    /// where to run: "queue" or "local"
    #[clap(short, long, default_value = "queue")]
    run_mode: String,

    /// algorithm to start through the parallel launcher (local mode only), repeatable
    #[clap(long)]
    parallel: Vec<String>,

    #[clap(long, default_value = "results")]
    results_dir: PathBuf,

    /// executables and job files
    #[clap(long, default_value = "src")]
    source_dir: PathBuf,

    /// graph and clique report go here
    #[clap(long, default_value = "files")]
    files_dir: PathBuf,

    /// edge probability of the random graphs
    #[clap(short, long, default_value_t = 0.5)]
    probability: f64,

    /// random seed, fresh entropy if absent
    #[clap(short, long)]
    seed: Option<u64>,

    /// parallel launcher program
    #[clap(long, default_value = "mpirun")]
    mpi: String,

    /// batch submission program, called with --wait
    #[clap(long, default_value = "sbatch")]
    queue: String,

    /// only run, do not plot afterwards
    #[clap(long)]
    no_plot: bool,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = BenchConfig {
        algorithms: args.algorithms,
        min_size: args.min_vertices,
        max_size: args.max_vertices,
        step: args.step,
        run_mode: args.run_mode,
        parallel_algorithms: args.parallel,
        results_dir: args.results_dir,
        source_dir: args.source_dir,
        files_dir: args.files_dir,
        edge_probability: args.probability,
        seed: args.seed,
        launchers: Launchers { mpi: args.mpi, queue: args.queue, ..Launchers::default() },
    };
    run_and_save(&config)?;

    if !args.no_plot {
        let out = plot_results(&config.algorithms, &config.results_dir)?;
        println!("{}", out.display());
    }
    Ok(())
}

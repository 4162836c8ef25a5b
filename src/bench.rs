//! The size sweep: build a graph, run every algorithm on it, keep the timings.

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::{require_exists, Error, Result};
use crate::graph::MAX_NODES;
use crate::io::{self, ResultsTable};
use crate::pipeline::{self, DEFAULT_EDGE_PROBABILITY};
use crate::runner::{run_executable, run_on_queue, Launchers, RunMode};

/// the external executables read the graph from here, relative to their working directory
pub const GRAPH_FILE: &str = "graph.txt";
pub const CLIQUES_FILE: &str = "graph_cliques.txt";

#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub algorithms: Vec<String>,
    pub min_size: usize,
    /// inclusive
    pub max_size: usize,
    pub step: usize,
    /// `queue` or `local`
    pub run_mode: String,
    /// algorithms started through the parallel launcher in local mode
    pub parallel_algorithms: Vec<String>,
    pub results_dir: PathBuf,
    /// executables and job files
    pub source_dir: PathBuf,
    /// where graph and clique report are written
    pub files_dir: PathBuf,
    pub edge_probability: f64,
    pub seed: Option<u64>,
    pub launchers: Launchers,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            algorithms: vec![],
            min_size: 10,
            max_size: 100,
            step: 10,
            run_mode: "queue".to_string(),
            parallel_algorithms: vec![],
            results_dir: PathBuf::from("results"),
            source_dir: PathBuf::from("src"),
            files_dir: PathBuf::from("files"),
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            seed: None,
            launchers: Launchers::default(),
        }
    }
}

impl BenchConfig {
    /// the sampled graph sizes
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.min_size ..= self.max_size).step_by(self.step.max(1))
    }

    /// Checks everything that can be checked before the first graph is built.
    pub fn validate(&self) -> Result<RunMode> {
        require_exists("results directory", &self.results_dir)?;
        require_exists("source directory", &self.source_dir)?;
        let run_mode = self.run_mode.parse()?;
        if self.step == 0 {
            return Err(Error::InvalidParameter { name: "step", reason: "must be positive".to_string() });
        }
        if self.min_size > self.max_size {
            return Err(Error::InvalidParameter {
                name: "min_size",
                reason: format!("{} is larger than max_size {}", self.min_size, self.max_size),
            });
        }
        if !(0.0 ..= 1.0).contains(&self.edge_probability) {
            return Err(Error::InvalidParameter {
                name: "edge_probability",
                reason: format!("{} is not in [0, 1]", self.edge_probability),
            });
        }
        if self.max_size > MAX_NODES {
            return Err(Error::InvalidParameter {
                name: "max_size",
                reason: format!("{} is more than {}", self.max_size, MAX_NODES),
            });
        }
        require_exists("files directory", &self.files_dir)?;
        Ok(run_mode)
    }
}

/// Writes one algorithm's samples as `results_<algorithm>`, replacing an older table.
pub fn save_results(times: &[f64], sizes: &[usize], algorithm: &str, results_dir: &Path) -> Result<PathBuf> {
    require_exists("results directory", results_dir)?;
    if times.len() != sizes.len() {
        return Err(Error::InvalidParameter {
            name: "times",
            reason: format!("{} timings for {} graph sizes", times.len(), sizes.len()),
        });
    }
    let table = ResultsTable { time: times.to_vec(), num_vertices: sizes.to_vec() };
    let fname = io::results_table_path(results_dir, algorithm);
    io::save_results_table(&fname, &table)?;
    log::info!("results for {} saved in {}", algorithm, fname.display());
    Ok(fname)
}

pub fn load_results(algorithm: &str, results_dir: &Path) -> Result<ResultsTable> {
    io::load_results_table(&io::results_table_path(results_dir, algorithm))
}

/// Runs the whole sweep and stores one results table per algorithm.
///
/// The first failure ends the run; the failing algorithm's samples are not saved.
pub fn run_and_save(config: &BenchConfig) -> Result<()> {
    let run_mode = config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => Xoshiro256StarStar::seed_from_u64(seed),
        None => Xoshiro256StarStar::from_entropy(),
    };
    let graph_path = config.files_dir.join(GRAPH_FILE);
    let cliques_path = config.files_dir.join(CLIQUES_FILE);

    for algorithm in &config.algorithms {
        log::info!("{}", "-+-".repeat(30));
        log::info!("Algorithm: {}", algorithm);
        let parallel = config.parallel_algorithms.contains(algorithm);
        let mut times = vec![];
        let mut sizes = vec![];
        for nnodes in config.sizes() {
            let max_clique_size = pipeline::pipeline(nnodes, config.edge_probability, &graph_path, &cliques_path, &mut rng)?;
            let t = match run_mode {
                RunMode::Local => run_executable(algorithm, max_clique_size, parallel, &config.source_dir, &config.launchers)?,
                RunMode::Queue => run_on_queue(algorithm, max_clique_size, &config.source_dir, &config.launchers)?,
            };
            log::info!("{}: {} vertices, maximum clique {}, {:.4} s", algorithm, nnodes, max_clique_size, t);
            times.push(t);
            sizes.push(nnodes);
        }
        save_results(&times, &sizes, algorithm, &config.results_dir)?;
    }
    log::info!("{}", "-+-".repeat(30));
    Ok(())
}

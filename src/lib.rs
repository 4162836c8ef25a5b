//! Benchmark harness for external maximum clique programs.
//!
//! Random graphs are generated and their maximum clique size is computed here, then the
//! benchmarked executables are started with that size as argument and their wall-clock time
//! is recorded per algorithm and plotted.

pub mod error;
pub use error::{Error, Result};

pub mod graph;
pub mod io;
pub mod pipeline;
pub mod runner;
pub mod bench;
pub mod plot;

mod util;

pub use bench::{run_and_save, save_results, load_results, BenchConfig};
pub use pipeline::{generate, verify, pipeline};
pub use plot::plot_results;
pub use runner::{run_executable, run_on_queue, Launchers, RunMode};

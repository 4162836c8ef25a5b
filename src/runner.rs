//! Launching the benchmarked executables and timing them.

use std::path::Path;
use std::process::Command;
use std::str::FromStr;
use std::time::Instant;

use crate::error::{require_file, Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// submit a job file to the batch queue
    Queue,
    /// run the executable on this machine
    Local,
}

impl FromStr for RunMode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "queue" => Ok(RunMode::Queue),
            "local" => Ok(RunMode::Local),
            other => Err(Error::InvalidRunMode(other.to_string())),
        }
    }
}

/// External programs used to start the benchmarked code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Launchers {
    /// multi-process launcher, called as `<mpi> <mpi_args..> -np <workers> <exe> <arg>`
    pub mpi: String,
    pub mpi_args: Vec<String>,
    /// blocking batch submission, called as `<queue> <queue_args..> <job file> <arg>`
    pub queue: String,
    pub queue_args: Vec<String>,
}

impl Default for Launchers {
    fn default() -> Self {
        Launchers {
            mpi: "mpirun".to_string(),
            mpi_args: vec![],
            queue: "sbatch".to_string(),
            queue_args: vec!["--wait".to_string()],
        }
    }
}

/// worker count handed to the parallel launcher
pub fn processor_count() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Runs `cmd` to completion. Returns the elapsed wall-clock seconds, or an execution error
/// on a non-zero exit status.
fn timed_run(mut cmd: Command) -> Result<f64> {
    let command = format!("{:?}", cmd);
    log::debug!("running {}", command);
    let start = Instant::now();
    let status = cmd.status()?;
    let elapsed = start.elapsed().as_secs_f64();
    if !status.success() {
        return Err(Error::Execution { command, status });
    }
    return Ok(elapsed);
}

/// Runs `<source_dir>/<executable> <arg>`, directly or through the parallel launcher with one
/// worker per processor.
pub fn run_executable(executable: &str, arg: usize, use_parallel_launch: bool, source_dir: &Path, launchers: &Launchers) -> Result<f64> {
    let exe = source_dir.join(executable);
    require_file("executable", &exe)?;

    let cmd = if use_parallel_launch {
        let mut cmd = Command::new(&launchers.mpi);
        cmd.args(&launchers.mpi_args)
            .arg("-np").arg(processor_count().to_string())
            .arg(&exe).arg(arg.to_string());
        cmd
    } else {
        let mut cmd = Command::new(&exe);
        cmd.arg(arg.to_string());
        cmd
    };
    timed_run(cmd)
}

/// Submits `<source_dir>/<job_name>.slurm` with `arg` and waits for the job to finish.
pub fn run_on_queue(job_name: &str, arg: usize, source_dir: &Path, launchers: &Launchers) -> Result<f64> {
    let job_file = source_dir.join(format!("{job_name}.slurm"));
    require_file("job file", &job_file)?;

    let mut cmd = Command::new(&launchers.queue);
    cmd.args(&launchers.queue_args).arg(&job_file).arg(arg.to_string());
    timed_run(cmd)
}

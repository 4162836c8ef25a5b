use std::fs::File;
use std::io::{prelude::*, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::graph::*;

/// Reads the `<n> <m>` + `<u> <v>` edge list format (1-indexed labels).
///
/// The edge count in the header is not checked. The vertex count is the larger of the header
/// value and the largest label in the body, and neither may exceed `MAX_NODES`.
pub fn read_edge_list_file<G: UndirectedGraphNew>(fname: &Path) -> Result<G> {
    let reader = BufReader::new(File::open(fname)?);
    let mut nnodes = 0;
    let mut edges = vec![];
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let parse_error = || Error::Parse { line: i + 1, content: line.clone() };
        let mut fields = line.split_whitespace();
        if i == 0 {
            nnodes = fields.next().and_then(|s| s.parse::<usize>().ok())
                .filter(|&n| n <= MAX_NODES)
                .ok_or_else(parse_error)?;
            continue;
        }
        let (a, b) = match (fields.next(), fields.next()) {
            (Some(a), Some(b)) => (a, b),
            (None, _) => continue, // blank
            _ => return Err(parse_error()),
        };
        let a: Node = a.parse().map_err(|_| parse_error())?;
        let b: Node = b.parse().map_err(|_| parse_error())?;
        if a == 0 || b == 0 || a as usize > MAX_NODES || b as usize > MAX_NODES {
            return Err(parse_error());
        }
        if a == b {
            log::warn!("{}:{}: ignoring self-loop on {}", fname.display(), i + 1, a);
            continue;
        }
        nnodes = nnodes.max(a.max(b) as usize);
        edges.push([a - 1, b - 1]);
    }
    return Ok(G::from_edges(nnodes, &edges));
}

pub fn save_edge_list_file<G: UndirectedGraph>(fname: &Path, graph: &G) -> Result<()> {
    let edges = graph.edges();
    let mut out = BufWriter::new(File::create(fname)?);
    writeln!(out, "{} {}", graph.nnodes(), edges.len())?;
    for [a, b] in edges {
        writeln!(out, "{} {}", a + 1, b + 1)?;
    }
    out.flush()?;
    Ok(())
}

/// `ranked` must already be ordered with the maximum clique first.
pub fn save_clique_report(fname: &Path, ranked: &[Vec<Node>]) -> Result<()> {
    let mut out = BufWriter::new(File::create(fname)?);
    writeln!(out, "Maximal Cliques found:")?;
    for clique in ranked {
        writeln!(out, "{:?}", clique)?;
    }
    let maximum: &[Node] = ranked.first().map(|c| c.as_slice()).unwrap_or(&[]);
    writeln!(out, "\nMaximum Clique found: {:?}", maximum)?;
    out.flush()?;
    Ok(())
}

/// Timings of one algorithm, stored column-wise.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsTable {
    /// wall-clock seconds
    pub time: Vec<f64>,
    pub num_vertices: Vec<usize>,
}

impl ResultsTable {
    pub fn rows(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.time.iter().cloned().zip(self.num_vertices.iter().cloned())
    }
}

pub fn results_table_path(results_dir: &Path, algorithm: &str) -> PathBuf {
    results_dir.join(format!("results_{algorithm}.bincode"))
}

pub fn save_results_table(fname: &Path, table: &ResultsTable) -> Result<()> {
    let mut out = BufWriter::new(File::create(fname)?);
    bincode::serialize_into(&mut out, table)?;
    out.flush()?;
    Ok(())
}

pub fn load_results_table(fname: &Path) -> Result<ResultsTable> {
    let reader = BufReader::new(File::open(fname)?);
    Ok(bincode::deserialize_from(reader)?)
}

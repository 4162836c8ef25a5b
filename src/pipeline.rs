//! Random graph generation and the reference maximum clique computation.

use std::cmp::Reverse;
use std::path::Path;

use rand::Rng;

use crate::error::{Error, Result};
use crate::graph::*;
use crate::io;

/// Edge probability used by the benchmark sweep.
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.5;

/// Writes a random `G(vertex_count, edge_probability)` graph to `destination`.
pub fn generate<R: Rng>(vertex_count: usize, edge_probability: f64, destination: &Path, rng: &mut R) -> Result<()> {
    if !(0.0 ..= 1.0).contains(&edge_probability) {
        return Err(Error::InvalidParameter {
            name: "edge_probability",
            reason: format!("{edge_probability} is not in [0, 1]"),
        });
    }
    if vertex_count > MAX_NODES {
        return Err(Error::InvalidParameter {
            name: "vertex_count",
            reason: format!("{vertex_count} is more than {MAX_NODES}"),
        });
    }
    let g = CompactMatrixGraph::gen_gnp(vertex_count, edge_probability, rng);
    io::save_edge_list_file(destination, &g)?;
    log::info!("graph with {} vertices and {} edges saved in {}", vertex_count, g.nedges(), destination.display());
    Ok(())
}

/// Sorts by descending size. Equal sizes are ordered lexicographically, so the first entry is
/// the lexicographically smallest maximum clique.
pub fn rank_cliques(cliques: &mut Vec<Vec<Node>>) {
    for c in cliques.iter_mut() {
        c.sort_unstable();
    }
    cliques.sort_by(|a, b| (Reverse(a.len()), a).cmp(&(Reverse(b.len()), b)));
}

/// Loads the graph in `source`, writes its ranked maximal cliques (1-indexed) to
/// `destination` and returns the maximum clique size.
pub fn verify(source: &Path, destination: &Path) -> Result<usize> {
    let g: CompactMatrixGraph = io::read_edge_list_file(source)?;
    let mut cliques = g.compute_maximal_cliques();
    for c in &mut cliques {
        for v in c.iter_mut() {
            *v += 1;
        }
    }
    rank_cliques(&mut cliques);
    io::save_clique_report(destination, &cliques)?;

    let max_size = cliques.first().map(|c| c.len()).unwrap_or(0);
    let maximum_cliques = cliques.iter().take_while(|c| c.len() == max_size);
    log::info!("{} maximal cliques, maximum size {}", cliques.len(), max_size);
    for c in maximum_cliques {
        log::info!("maximum clique {:?}", c);
    }
    return Ok(max_size);
}

/// generate, then verify
pub fn pipeline<R: Rng>(vertex_count: usize, edge_probability: f64, graph_path: &Path, cliques_path: &Path, rng: &mut R) -> Result<usize> {
    generate(vertex_count, edge_probability, graph_path, rng)?;
    verify(graph_path, cliques_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::scratch_dir;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    use std::fs;

    fn parse_report(content: &str) -> (Vec<Vec<Node>>, Vec<Node>) {
        let parse = |s: &str| -> Vec<Node> {
            s.trim_matches(|c| c == '[' || c == ']')
                .split(", ")
                .filter(|x| !x.is_empty())
                .map(|x| x.parse().unwrap())
                .collect()
        };
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Maximal Cliques found:"));
        let mut cliques = vec![];
        let mut maximum = None;
        for line in lines {
            if let Some(rest) = line.strip_prefix("Maximum Clique found: ") {
                maximum = Some(parse(rest));
            } else if !line.is_empty() {
                cliques.push(parse(line));
            }
        }
        (cliques, maximum.unwrap())
    }

    #[test]
    fn single_vertex() {
        let dir = scratch_dir("pipeline-single");
        let (graph, cliques) = (dir.join("graph.txt"), dir.join("graph_cliques.txt"));
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let size = pipeline(1, 0.5, &graph, &cliques, &mut rng).unwrap();
        assert_eq!(size, 1);
        assert_eq!(fs::read_to_string(&graph).unwrap(), "1 0\n");
        let (all, maximum) = parse_report(&fs::read_to_string(&cliques).unwrap());
        assert_eq!(all, vec![vec![1]]);
        assert_eq!(maximum, vec![1]);
    }

    #[test]
    fn no_vertices() {
        let dir = scratch_dir("pipeline-empty");
        let (graph, cliques) = (dir.join("graph.txt"), dir.join("graph_cliques.txt"));
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        assert_eq!(pipeline(0, 0.5, &graph, &cliques, &mut rng).unwrap(), 0);
        assert_eq!(fs::read_to_string(&cliques).unwrap(), "Maximal Cliques found:\n\nMaximum Clique found: []\n");
    }

    #[test]
    fn written_edges_are_in_range() {
        let dir = scratch_dir("pipeline-range");
        let graph = dir.join("graph.txt");
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let n = 30;
        generate(n, 0.5, &graph, &mut rng).unwrap();
        let content = fs::read_to_string(&graph).unwrap();
        let mut lines = content.lines();
        let header: Vec<usize> = lines.next().unwrap().split(' ').map(|x| x.parse().unwrap()).collect();
        assert_eq!(header[0], n);
        let mut count = 0;
        for line in lines {
            let e: Vec<usize> = line.split(' ').map(|x| x.parse().unwrap()).collect();
            assert!(1 <= e[0] && e[0] <= n && 1 <= e[1] && e[1] <= n);
            assert_ne!(e[0], e[1]);
            count += 1;
        }
        assert_eq!(header[1], count);
    }

    #[test]
    fn generated_graph_reloads() {
        let dir = scratch_dir("pipeline-reload");
        let graph = dir.join("graph.txt");
        let mut rng = Xoshiro256StarStar::seed_from_u64(11);
        generate(25, 0.3, &graph, &mut rng).unwrap();

        let mut rng = Xoshiro256StarStar::seed_from_u64(11);
        let expected = CompactMatrixGraph::gen_gnp(25, 0.3, &mut rng);
        let back: CompactMatrixGraph = io::read_edge_list_file(&graph).unwrap();
        assert_eq!(back.nnodes(), 25);
        assert_eq!(back.edges(), expected.edges());
    }

    #[test]
    fn report_is_consistent() {
        let dir = scratch_dir("pipeline-report");
        let (graph, cliques) = (dir.join("graph.txt"), dir.join("graph_cliques.txt"));
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);
        let size = pipeline(35, 0.5, &graph, &cliques, &mut rng).unwrap();

        let g: CompactMatrixGraph = io::read_edge_list_file(&graph).unwrap();
        let (all, maximum) = parse_report(&fs::read_to_string(&cliques).unwrap());
        assert_eq!(size, all.iter().map(|c| c.len()).max().unwrap());
        assert_eq!(maximum, all[0]);
        assert_eq!(maximum.len(), size);
        for w in all.windows(2) {
            assert!(w[0].len() >= w[1].len());
        }
        for c in &all {
            assert!(c.windows(2).all(|w| w[0] < w[1]), "{:?} is not sorted", c);
            for &a in c {
                for &b in c {
                    assert!(a == b || g.has_edge(a - 1, b - 1));
                }
            }
            for d in &all {
                let subset = c.iter().all(|v| d.contains(v));
                assert!(c == d || !subset, "{:?} is contained in {:?}", c, d);
            }
        }
    }

    #[test]
    fn ties_break_lexicographically() {
        let mut cliques = vec![vec![5, 4], vec![3, 2, 9], vec![1], vec![2, 3, 8], vec![7, 1, 6]];
        rank_cliques(&mut cliques);
        assert_eq!(cliques, vec![vec![1, 6, 7], vec![2, 3, 8], vec![2, 3, 9], vec![4, 5], vec![1]]);
    }

    #[test]
    fn bad_probability() {
        let dir = scratch_dir("pipeline-probability");
        let graph = dir.join("graph.txt");
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        for p in [-0.1, 1.5, f64::NAN] {
            let err = generate(5, p, &graph, &mut rng).unwrap_err();
            assert!(err.is_config());
        }
        assert!(!graph.exists());
    }

    #[test]
    fn too_many_vertices() {
        let dir = scratch_dir("pipeline-huge");
        let graph = dir.join("graph.txt");
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let err = generate(MAX_NODES + 1, 0.5, &graph, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "vertex_count", .. }));
        assert!(!graph.exists());
    }

    #[test]
    fn missing_destination_directory() {
        let dir = scratch_dir("pipeline-nodir");
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let err = generate(5, 0.5, &dir.join("missing").join("graph.txt"), &mut rng).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}

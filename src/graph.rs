pub type Node = u32;

/// undirected edge, stored as [smaller, bigger]
pub type Edge = [Node; 2];

use rand::Rng;
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::util::{intersect_sorted, setminus_sorted};

pub trait UndirectedGraph {
    fn has_edge(&self, a: Node, b: Node) -> bool;
    fn add_edge(&mut self, a: Node, b: Node);
    fn remove_edge(&mut self, a: Node, b: Node);
    fn nnodes(&self) -> usize;
    fn iter_nodes(&self) -> std::ops::Range<Node> {
        0 .. (self.nnodes() as Node)
    }

    /// every edge once as `[a, b]` with `a < b`, in lexicographic order
    fn edges(&self) -> Vec<Edge> {
        let mut edges = vec![];
        for a in self.iter_nodes() {
            for b in (a + 1) .. (self.nnodes() as Node) {
                if self.has_edge(a, b) {
                    edges.push([a, b]);
                }
            }
        }
        return edges
    }

    fn nedges(&self) -> usize {
        self.edges().len()
    }

    /// sorted neighbourhood
    fn neighbors(&self, v: Node) -> Vec<Node> {
        let mut res = vec![];
        for u in self.iter_nodes() {
            if u != v && self.has_edge(v, u) {
                res.push(u);
            }
        }
        return res;
    }
}

pub trait UndirectedGraphNew: UndirectedGraph + Sized {
    fn new_disconnected(nnodes: usize) -> Self;

    fn from_edges(nnodes: usize, edges: &[Edge]) -> Self {
        let mut g = Self::new_disconnected(nnodes);
        for &[a, b] in edges {
            g.add_edge(a, b);
        }
        return g;
    }

    /// Erdős–Rényi `G(n, p)`: every vertex pair is an edge independently with probability `p`.
    /// Panics if `p` is not in `[0, 1]`.
    fn gen_gnp<R: Rng>(nnodes: usize, p: f64, rng: &mut R) -> Self {
        let mut g = Self::new_disconnected(nnodes);
        for a in 0 .. nnodes as Node {
            for b in (a + 1) .. nnodes as Node {
                if rng.gen_bool(p) {
                    g.add_edge(a, b);
                }
            }
        }
        return g;
    }
}

/// Largest vertex count a graph may have; the adjacency matrix then takes 512 MiB.
pub const MAX_NODES: usize = 1 << 16;

type Chunk = u64;
const CHUNK_SIZE: usize = Chunk::BITS as usize;

/// symmetric adjacency bit matrix
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactMatrixGraph {
    nnodes: usize,
    row_len: usize,
    matrix: Vec<Chunk>,
}

impl CompactMatrixGraph {
    fn set_bit(&mut self, from: Node, to: Node, value: bool) {
        if from as usize >= self.nnodes {
            panic!("from out of bounds: {} >= {}", from, self.nnodes);
        }
        if to as usize >= self.nnodes {
            panic!("to out of bounds: {} >= {}", to, self.nnodes);
        }
        let toh = to as usize / CHUNK_SIZE;
        let tol = to as usize % CHUNK_SIZE;
        let cell = &mut self.matrix[from as usize * self.row_len + toh];
        if value {
            *cell |= 1 << tol;
        } else {
            *cell &= !(1 << tol);
        }
    }
}

impl UndirectedGraphNew for CompactMatrixGraph {
    fn new_disconnected(nnodes: usize) -> Self {
        // nnodes / Chunk::BITS, rounded up.
        let row_len = (nnodes + CHUNK_SIZE - 1) / CHUNK_SIZE;
        let matsize = row_len.checked_mul(nnodes).expect("size of adjacency matrix overflows");
        CompactMatrixGraph { nnodes, row_len, matrix: vec![0; matsize] }
    }
}

impl UndirectedGraph for CompactMatrixGraph {
    fn nnodes(&self) -> usize {
        return self.nnodes;
    }
    fn has_edge(&self, a: Node, b: Node) -> bool {
        if a as usize >= self.nnodes {
            panic!("a out of bounds: {} >= {}", a, self.nnodes);
        }
        if b as usize >= self.nnodes {
            panic!("b out of bounds: {} >= {}", b, self.nnodes);
        }
        let bh = b as usize / CHUNK_SIZE;
        let bl = b as usize % CHUNK_SIZE;
        return self.matrix[a as usize * self.row_len + bh] & (1 << bl) != 0;
    }
    /// self-loops are not representable and are dropped
    fn add_edge(&mut self, a: Node, b: Node) {
        if a == b {
            return;
        }
        self.set_bit(a, b, true);
        self.set_bit(b, a, true);
    }
    fn remove_edge(&mut self, a: Node, b: Node) {
        self.set_bit(a, b, false);
        self.set_bit(b, a, false);
    }

    /// ```
    /// use clique_bench::graph::*;
    /// let mut g = CompactMatrixGraph::new_disconnected(70);
    /// g.add_edge(2, 3);
    /// g.add_edge(66, 2);
    /// assert_eq!(g.neighbors(2), vec![3, 66]);
    /// assert_eq!(g.neighbors(66), vec![2]);
    /// ```
    fn neighbors(&self, v: Node) -> Vec<Node> {
        let offset = self.row_len * v as usize;
        let mut result = vec![];
        for toh in 0 .. self.row_len {
            let mut bits = self.matrix[offset + toh];
            while bits != 0 {
                let b = bits.trailing_zeros();
                bits &= !(1 << b);
                result.push(toh as u32 * Chunk::BITS | b);
            }
        }
        result
    }

    fn edges(&self) -> Vec<Edge> {
        let mut result = vec![];
        for a in self.iter_nodes() {
            for b in self.neighbors(a) {
                if a < b {
                    result.push([a, b]);
                }
            }
        }
        result
    }
}

pub trait UndirectedGraphExt: UndirectedGraph {
    /// All maximal cliques, each one sorted ascending.
    ///
    /// Every maximal clique is found exactly once, from its smallest vertex `v`, by running
    /// Bron–Kerbosch on the neighbours of `v` with the smaller ones excluded. The start
    /// vertices are handled in parallel; the result is ordered by smallest vertex, so it is
    /// the same for every run on the same graph.
    ///
    /// ```
    /// use clique_bench::graph::*;
    /// // triangle 0-1-2 with a pendant 3 on 2, plus the isolated vertex 4
    /// let g = CompactMatrixGraph::from_edges(5, &[[0, 1], [1, 2], [0, 2], [2, 3]]);
    /// assert_eq!(g.compute_maximal_cliques(), vec![vec![0, 1, 2], vec![2, 3], vec![4]]);
    /// ```
    fn compute_maximal_cliques(&self) -> Vec<Vec<Node>> {
        let adj: Vec<Vec<Node>> = self.iter_nodes().map(|v| self.neighbors(v)).collect();
        let per_vertex: Vec<Vec<Vec<Node>>> = (0 .. adj.len() as Node).into_par_iter().map(|v| {
            let nv = &adj[v as usize];
            let split = nv.partition_point(|&u| u < v);
            let mut r = vec![v];
            let mut res = vec![];
            bron_kerbosch_pivot(&adj, &mut r, nv[split..].to_vec(), nv[..split].to_vec(), &mut res);
            res
        }).collect();

        let mut cliques: Vec<Vec<Node>> = per_vertex.into_iter().flatten().collect();
        for c in &mut cliques {
            c.sort_unstable();
        }
        return cliques;
    }

    fn max_clique_size(&self) -> usize {
        self.compute_maximal_cliques().iter().map(|c| c.len()).max().unwrap_or(0)
    }
}

impl<G: UndirectedGraph> UndirectedGraphExt for G {}

/// recursion for compute_maximal_cliques. `p` and `x` are kept sorted.
fn bron_kerbosch_pivot(adj: &[Vec<Node>], r: &mut Vec<Node>, mut p: Vec<Node>, mut x: Vec<Node>, res: &mut Vec<Vec<Node>>) {
    // algorithm BronKerbosch2(R, P, X) is
    // if P and X are both empty then
    //     report R as a maximal clique
    // choose a pivot vertex u in P ⋃ X
    // for each vertex v in P \ N(u) do
    //     BronKerbosch2(R ⋃ {v}, P ⋂ N(v), X ⋂ N(v))
    //     P := P \ {v}
    //     X := X ⋃ {v}
    if p.is_empty() {
        if x.is_empty() {
            res.push(r.clone());
        }
        return;
    }
    // Tomita pivot: most neighbours inside P
    let pivot = p.iter().chain(x.iter()).cloned()
        .max_by_key(|&u| intersect_sorted(&p, &adj[u as usize]).len())
        .unwrap_or(p[0]);

    for v in setminus_sorted(&p, &adj[pivot as usize]) {
        let nv = &adj[v as usize];
        r.push(v);
        bron_kerbosch_pivot(adj, r, intersect_sorted(&p, nv), intersect_sorted(&x, nv), res);
        r.pop();
        p.retain(|&u| u != v);
        let pos = x.partition_point(|&u| u < v);
        x.insert(pos, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn is_clique<G: UndirectedGraph>(g: &G, c: &[Node]) -> bool {
        c.iter().all(|&a| c.iter().all(|&b| a == b || g.has_edge(a, b)))
    }

    /// exhaustive reference for small graphs
    fn brute_force_maximal<G: UndirectedGraph>(g: &G) -> Vec<Vec<Node>> {
        let n = g.nnodes();
        let mut cliques = vec![];
        for mask in 1u32 .. (1 << n) {
            let c: Vec<Node> = (0..n as Node).filter(|&v| mask & (1 << v) != 0).collect();
            if !is_clique(g, &c) {
                continue;
            }
            let extendable = (0..n as Node).any(|u| mask & (1 << u) == 0 && c.iter().all(|&v| g.has_edge(u, v)));
            if !extendable {
                cliques.push(c);
            }
        }
        cliques.sort();
        cliques
    }

    #[test]
    fn symmetric_edges() {
        let mut g = CompactMatrixGraph::new_disconnected(3);
        g.add_edge(2, 0);
        assert!(g.has_edge(0, 2));
        assert!(g.has_edge(2, 0));
        assert_eq!(g.edges(), vec![[0, 2]]);
        g.add_edge(1, 1);
        assert_eq!(g.nedges(), 1);
        g.remove_edge(0, 2);
        assert_eq!(g.nedges(), 0);
    }

    #[test]
    fn gnp_extremes() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let empty = CompactMatrixGraph::gen_gnp(20, 0.0, &mut rng);
        assert_eq!(empty.nedges(), 0);
        let full = CompactMatrixGraph::gen_gnp(20, 1.0, &mut rng);
        assert_eq!(full.nedges(), 20 * 19 / 2);
        assert_eq!(full.compute_maximal_cliques(), vec![(0..20).collect::<Vec<Node>>()]);
    }

    #[test]
    fn no_vertices_no_cliques() {
        let g = CompactMatrixGraph::new_disconnected(0);
        assert!(g.compute_maximal_cliques().is_empty());
        assert_eq!(g.max_clique_size(), 0);
    }

    #[test]
    fn two_triangles_sharing_a_vertex() {
        let g = CompactMatrixGraph::from_edges(5, &[[0, 1], [0, 2], [1, 2], [2, 3], [2, 4], [3, 4]]);
        assert_eq!(g.compute_maximal_cliques(), vec![vec![0, 1, 2], vec![2, 3, 4]]);
        assert_eq!(g.max_clique_size(), 3);
    }

    #[test]
    fn matches_brute_force_on_random_graphs() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(42);
        for &p in &[0.2, 0.5, 0.8] {
            for n in [1, 5, 9, 12] {
                let g = CompactMatrixGraph::gen_gnp(n, p, &mut rng);
                let mut found = g.compute_maximal_cliques();
                for c in &found {
                    assert!(is_clique(&g, c), "{:?} is not a clique", c);
                }
                found.sort();
                assert_eq!(found, brute_force_maximal(&g), "n = {}, p = {}", n, p);
            }
        }
    }

    #[test]
    fn enumeration_order_is_stable() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let g = CompactMatrixGraph::gen_gnp(40, 0.5, &mut rng);
        assert_eq!(g.compute_maximal_cliques(), g.compute_maximal_cliques());
    }
}

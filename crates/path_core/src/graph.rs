use crate::constants::Weight;
use crate::error::{Error, Result};
use anyhow::Context;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::{fmt, hash::Hash, io, path::Path};

/// Anything usable as a vertex key.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Vertex for T {}

/// Dense vertex identifier, handed out in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(u32::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

/// Directed adjacency-list graph over arbitrary vertex keys.
///
/// Vertices are interned to [`NodeIndex`] values on first sight. Adding an
/// edge registers both endpoints if necessary, so `add_vertex` is only
/// needed for isolated vertices. All edges, including parallel ones, are
/// kept in insertion order.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    vertices: Vec<V>,
    index: FxHashMap<V, NodeIndex>,
    edges_out: Vec<Vec<Edge>>,
    num_edges: usize,
}

impl<V: Vertex> WeightedGraph<V> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            edges_out: Vec::new(),
            num_edges: 0,
        }
    }

    pub fn with_capacity(num_vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_vertices),
            index: FxHashMap::with_capacity_and_hasher(num_vertices, Default::default()),
            edges_out: Vec::with_capacity(num_vertices),
            num_edges: 0,
        }
    }

    /// Registers `vertex` and returns its index. Adding a known vertex is a
    /// no-op returning the existing index.
    ///
    /// **Panics** if the graph is at the maximum number of vertices
    pub fn add_vertex(&mut self, vertex: V) -> NodeIndex {
        if let Some(idx) = self.index.get(&vertex) {
            return *idx;
        }

        let node_idx = NodeIndex::new(self.vertices.len());
        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of vertices exceeded"
        );

        // Create new entry in adjacency list for new vertex
        self.edges_out.push(Vec::new());
        self.index.insert(vertex.clone(), node_idx);
        self.vertices.push(vertex);

        node_idx
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// Fails with [`Error::InvalidWeight`] for negative or non-finite
    /// weights, in which case the graph is left unchanged.
    pub fn add_edge(&mut self, from: V, to: V, weight: Weight) -> Result<()> {
        check_weight(&from, &to, weight)?;

        let source = self.add_vertex(from);
        let target = self.add_vertex(to);
        self.push_edge(source, target, weight);

        Ok(())
    }

    /// Inserts an edge whose weight is already known to be valid.
    pub(crate) fn push_edge(&mut self, source: NodeIndex, target: NodeIndex, weight: Weight) {
        debug_assert!(weight.is_finite() && weight >= 0.0);
        self.edges_out[source.index()].push(Edge::new(source, target, weight));
        self.num_edges += 1;
    }

    /// Adds `a -> b` and `b -> a` with the same weight.
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: Weight) -> Result<()> {
        check_weight(&a, &b, weight)?;

        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }

    /// Adds directed edges given as `(from, to, weight)` triples. Stops at the
    /// first invalid weight; edges before it stay in the graph.
    pub fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (V, V, Weight)>,
    {
        for (from, to, weight) in edges {
            self.add_edge(from, to, weight)?;
        }
        Ok(())
    }

    /// Outgoing edges of `vertex` as `(target, weight)` pairs. Unknown
    /// vertices have no neighbors.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, Weight)> + 'a {
        self.node_index(vertex)
            .into_iter()
            .flat_map(move |node_idx| self.neighbors_outgoing(node_idx))
            .map(move |edge| (&self.vertices[edge.target.index()], edge.weight))
    }

    /// **Panics** if `node_idx` was not handed out by this graph
    pub fn neighbors_outgoing(&self, node_idx: NodeIndex) -> impl Iterator<Item = &Edge> + '_ {
        self.edges_out[node_idx.index()].iter()
    }

    pub fn out_degree(&self, vertex: &V) -> usize {
        self.node_index(vertex)
            .map_or(0, |node_idx| self.edges_out[node_idx.index()].len())
    }

    pub fn node_index(&self, vertex: &V) -> Option<NodeIndex> {
        self.index.get(vertex).copied()
    }

    pub fn vertex(&self, node_idx: NodeIndex) -> Option<&V> {
        self.vertices.get(node_idx.index())
    }

    /// **Panics** if `node_idx` was not handed out by this graph
    pub(crate) fn vertex_at(&self, node_idx: NodeIndex) -> &V {
        &self.vertices[node_idx.index()]
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns an iterator over all vertices in registration order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Returns an iterator over all edges as `(from, to, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, Weight)> {
        self.edges_out.iter().flatten().map(move |edge| {
            (
                &self.vertices[edge.source.index()],
                &self.vertices[edge.target.index()],
                edge.weight,
            )
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }
}

fn check_weight<V: fmt::Debug>(from: &V, to: &V, weight: Weight) -> Result<()> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        })
    }
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Display for WeightedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WeightedGraph:\t#Vertices: {}, #Edges: {}",
            self.vertices.len(),
            self.num_edges
        )
    }
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: String,
    target: String,
    weight: Weight,
}

impl WeightedGraph<String> {
    /// Reads an edge list with the header `source,target,weight`.
    ///
    /// With `directed == false` every record is inserted in both directions.
    pub fn from_csv(path: &Path, directed: bool) -> anyhow::Result<Self> {
        info!("Reading edge list: {:?}", path);

        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Could not open edge list {:?}", path))?;

        Self::from_records(reader, directed)
    }

    pub fn from_csv_reader<R: io::Read>(rdr: R, directed: bool) -> anyhow::Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(rdr);

        Self::from_records(reader, directed)
    }

    fn from_records<R: io::Read>(mut reader: csv::Reader<R>, directed: bool) -> anyhow::Result<Self> {
        let mut g = WeightedGraph::new();

        debug!("BEGIN reading edges");
        for (i, result) in reader.deserialize::<EdgeRecord>().enumerate() {
            let EdgeRecord {
                source,
                target,
                weight,
            } = result.context("Failed to parse Edge")?;

            let inserted = if directed {
                g.add_edge(source, target, weight)
            } else {
                g.add_undirected_edge(source, target, weight)
            };
            inserted.with_context(|| format!("Invalid edge in record {}", i + 1))?;
        }
        debug!("FINISHED reading edges");

        info!("{}", g);
        Ok(g)
    }
}

/// Macro to create `(source, target, weight)` triples for [`WeightedGraph::add_edges`]
///
/// edge!(a , b, 3.0) Returns edges in both directions
///
/// edge!(a => b, 3.0) Returns a single directed edge
///
/// The undirected form evaluates its arguments twice, so use it with `Copy`
/// vertices such as `&str` or integers.
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr, $weight:expr) => {
        ($source, $target, $weight)
    };
    ($source:expr , $target:expr, $weight:expr) => {
        vec![($source, $target, $weight), ($target, $source, $weight)]
    };
}

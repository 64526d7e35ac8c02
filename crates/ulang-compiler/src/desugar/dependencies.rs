//! Package dependency graph and its strongly connected components.
//!
//! Packages that depend on each other, directly or through a cycle, must be
//! compiled together. Tarjan's algorithm finds those groups and emits each one
//! after every group it depends on.

use indexmap::{IndexMap, IndexSet};

/// Dependency edges by package position.
#[derive(Debug, Clone, Default)]
pub(super) struct PackageGraph {
    names: IndexMap<String, usize>,
    edges: Vec<Vec<usize>>,
}

impl PackageGraph {
    /// One vertex per name, in order. A repeated name resolves to its first package.
    pub(super) fn new<'n>(names: impl IntoIterator<Item = &'n str>) -> Self {
        let mut graph = Self::default();
        for (index, name) in names.into_iter().enumerate() {
            graph.names.entry(name.to_owned()).or_insert(index);
            graph.edges.push(Vec::new());
        }
        graph
    }

    pub(super) fn position(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    pub(super) fn add_edge(&mut self, from: usize, to: usize) {
        self.edges[from].push(to);
    }

    /// Components in dependency order; members in the order they leave the stack.
    pub(super) fn components(&self) -> Vec<Vec<usize>> {
        SccFinder::find(&self.edges)
    }
}

struct SccFinder<'a> {
    edges: &'a [Vec<usize>],
    index: usize,
    stack: Vec<usize>,
    on_stack: IndexSet<usize>,
    indices: Vec<Option<usize>>,
    lowlinks: Vec<usize>,
    sccs: Vec<Vec<usize>>,
}

impl<'a> SccFinder<'a> {
    fn find(edges: &'a [Vec<usize>]) -> Vec<Vec<usize>> {
        let mut finder = Self {
            edges,
            index: 0,
            stack: Vec::new(),
            on_stack: IndexSet::new(),
            indices: vec![None; edges.len()],
            lowlinks: vec![0; edges.len()],
            sccs: Vec::new(),
        };

        for vertex in 0..edges.len() {
            if finder.indices[vertex].is_none() {
                finder.strongconnect(vertex);
            }
        }

        finder.sccs
    }

    fn strongconnect(&mut self, vertex: usize) {
        self.indices[vertex] = Some(self.index);
        self.lowlinks[vertex] = self.index;
        self.index += 1;
        self.stack.push(vertex);
        self.on_stack.insert(vertex);

        let edges = self.edges;
        for &dependency in &edges[vertex] {
            match self.indices[dependency] {
                None => {
                    self.strongconnect(dependency);
                    self.lowlinks[vertex] = self.lowlinks[vertex].min(self.lowlinks[dependency]);
                }
                Some(index) if self.on_stack.contains(&dependency) => {
                    self.lowlinks[vertex] = self.lowlinks[vertex].min(index);
                }
                Some(_) => {}
            }
        }

        if Some(self.lowlinks[vertex]) == self.indices[vertex] {
            let mut scc = Vec::new();
            while let Some(member) = self.stack.pop() {
                self.on_stack.swap_remove(&member);
                scc.push(member);
                if member == vertex {
                    break;
                }
            }
            self.sccs.push(scc);
        }
    }
}

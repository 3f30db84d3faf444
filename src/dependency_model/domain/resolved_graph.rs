use super::coordinates::ResolvedGroupArtifactVersion;
use super::dependency::{Dependency, License};
use super::matching::matches_coordinates;
use super::repository::MavenRepository;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Index of a node inside a [`ResolvedGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A module selected by the resolver, after conflict resolution,
/// substitution and exclusion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDependency {
    repository: Option<MavenRepository>,
    gav: Arc<ResolvedGroupArtifactVersion>,
    requested: Arc<Dependency>,
    /// Direct children that survived conflict resolution and exclusion.
    dependencies: Vec<NodeId>,
    licenses: Vec<License>,
    depth: u32,
}

impl ResolvedDependency {
    pub fn new(
        gav: Arc<ResolvedGroupArtifactVersion>,
        requested: Arc<Dependency>,
        depth: u32,
    ) -> Self {
        Self {
            repository: None,
            gav,
            requested,
            dependencies: Vec::new(),
            licenses: Vec::new(),
            depth,
        }
    }

    pub fn with_repository(mut self, repository: Option<MavenRepository>) -> Self {
        self.repository = repository;
        self
    }

    pub fn with_licenses(mut self, licenses: Vec<License>) -> Self {
        self.licenses = licenses;
        self
    }

    pub fn repository(&self) -> Option<&MavenRepository> {
        self.repository.as_ref()
    }

    pub fn gav(&self) -> &Arc<ResolvedGroupArtifactVersion> {
        &self.gav
    }

    pub fn requested(&self) -> &Arc<Dependency> {
        &self.requested
    }

    pub fn dependency_ids(&self) -> &[NodeId] {
        &self.dependencies
    }

    pub fn licenses(&self) -> &[License] {
        &self.licenses
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// Arena holding every resolved node of one configuration.
///
/// Nodes reached through several parents are stored once and referenced by
/// id, and a dependency cycle is just an id pointing back up the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedGraph {
    nodes: Vec<ResolvedDependency>,
}

impl ResolvedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn push(&mut self, node: ResolvedDependency) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub(crate) fn push_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.index()].dependencies.push(child);
    }

    pub fn get(&self, id: NodeId) -> Option<&ResolvedDependency> {
        self.nodes.get(id.index())
    }

    /// View of a node. Returns `None` for ids from another graph.
    pub fn node(&self, id: NodeId) -> Option<ResolvedNode<'_>> {
        self.get(id).map(|_| ResolvedNode { graph: self, id })
    }

    pub fn nodes(&self) -> impl Iterator<Item = ResolvedNode<'_>> {
        (0..self.nodes.len()).map(move |i| ResolvedNode {
            graph: self,
            id: NodeId(i as u32),
        })
    }

    /// Every node reachable from `roots`, preorder, each node once.
    pub fn transitive_closure(&self, roots: &[NodeId]) -> Vec<NodeId> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = roots.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            let Some(node) = self.get(id) else {
                continue;
            };
            order.push(id);
            stack.extend(node.dependencies.iter().rev().copied());
        }
        order
    }

    /// True when every child id points inside the arena. Graphs decoded from
    /// untrusted bytes are checked with this before use.
    pub fn is_consistent(&self) -> bool {
        self.nodes
            .iter()
            .flat_map(|n| n.dependencies.iter())
            .all(|id| id.index() < self.nodes.len())
    }
}

/// Borrowed view of one node together with the graph it lives in.
///
/// Views are only made by [`ResolvedGraph::node`] and [`ResolvedGraph::nodes`],
/// so `id` is always inside `graph`. The arena never shrinks and is borrowed
/// for the view's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedNode<'a> {
    graph: &'a ResolvedGraph,
    id: NodeId,
}

impl<'a> ResolvedNode<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Indexes directly; `id` was checked when the view was made.
    pub fn get(&self) -> &'a ResolvedDependency {
        &self.graph.nodes[self.id.index()]
    }

    pub fn gav(&self) -> &'a ResolvedGroupArtifactVersion {
        self.get().gav()
    }

    pub fn group_id(&self) -> &'a str {
        self.gav().group_id()
    }

    pub fn artifact_id(&self) -> &'a str {
        self.gav().artifact_id()
    }

    pub fn version(&self) -> &'a str {
        self.gav().version()
    }

    pub fn requested(&self) -> &'a Dependency {
        self.get().requested()
    }

    pub fn repository(&self) -> Option<&'a MavenRepository> {
        self.get().repository()
    }

    pub fn licenses(&self) -> &'a [License] {
        self.get().licenses()
    }

    pub fn depth(&self) -> u32 {
        self.get().depth()
    }

    pub fn children(&self) -> impl Iterator<Item = ResolvedNode<'a>> + 'a {
        let graph = self.graph;
        self.get()
            .dependencies
            .iter()
            .filter_map(move |id| graph.node(*id))
    }

    /// This node followed by its whole subtree, preorder, each node once.
    pub fn walk(&self) -> Vec<ResolvedNode<'a>> {
        self.graph
            .transitive_closure(&[self.id])
            .into_iter()
            .filter_map(|id| self.graph.node(id))
            .collect()
    }

    /// First node in this subtree (including itself) whose group and artifact
    /// match the given globs.
    pub fn find_dependency(&self, group_glob: &str, artifact_glob: &str) -> Option<ResolvedNode<'a>> {
        self.walk().into_iter().find(|node| {
            matches_coordinates(node.group_id(), node.artifact_id(), group_glob, artifact_glob)
        })
    }
}

impl PartialEq for ResolvedNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl Eq for ResolvedNode<'_> {}

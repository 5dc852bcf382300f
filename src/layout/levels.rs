// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, VecDeque};

use smallvec::SmallVec;

use crate::model::graph::Graph;
use crate::model::ids::NodeId;

pub(crate) type ChildList = SmallVec<[usize; 4]>;

/// Index-based view of a [`Graph`], built once per layout call.
///
/// Nodes are addressed by their position in `graph.nodes()`. Edges whose
/// endpoints are not both known are skipped. When an id appears more than once
/// the first node with that id wins.
#[derive(Debug)]
pub struct GraphIndex<'g> {
    graph: &'g Graph,
    index_of: BTreeMap<&'g str, usize>,
    children: Vec<ChildList>,
    indegree: Vec<usize>,
    dangling_edges: usize,
}

impl<'g> GraphIndex<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        let nodes = graph.nodes();
        let mut index_of = BTreeMap::<&'g str, usize>::new();
        for (idx, node) in nodes.iter().enumerate() {
            index_of.entry(node.id().as_str()).or_insert(idx);
        }

        let mut children = vec![ChildList::new(); nodes.len()];
        let mut indegree = vec![0usize; nodes.len()];
        let mut dangling_edges = 0usize;
        for edge in graph.edges() {
            let (Some(&from), Some(&to)) =
                (index_of.get(edge.from().as_str()), index_of.get(edge.to().as_str()))
            else {
                dangling_edges += 1;
                continue;
            };
            children[from].push(to);
            indegree[to] += 1;
        }

        if dangling_edges > 0 {
            tracing::debug!(dangling_edges, "skipping edges that reference unknown nodes");
        }

        Self { graph, index_of, children, indegree, dangling_edges }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_of.get(id).copied()
    }

    pub fn id(&self, idx: usize) -> &'g NodeId {
        self.graph.nodes()[idx].id()
    }

    /// Children of `idx` in edge-array order.
    pub fn children(&self, idx: usize) -> &[usize] {
        &self.children[idx]
    }

    pub fn indegree(&self, idx: usize) -> usize {
        self.indegree[idx]
    }

    pub fn dangling_edges(&self) -> usize {
        self.dangling_edges
    }

    /// First node (in node order) without an incoming edge.
    pub fn root(&self) -> Option<usize> {
        self.indegree.iter().position(|degree| *degree == 0)
    }

    /// Every node without an incoming edge, in node order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.indegree.iter().enumerate().filter(|(_, degree)| **degree == 0).map(|(idx, _)| idx)
    }

    /// Breadth-first spanning tree from `root`.
    pub fn spanning_tree(&self, root: usize) -> SpanningTree {
        SpanningTree::build(self, root, &mut vec![false; self.len()])
    }

    /// One spanning tree per root, in node order.
    ///
    /// A node reachable from several roots belongs to the first root that
    /// reaches it. Nodes reachable from no root (cycle-only components) are in
    /// none of the trees.
    pub fn spanning_forest(&self) -> Vec<SpanningTree> {
        let mut claimed = vec![false; self.len()];
        let roots = self.roots().collect::<Vec<_>>();
        roots.into_iter().map(|root| SpanningTree::build(self, root, &mut claimed)).collect()
    }
}

/// Breadth-first spanning tree over the nodes reachable from a root.
///
/// Every reachable node is visited exactly once; its tree parent is the node
/// that discovered it first, so cycles and extra parents are cut off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    root: usize,
    levels: Vec<Option<usize>>,
    parents: Vec<Option<usize>>,
    children: Vec<ChildList>,
    order: Vec<usize>,
}

impl SpanningTree {
    fn build(index: &GraphIndex<'_>, root: usize, claimed: &mut [bool]) -> Self {
        let len = index.len();
        let mut levels = vec![None; len];
        let mut parents = vec![None; len];
        let mut children = vec![ChildList::new(); len];
        let mut order = Vec::with_capacity(len);

        let mut queue = VecDeque::new();
        levels[root] = Some(0);
        claimed[root] = true;
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            let next_level = levels[current].unwrap_or(0) + 1;
            for &child in index.children(current) {
                if claimed[child] {
                    continue;
                }
                claimed[child] = true;
                levels[child] = Some(next_level);
                parents[child] = Some(current);
                children[current].push(child);
                queue.push_back(child);
            }
        }

        Self { root, levels, parents, children, order }
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn level(&self, idx: usize) -> Option<usize> {
        self.levels[idx]
    }

    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.parents[idx]
    }

    /// Tree children of `idx` in edge-array order.
    pub fn children(&self, idx: usize) -> &[usize] {
        &self.children[idx]
    }

    /// Reached nodes in breadth-first visit order (root first).
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn reached(&self) -> usize {
        self.order.len()
    }

    pub fn max_level(&self) -> usize {
        self.levels.iter().flatten().copied().max().unwrap_or(0)
    }
}

/// Returns the first node (in node order) that has no incoming edge.
///
/// Edges referencing unknown ids are ignored. Returns `None` for an empty
/// graph or when every node has an incoming edge.
pub fn find_root(graph: &Graph) -> Option<&NodeId> {
    let index = GraphIndex::new(graph);
    index.root().map(|idx| index.id(idx))
}

/// Computes the breadth-first level of every node reachable from `root_id`.
///
/// The root has level 0 and each child is one deeper than the node that
/// discovered it. Children are explored in edge-array order, so the first
/// discovered path wins. Unreachable nodes are absent from the result, and an
/// unknown `root_id` yields an empty map.
pub fn compute_levels(graph: &Graph, root_id: &NodeId) -> BTreeMap<NodeId, usize> {
    let index = GraphIndex::new(graph);
    let Some(root) = index.index_of(root_id.as_str()) else {
        return BTreeMap::new();
    };

    let tree = index.spanning_tree(root);
    tree.order()
        .iter()
        .filter_map(|&idx| Some((index.id(idx).clone(), tree.level(idx)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{compute_levels, find_root, GraphIndex};
    use crate::model::fixtures;
    use crate::model::graph::{Edge, Graph, Node};
    use crate::model::ids::NodeId;

    fn levels_of(graph: &Graph, root: &str) -> BTreeMap<String, usize> {
        compute_levels(graph, &NodeId::new(root))
            .into_iter()
            .map(|(id, level)| (id.into_string(), level))
            .collect()
    }

    #[test]
    fn finds_the_node_without_incoming_edges() {
        let graph = fixtures::branching_tree_shuffled();
        assert_eq!(find_root(&graph).map(NodeId::as_str), Some("r"));
    }

    #[test]
    fn picks_the_first_root_in_node_order() {
        let graph = fixtures::two_roots();
        assert_eq!(find_root(&graph).map(NodeId::as_str), Some("r"));
    }

    #[test]
    fn no_root_for_empty_or_fully_cyclic_graphs() {
        assert_eq!(find_root(&Graph::default()), None);
        assert_eq!(find_root(&fixtures::cycle_without_root()), None);
    }

    #[test]
    fn dangling_sources_do_not_count_as_incoming_edges() {
        let graph = Graph::new(
            vec![Node::new("a", "A"), Node::new("b", "B")],
            vec![Edge::new("ghost", "a"), Edge::new("a", "b")],
        );
        assert_eq!(find_root(&graph).map(NodeId::as_str), Some("a"));
    }

    #[test]
    fn assigns_breadth_first_levels() {
        let levels = levels_of(&fixtures::branching_tree(), "r");
        let expected = [("r", 0), ("a", 1), ("b", 1), ("c", 1), ("a1", 2), ("a2", 2), ("c1", 2)]
            .into_iter()
            .map(|(id, level)| (id.to_owned(), level))
            .collect::<BTreeMap<_, _>>();
        assert_eq!(levels, expected);
    }

    #[test]
    fn first_discovered_path_wins_for_shared_children() {
        // r -> a -> d and r -> d: d is discovered from r first.
        let graph = Graph::new(
            vec![Node::new("r", "R"), Node::new("a", "A"), Node::new("d", "D")],
            vec![Edge::new("r", "a"), Edge::new("a", "d"), Edge::new("r", "d")],
        );
        let levels = levels_of(&graph, "r");
        assert_eq!(levels["d"], 1);
    }

    #[test]
    fn cycles_are_visited_once() {
        let levels = levels_of(&fixtures::rooted_cycle(), "r");
        assert_eq!(levels.len(), 4);
        assert_eq!(levels["a"], 1);
        assert_eq!(levels["c"], 3);
    }

    #[test]
    fn unreachable_nodes_are_left_out() {
        let levels = levels_of(&fixtures::two_roots(), "r");
        assert!(!levels.contains_key("z"));
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn unknown_root_yields_no_levels() {
        assert!(levels_of(&fixtures::chain_three(), "missing").is_empty());
    }

    #[test]
    fn index_skips_dangling_edges() {
        let graph = fixtures::dangling_edges();
        let index = GraphIndex::new(&graph);
        assert_eq!(index.dangling_edges(), 3);
        assert_eq!(index.children(0), &[1]);
        assert_eq!(index.indegree(1), 1);
    }

    #[test]
    fn forest_has_one_tree_per_root() {
        let graph = fixtures::forest();
        let index = GraphIndex::new(&graph);
        assert_eq!(index.roots().collect::<Vec<_>>(), vec![0, 3]);

        let forest = index.spanning_forest();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].order(), &[0, 1, 2]);
        assert_eq!(forest[1].order(), &[3, 4]);
        assert_eq!(forest[1].level(4), Some(1));
        // x <-> y is reachable from neither root.
        assert!(forest.iter().all(|tree| tree.level(5).is_none() && tree.level(6).is_none()));
    }

    #[test]
    fn first_root_claims_shared_descendants() {
        // p -> s and q -> s: s belongs to p's tree only.
        let graph = Graph::new(
            vec![Node::new("p", "P"), Node::new("q", "Q"), Node::new("s", "S")],
            vec![Edge::new("p", "s"), Edge::new("q", "s")],
        );
        let index = GraphIndex::new(&graph);
        let forest = index.spanning_forest();

        assert_eq!(forest[0].order(), &[0, 2]);
        assert_eq!(forest[1].order(), &[1]);
        assert!(forest[1].children(1).is_empty());
    }

    #[test]
    fn spanning_tree_keeps_edge_order_and_parents() {
        let graph = fixtures::branching_tree();
        let index = GraphIndex::new(&graph);
        let tree = index.spanning_tree(0);

        assert_eq!(tree.children(0), &[1, 2, 3]);
        assert_eq!(tree.children(1), &[4, 5]);
        assert_eq!(tree.parent(6), Some(3));
        assert_eq!(tree.order(), &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(tree.max_level(), 2);
    }
}

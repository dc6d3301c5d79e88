//! SplitPlanner: for each fracture node, partitions its incident cells into
//! connected components (via the adjacency graph restricted to that node's
//! cells) and assigns a node id per component.
//!
//! The first component (by smallest cell id) always keeps the node's
//! original id; every later component gets a fresh id drawn from a counter
//! that starts at the input point count, so replacement ids never collide
//! with original ones.

use crate::fracture::types::{AdjacencyGraph, NodeCellIndex, SplitPlan};
use std::collections::HashMap;

/// A minimal union-find over a fixed universe of cell indices, local to one
/// node's induced subgraph. No general graph library is needed since only
/// connected components are computed.
struct UnionFind {
    parent: HashMap<usize, usize>,
}

impl UnionFind {
    fn new(items: &[usize]) -> Self {
        let parent = items.iter().map(|&i| (i, i)).collect();
        Self { parent }
    }

    fn find(&mut self, x: usize) -> usize {
        let p = self.parent[&x];
        if p == x {
            return x;
        }
        let root = self.find(p);
        self.parent.insert(x, root);
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent.insert(ra, rb);
        }
    }
}

/// Build the split plan. `num_points` is the input mesh's point count.
pub fn plan_split(
    num_points: usize,
    adjacency: &AdjacencyGraph,
    node_index: &NodeCellIndex,
) -> SplitPlan {
    let mut plan = SplitPlan {
        cell_node_map: HashMap::new(),
        new_point_count: num_points,
    };
    let mut next_id = num_points;

    // Ascending node-id order, per the determinism requirement.
    let mut nodes: Vec<usize> = node_index.cells_by_node.keys().copied().collect();
    nodes.sort_unstable();

    for node in nodes {
        let cells = &node_index.cells_by_node[&node];
        let mut uf = UnionFind::new(cells);
        let cell_set: std::collections::HashSet<usize> = cells.iter().copied().collect();

        for &cell in cells {
            for &neighbor in adjacency.neighbors(cell) {
                if cell_set.contains(&neighbor) {
                    uf.union(cell, neighbor);
                }
            }
        }

        // Group cells by component root, then order components by their
        // smallest member cell id (determinism requirement).
        let mut components: HashMap<usize, Vec<usize>> = HashMap::new();
        for &cell in cells {
            let root = uf.find(cell);
            components.entry(root).or_default().push(cell);
        }
        let mut ordered_components: Vec<Vec<usize>> = components.into_values().collect();
        for comp in &mut ordered_components {
            comp.sort_unstable();
        }
        ordered_components.sort_by_key(|comp| comp[0]);

        for (i, comp) in ordered_components.into_iter().enumerate() {
            if i == 0 {
                // First component keeps the original id; record the
                // identity entry explicitly, matching the "absent or
                // identity" invariant's identity form.
                for cell in comp {
                    plan.cell_node_map
                        .entry(cell)
                        .or_default()
                        .insert(node, node);
                }
            } else {
                let replacement = next_id;
                next_id += 1;
                for cell in comp {
                    plan.cell_node_map
                        .entry(cell)
                        .or_default()
                        .insert(node, replacement);
                }
            }
        }
    }

    plan.new_point_count = next_id;
    plan
}

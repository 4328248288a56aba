//! Graphviz DOT rendering for debugging assembled graphs.

use rustc_hash::FxHashSet;

use super::{Graph, NodeId};

impl Graph {
    /// Renders the nodes reachable from the graph outputs in DOT format.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph G {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=box];\n\n");

        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let outputs = self.outputs.borrow().clone();
        for id in outputs {
            self.render_node(id, &mut visited, &mut dot);
        }

        dot.push_str("}\n");
        dot
    }

    fn render_node(&self, id: NodeId, visited: &mut FxHashSet<NodeId>, dot: &mut String) {
        if !visited.insert(id) {
            return;
        }
        let (op, src, dtype, shape) = {
            let nodes = self.nodes.borrow();
            let node = &nodes[id.0];
            (
                node.op.clone(),
                node.src.clone(),
                node.dtype.clone(),
                node.shape.clone(),
            )
        };
        for &input in &src {
            self.render_node(input, visited, dot);
        }

        let shape_str = shape
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        dot.push_str(&format!(
            "  n{} [label=\"{:?}\\n{}: [{}]\"];\n",
            id.0, op, dtype, shape_str
        ));
        for (i, input) in src.iter().enumerate() {
            dot.push_str(&format!(
                "  n{} -> n{} [label=\"input {}\"];\n",
                input.0, id.0, i
            ));
        }
    }
}

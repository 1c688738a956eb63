//! Cycle diagnostics over the relationship graph.
//!
//! The walker terminates on cyclic models regardless; this pass only reports
//! which type groups are mutually reachable so callers can surface them.

use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};

use crate::generator::edm::EdmModel;

pub(crate) fn detect_navigation_cycles(model: &EdmModel) -> Vec<Vec<String>> {
  let mut graph = DiGraphMap::<&str, ()>::new();
  for ty in &model.types {
    graph.add_node(ty.name.as_str());
    for nav in &ty.navigations {
      if let Some(target) = model.structured_type(&nav.target_type) {
        graph.add_edge(ty.name.as_str(), target.name.as_str(), ());
      }
    }
  }

  kosaraju_scc(&graph)
    .into_iter()
    .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
    .map(|scc| scc.into_iter().map(String::from).collect())
    .collect()
}

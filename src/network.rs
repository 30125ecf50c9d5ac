//! The network-oracle collaborator contract (§2, §6).
//!
//! Opaque beyond these accessors: the reduction never inspects the
//! network's internal representation, only asks it these questions.

use crate::protocol::Action;

pub trait NetworkOracle {
    /// Number of nodes, numbered `0..num_nodes()`.
    fn num_nodes(&self) -> usize;

    /// The designated source node.
    fn initial(&self) -> usize;

    /// The designated destination node.
    fn destination(&self) -> usize;

    /// Whether a directed edge `u -> v` exists. `is_edge(u, u)` is permitted.
    fn is_edge(&self, u: usize, v: usize) -> bool;

    /// Whether node `u` is equipped to perform `action`.
    fn has_action(&self, u: usize, action: Action) -> bool;

    /// Display name for a node; used only by the diagnostic dump.
    fn node_name(&self, u: usize) -> String;

    /// The out-neighbors of `u`. Derived from [`NetworkOracle::is_edge`];
    /// overriding it is an optimization, never a correctness requirement.
    fn neighbors(&self, u: usize) -> Vec<usize> {
        (0..self.num_nodes()).filter(|&v| self.is_edge(u, v)).collect()
    }
}

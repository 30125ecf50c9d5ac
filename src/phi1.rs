//! φ₁ — position occupancy (component C).
//!
//! At every position the token occupies exactly one `(node, height)` pair.

use crate::constants::stack_height;
use crate::engine::FormulaEngine;
use crate::naming::x;
use crate::network::NetworkOracle;

pub fn build<E: FormulaEngine>(engine: &mut E, network: &impl NetworkOracle, length: usize) -> E::Atom {
    let h_max = stack_height(length);
    let n = network.num_nodes();
    let mut conjuncts = Vec::with_capacity(length + 1);
    for i in 0..=length {
        let mut atoms = Vec::with_capacity(n * h_max);
        for u in 0..n {
            for h in 0..h_max {
                atoms.push(x(engine, u, i, h));
            }
        }
        conjuncts.push(engine.exactly_one(&atoms));
    }
    engine.mk_and(&conjuncts)
}

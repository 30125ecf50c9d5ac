//! φ₄ — stack content well-formedness (component F).
//!
//! If the top at position `i` is at height `h`, every cell `k <= h` holds
//! exactly one of P4, P6. Cells above `h` are unconstrained here.

use crate::constants::stack_height;
use crate::engine::FormulaEngine;
use crate::naming::{x, y4, y6};
use crate::network::NetworkOracle;

pub fn build<E: FormulaEngine>(engine: &mut E, network: &impl NetworkOracle, length: usize) -> E::Atom {
    let h_max = stack_height(length);
    let n = network.num_nodes();
    let mut implications = Vec::new();

    for i in 0..=length {
        for h in 0..h_max {
            let premise_atoms: Vec<_> = (0..n).map(|u| x(engine, u, i, h)).collect();
            let premise = engine.mk_or(&premise_atoms);

            let mut cell_constraints = Vec::with_capacity(h + 1);
            for k in 0..=h {
                let y4k = y4(engine, i, k);
                let y6k = y6(engine, i, k);
                let not_y6k = engine.mk_not(y6k);
                let not_y4k = engine.mk_not(y4k);
                let contains_4 = engine.mk_and(&[y4k, not_y6k]);
                let contains_6 = engine.mk_and(&[not_y4k, y6k]);
                cell_constraints.push(engine.mk_or(&[contains_4, contains_6]));
            }
            let conclusion = engine.mk_and(&cell_constraints);
            implications.push(engine.mk_implies(premise, conclusion));
        }
    }

    if implications.is_empty() {
        engine.mk_true()
    } else {
        engine.mk_and(&implications)
    }
}

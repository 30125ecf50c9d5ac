//! φ₆ — stack-frame preservation below the action-affected cell (component H).
//!
//! - Transmit: cells `0..=h` preserved across the hop.
//! - Push: cells `0..=h` preserved (the new cell `h+1` is set by φ₃'s push
//!   conjunct, not here).
//! - Pop: cells `0..h` preserved; cell `h` at the post-hop position is free
//!   (it represents the discarded frame).
//!
//! The pop case is the subject of §9's open question: the source
//! (`create_phi_6_pop` in `TunnelReduction.c`) iterates `0..=h` instead of
//! `0..h` whenever `h > 1`, which wrongly constrains the discarded cell.
//! This implementation uses the corrected `0..h` range uniformly.

use crate::constants::stack_height;
use crate::engine::FormulaEngine;
use crate::naming::{x, y4, y6};
use crate::network::NetworkOracle;
use crate::protocol::{Action, Protocol};
use itertools::iproduct;

fn cells_preserved<E: FormulaEngine>(engine: &mut E, i: usize, cells: impl Iterator<Item = usize>) -> E::Atom {
    let mut preserved = Vec::new();
    for k in cells {
        let eq4 = {
            let a = y4(engine, i, k);
            let b = y4(engine, i + 1, k);
            engine.mk_eq(a, b)
        };
        let eq6 = {
            let a = y6(engine, i, k);
            let b = y6(engine, i + 1, k);
            engine.mk_eq(a, b)
        };
        preserved.push(engine.mk_and(&[eq4, eq6]));
    }
    if preserved.is_empty() {
        engine.mk_true()
    } else {
        engine.mk_and(&preserved)
    }
}

pub fn build<E: FormulaEngine>(engine: &mut E, network: &impl NetworkOracle, length: usize) -> E::Atom {
    let h_max = stack_height(length);
    let n = network.num_nodes();
    let mut implications = Vec::new();

    for i in 0..length {
        for u in 0..n {
            for h in 0..h_max {
                for p in Protocol::ALL {
                    if network.has_action(u, Action::Transmit(p)) {
                        let premise = x(engine, u, i, h);
                        let conclusion = cells_preserved(engine, i, 0..=h);
                        implications.push(engine.mk_implies(premise, conclusion));
                    }
                }
                for (a, b) in iproduct!(Protocol::ALL, Protocol::ALL) {
                    if h < h_max - 1 && network.has_action(u, Action::Push(a, b)) {
                        let premise = x(engine, u, i, h);
                        let conclusion = cells_preserved(engine, i, 0..=h);
                        implications.push(engine.mk_implies(premise, conclusion));
                    }
                    if h >= 1 && network.has_action(u, Action::Pop(a, b)) {
                        let premise = x(engine, u, i, h);
                        let conclusion = cells_preserved(engine, i, 0..h);
                        implications.push(engine.mk_implies(premise, conclusion));
                    }
                }
            }
        }
    }

    if implications.is_empty() {
        engine.mk_true()
    } else {
        engine.mk_and(&implications)
    }
}

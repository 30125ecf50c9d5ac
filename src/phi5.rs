//! φ₅ — action preconditions (component G).
//!
//! Necessary conditions binding the availability of an action at `(u, i, h)`
//! to the content of the stack at that position. φ₃ is what actually
//! selects which action fired (by height-delta signature); this component
//! only rules out assignments inconsistent with *some* capable action.

use itertools::iproduct;

use crate::constants::stack_height;
use crate::engine::FormulaEngine;
use crate::naming::{x, y};
use crate::network::NetworkOracle;
use crate::protocol::{Action, Protocol};

pub fn build<E: FormulaEngine>(engine: &mut E, network: &impl NetworkOracle, length: usize) -> E::Atom {
    let h_max = stack_height(length);
    let n = network.num_nodes();
    let mut implications = Vec::new();

    for i in 0..=length {
        for u in 0..n {
            for h in 0..h_max {
                for p in Protocol::ALL {
                    if network.has_action(u, Action::Transmit(p)) {
                        let premise = x(engine, u, i, h);
                        let conclusion = y(engine, p, i, h);
                        implications.push(engine.mk_implies(premise, conclusion));
                    }
                }
                for (a, b) in iproduct!(Protocol::ALL, Protocol::ALL) {
                    if network.has_action(u, Action::Push(a, b)) {
                        let premise = x(engine, u, i, h);
                        let conclusion = y(engine, a, i, h);
                        implications.push(engine.mk_implies(premise, conclusion));
                    }
                    if h >= 1 && network.has_action(u, Action::Pop(a, b)) {
                        let premise = x(engine, u, i, h);
                        let yb = y(engine, b, i, h);
                        let ya = y(engine, a, i, h - 1);
                        let conclusion = engine.mk_and(&[yb, ya]);
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

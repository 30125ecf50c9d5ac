//! φ₃ — transition relation (component E).
//!
//! For each hop, each node, each height, and each action the node supports,
//! emits an implication tying occupancy-and-top-protocol at the source
//! position to occupancy (and, for push, top-protocol) at some neighbor at
//! the target position. An action whose node has no outgoing neighbors
//! contributes no implication at all (§9: omitted, not forced to FALSE).

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

    for i in 0..length {
        for u in 0..n {
            let neighbors = network.neighbors(u);
            if neighbors.is_empty() {
                continue;
            }
            for h in 0..h_max {
                transmit(engine, network, &neighbors, u, i, h, &mut implications);
                if h < h_max - 1 {
                    push(engine, network, &neighbors, u, i, h, &mut implications);
                }
                if h >= 1 {
                    pop(engine, network, &neighbors, u, i, h, &mut implications);
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

fn transmit<E: FormulaEngine>(
    engine: &mut E,
    network: &impl NetworkOracle,
    neighbors: &[usize],
    u: usize,
    i: usize,
    h: usize,
    implications: &mut Vec<E::Atom>,
) {
    for p in Protocol::ALL {
        if !network.has_action(u, Action::Transmit(p)) {
            continue;
        }
        let premise = {
            let xu = x(engine, u, i, h);
            let yp = y(engine, p, i, h);
            engine.mk_and(&[xu, yp])
        };
        let conclusion_atoms: Vec<_> = neighbors.iter().map(|&v| x(engine, v, i + 1, h)).collect();
        let conclusion = engine.mk_or(&conclusion_atoms);
        implications.push(engine.mk_implies(premise, conclusion));
    }
}

fn push<E: FormulaEngine>(
    engine: &mut E,
    network: &impl NetworkOracle,
    neighbors: &[usize],
    u: usize,
    i: usize,
    h: usize,
    implications: &mut Vec<E::Atom>,
) {
    for (a, b) in iproduct!(Protocol::ALL, Protocol::ALL) {
        if !network.has_action(u, Action::Push(a, b)) {
            continue;
        }
        let premise = {
            let xu = x(engine, u, i, h);
            let ya = y(engine, a, i, h);
            engine.mk_and(&[xu, ya])
        };
        let conclusion_atoms: Vec<_> = neighbors
            .iter()
            .map(|&v| {
                let xv = x(engine, v, i + 1, h + 1);
                let yb = y(engine, b, i + 1, h + 1);
                engine.mk_and(&[xv, yb])
            })
            .collect();
        let conclusion = engine.mk_or(&conclusion_atoms);
        implications.push(engine.mk_implies(premise, conclusion));
    }
}

fn pop<E: FormulaEngine>(
    engine: &mut E,
    network: &impl NetworkOracle,
    neighbors: &[usize],
    u: usize,
    i: usize,
    h: usize,
    implications: &mut Vec<E::Atom>,
) {
    for (a, b) in iproduct!(Protocol::ALL, Protocol::ALL) {
        if !network.has_action(u, Action::Pop(a, b)) {
            continue;
        }
        let premise = {
            let xu = x(engine, u, i, h);
            let yb = y(engine, b, i, h);
            let ya = y(engine, a, i, h - 1);
            engine.mk_and(&[xu, yb, ya])
        };
        let conclusion_atoms: Vec<_> = neighbors.iter().map(|&v| x(engine, v, i + 1, h - 1)).collect();
        let conclusion = engine.mk_or(&conclusion_atoms);
        implications.push(engine.mk_implies(premise, conclusion));
    }
}

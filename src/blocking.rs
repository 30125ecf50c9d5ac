//! Blocking-clause helper (§4.M): rules out a specific model on re-solving,
//! so a caller can enumerate multiple distinct satisfying paths (§8 scenario
//! 6, "two candidate paths").

use crate::engine::{FormulaEngine, ModelReader};
use crate::naming::x;
use crate::network::NetworkOracle;

/// Builds a clause that is false under `model` but satisfiable by any
/// assignment differing from it in at least one `x(node, position, height)`
/// atom. Conjoining this with φ(L) and re-solving yields a different path,
/// if one exists.
///
/// Only the `x` family is negated: two models agreeing on every `x` atom
/// necessarily agree on the decoded path (the `y4`/`y6` atoms they might
/// still differ on don't change what path was taken).
pub fn blocking_clause<E, M>(engine: &mut E, model: &M, network: &impl NetworkOracle, length: usize, h_max: usize) -> E::Atom
where
    E: FormulaEngine,
    M: ModelReader<E::Atom>,
{
    let n = network.num_nodes();
    let mut literals = Vec::new();
    for i in 0..=length {
        for u in 0..n {
            for h in 0..h_max {
                let atom = x(engine, u, i, h);
                let literal = if model.value_of(atom) { engine.mk_not(atom) } else { atom };
                literals.push(literal);
            }
        }
    }
    if literals.is_empty() {
        engine.mk_true()
    } else {
        engine.mk_or(&literals)
    }
}

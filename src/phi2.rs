//! φ₂ — endpoint constraints (component D).

use crate::engine::FormulaEngine;
use crate::naming::{x, y};
use crate::network::NetworkOracle;
use crate::protocol::Protocol;

/// Protocol pinned at both path endpoints. Hard-coded per spec.md §4.D and
/// §9's "Endpoint protocol" note; kept as a named constant rather than
/// threaded through every builder so a future caller-configurable version
/// is a one-line change.
pub const INITIAL_PROTOCOL: Protocol = Protocol::P4;

pub fn build<E: FormulaEngine>(engine: &mut E, network: &impl NetworkOracle, length: usize) -> E::Atom {
    let source = network.initial();
    let destination = network.destination();

    let x_initial = x(engine, source, 0, 0);
    let y_initial = y(engine, INITIAL_PROTOCOL, 0, 0);
    let x_final = x(engine, destination, length, 0);
    let y_final = y(engine, INITIAL_PROTOCOL, length, 0);

    engine.mk_and(&[x_initial, y_initial, x_final, y_final])
}

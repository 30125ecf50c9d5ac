//! Top-level assembler (component I) and input validation (§7).

use log::debug;

use crate::engine::FormulaEngine;
use crate::error::BuildError;
use crate::network::NetworkOracle;
use crate::{phi1, phi2, phi3, phi4, phi5, phi6};

/// Builds φ(L) = φ₁ ∧ φ₂ ∧ φ₃ ∧ φ₄ ∧ φ₅ ∧ φ₆ for the given network and path
/// length, after rejecting malformed input (§7): a negative length, an
/// empty network, or an out-of-range source/destination.
pub fn build<E: FormulaEngine>(
    engine: &mut E,
    network: &impl NetworkOracle,
    length: i64,
) -> Result<E::Atom, BuildError> {
    if length < 0 {
        return Err(BuildError::NegativeLength(length));
    }
    let length = length as usize;

    let n = network.num_nodes();
    if n == 0 {
        return Err(BuildError::EmptyNetwork);
    }
    let source = network.initial();
    if source >= n {
        return Err(BuildError::SourceOutOfRange(source, n));
    }
    let destination = network.destination();
    if destination >= n {
        return Err(BuildError::DestinationOutOfRange(destination, n));
    }

    debug!("building phi(L={length}) over a network of {n} nodes");

    let phi1 = phi1::build(engine, network, length);
    debug!("phi1 (position occupancy) built");
    let phi2 = phi2::build(engine, network, length);
    debug!("phi2 (endpoints) built");
    let phi3 = phi3::build(engine, network, length);
    debug!("phi3 (transition relation) built");
    let phi4 = phi4::build(engine, network, length);
    debug!("phi4 (stack well-formedness) built");
    let phi5 = phi5::build(engine, network, length);
    debug!("phi5 (action preconditions) built");
    let phi6 = phi6::build(engine, network, length);
    debug!("phi6 (stack preservation) built");

    Ok(engine.mk_and(&[phi1, phi2, phi3, phi4, phi5, phi6]))
}

//! Reduction of bounded tunnel-routing path existence to propositional
//! satisfiability.
//!
//! Given a network whose nodes can transmit, push, or pop protocol headers
//! (§2), [`assemble::build`] constructs a formula φ(L) that is satisfiable
//! iff an `L`-hop path exists from the network's source to its destination
//! along which the header stack stays well-formed. The formula is built
//! against two collaborator traits, [`engine::FormulaEngine`] and
//! [`network::NetworkOracle`], rather than against a concrete SAT engine or
//! graph type — both the solver and the network representation are external
//! to this crate. [`decode::decode`] turns a satisfying model back into a
//! step sequence, [`decode::replay`] cross-checks that sequence against an
//! abstract stack machine, and [`dump::dump`] renders a model for
//! diagnostics.

pub mod assemble;
pub mod blocking;
pub mod constants;
pub mod decode;
pub mod dump;
pub mod engine;
pub mod error;
pub mod naming;
pub mod network;
pub mod protocol;

mod phi1;
mod phi2;
mod phi3;
mod phi4;
mod phi5;
mod phi6;

#[cfg(test)]
mod testkit;

pub use assemble::build;
pub use blocking::blocking_clause;
pub use decode::{decode, replay, Step};
pub use dump::dump;
pub use engine::{FormulaEngine, ModelReader};
pub use error::{BuildError, DecodeError, ReplayError};
pub use network::NetworkOracle;
pub use protocol::{Action, Protocol};

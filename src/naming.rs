//! Variable naming & indexing (component A).
//!
//! Each of the three variable families gets its own name prefix
//! (`x`, `y4`, `y6`), followed by its integer coordinates separated by `#`.
//! Since `#` cannot appear inside the decimal expansion of a `usize`, two
//! names built from the same family are equal iff their coordinate tuples
//! are equal, and names from different families never collide (they differ
//! in their prefix). The formula engine is expected to cache atoms by this
//! name, per the `FormulaEngine::mk_bool_var` contract (§6).
//!
//! An implementation that prefers typed handles over name interning could
//! instead index a three-dimensional table `(family, coord1, coord2, coord3)`
//! built on demand (§9 "Name-based atom identity"); this module keeps the
//! name-based scheme since it is what the spec's naming discipline and the
//! `FormulaEngine` contract actually call for.

use crate::engine::FormulaEngine;
use crate::protocol::Protocol;

pub fn x_name(node: usize, position: usize, height: usize) -> String {
    format!("x#{node}#{position}#{height}")
}

pub fn y4_name(position: usize, height: usize) -> String {
    format!("y4#{position}#{height}")
}

pub fn y6_name(position: usize, height: usize) -> String {
    format!("y6#{position}#{height}")
}

pub fn y_name(protocol: Protocol, position: usize, height: usize) -> String {
    match protocol {
        Protocol::P4 => y4_name(position, height),
        Protocol::P6 => y6_name(position, height),
    }
}

/// `x(node, position, height)`: the token occupies `node` at `position` with
/// the stack top at `height`.
pub fn x<E: FormulaEngine>(engine: &mut E, node: usize, position: usize, height: usize) -> E::Atom {
    engine.mk_bool_var(&x_name(node, position, height))
}

/// `y4(position, height)`: cell `height` at `position` holds P4.
pub fn y4<E: FormulaEngine>(engine: &mut E, position: usize, height: usize) -> E::Atom {
    engine.mk_bool_var(&y4_name(position, height))
}

/// `y6(position, height)`: cell `height` at `position` holds P6.
pub fn y6<E: FormulaEngine>(engine: &mut E, position: usize, height: usize) -> E::Atom {
    engine.mk_bool_var(&y6_name(position, height))
}

/// `y_P(position, height)` for either protocol tag.
pub fn y<E: FormulaEngine>(engine: &mut E, protocol: Protocol, position: usize, height: usize) -> E::Atom {
    match protocol {
        Protocol::P4 => y4(engine, position, height),
        Protocol::P6 => y6(engine, position, height),
    }
}

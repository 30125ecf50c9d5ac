//! Model pretty-printer (component K). Purely diagnostic: never fails, and
//! has no bearing on correctness.

use std::io::{self, Write};

use log::warn;

use crate::constants::stack_height;
use crate::engine::{FormulaEngine, ModelReader};
use crate::naming::{x, y4, y6};
use crate::network::NetworkOracle;

/// Writes a per-position diagnostic dump of `model` to `out`.
pub fn dump<E, M, W>(
    engine: &mut E,
    model: &M,
    network: &impl NetworkOracle,
    length: usize,
    out: &mut W,
) -> io::Result<()>
where
    E: FormulaEngine,
    M: ModelReader<E::Atom>,
    W: Write,
{
    let h_max = stack_height(length);
    let n = network.num_nodes();

    for i in 0..=length {
        write!(out, "At pos {i}:\nState: ")?;
        let mut occupants = Vec::new();
        for u in 0..n {
            for h in 0..h_max {
                if model.value_of(x(engine, u, i, h)) {
                    occupants.push((network.node_name(u), h));
                }
            }
        }
        if occupants.is_empty() {
            writeln!(out, "No node at that position!")?;
            warn!("dump: position {i} has no occupant");
        } else {
            for (name, h) in &occupants {
                write!(out, "({name},{h}) ")?;
            }
            writeln!(out)?;
            if occupants.len() > 1 {
                writeln!(out, "Several pairs node,height!")?;
                warn!("dump: position {i} has {} occupants", occupants.len());
            }
        }

        write!(out, "Stack: ")?;
        let mut above_blank = false;
        let mut ill_defined = false;
        for h in 0..h_max {
            let has4 = model.value_of(y4(engine, i, h));
            let has6 = model.value_of(y6(engine, i, h));
            match (has4, has6) {
                (true, true) => {
                    write!(out, "|X")?;
                    ill_defined = true;
                }
                (true, false) => {
                    write!(out, "|4")?;
                    if above_blank {
                        ill_defined = true;
                    }
                }
                (false, true) => {
                    write!(out, "|6")?;
                    if above_blank {
                        ill_defined = true;
                    }
                }
                (false, false) => {
                    write!(out, "| ")?;
                    above_blank = true;
                }
            }
        }
        writeln!(out)?;
        if ill_defined {
            writeln!(out, "Warning: ill-defined stack")?;
            warn!("dump: position {i} has an ill-defined stack");
        }
    }

    Ok(())
}

//! Model decoder (component J) and the abstract stack-machine replay used
//! to cross-check it (§4.L, §8 property P5).

use crate::constants::stack_height;
use crate::engine::{FormulaEngine, ModelReader};
use crate::error::{DecodeError, ReplayError};
use crate::naming::{x, y4};
use crate::network::NetworkOracle;
use crate::protocol::{Action, Protocol};

/// One decoded routing step: the action performed, and the edge it moved
/// the token across.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Step {
    pub action: Action,
    pub src: usize,
    pub tgt: usize,
}

/// Recovers the length-`length` step sequence from a satisfying model of
/// φ(length).
pub fn decode<E, M>(
    engine: &mut E,
    model: &M,
    network: &impl NetworkOracle,
    length: usize,
) -> Result<Vec<Step>, DecodeError>
where
    E: FormulaEngine,
    M: ModelReader<E::Atom>,
{
    let h_max = stack_height(length);
    let n = network.num_nodes();
    let mut path = Vec::with_capacity(length);

    for i in 0..length {
        let (src, src_h) = find_occupant(engine, model, n, h_max, i)?;
        let (tgt, tgt_h) = find_occupant(engine, model, n, h_max, i + 1)?;

        let delta = tgt_h as i64 - src_h as i64;
        let action = match delta {
            0 => {
                let p = protocol_at(engine, model, i, src_h);
                Action::Transmit(p)
            }
            1 => {
                let a = protocol_at(engine, model, i, src_h);
                let b = protocol_at(engine, model, i + 1, tgt_h);
                Action::Push(a, b)
            }
            -1 => {
                let a = protocol_at(engine, model, i + 1, tgt_h);
                let b = protocol_at(engine, model, i, src_h);
                Action::Pop(a, b)
            }
            d => return Err(DecodeError::InvalidDelta(i, d)),
        };

        path.push(Step { action, src, tgt });
    }

    Ok(path)
}

fn find_occupant<E, M>(
    engine: &mut E,
    model: &M,
    n: usize,
    h_max: usize,
    position: usize,
) -> Result<(usize, usize), DecodeError>
where
    E: FormulaEngine,
    M: ModelReader<E::Atom>,
{
    let mut found = None;
    for u in 0..n {
        for h in 0..h_max {
            if model.value_of(x(engine, u, position, h)) {
                if found.is_some() {
                    return Err(DecodeError::AmbiguousOccupant(position));
                }
                found = Some((u, h));
            }
        }
    }
    found.ok_or(DecodeError::NoOccupant(position))
}

fn protocol_at<E, M>(engine: &mut E, model: &M, position: usize, height: usize) -> Protocol
where
    E: FormulaEngine,
    M: ModelReader<E::Atom>,
{
    if model.value_of(y4(engine, position, height)) {
        Protocol::P4
    } else {
        Protocol::P6
    }
}

/// Replays a decoded step sequence against an abstract stack machine
/// starting from `[P4]`, returning the stack's contents after each step.
/// Independent of any model: used to cross-check that a decoded path
/// actually respects the action preconditions/effects (§8 P4/P5), and by
/// the pretty-printer to annotate a path.
pub fn replay(steps: &[Step]) -> Result<Vec<Vec<Protocol>>, ReplayError> {
    let mut stack = vec![Protocol::P4];
    let mut snapshots = Vec::with_capacity(steps.len() + 1);
    snapshots.push(stack.clone());

    for (idx, step) in steps.iter().enumerate() {
        match step.action {
            Action::Transmit(_) => {}
            Action::Push(a, b) => {
                let top = *stack.last().expect("stack is never empty");
                if top != a {
                    return Err(ReplayError::PreconditionViolated(idx, step.action, top));
                }
                stack.push(b);
            }
            Action::Pop(a, b) => {
                let top = *stack.last().expect("stack is never empty");
                if top != b {
                    return Err(ReplayError::PreconditionViolated(idx, step.action, top));
                }
                stack.pop();
                let below = *stack.last().ok_or(ReplayError::PopFromEmpty(idx))?;
                if below != a {
                    return Err(ReplayError::PreconditionViolated(idx, step.action, below));
                }
            }
        }
        snapshots.push(stack.clone());
    }

    Ok(snapshots)
}
